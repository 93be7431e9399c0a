//! Spell checking and suggestion utilities for spel.
//!
//! A [`Dictionary`] and an [`IgnoreSet`] are loaded once and handed to a
//! [`SuggestionEngine`], which answers exact-match checks and ranks
//! edit-distance suggestions. [`FileChecker`] runs the engine over text
//! files.

pub mod checker;
pub mod dictionary;
pub mod ignore;
pub mod levenshtein;
pub mod suggest;
pub mod tokenizer;

// Re-export commonly used types
pub use checker::{FileChecker, FileReport, Misspelling};
pub use dictionary::{BuiltinDictionary, Dictionary};
pub use ignore::{DEFAULT_IGNORE_FILE, IgnoreSet};
pub use levenshtein::{LevenshteinMatcher, levenshtein_distance};
pub use suggest::{MatchResult, Suggestion, SuggestionConfig, SuggestionEngine};
