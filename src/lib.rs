//! # spel
//!
//! A small spelling checker: look words up in a dictionary, rank close
//! matches by Levenshtein distance, and flag unknown words in text files.
//!
//! ```
//! use spel::spelling::{Dictionary, SuggestionEngine};
//!
//! let dictionary = Dictionary::new(["cat", "hat", "bat"]).unwrap();
//! let engine = SuggestionEngine::new(dictionary);
//!
//! assert!(engine.check("Cat").unwrap().is_exact());
//! let suggestions = engine.suggest("cot", 2).unwrap();
//! assert_eq!(suggestions[0].word, "bat");
//! ```

pub mod cli;
pub mod error;
pub mod spelling;
pub mod util;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
