//! Exact-match checking and ranked spelling suggestions.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SpelError};
use crate::spelling::dictionary::Dictionary;
use crate::spelling::ignore::IgnoreSet;
use crate::spelling::levenshtein::LevenshteinMatcher;

/// A dictionary word close to the query.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Suggestion {
    /// The suggested word.
    pub word: String,
    /// Edit distance from the query.
    pub distance: usize,
}

impl Suggestion {
    /// Create a new suggestion.
    pub fn new(word: String, distance: usize) -> Self {
        Suggestion { word, distance }
    }
}

impl Ord for Suggestion {
    fn cmp(&self, other: &Self) -> Ordering {
        // Closer words first, ties broken alphabetically
        self.distance
            .cmp(&other.distance)
            .then_with(|| self.word.cmp(&other.word))
    }
}

impl PartialOrd for Suggestion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Outcome of checking a single word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchResult {
    /// The word is in the dictionary or the ignore set.
    Exact,
    /// The word is unknown; carries the ranked suggestions.
    Mismatch(Vec<Suggestion>),
}

impl MatchResult {
    pub fn is_exact(&self) -> bool {
        matches!(self, MatchResult::Exact)
    }

    /// Ranked suggestions, empty for an exact match.
    pub fn suggestions(&self) -> &[Suggestion] {
        match self {
            MatchResult::Exact => &[],
            MatchResult::Mismatch(suggestions) => suggestions,
        }
    }
}

/// Configuration for spelling suggestion generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuggestionConfig {
    /// Maximum number of suggestions returned by [`SuggestionEngine::check`].
    pub top_n: usize,
}

impl Default for SuggestionConfig {
    fn default() -> Self {
        SuggestionConfig { top_n: 5 }
    }
}

/// Main spelling suggestion engine.
///
/// Owns the dictionary and ignore set for the lifetime of a run. Every
/// operation takes `&self`, so one engine can be shared across threads.
#[derive(Debug, Clone)]
pub struct SuggestionEngine {
    dictionary: Dictionary,
    ignore: IgnoreSet,
    config: SuggestionConfig,
}

impl SuggestionEngine {
    /// Create a new suggestion engine with the given dictionary.
    pub fn new(dictionary: Dictionary) -> Self {
        Self::with_config(dictionary, IgnoreSet::new(), SuggestionConfig::default())
    }

    /// Create a new suggestion engine with an ignore set and custom configuration.
    pub fn with_config(dictionary: Dictionary, ignore: IgnoreSet, config: SuggestionConfig) -> Self {
        SuggestionEngine {
            dictionary,
            ignore,
            config,
        }
    }

    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    pub fn ignore(&self) -> &IgnoreSet {
        &self.ignore
    }

    pub fn config(&self) -> &SuggestionConfig {
        &self.config
    }

    /// Check a word against the dictionary and ignore set.
    ///
    /// Unknown words come back as [`MatchResult::Mismatch`] with up to
    /// `config.top_n` suggestions.
    pub fn check(&self, word: &str) -> Result<MatchResult> {
        let normalized = normalize(word)?;

        if self.is_known(&normalized) {
            log::debug!("Found an exact match for \"{word}\"");
            return Ok(MatchResult::Exact);
        }

        let suggestions = self.rank(&normalized, self.config.top_n)?;
        Ok(MatchResult::Mismatch(suggestions))
    }

    /// Get the `top_n` dictionary words closest to `word`.
    ///
    /// Results are ordered by ascending edit distance, then alphabetically.
    /// Fewer than `top_n` entries are returned only when the dictionary is
    /// smaller than that.
    pub fn suggest(&self, word: &str, top_n: usize) -> Result<Vec<Suggestion>> {
        let normalized = normalize(word)?;
        self.rank(&normalized, top_n)
    }

    /// Check if a word is correctly spelled (in the dictionary or ignored).
    ///
    /// Blank input is never correct.
    pub fn is_correct(&self, word: &str) -> bool {
        normalize(word).is_ok_and(|normalized| self.is_known(&normalized))
    }

    fn is_known(&self, normalized: &str) -> bool {
        self.dictionary.contains(normalized) || self.ignore.contains(normalized)
    }

    fn rank(&self, normalized: &str, top_n: usize) -> Result<Vec<Suggestion>> {
        if top_n == 0 {
            return Err(SpelError::invalid_input(
                "number of suggestions must be at least 1",
            ));
        }

        let matcher = LevenshteinMatcher::new(normalized);

        // Max-heap holding the best `top_n` seen so far; the worst sits on top.
        let mut best: BinaryHeap<Suggestion> = BinaryHeap::with_capacity(top_n + 1);
        for candidate in self.dictionary.words() {
            let distance = matcher.distance(candidate);

            if best.len() == top_n {
                let Some(worst) = best.peek() else { continue };
                if (distance, candidate.as_str()) >= (worst.distance, worst.word.as_str()) {
                    continue;
                }
                best.pop();
            }
            best.push(Suggestion::new(candidate.clone(), distance));
        }

        Ok(best.into_sorted_vec())
    }
}

/// Lowercase a query for comparison, rejecting blank input.
fn normalize(word: &str) -> Result<String> {
    let trimmed = word.trim();
    if trimmed.is_empty() {
        return Err(SpelError::invalid_input("word must not be empty"));
    }
    Ok(trimmed.to_lowercase())
}
