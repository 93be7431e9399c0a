//! Dictionary management for spelling checks.

use std::fs;
use std::path::Path;

use ahash::AHashSet;

use crate::error::{Result, SpelError};
use crate::util::path::expand_home;

/// An immutable set of known, correctly spelled words.
///
/// Entries are trimmed, lowercased and deduplicated on construction. The
/// words are held twice: a hash set answers membership and a sorted vector
/// gives suggestion ranking a stable iteration order.
#[derive(Debug, Clone)]
pub struct Dictionary {
    /// Set of all words for fast lookup
    word_set: AHashSet<String>,
    /// Words in lexicographic order
    sorted: Vec<String>,
}

impl Dictionary {
    /// Build a dictionary from a list of words.
    ///
    /// Blank entries are skipped. Returns [`SpelError::EmptyDictionary`] if
    /// nothing is left.
    pub fn new<I, S>(words: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let word_set: AHashSet<String> = words
            .into_iter()
            .map(|word| word.as_ref().trim().to_lowercase())
            .filter(|word| !word.is_empty())
            .collect();

        if word_set.is_empty() {
            return Err(SpelError::EmptyDictionary);
        }

        let mut sorted: Vec<String> = word_set.iter().cloned().collect();
        sorted.sort_unstable();

        Ok(Dictionary { word_set, sorted })
    }

    /// Parse a newline-delimited word list.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Self::new(String::from_utf8_lossy(bytes).lines())
    }

    /// Load a dictionary from a text file with one word per line.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = expand_home(path);
        let bytes = fs::read(&path)?;
        let dictionary = Self::from_bytes(&bytes)?;

        log::debug!(
            "Loaded {} words from {}",
            dictionary.word_count(),
            path.display()
        );

        Ok(dictionary)
    }

    /// Check if a word exists in the dictionary.
    pub fn contains(&self, word: &str) -> bool {
        self.word_set.contains(&word.to_lowercase())
    }

    /// All words in lexicographic order.
    pub fn words(&self) -> &[String] {
        &self.sorted
    }

    /// Get the total number of unique words.
    pub fn word_count(&self) -> usize {
        self.sorted.len()
    }
}

/// Word list compiled into the binary.
const ENGLISH_WORDS: &str = include_str!("english.txt");

/// A built-in dictionary with common English words.
pub struct BuiltinDictionary;

impl BuiltinDictionary {
    /// Create a dictionary with common English words.
    pub fn english() -> Dictionary {
        Dictionary::new(ENGLISH_WORDS.lines()).expect("embedded word list is not empty")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_dictionary_basic_operations() {
        let dict = Dictionary::new(["hello", "world", "hello"]).unwrap();

        assert_eq!(dict.word_count(), 2);
        assert!(dict.contains("hello"));
        assert!(dict.contains("world"));
        assert!(!dict.contains("goodbye"));
    }

    #[test]
    fn test_dictionary_case_insensitive() {
        let dict = Dictionary::new(["Hello", " WORLD "]).unwrap();

        assert!(dict.contains("hello"));
        assert!(dict.contains("HELLO"));
        assert!(dict.contains("World"));
        assert_eq!(dict.words(), &["hello".to_string(), "world".to_string()]);
    }

    #[test]
    fn test_words_are_sorted() {
        let dict = Dictionary::new(["sat", "bat", "mat", "cat"]).unwrap();
        assert_eq!(dict.words(), &["bat", "cat", "mat", "sat"]);
    }

    #[test]
    fn test_empty_dictionary() {
        let empty: [&str; 0] = [];
        assert!(matches!(
            Dictionary::new(empty),
            Err(SpelError::EmptyDictionary)
        ));
        assert!(matches!(
            Dictionary::new(["", "   "]),
            Err(SpelError::EmptyDictionary)
        ));
    }

    #[test]
    fn test_from_bytes() {
        let dict = Dictionary::from_bytes(b"this\nis\na\nword\n").unwrap();
        assert_eq!(dict.words(), &["a", "is", "this", "word"]);

        let dict = Dictionary::from_bytes(b"a\ndifferent\ntest").unwrap();
        assert_eq!(dict.words(), &["a", "different", "test"]);

        let dict = Dictionary::from_bytes(b"windows\r\nline\r\nendings\r\n").unwrap();
        assert!(dict.contains("windows"));
        assert!(dict.contains("endings"));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "apple").unwrap();
        writeln!(file, "Banana").unwrap();
        writeln!(file).unwrap();
        writeln!(file, "cherry").unwrap();

        let dict = Dictionary::load_from_file(file.path()).unwrap();
        assert_eq!(dict.word_count(), 3);
        assert!(dict.contains("banana"));
    }

    #[test]
    fn test_load_missing_file() {
        let result = Dictionary::load_from_file("/nonexistent/spel/words.txt");
        assert!(matches!(result, Err(SpelError::Io(_))));
    }

    #[test]
    fn test_builtin_dictionary() {
        let dict = BuiltinDictionary::english();
        assert!(dict.word_count() > 500);
        assert!(dict.contains("the"));
        assert!(dict.contains("hello"));
        assert!(dict.contains("world"));
        assert!(!dict.contains("helo"));
    }
}
