//! Words the user wants treated as correctly spelled.

use std::fs::{self, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::Path;

use ahash::AHashSet;

use crate::error::Result;
use crate::util::path::expand_home;

/// Default location of the ignore file.
pub const DEFAULT_IGNORE_FILE: &str = "~/.spel_ignore";

/// A set of words accepted regardless of dictionary membership.
///
/// Words are stored lowercased; lookups are case-insensitive.
#[derive(Debug, Clone, Default)]
pub struct IgnoreSet {
    words: AHashSet<String>,
}

impl IgnoreSet {
    /// Create an empty ignore set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from a comma-separated list such as `"foo, bar,baz,"`.
    pub fn from_list(list: &str) -> Self {
        Self::from_words(list.split(','))
    }

    /// Build from individual words; blank entries are dropped.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|word| word.as_ref().trim().to_lowercase())
            .filter(|word| !word.is_empty())
            .collect();

        IgnoreSet { words }
    }

    /// Read an ignore file with one word per line.
    ///
    /// A missing file yields an empty set. A file that exists but cannot be
    /// read is logged and also yields an empty set.
    pub fn load_file<P: AsRef<Path>>(path: P) -> Self {
        let real_path = expand_home(path.as_ref());

        if !real_path.exists() {
            log::debug!("Ignore file {} does not exist", real_path.display());
            return Self::new();
        }

        match fs::read_to_string(&real_path) {
            Ok(contents) => {
                let set = Self::from_words(contents.lines());
                log::debug!(
                    "Loaded {} ignored words from {}",
                    set.len(),
                    real_path.display()
                );
                set
            }
            Err(e) => {
                log::warn!(
                    "Failed to read ignore file \"{}\": {}",
                    real_path.display(),
                    e
                );
                Self::new()
            }
        }
    }

    /// Append words to an ignore file, creating it if needed.
    ///
    /// Words already present in the file are skipped. Returns the words that
    /// were actually written.
    pub fn append_to_file<P, I, S>(path: P, words: I) -> Result<Vec<String>>
    where
        P: AsRef<Path>,
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let real_path = expand_home(path.as_ref());
        let mut existing = Self::load_file(&real_path);

        let mut added = Vec::new();
        for word in words {
            let word = word.as_ref().trim().to_lowercase();
            if !word.is_empty() && existing.words.insert(word.clone()) {
                added.push(word);
            }
        }

        if added.is_empty() {
            return Ok(added);
        }

        let needs_newline = match fs::read(&real_path) {
            Ok(bytes) => bytes.last().is_some_and(|b| *b != b'\n'),
            Err(e) if e.kind() == io::ErrorKind::NotFound => false,
            Err(e) => return Err(e.into()),
        };

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&real_path)?;
        let mut writer = BufWriter::new(file);

        if needs_newline {
            writeln!(writer)?;
        }
        for word in &added {
            writeln!(writer, "{word}")?;
        }
        writer.flush()?;

        Ok(added)
    }

    /// Union another set into this one.
    pub fn merge(&mut self, other: IgnoreSet) {
        self.words.extend(other.words);
    }

    /// Check if a word is ignored.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(&word.to_lowercase())
    }

    /// Ignored words in lexicographic order.
    pub fn sorted_words(&self) -> Vec<&str> {
        let mut words: Vec<&str> = self.words.iter().map(String::as_str).collect();
        words.sort_unstable();
        words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
