//! File-mode spell checking.
//!
//! Files are read line by line and every token is looked up without
//! computing suggestions. Checking several files fans out over rayon; the
//! engine is only read, so it is shared by reference.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::error::{Result, SpelError};
use crate::spelling::suggest::SuggestionEngine;
use crate::spelling::tokenizer::tokenize;

/// An out-of-dictionary word found in a file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Misspelling {
    pub path: PathBuf,
    /// 1-based line number.
    pub line: usize,
    /// The normalized (lowercased) token.
    pub word: String,
}

/// Per-file outcome of [`FileChecker::check_files`].
#[derive(Debug, Serialize, Deserialize)]
pub struct FileReport {
    pub path: PathBuf,
    pub misspellings: Vec<Misspelling>,
    /// Set when the file could not be read; the file is then skipped.
    pub error: Option<String>,
}

/// Checks text files against a [`SuggestionEngine`].
pub struct FileChecker<'a> {
    engine: &'a SuggestionEngine,
}

impl<'a> FileChecker<'a> {
    pub fn new(engine: &'a SuggestionEngine) -> Self {
        FileChecker { engine }
    }

    /// Check text from any buffered reader, labelling hits with `path`.
    ///
    /// Lines that are not valid UTF-8 are skipped; any other read error
    /// aborts the check.
    pub fn check_reader<R: BufRead>(&self, path: &Path, reader: R) -> Result<Vec<Misspelling>> {
        let mut misspellings = Vec::new();

        for (index, line) in reader.lines().enumerate() {
            let line = match line {
                Ok(line) => line,
                Err(e) if e.kind() == io::ErrorKind::InvalidData => {
                    log::debug!("Skipping line {} of {}: {}", index + 1, path.display(), e);
                    continue;
                }
                Err(e) => return Err(e.into()),
            };

            for word in tokenize(&line) {
                if !self.engine.is_correct(&word) {
                    misspellings.push(Misspelling {
                        path: path.to_path_buf(),
                        line: index + 1,
                        word,
                    });
                }
            }
        }

        Ok(misspellings)
    }

    /// Check a single file.
    pub fn check_file<P: AsRef<Path>>(&self, path: P) -> Result<Vec<Misspelling>> {
        let path = path.as_ref();
        if path.is_dir() {
            return Err(SpelError::invalid_input(format!(
                "{} is a directory",
                path.display()
            )));
        }

        let file = File::open(path)?;
        self.check_reader(path, BufReader::new(file))
    }

    /// Check several files in parallel.
    ///
    /// Reports come back in the same order as `paths`. A file that cannot
    /// be read is logged and reported with an error instead of aborting
    /// the whole run.
    pub fn check_files(&self, paths: &[PathBuf]) -> Vec<FileReport> {
        paths
            .par_iter()
            .map(|path| match self.check_file(path) {
                Ok(misspellings) => FileReport {
                    path: path.clone(),
                    misspellings,
                    error: None,
                },
                Err(e) => {
                    log::warn!(
                        "Failed to read \"{}\", skipping: {}",
                        path.display(),
                        e
                    );
                    FileReport {
                        path: path.clone(),
                        misspellings: Vec::new(),
                        error: Some(e.to_string()),
                    }
                }
            })
            .collect()
    }
}
