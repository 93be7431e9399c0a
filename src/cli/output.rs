//! Output formatting for CLI commands.

use std::io::{self, Write};
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::cli::args::{OutputFormat, SpelArgs};
use crate::error::Result;
use crate::spelling::{MatchResult, Misspelling, Suggestion};

/// Divider printed between words in `check` output.
const WORD_DIVIDER: &str = "\n-----\n";

/// Rendering for the human output format.
pub trait HumanOutput {
    /// Write `self` for a person reading a terminal.
    fn write_human<W: Write>(&self, out: &mut W, verbosity: u8) -> Result<()>;
}

/// Result of checking one word.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WordReport {
    /// The word as the user typed it.
    pub word: String,
    pub exact: bool,
    pub suggestions: Vec<Suggestion>,
}

impl WordReport {
    pub fn new(word: String, result: MatchResult) -> Self {
        match result {
            MatchResult::Exact => WordReport {
                word,
                exact: true,
                suggestions: Vec::new(),
            },
            MatchResult::Mismatch(suggestions) => WordReport {
                word,
                exact: false,
                suggestions,
            },
        }
    }
}

/// Results of the `check` command.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CheckReport {
    pub words: Vec<WordReport>,
}

impl HumanOutput for CheckReport {
    fn write_human<W: Write>(&self, out: &mut W, verbosity: u8) -> Result<()> {
        for (i, report) in self.words.iter().enumerate() {
            if i > 0 {
                writeln!(out, "{WORD_DIVIDER}")?;
            }

            if report.exact {
                writeln!(out, "{}", report.word)?;
                continue;
            }

            for suggestion in &report.suggestions {
                if verbosity > 1 {
                    writeln!(out, "{}: {}", suggestion.word, suggestion.distance)?;
                } else {
                    writeln!(out, "{}", suggestion.word)?;
                }
            }
        }
        Ok(())
    }
}

/// A file that could not be checked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkippedFile {
    pub path: PathBuf,
    pub error: String,
}

/// Results of the `files` command.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilesReport {
    pub misspellings: Vec<Misspelling>,
    pub skipped: Vec<SkippedFile>,
}

impl HumanOutput for FilesReport {
    fn write_human<W: Write>(&self, out: &mut W, _verbosity: u8) -> Result<()> {
        for m in &self.misspellings {
            writeln!(out, "{}:{} \"{}\"", m.path.display(), m.line, m.word)?;
        }
        Ok(())
    }
}

/// Results of the `ignore` command.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "lowercase")]
pub enum IgnoreReport {
    /// Words newly appended to the ignore file.
    Added { path: PathBuf, words: Vec<String> },
    /// Current contents of the ignore file.
    Listed { path: PathBuf, words: Vec<String> },
}

impl HumanOutput for IgnoreReport {
    fn write_human<W: Write>(&self, out: &mut W, verbosity: u8) -> Result<()> {
        match self {
            IgnoreReport::Added { path, words } => {
                if verbosity > 0 {
                    writeln!(
                        out,
                        "Added {} word(s) to {}",
                        words.len(),
                        path.display()
                    )?;
                }
            }
            IgnoreReport::Listed { words, .. } => {
                for word in words {
                    writeln!(out, "{word}")?;
                }
            }
        }
        Ok(())
    }
}

/// Output a result to stdout in the format selected on the command line.
pub fn output_result<T: Serialize + HumanOutput>(result: &T, args: &SpelArgs) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_result(
        &mut out,
        result,
        args.output_format,
        args.pretty,
        args.verbosity(),
    )?;
    out.flush()?;
    Ok(())
}

/// Write a result in the given format.
pub fn write_result<W: Write, T: Serialize + HumanOutput>(
    out: &mut W,
    result: &T,
    format: OutputFormat,
    pretty: bool,
    verbosity: u8,
) -> Result<()> {
    match format {
        OutputFormat::Human => result.write_human(out, verbosity),
        OutputFormat::Json => output_json(out, result, pretty),
    }
}

fn output_json<W: Write, T: Serialize>(out: &mut W, result: &T, pretty: bool) -> Result<()> {
    if pretty {
        serde_json::to_writer_pretty(&mut *out, result)?;
    } else {
        serde_json::to_writer(&mut *out, result)?;
    }
    writeln!(out)?;
    Ok(())
}
