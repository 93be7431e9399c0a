//! Command line argument parsing for the spel CLI using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::spelling::DEFAULT_IGNORE_FILE;

/// spel - check the spelling of words on the command line or in files
#[derive(Parser, Debug, Clone)]
#[command(name = "spel")]
#[command(about = "Check spelling")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(
    long_about = "Check the spelling of a word on the command line or check \
                  the spelling of the words in a file or files"
)]
pub struct SpelArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human", global = true)]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Word list to use instead of the built-in English dictionary, one word per line
    #[arg(short, long, env = "SPEL_DICTIONARY", global = true)]
    pub dictionary: Option<PathBuf>,

    /// Ignore list file, one word per line; added to anything given with --ignore
    #[arg(
        short = 'I',
        long,
        env = "SPEL_IGNORE_FILE",
        default_value = DEFAULT_IGNORE_FILE,
        global = true
    )]
    pub ignore_file: PathBuf,

    /// A comma-separated list of words to accept as correct
    #[arg(short, long, global = true)]
    pub ignore: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl SpelArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Check single words and suggest corrections
    Check(CheckArgs),

    /// Check the words in one or more text files
    Files(FilesArgs),

    /// Add words to the ignore file, or list it when no words are given
    Ignore(IgnoreArgs),
}

/// Arguments for checking words
#[derive(Parser, Debug, Clone)]
pub struct CheckArgs {
    /// Words to check
    #[arg(value_name = "WORD", required = true)]
    pub words: Vec<String>,

    /// When a word is misspelled, show the top N possible correct spellings
    #[arg(
        short,
        long,
        default_value = "5",
        value_parser = clap::value_parser!(u16).range(1..)
    )]
    pub top: u16,
}

/// Arguments for checking files
#[derive(Parser, Debug, Clone)]
pub struct FilesArgs {
    /// Files to check
    #[arg(value_name = "FILE", required = true)]
    pub files: Vec<PathBuf>,

    /// Exit successfully even when misspellings are found
    #[arg(long)]
    pub no_fail: bool,
}

/// Arguments for managing the ignore file
#[derive(Parser, Debug, Clone)]
pub struct IgnoreArgs {
    /// Words to append to the ignore file
    #[arg(value_name = "WORD")]
    pub words: Vec<String>,
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}
