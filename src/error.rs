//! Error types for the spel library.
//!
//! All fallible operations return [`Result`], whose error side is the
//! [`SpelError`] enum.
//!
//! # Examples
//!
//! ```
//! use spel::error::{SpelError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(SpelError::invalid_input("empty word"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for spel operations.
#[derive(Error, Debug)]
pub enum SpelError {
    /// The query word (or another caller-supplied value) was unusable.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The dictionary has no entries after normalization.
    #[error("Dictionary is empty")]
    EmptyDictionary,

    /// I/O errors (dictionary, ignore file, checked files)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),
}

/// Result type alias for operations that may fail with SpelError.
pub type Result<T> = std::result::Result<T, SpelError>;

impl SpelError {
    /// Create a new invalid input error.
    pub fn invalid_input<S: Into<String>>(msg: S) -> Self {
        SpelError::InvalidInput(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        SpelError::Other(msg.into())
    }
}
