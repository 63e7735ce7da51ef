//! Error types for the Wordsmith library.
//!
//! All fallible operations return [`Result`], whose error side is the
//! [`WordsmithError`] enum. Lookup misses (an unseen word, window or n-gram)
//! are never errors; they are counted as zero and left to smoothing or ranking.
//!
//! # Examples
//!
//! ```
//! use wordsmith::error::{Result, WordsmithError};
//!
//! fn example_operation() -> Result<()> {
//!     Err(WordsmithError::invalid_config("k must be positive"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for Wordsmith operations.
#[derive(Error, Debug)]
pub enum WordsmithError {
    /// I/O errors (corpus files, snapshots, config files)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Binary snapshot encoding/decoding errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Configuration that would lead to undefined arithmetic or empty models
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Arguments outside the documented input domain of an operation
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

/// Result type alias for operations that may fail with WordsmithError.
pub type Result<T> = std::result::Result<T, WordsmithError>;

impl WordsmithError {
    /// Create a new invalid config error.
    pub fn invalid_config<S: Into<String>>(msg: S) -> Self {
        WordsmithError::InvalidConfig(msg.into())
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        WordsmithError::InvalidArgument(msg.into())
    }

    /// Create a new serialization error.
    pub fn serialization<S: Into<String>>(msg: S) -> Self {
        WordsmithError::Serialization(msg.into())
    }
}

impl From<bincode::Error> for WordsmithError {
    fn from(err: bincode::Error) -> Self {
        WordsmithError::Serialization(err.to_string())
    }
}
