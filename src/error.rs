//! Error types for the Orthos library.
//!
//! All fallible operations return [`Result`], whose error type is the
//! [`OrthosError`] enum. The correction algorithm itself is total over its
//! input domain; errors only arise at the I/O boundary (corpus and frequency
//! files), on invalid configuration (bad tokenizer patterns), or when the
//! optional input-length guard rejects an over-long word.
//!
//! # Examples
//!
//! ```
//! use orthos::error::{OrthosError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(OrthosError::analysis("Invalid input"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for Orthos operations.
#[derive(Error, Debug)]
pub enum OrthosError {
    /// I/O errors (corpus files, frequency files)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Analysis-related errors (tokenization, patterns)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// Frequency-table related errors (malformed dictionary data)
    #[error("Dictionary error: {0}")]
    Dictionary(String),

    /// Resource exhausted (e.g. input exceeds the configured length guard)
    #[error("Resource exhausted: {0}")]
    ResourceExhausted(String),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),

    /// Generic anyhow error
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with OrthosError.
pub type Result<T> = std::result::Result<T, OrthosError>;

impl OrthosError {
    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        OrthosError::Analysis(msg.into())
    }

    /// Create a new dictionary error.
    pub fn dictionary<S: Into<String>>(msg: S) -> Self {
        OrthosError::Dictionary(msg.into())
    }

    /// Create a new resource-exhausted error.
    pub fn resource_exhausted<S: Into<String>>(msg: S) -> Self {
        OrthosError::ResourceExhausted(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        OrthosError::Other(msg.into())
    }
}
