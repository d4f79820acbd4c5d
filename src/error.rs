//! Error types for the Humaniseur library.
//!
//! All errors are represented by the [`HumaniseurError`] enum. Collaborator
//! failures are never retried. Segmentation and embedding failures have their
//! own variants; synonym backends report theirs through `anyhow`.
//!
//! # Examples
//!
//! ```
//! use humaniseur::error::{HumaniseurError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(HumaniseurError::invalid_argument("Invalid input"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for Humaniseur operations.
#[derive(Error, Debug)]
pub enum HumaniseurError {
    /// I/O errors (reading input files, dictionaries, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Segmentation or tagging failures
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// Embedding backend failures
    #[error("Embedding error: {0}")]
    Embedding(String),

    /// Reading persisted resources (dictionaries, vector tables)
    #[error("Storage error: {0}")]
    Storage(String),

    /// Malformed resource content
    #[error("Parse error: {0}")]
    Parse(String),

    /// Configuration values out of range
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Caller supplied an argument that violates a precondition
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Errors raised by external backends using anyhow
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with HumaniseurError.
pub type Result<T> = std::result::Result<T, HumaniseurError>;

impl HumaniseurError {
    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        HumaniseurError::Analysis(msg.into())
    }

    /// Create a new embedding error.
    pub fn embedding<S: Into<String>>(msg: S) -> Self {
        HumaniseurError::Embedding(msg.into())
    }

    /// Create a new storage error.
    pub fn storage<S: Into<String>>(msg: S) -> Self {
        HumaniseurError::Storage(msg.into())
    }

    /// Create a new parse error.
    pub fn parse<S: Into<String>>(msg: S) -> Self {
        HumaniseurError::Parse(msg.into())
    }

    /// Create a new invalid config error.
    pub fn invalid_config<S: Into<String>>(msg: S) -> Self {
        HumaniseurError::InvalidConfig(msg.into())
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        HumaniseurError::InvalidArgument(msg.into())
    }
}
