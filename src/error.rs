//! Error types for storycase.

use thiserror::Error;

/// Result type for storycase operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for storycase operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Sentence parsing failed.
    #[error("Parse error: {0}")]
    Parse(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Create a parse error.
    pub fn parse(msg: impl Into<String>) -> Self {
        Error::Parse(msg.into())
    }
}
