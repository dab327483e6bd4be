//! Error types for threadline

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for threadline
#[derive(Debug, Error)]
pub enum ThreadlineError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML error: {0}")]
    Toml(String),

    /// Reply not found
    #[error("Reply not found: {0}")]
    ReplyNotFound(String),

    /// Post not found
    #[error("Post not found: {0}")]
    PostNotFound(String),

    /// Reply forest violates a structural invariant
    #[error("Invalid reply tree: {0}")]
    InvalidTree(String),

    /// Nesting deeper than the configured cap
    #[error("Reply {id} is nested {depth} levels deep (limit {limit})")]
    DepthExceeded { id: String, depth: usize, limit: usize },

    /// Validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// File not found
    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    /// Generic error with context
    #[error("{context}: {source}")]
    WithContext {
        context: String,
        #[source]
        source: Box<ThreadlineError>,
    },
}

impl ThreadlineError {
    /// Add context to an error
    pub fn with_context(self, context: impl Into<String>) -> Self {
        ThreadlineError::WithContext {
            context: context.into(),
            source: Box::new(self),
        }
    }
}

impl From<toml::de::Error> for ThreadlineError {
    fn from(err: toml::de::Error) -> Self {
        ThreadlineError::Toml(err.to_string())
    }
}

impl From<toml::ser::Error> for ThreadlineError {
    fn from(err: toml::ser::Error) -> Self {
        ThreadlineError::Toml(err.to_string())
    }
}

/// Result type alias for threadline
pub type Result<T> = std::result::Result<T, ThreadlineError>;
