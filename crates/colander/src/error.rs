//! Error types for the colander library.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for colander operations.
///
/// All variants are raised synchronously by the loader (or the rule-file
/// helpers). The validator never errors: malformed cell content is expected,
/// recoverable input and is reported as an [`Issue`](crate::Issue), not an
/// error.
#[derive(Debug, Error)]
pub enum ColanderError {
    /// The supplied file path was empty or whitespace-only.
    #[error("Invalid argument: file path is empty")]
    InvalidArgument,

    /// The file does not exist.
    #[error("File not found: '{path}'")]
    NotFound { path: PathBuf },

    /// The file (or input text) contained zero lines.
    #[error("Empty input: {0}")]
    EmptyInput(String),

    /// Error reading or accessing a file.
    #[error("IO error for '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// JSON serialization/deserialization error (rule files, reports).
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for colander operations.
pub type Result<T> = std::result::Result<T, ColanderError>;
