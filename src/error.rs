use thiserror::Error;

/// Main error type for famtree
///
/// Only the loading and configuration surfaces are fallible. Relation
/// derivation itself never fails.
#[derive(Error, Debug)]
pub enum FamtreeError {
    /// File system I/O errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed JSON input
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Convenient Result type using FamtreeError
pub type Result<T> = std::result::Result<T, FamtreeError>;
