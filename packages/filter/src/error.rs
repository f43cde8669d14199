//! Error types for the filter engine.

use thiserror::Error;

/// Main error type for the filter library.
#[derive(Debug, Error)]
pub enum FilterError {
    /// Index JSON exceeds the input size cap.
    #[error("Search index exceeds maximum size ({size} > {max} bytes)")]
    IndexTooLarge { size: usize, max: usize },

    /// Declared record count does not match the records array.
    #[error("Search index declares {declared} records but contains {actual}")]
    CountMismatch { declared: usize, actual: usize },

    /// Unknown part value.
    #[error("Unknown part: '{0}'. Expected preamble, article, or amendment")]
    UnknownPart(String),

    /// JSON parsing failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for filter operations.
pub type Result<T> = std::result::Result<T, FilterError>;
