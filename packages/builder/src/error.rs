//! Error types for the builder.
//!
//! One `BuildError` enum for the whole crate: data-file problems surface
//! with enough context to fix the canonical JSON by hand, template
//! problems name the marker and file involved.

use thiserror::Error;

/// Main error type for the builder library.
#[derive(Debug, Error)]
pub enum BuildError {
    /// Invalid entry id format.
    #[error("Invalid entry id: '{0}'. Expected lowercase kebab-case (e.g., article-1-section-2)")]
    InvalidEntryId(String),

    /// Invalid date format or value.
    #[error("Invalid date: '{0}'. Expected YYYY-MM-DD (e.g., 1933-12-05)")]
    InvalidDate(String),

    /// Two entries share an id.
    #[error("Duplicate entry id: '{0}'")]
    DuplicateId(String),

    /// Two entries share an ordering position.
    #[error("Entries '{first}' and '{second}' share position {position}")]
    DuplicatePosition {
        position: u32,
        first: String,
        second: String,
    },

    /// A part is missing its required locator.
    #[error("Entry '{id}' has part '{part}' but no '{field}' locator")]
    MissingLocator {
        id: String,
        part: String,
        field: &'static str,
    },

    /// A locator is present without its parent locator.
    #[error("Entry '{id}' has '{field}' without '{parent}'")]
    OrphanLocator {
        id: String,
        field: &'static str,
        parent: &'static str,
    },

    /// A locator is present on a part that does not allow it.
    #[error("Entry '{id}' has part '{part}' which does not allow '{field}'")]
    ForbiddenLocator {
        id: String,
        part: String,
        field: &'static str,
    },

    /// Amendment number out of range.
    #[error("Entry '{id}' has amendment number {number}; expected 1..=27")]
    AmendmentOutOfRange { id: String, number: u32 },

    /// The data file contains no entries.
    #[error("Data file contains no entries")]
    EmptyDataFile,

    /// A splice marker was not found in the template.
    #[error("Marker '{marker}' not found in {file}")]
    MissingMarker { marker: String, file: String },

    /// A splice marker appears more than once in the template.
    #[error("Marker '{marker}' appears more than once in {file}")]
    DuplicateMarker { marker: String, file: String },

    /// An end marker precedes its begin marker.
    #[error("End marker '{marker}' precedes its begin marker in {file}")]
    UnorderedMarker { marker: String, file: String },

    /// JSON parsing or serialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for builder operations.
pub type Result<T> = std::result::Result<T, BuildError>;
