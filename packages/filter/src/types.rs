//! Core data types for the filter engine.
//!
//! These mirror the search-index wire format produced by the builder;
//! the JSON file is the only contract between the two crates.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{FilterError, Result};

/// Document part a record belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Part {
    /// The preamble.
    Preamble,

    /// One of the seven original articles.
    Article,

    /// One of the twenty-seven amendments.
    Amendment,
}

impl Part {
    /// Get the string value as used on the wire and in query strings.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Preamble => "preamble",
            Self::Article => "article",
            Self::Amendment => "amendment",
        }
    }
}

impl fmt::Display for Part {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Part {
    type Err = FilterError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "preamble" => Ok(Self::Preamble),
            "article" => Ok(Self::Article),
            "amendment" => Ok(Self::Amendment),
            other => Err(FilterError::UnknownPart(other.to_string())),
        }
    }
}

/// One entry record from the search index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexRecord {
    /// Unique entry id (also the DOM anchor).
    pub id: String,

    /// Document part.
    pub part: Part,

    /// Article number (articles only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub article: Option<u32>,

    /// Section number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub section: Option<u32>,

    /// Clause number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clause: Option<u32>,

    /// Amendment number (amendments only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amendment_number: Option<u32>,

    /// Whether this entry has been repealed.
    pub is_repealed: bool,

    /// Display title.
    pub title: String,

    /// Lowercase searchable text.
    pub blob: String,

    /// Topical tags.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,

    /// Total-order sort key.
    pub position: u32,
}

/// The parsed search index.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchIndex {
    /// Build date stamp (YYYY-MM-DD).
    pub generated: String,

    /// Declared record count.
    pub count: usize,

    /// Records in position order.
    pub records: Vec<IndexRecord>,
}

/// Maximum index size accepted by [`SearchIndex::from_json_str`] (1 MB).
pub const MAX_INDEX_SIZE: usize = 1_000_000;

impl SearchIndex {
    /// Parse a search index from its JSON text.
    ///
    /// Rejects oversized input and indexes whose declared `count` does
    /// not match the records array.
    pub fn from_json_str(json: &str) -> Result<Self> {
        if json.len() > MAX_INDEX_SIZE {
            return Err(FilterError::IndexTooLarge {
                size: json.len(),
                max: MAX_INDEX_SIZE,
            });
        }

        let index: SearchIndex = serde_json::from_str(json)?;
        if index.count != index.records.len() {
            return Err(FilterError::CountMismatch {
                declared: index.count,
                actual: index.records.len(),
            });
        }
        Ok(index)
    }

    /// Number of records in the index.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the index holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
