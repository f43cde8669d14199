//! Search index generation.
//!
//! The index is the runtime contract with the client-side filter: a JSON
//! file with one record per entry, camelCase field names on the wire.

use serde::Serialize;

use crate::error::Result;
use crate::types::Entry;

/// Record for one entry in the search index.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct IndexRecord<'a> {
    id: &'a str,
    part: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    article: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    section: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    clause: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    amendment_number: Option<u32>,
    is_repealed: bool,
    title: &'a str,
    blob: &'a str,
    #[serde(skip_serializing_if = "<[_]>::is_empty")]
    tags: &'a [String],
    position: u32,
}

impl<'a> From<&'a Entry> for IndexRecord<'a> {
    fn from(entry: &'a Entry) -> Self {
        Self {
            id: &entry.id,
            part: entry.part.as_str(),
            article: entry.article,
            section: entry.section,
            clause: entry.clause,
            amendment_number: entry.amendment_number,
            is_repealed: entry.is_repealed,
            title: &entry.title,
            blob: &entry.blob,
            tags: &entry.tags,
            position: entry.position,
        }
    }
}

/// Top-level index file structure.
#[derive(Debug, Serialize)]
struct IndexFile<'a> {
    generated: String,
    count: usize,
    records: Vec<IndexRecord<'a>>,
}

/// Generate the search index JSON string.
///
/// Records appear in position order (the entries slice is already
/// sorted). The `generated` stamp is the UTC build date.
pub fn generate_index(entries: &[Entry]) -> Result<String> {
    let index = IndexFile {
        generated: chrono::Utc::now().format("%Y-%m-%d").to_string(),
        count: entries.len(),
        records: entries.iter().map(IndexRecord::from).collect(),
    };

    let mut json = serde_json::to_string_pretty(&index)?;
    json.push('\n');
    Ok(json)
}
