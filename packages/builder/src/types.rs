//! Core data types for the builder.
//!
//! `RawEntry` mirrors the canonical JSON data file field-for-field;
//! `Entry` is the normalized, immutable form every generator consumes.

use serde::{Deserialize, Serialize};

/// Document part an entry belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Part {
    /// The preamble ("We the People...").
    Preamble,

    /// One of the seven original articles.
    Article,

    /// One of the twenty-seven amendments.
    Amendment,
}

impl Part {
    /// Get the string value as used in the JSON data file and HTML attributes.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Preamble => "preamble",
            Self::Article => "article",
            Self::Amendment => "amendment",
        }
    }

    /// Get the section heading used when grouping entries for export.
    #[must_use]
    pub fn group_label(&self) -> &'static str {
        match self {
            Self::Preamble => "Preamble",
            Self::Article => "Articles",
            Self::Amendment => "Amendments",
        }
    }
}

/// An entry as it appears in the canonical JSON data file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct RawEntry {
    /// Unique kebab-case identifier (e.g., "article-1-section-2-clause-3").
    pub id: String,

    /// Document part.
    pub part: Part,

    /// Article number (1-based, articles only).
    #[serde(default)]
    pub article: Option<u32>,

    /// Section number within an article or amendment.
    #[serde(default)]
    pub section: Option<u32>,

    /// Clause number within a section.
    #[serde(default)]
    pub clause: Option<u32>,

    /// Subclause number within a clause.
    #[serde(default)]
    pub subclause: Option<u32>,

    /// Amendment number (1..=27, amendments only).
    #[serde(default)]
    pub amendment_number: Option<u32>,

    /// Id of the entry that repealed this one.
    #[serde(default)]
    pub repealed_by: Option<String>,

    /// Date this entry was repealed (YYYY-MM-DD).
    #[serde(default)]
    pub repealed_date: Option<String>,

    /// Entry body text.
    pub text: String,

    /// Topical tags.
    #[serde(default)]
    pub tags: Vec<String>,

    /// Total-order sort key.
    pub position: u32,
}

/// A normalized entry.
///
/// Immutable once produced by [`crate::normalize::normalize`]; all
/// generators take `&[Entry]` and never mutate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// Unique kebab-case identifier.
    pub id: String,

    /// Document part.
    pub part: Part,

    /// Article number (articles only).
    pub article: Option<u32>,

    /// Section number.
    pub section: Option<u32>,

    /// Clause number.
    pub clause: Option<u32>,

    /// Subclause number.
    pub subclause: Option<u32>,

    /// Amendment number (amendments only).
    pub amendment_number: Option<u32>,

    /// Id of the repealing entry.
    pub repealed_by: Option<String>,

    /// Repeal date (YYYY-MM-DD).
    pub repealed_date: Option<String>,

    /// Whether this entry has been repealed (derived from `repealed_date`).
    pub is_repealed: bool,

    /// Entry body text.
    pub text: String,

    /// Lowercased, deduplicated topical tags.
    pub tags: Vec<String>,

    /// Total-order sort key.
    pub position: u32,

    /// Derived heading (e.g., "Article I, Section 2, Clause 3").
    pub title: String,

    /// Sanitized URL fragment for this entry.
    pub anchor: String,

    /// Lowercase searchable text: title + body + tags.
    pub blob: String,
}

/// The normalized dataset: entries in final order plus non-fatal warnings.
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    /// Entries sorted by position.
    pub entries: Vec<Entry>,

    /// Non-fatal data oddities collected during normalization.
    pub warnings: Vec<String>,
}

impl Corpus {
    /// Count entries belonging to the given part.
    #[must_use]
    pub fn count_part(&self, part: Part) -> usize {
        self.entries.iter().filter(|e| e.part == part).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_part_as_str() {
        assert_eq!(Part::Preamble.as_str(), "preamble");
        assert_eq!(Part::Article.as_str(), "article");
        assert_eq!(Part::Amendment.as_str(), "amendment");
    }

    #[test]
    fn test_part_group_label() {
        assert_eq!(Part::Preamble.group_label(), "Preamble");
        assert_eq!(Part::Article.group_label(), "Articles");
        assert_eq!(Part::Amendment.group_label(), "Amendments");
    }

    #[test]
    fn test_part_deserialization() {
        let part: Part = serde_json::from_str("\"amendment\"").unwrap();
        assert_eq!(part, Part::Amendment);
        assert!(serde_json::from_str::<Part>("\"AMENDMENT\"").is_err());
    }

    #[test]
    fn test_raw_entry_deserialization() {
        let json = r#"{
            "id": "article-1-section-2-clause-3",
            "part": "article",
            "article": 1,
            "section": 2,
            "clause": 3,
            "text": "Representatives and direct Taxes shall be apportioned...",
            "tags": ["house", "taxes"],
            "position": 40
        }"#;

        let entry: RawEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.id, "article-1-section-2-clause-3");
        assert_eq!(entry.part, Part::Article);
        assert_eq!(entry.article, Some(1));
        assert_eq!(entry.section, Some(2));
        assert_eq!(entry.clause, Some(3));
        assert!(entry.subclause.is_none());
        assert!(entry.amendment_number.is_none());
        assert!(entry.repealed_date.is_none());
        assert_eq!(entry.tags, vec!["house", "taxes"]);
        assert_eq!(entry.position, 40);
    }

    #[test]
    fn test_raw_entry_camel_case_fields() {
        let json = r#"{
            "id": "amendment-18-section-1",
            "part": "amendment",
            "amendmentNumber": 18,
            "section": 1,
            "repealedBy": "amendment-21-section-1",
            "repealedDate": "1933-12-05",
            "text": "...the manufacture, sale, or transportation of intoxicating liquors...",
            "position": 900
        }"#;

        let entry: RawEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.amendment_number, Some(18));
        assert_eq!(entry.repealed_by.as_deref(), Some("amendment-21-section-1"));
        assert_eq!(entry.repealed_date.as_deref(), Some("1933-12-05"));
        assert!(entry.tags.is_empty());
    }

    #[test]
    fn test_raw_entry_rejects_unknown_fields() {
        let json = r#"{
            "id": "preamble",
            "part": "preamble",
            "text": "We the People...",
            "position": 10,
            "bogus": true
        }"#;

        assert!(serde_json::from_str::<RawEntry>(json).is_err());
    }
}
