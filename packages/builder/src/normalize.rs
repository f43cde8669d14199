//! Normalization: invariant validation, derived fields, and ordering.
//!
//! Turns the raw JSON entries into the immutable [`Entry`] list every
//! generator consumes. Fatal data errors abort the build; oddities that
//! do not affect correctness are collected as warnings.

use std::collections::{HashMap, HashSet};

use tracing::debug;
use unicode_normalization::UnicodeNormalization;

use crate::config::{sanitize_anchor, validate_entry_id, validate_repeal_date, MAX_AMENDMENT};
use crate::error::{BuildError, Result};
use crate::heading::entry_title;
use crate::types::{Corpus, Entry, Part, RawEntry};

/// Normalize raw entries into the final, sorted corpus.
///
/// Validates:
/// * entry id format and uniqueness
/// * position uniqueness (total order)
/// * part/locator consistency (articles need an article number,
///   amendments an amendment number, preamble neither)
/// * locator nesting (clause needs section, subclause needs clause)
/// * repeal date format and plausibility
///
/// Derives per entry: `is_repealed`, `title`, `anchor`, `blob`, and
/// lowercased deduplicated tags. Entries are returned sorted by position.
pub fn normalize(raw: Vec<RawEntry>) -> Result<Corpus> {
    if raw.is_empty() {
        return Err(BuildError::EmptyDataFile);
    }

    let mut warnings: Vec<String> = Vec::new();

    // Uniqueness checks run over the raw set so error messages refer to
    // input order, before any sorting.
    let mut seen_ids: HashSet<&str> = HashSet::new();
    let mut seen_positions: HashMap<u32, &str> = HashMap::new();
    for entry in &raw {
        validate_entry_id(&entry.id)?;
        if !seen_ids.insert(&entry.id) {
            return Err(BuildError::DuplicateId(entry.id.clone()));
        }
        if let Some(first) = seen_positions.insert(entry.position, &entry.id) {
            return Err(BuildError::DuplicatePosition {
                position: entry.position,
                first: first.to_string(),
                second: entry.id.clone(),
            });
        }
    }

    // repealed_by targets are checked against the full id set
    let all_ids: HashSet<String> = raw.iter().map(|e| e.id.clone()).collect();

    let mut entries: Vec<Entry> = Vec::with_capacity(raw.len());
    for entry in raw {
        validate_locators(&entry)?;

        if let Some(date) = &entry.repealed_date {
            validate_repeal_date(date)?;
        }

        match (&entry.repealed_by, &entry.repealed_date) {
            (Some(by), None) => warnings.push(format!(
                "Entry '{}': repealedBy '{by}' without repealedDate; not treated as repealed",
                entry.id
            )),
            (Some(by), Some(_)) if !all_ids.contains(by) => warnings.push(format!(
                "Entry '{}': repealedBy '{by}' does not match any entry id",
                entry.id
            )),
            _ => {}
        }

        let tags = normalize_tags(&entry.id, &entry.tags, &mut warnings);
        let is_repealed = entry.repealed_date.is_some();
        let title = entry_title(&entry);
        let anchor = sanitize_anchor(&entry.id);
        let blob = searchable_blob(&title, &entry.text, &tags);

        entries.push(Entry {
            id: entry.id,
            part: entry.part,
            article: entry.article,
            section: entry.section,
            clause: entry.clause,
            subclause: entry.subclause,
            amendment_number: entry.amendment_number,
            repealed_by: entry.repealed_by,
            repealed_date: entry.repealed_date,
            is_repealed,
            text: entry.text,
            tags,
            position: entry.position,
            title,
            anchor,
            blob,
        });
    }

    entries.sort_by_key(|e| e.position);
    debug!(count = entries.len(), "normalized entries");

    Ok(Corpus { entries, warnings })
}

/// Validate part/locator consistency and locator nesting for one entry.
fn validate_locators(entry: &RawEntry) -> Result<()> {
    match entry.part {
        Part::Preamble => {
            for (field, value) in [
                ("article", entry.article),
                ("section", entry.section),
                ("clause", entry.clause),
                ("subclause", entry.subclause),
                ("amendmentNumber", entry.amendment_number),
            ] {
                if value.is_some() {
                    return Err(BuildError::ForbiddenLocator {
                        id: entry.id.clone(),
                        part: entry.part.as_str().to_string(),
                        field,
                    });
                }
            }
        }
        Part::Article => {
            if entry.article.is_none() {
                return Err(BuildError::MissingLocator {
                    id: entry.id.clone(),
                    part: entry.part.as_str().to_string(),
                    field: "article",
                });
            }
            if entry.amendment_number.is_some() {
                return Err(BuildError::ForbiddenLocator {
                    id: entry.id.clone(),
                    part: entry.part.as_str().to_string(),
                    field: "amendmentNumber",
                });
            }
        }
        Part::Amendment => {
            let number = entry.amendment_number.ok_or_else(|| BuildError::MissingLocator {
                id: entry.id.clone(),
                part: entry.part.as_str().to_string(),
                field: "amendmentNumber",
            })?;
            if number == 0 || number > MAX_AMENDMENT {
                return Err(BuildError::AmendmentOutOfRange {
                    id: entry.id.clone(),
                    number,
                });
            }
            if entry.article.is_some() {
                return Err(BuildError::ForbiddenLocator {
                    id: entry.id.clone(),
                    part: entry.part.as_str().to_string(),
                    field: "article",
                });
            }
        }
    }

    // Locators nest: clause needs section, subclause needs clause
    if entry.clause.is_some() && entry.section.is_none() {
        return Err(BuildError::OrphanLocator {
            id: entry.id.clone(),
            field: "clause",
            parent: "section",
        });
    }
    if entry.subclause.is_some() && entry.clause.is_none() {
        return Err(BuildError::OrphanLocator {
            id: entry.id.clone(),
            field: "subclause",
            parent: "clause",
        });
    }

    Ok(())
}

/// Lowercase, trim, and deduplicate tags, preserving first occurrence.
fn normalize_tags(id: &str, tags: &[String], warnings: &mut Vec<String>) -> Vec<String> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut out: Vec<String> = Vec::with_capacity(tags.len());
    for tag in tags {
        let tag = tag.trim().to_lowercase();
        if tag.is_empty() {
            warnings.push(format!("Entry '{id}': empty tag dropped"));
            continue;
        }
        if seen.insert(tag.clone()) {
            out.push(tag);
        } else {
            warnings.push(format!("Entry '{id}': duplicate tag '{tag}' dropped"));
        }
    }
    out
}

/// Collapse runs of whitespace (including newlines) into single spaces.
#[must_use]
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Build the lowercase searchable blob for an entry.
///
/// NFC-normalizes first so that composed and decomposed forms of the same
/// character match the same query bytes.
#[must_use]
pub fn searchable_blob(title: &str, text: &str, tags: &[String]) -> String {
    let mut combined = String::with_capacity(title.len() + text.len() + 32);
    combined.push_str(title);
    combined.push(' ');
    combined.push_str(text);
    for tag in tags {
        combined.push(' ');
        combined.push_str(tag);
    }

    let normalized: String = combined.nfc().collect();
    collapse_whitespace(&normalized).to_lowercase()
}
