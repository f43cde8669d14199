//! Markdown export generation.
//!
//! A plain-text rendition of the whole document for language models and
//! offline reading: one file, heading per group, wrapped body text.

use textwrap::{fill, Options};

use crate::config::TEXT_WRAP_WIDTH;
use crate::heading::group_heading;
use crate::html::group_key;
use crate::types::{Entry, Part};

/// Generate the markdown export.
///
/// Entries must be in position order. Body text is wrapped at
/// `wrap_width` columns, paragraph breaks preserved. Repealed entries
/// carry an italic annotation under their heading.
#[must_use]
pub fn generate_export(entries: &[Entry], wrap_width: usize) -> String {
    let mut out = String::new();
    out.push_str("# The Constitution of the United States\n\n");
    out.push_str("Plain-text edition generated from the canonical data file.\n");

    let mut current: Option<(Part, Option<u32>)> = None;
    for entry in entries {
        let key = group_key(entry);
        if current != Some(key) {
            let heading = group_heading(entry.part, entry.article, entry.amendment_number);
            out.push_str(&format!("\n## {heading}\n"));
            current = Some(key);
        }

        out.push_str(&format!("\n### {}\n\n", entry.title));

        if let Some(date) = &entry.repealed_date {
            match repealer_title(entry, entries) {
                Some(title) => out.push_str(&format!("*(Repealed by {title}, {date})*\n\n")),
                None => out.push_str(&format!("*(Repealed {date})*\n\n")),
            }
        }

        out.push_str(&wrap_paragraphs(&entry.text, wrap_width));
        out.push('\n');

        if !entry.tags.is_empty() {
            out.push_str(&format!("\nTags: {}\n", entry.tags.join(", ")));
        }
    }

    out
}

/// Generate the export with the default wrap width.
#[must_use]
pub fn generate_export_default(entries: &[Entry]) -> String {
    generate_export(entries, TEXT_WRAP_WIDTH)
}

/// Look up the title of the entry that repealed `entry`, if it exists in
/// the dataset.
fn repealer_title<'a>(entry: &Entry, entries: &'a [Entry]) -> Option<&'a str> {
    let by = entry.repealed_by.as_deref()?;
    entries
        .iter()
        .find(|e| e.id == by)
        .map(|e| e.title.as_str())
}

/// Wrap text at the given width, preserving paragraph breaks.
fn wrap_paragraphs(text: &str, width: usize) -> String {
    let options = Options::new(width);
    text.split("\n\n")
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(|p| fill(p, &options))
        .collect::<Vec<_>>()
        .join("\n\n")
}
