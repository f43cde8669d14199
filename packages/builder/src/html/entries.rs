//! Per-entry markup and group headings.
//!
//! Every entry becomes one `<article>` element carrying the `data-*`
//! attributes the client-side filter toggles visibility on.

use std::collections::HashMap;

use crate::heading::group_heading;
use crate::html::escape::escape_html;
use crate::html::group_key;
use crate::normalize::collapse_whitespace;
use crate::types::{Entry, Part};

/// Generate the entries fragment: `<h2>` group headings at part and
/// article/amendment boundaries, one `<article>` per entry.
///
/// Entries must be in position order.
#[must_use]
pub fn generate_entries(entries: &[Entry]) -> String {
    let by_id: HashMap<&str, &Entry> = entries.iter().map(|e| (e.id.as_str(), e)).collect();

    let mut out = String::new();
    let mut current: Option<(Part, Option<u32>)> = None;
    for entry in entries {
        let key = group_key(entry);
        if current != Some(key) {
            let heading = group_heading(entry.part, entry.article, entry.amendment_number);
            out.push_str(&format!(
                "<h2 class=\"group-heading\">{}</h2>\n",
                escape_html(&heading)
            ));
            current = Some(key);
        }
        push_entry(&mut out, entry, &by_id);
    }
    out
}

/// Append one `<article>` element.
fn push_entry(out: &mut String, entry: &Entry, by_id: &HashMap<&str, &Entry>) {
    out.push_str(&format!(
        "<article id=\"{}\" class=\"entry\" data-part=\"{}\"",
        entry.anchor,
        entry.part.as_str()
    ));
    if let Some(n) = entry.article {
        out.push_str(&format!(" data-article=\"{n}\""));
    }
    if let Some(n) = entry.amendment_number {
        out.push_str(&format!(" data-amendment=\"{n}\""));
    }
    out.push_str(&format!(" data-repealed=\"{}\">\n", entry.is_repealed));

    out.push_str(&format!(
        "  <h3 class=\"entry-title\"><a href=\"#{}\">{}</a></h3>\n",
        entry.anchor,
        escape_html(&entry.title)
    ));

    for paragraph in entry
        .text
        .split("\n\n")
        .map(str::trim)
        .filter(|p| !p.is_empty())
    {
        out.push_str(&format!(
            "  <p>{}</p>\n",
            escape_html(&collapse_whitespace(paragraph))
        ));
    }

    if let Some(date) = &entry.repealed_date {
        let repealer = entry.repealed_by.as_deref().and_then(|id| by_id.get(id));
        match repealer {
            Some(repealer) => out.push_str(&format!(
                "  <p class=\"repealed-note\">Repealed by <a href=\"#{}\">{}</a> on {}.</p>\n",
                repealer.anchor,
                escape_html(&repealer.title),
                escape_html(date)
            )),
            None => out.push_str(&format!(
                "  <p class=\"repealed-note\">Repealed on {}.</p>\n",
                escape_html(date)
            )),
        }
    }

    if !entry.tags.is_empty() {
        out.push_str("  <ul class=\"entry-tags\">");
        for tag in &entry.tags {
            out.push_str(&format!("<li>{}</li>", escape_html(tag)));
        }
        out.push_str("</ul>\n");
    }

    out.push_str("</article>\n");
}
