//! Table-of-contents generation.
//!
//! Articles are listed to section depth; clause-level entries share their
//! section's link. Amendments get one line each, the preamble one line.

use crate::heading::group_heading;
use crate::html::escape::escape_html;
use crate::types::{Entry, Part};

/// Generate the table-of-contents `<nav>` fragment.
///
/// Entries must be in position order (as produced by normalization);
/// each link targets the first entry of its group.
#[must_use]
pub fn generate_toc(entries: &[Entry]) -> String {
    let mut out = String::new();
    out.push_str("<nav class=\"toc\" aria-label=\"Table of contents\">\n");
    out.push_str("<ol class=\"toc-list\">\n");

    let mut i = 0;
    while i < entries.len() {
        let entry = &entries[i];
        match entry.part {
            Part::Preamble => {
                out.push_str(&format!(
                    "  <li><a href=\"#{}\">{}</a></li>\n",
                    entry.anchor,
                    escape_html(&entry.title)
                ));
                i += 1;
            }
            Part::Article => {
                let number = entry.article;
                let start = i;
                while i < entries.len()
                    && entries[i].part == Part::Article
                    && entries[i].article == number
                {
                    i += 1;
                }
                push_article_item(&mut out, &entries[start..i]);
            }
            Part::Amendment => {
                let number = entry.amendment_number;
                let start = i;
                while i < entries.len()
                    && entries[i].part == Part::Amendment
                    && entries[i].amendment_number == number
                {
                    i += 1;
                }
                let label = group_heading(Part::Amendment, None, number);
                out.push_str(&format!(
                    "  <li><a href=\"#{}\">{}</a></li>\n",
                    entries[start].anchor,
                    escape_html(&label)
                ));
            }
        }
    }

    out.push_str("</ol>\n");
    out.push_str("</nav>");
    out
}

/// Append one article item, with a nested section list when the article
/// has sectioned entries.
fn push_article_item(out: &mut String, group: &[Entry]) {
    let Some(first) = group.first() else {
        return;
    };
    let label = group_heading(Part::Article, first.article, None);

    // First entry of each distinct section, in position order
    let mut sections: Vec<&Entry> = Vec::new();
    for entry in group {
        if entry.section.is_some() && sections.last().map(|e| e.section) != Some(entry.section) {
            sections.push(entry);
        }
    }

    if sections.is_empty() {
        out.push_str(&format!(
            "  <li><a href=\"#{}\">{}</a></li>\n",
            first.anchor,
            escape_html(&label)
        ));
        return;
    }

    out.push_str(&format!(
        "  <li>\n    <a href=\"#{}\">{}</a>\n    <ol>\n",
        first.anchor,
        escape_html(&label)
    ));
    for entry in sections {
        // Guarded by the is_some() filter above
        let Some(section) = entry.section else {
            continue;
        };
        out.push_str(&format!(
            "      <li><a href=\"#{}\">Section {}</a></li>\n",
            entry.anchor, section
        ));
    }
    out.push_str("    </ol>\n  </li>\n");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize::normalize;
    use crate::types::RawEntry;

    fn raw(id: &str, part: Part, position: u32) -> RawEntry {
        RawEntry {
            id: id.to_string(),
            part,
            article: None,
            section: None,
            clause: None,
            subclause: None,
            amendment_number: None,
            repealed_by: None,
            repealed_date: None,
            text: "Text.".to_string(),
            tags: Vec::new(),
            position,
        }
    }

    fn fixture_entries() -> Vec<Entry> {
        let mut preamble = raw("preamble", Part::Preamble, 10);
        preamble.text = "We the People of the United States...".to_string();

        let mut a1s1 = raw("article-1-section-1", Part::Article, 20);
        a1s1.article = Some(1);
        a1s1.section = Some(1);

        let mut a1s2c1 = raw("article-1-section-2-clause-1", Part::Article, 30);
        a1s2c1.article = Some(1);
        a1s2c1.section = Some(2);
        a1s2c1.clause = Some(1);

        let mut a1s2c2 = raw("article-1-section-2-clause-2", Part::Article, 40);
        a1s2c2.article = Some(1);
        a1s2c2.section = Some(2);
        a1s2c2.clause = Some(2);

        let mut a7 = raw("article-7", Part::Article, 50);
        a7.article = Some(7);

        let mut am1 = raw("amendment-1", Part::Amendment, 60);
        am1.amendment_number = Some(1);

        let mut am18 = raw("amendment-18-section-1", Part::Amendment, 70);
        am18.amendment_number = Some(18);
        am18.section = Some(1);

        normalize(vec![preamble, a1s1, a1s2c1, a1s2c2, a7, am1, am18])
            .unwrap()
            .entries
    }

    #[test]
    fn test_generate_toc_structure() {
        let toc = generate_toc(&fixture_entries());

        assert!(toc.starts_with("<nav class=\"toc\""));
        assert!(toc.ends_with("</nav>"));
        assert!(toc.contains("<a href=\"#preamble\">Preamble</a>"));
        assert!(toc.contains(">Article I</a>"));
        assert!(toc.contains(">Article VII</a>"));
        assert!(toc.contains(">Amendment I (First)</a>"));
        assert!(toc.contains(">Amendment XVIII (Eighteenth)</a>"));
    }

    #[test]
    fn test_generate_toc_sections_nested_once() {
        let toc = generate_toc(&fixture_entries());

        // Two clauses in section 2, but only one section link
        assert_eq!(toc.matches(">Section 2</a>").count(), 1);
        assert!(toc.contains("<a href=\"#article-1-section-2-clause-1\">Section 2</a>"));
        assert!(toc.contains("<a href=\"#article-1-section-1\">Section 1</a>"));
    }

    #[test]
    fn test_generate_toc_article_without_sections_is_flat() {
        let toc = generate_toc(&fixture_entries());
        assert!(toc.contains("<li><a href=\"#article-7\">Article VII</a></li>"));
    }

    #[test]
    fn test_generate_toc_article_label_links_first_entry() {
        let toc = generate_toc(&fixture_entries());
        assert!(toc.contains("<a href=\"#article-1-section-1\">Article I</a>"));
    }

    #[test]
    fn test_generate_toc_amendment_links_first_entry() {
        let toc = generate_toc(&fixture_entries());
        assert!(toc.contains("<a href=\"#amendment-18-section-1\">Amendment XVIII (Eighteenth)</a>"));
    }

    #[test]
    fn test_generate_toc_empty() {
        let toc = generate_toc(&[]);
        assert!(toc.contains("<ol class=\"toc-list\">\n</ol>"));
    }
}
