//! Filter evaluation over the search index.
//!
//! A linear scan: the dataset is a few hundred records, all in memory.

use serde::Serialize;
use tracing::debug;

use crate::state::FilterState;
use crate::types::{IndexRecord, SearchIndex};

/// Result of applying a filter state to the index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterOutcome {
    /// Ids of matching records, in position order.
    pub visible: Vec<String>,

    /// Number of matching records.
    pub matched: usize,

    /// Total number of records in the index.
    pub total: usize,
}

/// Apply a filter state to the index.
///
/// Criteria combine with AND; an empty state matches every record. The
/// visible list preserves index (position) order, so callers can toggle
/// DOM nodes without re-sorting.
#[must_use]
pub fn apply(index: &SearchIndex, state: &FilterState) -> FilterOutcome {
    let terms = query_terms(state.query.as_deref().unwrap_or(""));

    let visible: Vec<String> = index
        .records
        .iter()
        .filter(|record| matches(record, state, &terms))
        .map(|record| record.id.clone())
        .collect();

    debug!(
        matched = visible.len(),
        total = index.len(),
        "filter applied"
    );

    FilterOutcome {
        matched: visible.len(),
        total: index.len(),
        visible,
    }
}

/// Split a free-text query into lowercase match terms.
///
/// Whitespace-only queries produce no terms and therefore match
/// everything.
#[must_use]
pub fn query_terms(query: &str) -> Vec<String> {
    query
        .to_lowercase()
        .split_whitespace()
        .map(String::from)
        .collect()
}

/// Whether one record satisfies every active criterion.
fn matches(record: &IndexRecord, state: &FilterState, terms: &[String]) -> bool {
    if !state.include_repealed && record.is_repealed {
        return false;
    }
    if let Some(part) = state.part {
        if record.part != part {
            return false;
        }
    }
    if let Some(article) = state.article {
        if record.article != Some(article) {
            return false;
        }
    }
    if let Some(amendment) = state.amendment {
        if record.amendment_number != Some(amendment) {
            return false;
        }
    }

    // Every term must appear somewhere in the blob (AND semantics)
    terms.iter().all(|term| record.blob.contains(term.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Part;
    use pretty_assertions::assert_eq;

    fn record(id: &str, part: Part, blob: &str, position: u32) -> IndexRecord {
        IndexRecord {
            id: id.to_string(),
            part,
            article: None,
            section: None,
            clause: None,
            amendment_number: None,
            is_repealed: false,
            title: id.to_string(),
            blob: blob.to_string(),
            tags: Vec::new(),
            position,
        }
    }

    fn fixture_index() -> SearchIndex {
        let mut a1s1 = record(
            "article-1-section-1",
            Part::Article,
            "article i, section 1 all legislative powers congress senate house",
            20,
        );
        a1s1.article = Some(1);
        a1s1.section = Some(1);

        let mut a2s1 = record(
            "article-2-section-1",
            Part::Article,
            "article ii, section 1 the executive power president",
            30,
        );
        a2s1.article = Some(2);
        a2s1.section = Some(1);

        let mut am18 = record(
            "amendment-18-section-1",
            Part::Amendment,
            "amendment xviii prohibition intoxicating liquors prohibited",
            40,
        );
        am18.amendment_number = Some(18);
        am18.section = Some(1);
        am18.is_repealed = true;

        let mut am21 = record(
            "amendment-21-section-1",
            Part::Amendment,
            "amendment xxi the eighteenth article of amendment is hereby repealed prohibition",
            50,
        );
        am21.amendment_number = Some(21);
        am21.section = Some(1);

        let records = vec![
            record(
                "preamble",
                Part::Preamble,
                "preamble we the people of the united states more perfect union",
                10,
            ),
            a1s1,
            a2s1,
            am18,
            am21,
        ];

        SearchIndex {
            generated: "2026-08-07".to_string(),
            count: records.len(),
            records,
        }
    }

    #[test]
    fn test_apply_empty_state_matches_all() {
        let index = fixture_index();
        let outcome = apply(&index, &FilterState::default());

        assert_eq!(outcome.matched, 5);
        assert_eq!(outcome.total, 5);
        assert_eq!(outcome.visible.len(), 5);
    }

    #[test]
    fn test_apply_preserves_position_order() {
        let index = fixture_index();
        let outcome = apply(&index, &FilterState::default());
        assert_eq!(outcome.visible[0], "preamble");
        assert_eq!(outcome.visible[4], "amendment-21-section-1");
    }

    #[test]
    fn test_apply_query_single_term() {
        let index = fixture_index();
        let state = FilterState {
            query: Some("prohibition".to_string()),
            ..FilterState::default()
        };
        let outcome = apply(&index, &state);
        assert_eq!(
            outcome.visible,
            vec!["amendment-18-section-1", "amendment-21-section-1"]
        );
    }

    #[test]
    fn test_apply_query_and_semantics() {
        let index = fixture_index();
        let state = FilterState {
            query: Some("prohibition repealed".to_string()),
            ..FilterState::default()
        };
        let outcome = apply(&index, &state);
        assert_eq!(outcome.visible, vec!["amendment-21-section-1"]);
    }

    #[test]
    fn test_apply_query_is_case_insensitive() {
        let index = fixture_index();
        let state = FilterState {
            query: Some("PROHIBITION".to_string()),
            ..FilterState::default()
        };
        assert_eq!(apply(&index, &state).matched, 2);
    }

    #[test]
    fn test_apply_part_filter() {
        let index = fixture_index();
        let state = FilterState {
            part: Some(Part::Article),
            ..FilterState::default()
        };
        let outcome = apply(&index, &state);
        assert_eq!(
            outcome.visible,
            vec!["article-1-section-1", "article-2-section-1"]
        );
    }

    #[test]
    fn test_apply_article_filter() {
        let index = fixture_index();
        let state = FilterState {
            article: Some(2),
            ..FilterState::default()
        };
        let outcome = apply(&index, &state);
        assert_eq!(outcome.visible, vec!["article-2-section-1"]);
    }

    #[test]
    fn test_apply_amendment_filter() {
        let index = fixture_index();
        let state = FilterState {
            amendment: Some(18),
            ..FilterState::default()
        };
        let outcome = apply(&index, &state);
        assert_eq!(outcome.visible, vec!["amendment-18-section-1"]);
    }

    #[test]
    fn test_apply_exclude_repealed() {
        let index = fixture_index();
        let state = FilterState {
            include_repealed: false,
            ..FilterState::default()
        };
        let outcome = apply(&index, &state);
        assert_eq!(outcome.matched, 4);
        assert!(!outcome.visible.contains(&"amendment-18-section-1".to_string()));
    }

    #[test]
    fn test_apply_exclude_repealed_overrides_other_criteria() {
        let index = fixture_index();
        let state = FilterState {
            amendment: Some(18),
            include_repealed: false,
            ..FilterState::default()
        };
        let outcome = apply(&index, &state);
        assert_eq!(outcome.matched, 0);
        assert!(outcome.visible.is_empty());
    }

    #[test]
    fn test_apply_criteria_combine_with_and() {
        let index = fixture_index();
        let state = FilterState {
            query: Some("section".to_string()),
            part: Some(Part::Article),
            article: Some(1),
            ..FilterState::default()
        };
        let outcome = apply(&index, &state);
        assert_eq!(outcome.visible, vec!["article-1-section-1"]);
    }

    #[test]
    fn test_apply_no_match() {
        let index = fixture_index();
        let state = FilterState {
            query: Some("jury trial".to_string()),
            ..FilterState::default()
        };
        let outcome = apply(&index, &state);
        assert_eq!(outcome.matched, 0);
        assert_eq!(outcome.total, 5);
    }

    #[test]
    fn test_query_terms() {
        assert_eq!(query_terms("Due Process"), vec!["due", "process"]);
        assert_eq!(query_terms("  spaced   out  "), vec!["spaced", "out"]);
        assert!(query_terms("").is_empty());
        assert!(query_terms("   ").is_empty());
    }
}
