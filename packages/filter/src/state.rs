//! Filter state and its URL query-string mirror.
//!
//! The enhancement layer keeps the active criteria in the page URL so
//! filtered views are shareable links. Only deviations from the default
//! state are serialized; the default state round-trips to "".

use serde::{Deserialize, Serialize};
use url::form_urlencoded;

use crate::types::Part;

/// User-selected filter criteria.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterState {
    /// Free-text query, carried verbatim; normalized only at match time.
    #[serde(default)]
    pub query: Option<String>,

    /// Restrict to one document part.
    #[serde(default)]
    pub part: Option<Part>,

    /// Restrict to one article number.
    #[serde(default)]
    pub article: Option<u32>,

    /// Restrict to one amendment number.
    #[serde(default)]
    pub amendment: Option<u32>,

    /// Whether repealed entries are shown (default true).
    #[serde(default = "default_include_repealed")]
    pub include_repealed: bool,
}

fn default_include_repealed() -> bool {
    true
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            query: None,
            part: None,
            article: None,
            amendment: None,
            include_repealed: true,
        }
    }
}

impl FilterState {
    /// Whether no criterion is active.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.query.as_deref().is_none_or(|q| q.trim().is_empty())
            && self.part.is_none()
            && self.article.is_none()
            && self.amendment.is_none()
            && self.include_repealed
    }

    /// Serialize active criteria as a URL query string (no leading `?`).
    ///
    /// Keys: `q`, `part`, `article`, `amendment`, `repealed` (only ever
    /// `repealed=0`). The empty state serializes to an empty string.
    #[must_use]
    pub fn to_query_string(&self) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());

        if let Some(query) = self.query.as_deref() {
            if !query.trim().is_empty() {
                serializer.append_pair("q", query);
            }
        }
        if let Some(part) = self.part {
            serializer.append_pair("part", part.as_str());
        }
        if let Some(article) = self.article {
            serializer.append_pair("article", &article.to_string());
        }
        if let Some(amendment) = self.amendment {
            serializer.append_pair("amendment", &amendment.to_string());
        }
        if !self.include_repealed {
            serializer.append_pair("repealed", "0");
        }

        serializer.finish()
    }

    /// Parse filter state from a URL query string.
    ///
    /// A leading `?` is tolerated. Unknown keys are ignored; values that
    /// fail to parse leave their criterion inactive rather than erroring,
    /// so a hand-edited URL degrades gracefully.
    #[must_use]
    pub fn from_query_string(query_string: &str) -> Self {
        let query_string = query_string.strip_prefix('?').unwrap_or(query_string);

        let mut state = Self::default();
        for (key, value) in form_urlencoded::parse(query_string.as_bytes()) {
            match key.as_ref() {
                "q" => {
                    if !value.trim().is_empty() {
                        state.query = Some(value.into_owned());
                    }
                }
                "part" => {
                    if let Ok(part) = value.parse::<Part>() {
                        state.part = Some(part);
                    }
                }
                "article" => {
                    if let Ok(number) = value.parse::<u32>() {
                        state.article = Some(number);
                    }
                }
                "amendment" => {
                    if let Ok(number) = value.parse::<u32>() {
                        state.amendment = Some(number);
                    }
                }
                "repealed" => {
                    if value == "0" {
                        state.include_repealed = false;
                    }
                }
                _ => {}
            }
        }
        state
    }
}
