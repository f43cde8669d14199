//! WASM bindings for the filter engine.
//!
//! This module provides the WebAssembly surface the client-side
//! enhancement layer calls. It is feature-gated behind the `wasm`
//! feature flag.
//!
//! # Key Constraints
//!
//! - **No filesystem access in WASM**: The index must be passed as a
//!   JSON string via `loadIndex()` (the page fetches it).
//! - **Efficient serialization**: Uses `serde-wasm-bindgen` for
//!   Rust <-> JavaScript conversion.
//!
//! # Example (JavaScript)
//!
//! ```javascript
//! import init, { WasmFilter } from 'constitution-filter';
//!
//! await init();
//! const filter = new WasmFilter();
//!
//! const response = await fetch('/search-index.json');
//! const count = filter.loadIndex(await response.text());
//!
//! // Mirror the current URL into a filter run
//! const outcome = filter.apply(window.location.search);
//! for (const article of document.querySelectorAll('article.entry')) {
//!     article.hidden = !outcome.visible.includes(article.id);
//! }
//! ```

use wasm_bindgen::prelude::*;

use crate::engine::apply;
use crate::error::FilterError;
use crate::state::FilterState;
use crate::types::SearchIndex;

/// Helper to create consistent error JsValues
fn wasm_error(msg: &str) -> JsValue {
    JsValue::from_str(msg)
}

impl From<FilterError> for JsValue {
    fn from(e: FilterError) -> Self {
        JsValue::from_str(&e.to_string())
    }
}

/// WASM-compatible filter engine.
///
/// Holds the parsed search index and evaluates query strings against it.
#[wasm_bindgen]
pub struct WasmFilter {
    index: Option<SearchIndex>,
}

#[wasm_bindgen]
impl WasmFilter {
    /// Create a new engine instance with no index loaded.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self { index: None }
    }

    /// Load the search index from its JSON text.
    ///
    /// # Arguments
    /// * `json` - Index JSON as served at `/search-index.json` (max 1 MB)
    ///
    /// # Returns
    /// * `Ok(usize)` - Number of records loaded
    /// * `Err(JsValue)` - Error message if parsing fails
    #[wasm_bindgen(js_name = loadIndex)]
    pub fn load_index(&mut self, json: &str) -> Result<usize, JsValue> {
        let index = SearchIndex::from_json_str(json)?;
        let count = index.len();
        self.index = Some(index);
        Ok(count)
    }

    /// Apply the filter state encoded in a URL query string.
    ///
    /// # Arguments
    /// * `query_string` - e.g. `window.location.search` (`?q=...&part=...`)
    ///
    /// # Returns
    /// * `Ok(JsValue)` - Object with `visible` (array of entry ids),
    ///   `matched`, and `total`
    /// * `Err(JsValue)` - Error if no index is loaded
    pub fn apply(&self, query_string: &str) -> Result<JsValue, JsValue> {
        let index = self
            .index
            .as_ref()
            .ok_or_else(|| wasm_error("Search index not loaded; call loadIndex() first"))?;

        let state = FilterState::from_query_string(query_string);
        let outcome = apply(index, &state);

        serde_wasm_bindgen::to_value(&outcome)
            .map_err(|e| wasm_error(&format!("Failed to serialize outcome: {e}")))
    }

    /// Parse a URL query string into a filter-state object.
    ///
    /// # Example (JavaScript)
    /// ```javascript
    /// const state = filter.parseQueryString('?q=speech&part=amendment');
    /// console.log(state.query);  // "speech"
    /// ```
    #[wasm_bindgen(js_name = parseQueryString)]
    pub fn parse_query_string(&self, query_string: &str) -> Result<JsValue, JsValue> {
        let state = FilterState::from_query_string(query_string);
        serde_wasm_bindgen::to_value(&state)
            .map_err(|e| wasm_error(&format!("Failed to serialize state: {e}")))
    }

    /// Serialize a filter-state object back into a URL query string.
    ///
    /// The inverse of `parseQueryString`; the default state serializes
    /// to an empty string so it can be dropped from the URL entirely.
    #[wasm_bindgen(js_name = toQueryString)]
    pub fn to_query_string(&self, state: JsValue) -> Result<String, JsValue> {
        let state: FilterState = serde_wasm_bindgen::from_value(state)
            .map_err(|e| wasm_error(&format!("Failed to parse state: {e}")))?;
        Ok(state.to_query_string())
    }

    /// Number of records in the loaded index (0 when none is loaded).
    #[wasm_bindgen(js_name = recordCount)]
    pub fn record_count(&self) -> usize {
        self.index.as_ref().map_or(0, SearchIndex::len)
    }

    /// Whether an index has been loaded.
    #[wasm_bindgen(js_name = hasIndex)]
    pub fn has_index(&self) -> bool {
        self.index.is_some()
    }

    /// Get the engine version.
    pub fn version(&self) -> String {
        env!("CARGO_PKG_VERSION").to_string()
    }
}

impl Default for WasmFilter {
    fn default() -> Self {
        Self::new()
    }
}
