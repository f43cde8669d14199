//! Constitution Filter
//!
//! The search/filter engine behind the usconstitution.site
//! progressive-enhancement layer. This library provides functionality
//! for:
//! - Loading the build-time search index (JSON)
//! - Evaluating filter criteria (free text, part, article, amendment,
//!   repealed status) against the in-memory records
//! - Mirroring filter state to and from the page URL query string
//!
//! The same core runs natively (tests, tooling) and in the browser via
//! the feature-gated WASM bindings.
//!
//! # Example
//!
//! ```
//! use constitution_filter::{apply, FilterState, SearchIndex};
//!
//! let json = r#"{
//!     "generated": "2026-08-07",
//!     "count": 1,
//!     "records": [{
//!         "id": "preamble",
//!         "part": "preamble",
//!         "isRepealed": false,
//!         "title": "Preamble",
//!         "blob": "preamble we the people",
//!         "position": 10
//!     }]
//! }"#;
//!
//! let index = SearchIndex::from_json_str(json)?;
//! let state = FilterState::from_query_string("q=people");
//! let outcome = apply(&index, &state);
//! assert_eq!(outcome.visible, vec!["preamble"]);
//! # Ok::<(), constitution_filter::FilterError>(())
//! ```

pub mod engine;
pub mod error;
pub mod state;
pub mod types;

#[cfg(feature = "wasm")]
pub mod wasm;

// Re-export commonly used items
pub use engine::{apply, query_terms, FilterOutcome};
pub use error::{FilterError, Result};
pub use state::FilterState;
pub use types::{IndexRecord, Part, SearchIndex, MAX_INDEX_SIZE};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
