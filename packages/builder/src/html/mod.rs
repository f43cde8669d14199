//! HTML generation for the static page.
//!
//! All markup is built as plain strings; the page template supplies the
//! document shell and the generated fragments are spliced in between
//! marker comments (see [`crate::splice`]).

pub mod entries;
pub mod escape;
pub mod toc;

pub use entries::generate_entries;
pub use escape::escape_html;
pub use toc::generate_toc;

use crate::types::{Entry, Part};

/// Key identifying the group an entry belongs to.
///
/// A new group starts whenever the key changes while walking entries in
/// position order: at part boundaries, and at article/amendment
/// boundaries within a part.
#[must_use]
pub fn group_key(entry: &Entry) -> (Part, Option<u32>) {
    match entry.part {
        Part::Preamble => (Part::Preamble, None),
        Part::Article => (Part::Article, entry.article),
        Part::Amendment => (Part::Amendment, entry.amendment_number),
    }
}
