//! Template splicing via textual markers.
//!
//! The page template carries begin/end comment pairs; splicing replaces
//! everything between a pair with generated HTML, keeping the markers so
//! the operation is idempotent across rebuilds.

use crate::config::{
    ENTRIES_BEGIN_MARKER, ENTRIES_END_MARKER, TOC_BEGIN_MARKER, TOC_END_MARKER,
};
use crate::error::{BuildError, Result};

/// Replace the span between a begin/end marker pair with `replacement`.
///
/// Markers are retained; the replacement is placed on its own lines
/// between them. Each marker must occur exactly once and the end marker
/// must follow the begin marker.
///
/// # Arguments
/// * `template` - Template text to splice into
/// * `begin` / `end` - Marker strings
/// * `replacement` - Generated fragment
/// * `file` - File name for error messages
pub fn splice(
    template: &str,
    begin: &str,
    end: &str,
    replacement: &str,
    file: &str,
) -> Result<String> {
    let begin_pos = find_unique(template, begin, file)?;
    let end_pos = find_unique(template, end, file)?;

    if end_pos < begin_pos {
        return Err(BuildError::UnorderedMarker {
            marker: end.to_string(),
            file: file.to_string(),
        });
    }

    let before = &template[..begin_pos + begin.len()];
    let after = &template[end_pos..];

    Ok(format!(
        "{before}\n{}\n{after}",
        replacement.trim_end_matches('\n')
    ))
}

/// Find the byte offset of a marker that must occur exactly once.
fn find_unique(template: &str, marker: &str, file: &str) -> Result<usize> {
    let mut matches = template.match_indices(marker);
    let first = matches.next().ok_or_else(|| BuildError::MissingMarker {
        marker: marker.to_string(),
        file: file.to_string(),
    })?;
    if matches.next().is_some() {
        return Err(BuildError::DuplicateMarker {
            marker: marker.to_string(),
            file: file.to_string(),
        });
    }
    Ok(first.0)
}

/// Splice both generated fragments into the page template.
pub fn splice_page(
    template: &str,
    toc_html: &str,
    entries_html: &str,
    file: &str,
) -> Result<String> {
    let page = splice(template, TOC_BEGIN_MARKER, TOC_END_MARKER, toc_html, file)?;
    splice(
        &page,
        ENTRIES_BEGIN_MARKER,
        ENTRIES_END_MARKER,
        entries_html,
        file,
    )
}
