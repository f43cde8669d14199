//! Configuration constants and validation functions for the builder.

use regex::Regex;
use std::sync::LazyLock;

use crate::error::{BuildError, Result};

/// Text wrap width for the markdown export.
pub const TEXT_WRAP_WIDTH: usize = 100;

/// Highest amendment number in the dataset.
pub const MAX_AMENDMENT: u32 = 27;

/// Output file name for the spliced page.
pub const PAGE_FILE_NAME: &str = "index.html";

/// Output file name for the search index.
pub const INDEX_FILE_NAME: &str = "search-index.json";

/// Output file name for the markdown export.
pub const EXPORT_FILE_NAME: &str = "constitution.md";

/// Begin marker for the table-of-contents splice region.
pub const TOC_BEGIN_MARKER: &str = "<!-- constitution:toc:begin -->";

/// End marker for the table-of-contents splice region.
pub const TOC_END_MARKER: &str = "<!-- constitution:toc:end -->";

/// Begin marker for the entries splice region.
pub const ENTRIES_BEGIN_MARKER: &str = "<!-- constitution:entries:begin -->";

/// End marker for the entries splice region.
pub const ENTRIES_END_MARKER: &str = "<!-- constitution:entries:end -->";

/// Entry id pattern: lowercase kebab-case.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static ENTRY_ID_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9]+(?:-[a-z0-9]+)*$").expect("valid regex"));

/// Date pattern: YYYY-MM-DD.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static DATE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("valid regex"));

/// Validate entry id format.
///
/// # Arguments
/// * `id` - The entry id to validate
///
/// # Returns
/// * `Ok(())` if valid
/// * `Err(BuildError::InvalidEntryId)` if invalid
///
/// # Examples
/// ```
/// use constitution_builder::config::validate_entry_id;
///
/// assert!(validate_entry_id("article-1-section-2-clause-3").is_ok());
/// assert!(validate_entry_id("Amendment_1").is_err());
/// ```
pub fn validate_entry_id(id: &str) -> Result<()> {
    if ENTRY_ID_PATTERN.is_match(id) {
        Ok(())
    } else {
        Err(BuildError::InvalidEntryId(id.to_string()))
    }
}

/// Validate a repeal date (YYYY-MM-DD).
///
/// Rejects dates in the future: a repeal that has not happened yet cannot
/// appear in the canonical data file.
///
/// # Arguments
/// * `date_str` - Date string to validate
///
/// # Returns
/// * `Ok(())` if valid format, valid date, and not in the future
/// * `Err(BuildError::InvalidDate)` if invalid
///
/// # Examples
/// ```
/// use constitution_builder::config::validate_repeal_date;
///
/// assert!(validate_repeal_date("1933-12-05").is_ok());
/// assert!(validate_repeal_date("invalid").is_err());
/// assert!(validate_repeal_date("1933-13-05").is_err()); // Invalid month
/// ```
pub fn validate_repeal_date(date_str: &str) -> Result<()> {
    if !DATE_PATTERN.is_match(date_str) {
        return Err(BuildError::InvalidDate(date_str.to_string()));
    }

    // Parse and validate it's a real date
    let parsed_date = chrono::NaiveDate::parse_from_str(date_str, "%Y-%m-%d")
        .map_err(|_| BuildError::InvalidDate(date_str.to_string()))?;

    let today = chrono::Local::now().date_naive();
    if parsed_date > today {
        return Err(BuildError::InvalidDate(format!(
            "{date_str} is in the future (today is {today})"
        )));
    }

    Ok(())
}

/// Sanitize a URL fragment identifier by removing problematic characters.
///
/// Entry ids are validated to be URL-safe already; this is the last line
/// of defense before an id is written into an `href` or `id` attribute.
///
/// # Examples
/// ```
/// use constitution_builder::config::sanitize_anchor;
///
/// assert_eq!(sanitize_anchor("article-1"), "article-1");
/// assert_eq!(sanitize_anchor("a<script>"), "ascript");
/// ```
pub fn sanitize_anchor(fragment: &str) -> String {
    fragment
        .chars()
        .filter(|c| c.is_alphanumeric() || *c == '-' || *c == '_' || *c == '.' || *c == '~')
        .collect()
}
