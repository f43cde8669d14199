//! HTML entity escaping.

/// Escape text for safe interpolation into HTML element and attribute
/// positions.
///
/// Escapes all five characters so the same function is safe in both
/// positions (`&`, `<`, `>`, `"`, `'`).
///
/// # Examples
/// ```
/// use constitution_builder::html::escape_html;
///
/// assert_eq!(escape_html("Smith & Jones"), "Smith &amp; Jones");
/// assert_eq!(escape_html("<script>"), "&lt;script&gt;");
/// ```
#[must_use]
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
