//! HTML escaping for line content.

use std::borrow::Cow;

/// Escape text for HTML output.
///
/// Escapes `&`, `<`, `>`, `"` and `'`, so the result is safe both as
/// element content and inside a quoted attribute value.
pub fn escape(text: &str) -> Cow<'_, str> {
    html_escape::encode_quoted_attribute(text)
}
