//! XML escaping for text content and attribute values

/// Escapes text content.
///
/// `&` is replaced first so the entities introduced for `<` and `>` are not
/// escaped a second time.
pub fn escape_text(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Escapes an attribute value: everything [`escape_text`] does plus both
/// quote characters.
pub fn escape_attr(input: &str) -> String {
    escape_text(input)
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
