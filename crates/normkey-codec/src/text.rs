//! Text fields: ASCII upper-casing, one output byte per input byte.

/// Append `value` upper-cased. Bytes outside ASCII, including UTF-8
/// continuation bytes, are copied unchanged. An absent value adds nothing.
pub fn encode_text(out: &mut Vec<u8>, value: Option<&str>) {
    if let Some(text) = value {
        out.extend(text.bytes().map(|b| b.to_ascii_uppercase()));
    }
}
