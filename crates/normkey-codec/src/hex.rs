//! Uppercase hex rendering of the assembled key buffer.

const HEX_DIGITS: [u8; 16] = *b"0123456789ABCDEF";

/// Append the two hex digits of `byte`, high nibble first.
#[inline]
pub fn push_byte(out: &mut String, byte: u8) {
    out.push(char::from(HEX_DIGITS[usize::from(byte >> 4)]));
    out.push(char::from(HEX_DIGITS[usize::from(byte & 0x0F)]));
}

/// Render `bytes` as uppercase hex, two digits per byte.
#[must_use]
pub fn encode_upper(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() * 2);
    for &byte in bytes {
        push_byte(&mut out, byte);
    }
    out
}
