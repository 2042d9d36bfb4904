//! Fixed-width numeric encoding for `I`/`Z` fields.
//!
//! A signed value `v` is written as the 8-byte big-endian form of
//! `v + OFFSET` taken modulo 2^64. For `v` in `[MIN_SORTABLE, i64::MAX]` the
//! sum lies in `[0, i64::MAX + OFFSET]`, so unsigned byte order equals signed
//! numeric order. Below `MIN_SORTABLE` the sum wraps and the key sorts above
//! every in-range value; `OverflowPolicy` decides what to do there.

use normkey_error::{NormKeyError, Result};
use normkey_types::OverflowPolicy;
use tracing::warn;

use crate::instrumentation;

/// Bias added to every numeric value before big-endian encoding.
pub const OFFSET: i64 = 999_999_999_999_999_999;

/// Smallest value whose biased encoding still sorts correctly.
pub const MIN_SORTABLE: i64 = -OFFSET;

/// Biased big-endian bytes of `value`, wrapping below `MIN_SORTABLE`.
#[must_use]
pub const fn biased_be_bytes(value: i64) -> [u8; 8] {
    (value as u64).wrapping_add(OFFSET as u64).to_be_bytes()
}

/// Read an integer the way `strtoll(s, NULL, 10)` does: leading whitespace,
/// an optional sign, then the longest run of digits. Saturates at the `i64`
/// bounds; text without digits reads as zero.
#[must_use]
pub fn parse_integer_prefix(text: &str) -> i64 {
    let bytes = skip_c_whitespace(text.as_bytes());
    let (negative, digits) = split_sign(bytes);
    let mut acc: i64 = 0;
    for &b in digits.iter().take_while(|b| b.is_ascii_digit()) {
        let digit = i64::from(b - b'0');
        acc = if negative {
            acc.saturating_mul(10).saturating_sub(digit)
        } else {
            acc.saturating_mul(10).saturating_add(digit)
        };
    }
    acc
}

pub(crate) fn skip_c_whitespace(bytes: &[u8]) -> &[u8] {
    let start = bytes
        .iter()
        .position(|b| !matches!(b, b' ' | b'\t' | b'\n' | 0x0B | 0x0C | b'\r'))
        .unwrap_or(bytes.len());
    &bytes[start..]
}

pub(crate) fn split_sign(bytes: &[u8]) -> (bool, &[u8]) {
    match bytes.first() {
        Some(b'-') => (true, &bytes[1..]),
        Some(b'+') => (false, &bytes[1..]),
        _ => (false, bytes),
    }
}

/// Apply the overflow policy and append the biased 8 bytes of `value`.
pub(crate) fn push_biased(
    out: &mut Vec<u8>,
    value: i64,
    position: usize,
    overflow: OverflowPolicy,
) -> Result<()> {
    let value = if value < MIN_SORTABLE {
        instrumentation::record_numeric_out_of_range();
        warn!(position, value, policy = ?overflow, "numeric value below sortable range");
        match overflow {
            OverflowPolicy::Wrap => value,
            OverflowPolicy::Saturate => MIN_SORTABLE,
            OverflowPolicy::Reject => {
                return Err(NormKeyError::NumericOutOfRange { position, value });
            }
        }
    } else {
        value
    };
    out.extend_from_slice(&biased_be_bytes(value));
    Ok(())
}

/// Encode an `I`/`Z` field. An absent value is eight zero bytes with no
/// bias; a present value, even an empty one, is parsed and biased.
pub(crate) fn encode_integer(
    out: &mut Vec<u8>,
    value: Option<&str>,
    position: usize,
    overflow: OverflowPolicy,
) -> Result<()> {
    match value {
        None => {
            out.extend_from_slice(&[0; 8]);
            Ok(())
        }
        Some(text) => push_biased(out, parse_integer_prefix(text), position, overflow),
    }
}
