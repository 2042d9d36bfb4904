//! Scaled decimals for `N`/`M` fields.
//!
//! The raw value is read as a decimal number, multiplied by `10^exponent`
//! from the field's scale descriptor, rounded to the nearest integer with
//! ties to even, and then biased exactly like an `I` field. The arithmetic
//! is exact: digits are shifted, never converted to floating point.
//!
//! Reading follows C `atof` applied to `"<value>e<exponent>"`: leading
//! whitespace, sign, digits, an optional fraction and an optional exponent of
//! the value's own. The descriptor only takes effect when the whole value is
//! a plain decimal; a value with its own exponent or trailing characters
//! keeps its parsed prefix unscaled. Magnitudes beyond `i64` saturate.

use normkey_error::Result;
use normkey_types::{OverflowPolicy, ScaleDescriptor};

use crate::numeric::{push_biased, skip_c_whitespace, split_sign};

/// Integer digits beyond which a magnitude cannot fit an `i64`.
const MAX_INT_DIGITS: i64 = 19;

/// `±(int_digits ++ frac_digits) × 10^(exponent - frac_digits.len())`.
#[derive(Debug, Clone, Copy)]
struct DecimalText<'a> {
    negative: bool,
    int_digits: &'a [u8],
    frac_digits: &'a [u8],
    exponent: i64,
}

impl DecimalText<'_> {
    /// Significant digits, most significant first.
    fn digits(&self) -> impl Iterator<Item = u8> + Clone + '_ {
        self.int_digits
            .iter()
            .chain(self.frac_digits)
            .map(|b| b - b'0')
            .skip_while(|&d| d == 0)
    }

    /// Power of ten applied to the significant digits read as an integer.
    fn scale(&self) -> i64 {
        let frac_len = i64::try_from(self.frac_digits.len()).unwrap_or(i64::MAX);
        self.exponent.saturating_sub(frac_len)
    }
}

fn take_digits(bytes: &[u8]) -> (&[u8], &[u8]) {
    let end = bytes
        .iter()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(bytes.len());
    bytes.split_at(end)
}

/// Read `[eE][+-]?[0-9]+` from the start of `bytes`.
fn take_exponent(bytes: &[u8]) -> Option<i64> {
    let (marker, rest) = bytes.split_first()?;
    if !matches!(marker, b'e' | b'E') {
        return None;
    }
    let (negative, rest) = split_sign(rest);
    let (digits, _) = take_digits(rest);
    if digits.is_empty() {
        return None;
    }
    let magnitude = digits.iter().fold(0_i64, |acc, &b| {
        acc.saturating_mul(10).saturating_add(i64::from(b - b'0'))
    });
    Some(if negative { -magnitude } else { magnitude })
}

fn parse(text: &str, scale: ScaleDescriptor) -> DecimalText<'_> {
    let (negative, rest) = split_sign(skip_c_whitespace(text.as_bytes()));
    let (int_digits, rest) = take_digits(rest);
    let (frac_digits, rest) = match rest.split_first() {
        Some((b'.', after)) => take_digits(after),
        _ => (&rest[..0], rest),
    };
    let exponent = if int_digits.is_empty() && frac_digits.is_empty() {
        0
    } else if let Some(own) = take_exponent(rest) {
        own
    } else if rest.is_empty() {
        i64::from(scale.exponent)
    } else {
        0
    };
    DecimalText {
        negative,
        int_digits,
        frac_digits,
        exponent,
    }
}

/// Round `text × 10^scale` to the nearest integer, ties to even, saturating
/// at the `i64` bounds.
#[must_use]
pub fn scale_round(text: &str, scale: ScaleDescriptor) -> i64 {
    let decimal = parse(text, scale);
    let digits = decimal.digits();
    let len = i64::try_from(digits.clone().count()).unwrap_or(i64::MAX);
    if len == 0 {
        return 0;
    }
    let shift = decimal.scale();
    let int_len = len.saturating_add(shift);

    let magnitude: Option<u128> = if int_len > MAX_INT_DIGITS {
        None
    } else if shift >= 0 {
        // int_len <= 19 bounds both the digit count and the shift.
        let base = digits.fold(0_u128, |acc, d| acc * 10 + u128::from(d));
        Some(base * 10_u128.pow(shift as u32))
    } else if int_len < 0 {
        Some(0)
    } else {
        let mut rest = digits;
        let int_part = rest
            .by_ref()
            .take(int_len as usize)
            .fold(0_u128, |acc, d| acc * 10 + u128::from(d));
        let first_dropped = rest.next().unwrap_or(0);
        let sticky = rest.any(|d| d != 0);
        let round_up = match first_dropped {
            6..=9 => true,
            5 => sticky || int_part % 2 == 1,
            _ => false,
        };
        Some(int_part + u128::from(round_up))
    };

    match (magnitude, decimal.negative) {
        (None, false) => i64::MAX,
        (None, true) => i64::MIN,
        (Some(m), false) => i64::try_from(m).unwrap_or(i64::MAX),
        (Some(m), true) => i64::try_from(m).map_or(i64::MIN, |m| -m),
    }
}

/// Encode an `N`/`M` field. An absent or empty value is eight zero bytes
/// with no bias.
pub(crate) fn encode_decimal(
    out: &mut Vec<u8>,
    value: Option<&str>,
    scale: ScaleDescriptor,
    position: usize,
    overflow: OverflowPolicy,
) -> Result<()> {
    match value {
        Some(text) if !text.is_empty() => {
            push_biased(out, scale_round(text, scale), position, overflow)
        }
        _ => {
            out.extend_from_slice(&[0; 8]);
            Ok(())
        }
    }
}
