//! Field type tags.
//!
//! A tag is selected by the first character of the caller's type string. The
//! set is closed: anything that is not a known numeric, date or time tag is
//! encoded as text.

use serde::{Deserialize, Serialize};

/// Encoded width of `I`/`Z`/`N`/`M` fields.
pub const NUMERIC_WIDTH: usize = 8;

/// Encoded width of `D`/`T` fields.
pub const CLOCK_WIDTH: usize = 3;

/// Decimal exponent attached to an `N`/`M` type string.
///
/// For a type string such as `N.2` or `N.-2(12)` the descriptor is the text
/// after the first `.` and before the first `(`. It is read as an optional
/// sign followed by the longest run of digits; anything after that run is
/// ignored and a descriptor without digits means an exponent of zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScaleDescriptor {
    /// Power of ten the raw value is multiplied by before rounding.
    pub exponent: i32,
}

impl ScaleDescriptor {
    #[must_use]
    pub const fn new(exponent: i32) -> Self {
        Self { exponent }
    }

    /// Extract the descriptor from a full type string (`"N.2"`, `"M"`, ...).
    #[must_use]
    pub fn from_type_str(type_str: &str) -> Self {
        let bytes = type_str.as_bytes();
        let Some(dot) = memchr::memchr(b'.', bytes) else {
            return Self::default();
        };
        let rest = &bytes[dot + 1..];
        let end = memchr::memchr(b'(', rest).unwrap_or(rest.len());
        Self::new(parse_exponent(&rest[..end]))
    }
}

/// Read `[+-]?[0-9]*` from the start of `bytes`, saturating at the `i32`
/// bounds. A sign without digits reads as zero.
fn parse_exponent(bytes: &[u8]) -> i32 {
    let (negative, digits) = match bytes.first() {
        Some(b'-') => (true, &bytes[1..]),
        Some(b'+') => (false, &bytes[1..]),
        _ => (false, bytes),
    };
    let mut magnitude: i64 = 0;
    for &b in digits.iter().take_while(|b| b.is_ascii_digit()) {
        magnitude = magnitude
            .saturating_mul(10)
            .saturating_add(i64::from(b - b'0'));
    }
    let signed = if negative { -magnitude } else { magnitude };
    i32::try_from(signed).unwrap_or(if negative { i32::MIN } else { i32::MAX })
}

/// Encoding variant of a single field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeTag {
    /// `I` or `Z`: biased 8-byte signed integer.
    Integer,
    /// `D`: Julian day number of a `YYYY-MM-DD` date, low 24 bits.
    Date,
    /// `T`: seconds since midnight of an `HH:MM` time, low 24 bits.
    Time,
    /// `N` or `M`: decimal scaled by its descriptor, rounded, then biased.
    Decimal(ScaleDescriptor),
    /// Any other tag: upper-cased bytes, variable length.
    Text,
}

impl TypeTag {
    /// Parse a caller-supplied type string. Only the first character selects
    /// the variant and the match is case-sensitive; an empty string is text.
    #[must_use]
    pub fn parse(type_str: &str) -> Self {
        match type_str.as_bytes().first() {
            Some(b'I' | b'Z') => Self::Integer,
            Some(b'D') => Self::Date,
            Some(b'T') => Self::Time,
            Some(b'N' | b'M') => Self::Decimal(ScaleDescriptor::from_type_str(type_str)),
            _ => Self::Text,
        }
    }

    /// Encoded width for fixed-width tags, `None` for text.
    #[must_use]
    pub const fn fixed_width(self) -> Option<usize> {
        match self {
            Self::Integer | Self::Decimal(_) => Some(NUMERIC_WIDTH),
            Self::Date | Self::Time => Some(CLOCK_WIDTH),
            Self::Text => None,
        }
    }

    /// Upper bound on the bytes a field with this tag and value encodes to.
    #[must_use]
    pub fn max_encoded_len(self, value: Option<&str>) -> usize {
        self.fixed_width()
            .unwrap_or_else(|| value.map_or(0, str::len))
    }

    /// Stable label used in logs.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Integer => "integer",
            Self::Date => "date",
            Self::Time => "time",
            Self::Decimal(_) => "decimal",
            Self::Text => "text",
        }
    }
}

impl From<&str> for TypeTag {
    fn from(type_str: &str) -> Self {
        Self::parse(type_str)
    }
}
