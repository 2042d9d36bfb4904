//! Codec configuration.
//!
//! `CodecConfig::default()` reproduces the legacy key layout byte for byte.

use serde::{Deserialize, Serialize};

use crate::tuple::Field;

/// Which fields the empty-tuple guard inspects.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BookmarkPolicy {
    /// The last field is a row identifier and never makes a tuple non-empty.
    #[default]
    TrailingField,
    /// Every field is inspected.
    NoBookmark,
}

impl BookmarkPolicy {
    /// The fields whose emptiness decides whether a key is produced.
    #[must_use]
    pub fn inspected<'t, 'a>(self, fields: &'t [Field<'a>]) -> &'t [Field<'a>] {
        match self {
            Self::TrailingField => &fields[..fields.len().saturating_sub(1)],
            Self::NoBookmark => fields,
        }
    }
}

/// Handling of numeric values whose biased form no longer sorts correctly.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OverflowPolicy {
    /// Two's-complement wraparound, identical to keys written by older
    /// encoders. Out-of-range values sort above all in-range values.
    #[default]
    Wrap,
    /// Clamp to the lowest sortable value.
    Saturate,
    /// Fail the encode with `NumericOutOfRange`.
    Reject,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct CodecConfig {
    pub bookmark: BookmarkPolicy,
    pub overflow: OverflowPolicy,
}

impl CodecConfig {
    /// Trailing bookmark field, wrapping numerics.
    #[must_use]
    pub const fn legacy() -> Self {
        Self {
            bookmark: BookmarkPolicy::TrailingField,
            overflow: OverflowPolicy::Wrap,
        }
    }

    #[must_use]
    pub const fn with_bookmark(mut self, bookmark: BookmarkPolicy) -> Self {
        self.bookmark = bookmark;
        self
    }

    #[must_use]
    pub const fn with_overflow(mut self, overflow: OverflowPolicy) -> Self {
        self.overflow = overflow;
        self
    }
}
