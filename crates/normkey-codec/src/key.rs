//! Codec output: an encoded key or the No-Key signal.

use std::fmt;

use crate::hex;

/// Uppercase hex sort key. Byte-wise comparison of two keys built from the
/// same type sequence orders the underlying tuples field by field.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EncodedKey(String);

impl EncodedKey {
    pub(crate) fn from_bytes(bytes: &[u8]) -> Self {
        Self(hex::encode_upper(bytes))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }

    /// Length in hex digits (twice the encoded byte count).
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for EncodedKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for EncodedKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<EncodedKey> for String {
    fn from(key: EncodedKey) -> Self {
        key.0
    }
}

/// Result of encoding one tuple.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use]
pub enum KeyOutcome {
    Key(EncodedKey),
    /// Every inspected field was empty; the caller should store no key.
    NoKey,
}

impl KeyOutcome {
    #[must_use]
    pub const fn is_no_key(&self) -> bool {
        matches!(self, Self::NoKey)
    }

    #[must_use]
    pub const fn key(&self) -> Option<&EncodedKey> {
        match self {
            Self::Key(key) => Some(key),
            Self::NoKey => None,
        }
    }

    /// `Some(hex)` for a key, `None` for the No-Key signal.
    #[must_use]
    pub fn into_option(self) -> Option<String> {
        match self {
            Self::Key(key) => Some(key.into_string()),
            Self::NoKey => None,
        }
    }
}
