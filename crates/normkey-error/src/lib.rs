//! Error taxonomy for the normkey tuple key codec.
//!
//! Only caller contract violations are errors. Malformed per-field data
//! (a date that is not `YYYY-MM-DD`, numeric text with trailing garbage)
//! is recovered locally by the encoders and never surfaces here.

use thiserror::Error;

/// Result alias used across the normkey crates.
pub type Result<T> = std::result::Result<T, NormKeyError>;

/// Errors returned by tuple construction and key encoding.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NormKeyError {
    /// The type sequence and value sequence differ in length.
    #[error("number of values ({values}) is not equal to the number of types ({types})")]
    ArityMismatch { types: usize, values: usize },

    /// A field's type tag is absent. `position` is zero-based; the message
    /// reports it one-based.
    #[error("type[{}] cannot be NULL", .position + 1)]
    MissingTypeTag { position: usize },

    /// A numeric field falls below the order-preserving range and the codec
    /// was configured to reject such values.
    #[error("numeric value {value} at field {position} is outside the sortable range")]
    NumericOutOfRange { position: usize, value: i64 },
}

impl NormKeyError {
    /// True for errors caused by the shape of the caller's input rather than
    /// by a field value.
    #[must_use]
    pub const fn is_contract_violation(&self) -> bool {
        matches!(self, Self::ArityMismatch { .. } | Self::MissingTypeTag { .. })
    }

    /// Stable label for logs and metric dimensions.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::ArityMismatch { .. } => "arity_mismatch",
            Self::MissingTypeTag { .. } => "missing_type_tag",
            Self::NumericOutOfRange { .. } => "numeric_out_of_range",
        }
    }

    /// Field position the error refers to, when there is one.
    #[must_use]
    pub const fn position(&self) -> Option<usize> {
        match self {
            Self::ArityMismatch { .. } => None,
            Self::MissingTypeTag { position } | Self::NumericOutOfRange { position, .. } => {
                Some(*position)
            }
        }
    }
}
