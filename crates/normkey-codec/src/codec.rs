//! Tuple dispatcher: guard, per-field encoding, delimiting, hex rendering.

use normkey_error::Result;
use normkey_types::{CodecConfig, Tuple, TypeTag};
use tracing::{debug, trace};

use crate::clock::{self, ClockOutcome};
use crate::key::{EncodedKey, KeyOutcome};
use crate::{decimal, guard, instrumentation, numeric, text};

/// Byte written between consecutive fields.
pub const DELIMITER: u8 = 0x00;

/// Stateless tuple key encoder. Safe to share across threads; each call
/// owns its working buffer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TupleKeyCodec {
    config: CodecConfig,
}

impl TupleKeyCodec {
    #[must_use]
    pub const fn new(config: CodecConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub const fn config(&self) -> CodecConfig {
        self.config
    }

    /// Encode the parallel type/value arrays a host supplies.
    ///
    /// # Errors
    ///
    /// `ArityMismatch` or `MissingTypeTag` for malformed input, and
    /// `NumericOutOfRange` under `OverflowPolicy::Reject`.
    pub fn encode_parts(
        &self,
        types: &[Option<&str>],
        values: &[Option<&str>],
    ) -> Result<KeyOutcome> {
        let tuple = Tuple::from_parts(types, values).inspect_err(|err| {
            instrumentation::record_contract_violation();
            debug!(code = err.code(), position = ?err.position(), "rejected key tuple");
        })?;
        self.encode(&tuple)
    }

    /// Encode one tuple, or return `KeyOutcome::NoKey` when the guard holds.
    ///
    /// # Errors
    ///
    /// `NumericOutOfRange` under `OverflowPolicy::Reject`.
    pub fn encode(&self, tuple: &Tuple<'_>) -> Result<KeyOutcome> {
        let _span = tracing::trace_span!("norm_key", fields = tuple.len()).entered();

        if guard::is_keyless(tuple.fields(), self.config.bookmark) {
            instrumentation::record_no_key();
            debug!(
                fields = tuple.len(),
                bookmark = ?self.config.bookmark,
                "all key fields empty, no key produced"
            );
            return Ok(KeyOutcome::NoKey);
        }

        let bytes = self.assemble(tuple)?;
        instrumentation::record_key(bytes.len());
        Ok(KeyOutcome::Key(EncodedKey::from_bytes(&bytes)))
    }

    fn assemble(&self, tuple: &Tuple<'_>) -> Result<Vec<u8>> {
        let overflow = self.config.overflow;
        let mut out = Vec::with_capacity(tuple.max_encoded_len());

        for (position, field) in tuple.iter().enumerate() {
            if position > 0 {
                out.push(DELIMITER);
            }
            trace!(position, tag = field.tag.as_str(), "encoding field");
            match field.tag {
                TypeTag::Integer => {
                    numeric::encode_integer(&mut out, field.value, position, overflow)?;
                }
                TypeTag::Decimal(scale) => {
                    decimal::encode_decimal(&mut out, field.value, scale, position, overflow)?;
                }
                TypeTag::Date => {
                    let outcome = clock::encode_date(&mut out, field.value);
                    note_clock_outcome(outcome, position, field.tag);
                }
                TypeTag::Time => {
                    let outcome = clock::encode_time(&mut out, field.value);
                    note_clock_outcome(outcome, position, field.tag);
                }
                TypeTag::Text => text::encode_text(&mut out, field.value),
            }
        }

        debug_assert!(out.len() <= tuple.max_encoded_len());
        Ok(out)
    }
}

fn note_clock_outcome(outcome: ClockOutcome, position: usize, tag: TypeTag) {
    if outcome == ClockOutcome::Malformed {
        instrumentation::record_clock_fallback();
        debug!(position, tag = tag.as_str(), "malformed value encoded as zero");
    }
}

/// Encode with the default configuration, returning `None` for the No-Key
/// signal.
///
/// # Errors
///
/// `ArityMismatch` or `MissingTypeTag` for malformed input.
pub fn norm_key_val(types: &[Option<&str>], values: &[Option<&str>]) -> Result<Option<String>> {
    TupleKeyCodec::default()
        .encode_parts(types, values)
        .map(KeyOutcome::into_option)
}
