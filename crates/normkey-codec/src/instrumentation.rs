//! Codec observability counters.
//!
//! Process-local counters updated by every encode call. They carry no state
//! into the encoding itself; two calls with the same input produce the same
//! key regardless of counter values.

use std::sync::atomic::{AtomicU64, Ordering};

/// Snapshot of codec counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CodecMetricsSnapshot {
    /// Tuples that produced an encoded key.
    pub normkey_keys_encoded_total: u64,
    /// Tuples rejected by the empty-tuple guard.
    pub normkey_no_key_total: u64,
    /// Calls that failed with an arity or missing-tag error.
    pub normkey_contract_violations_total: u64,
    /// Date or time values replaced by the zero sentinel.
    pub normkey_clock_fallbacks_total: u64,
    /// Numeric values below the sortable range, whatever the policy did.
    pub normkey_numeric_out_of_range_total: u64,
    /// Bytes encoded before hex rendering, delimiters included.
    pub normkey_encoded_bytes_total: u64,
}

static KEYS_ENCODED_TOTAL: AtomicU64 = AtomicU64::new(0);
static NO_KEY_TOTAL: AtomicU64 = AtomicU64::new(0);
static CONTRACT_VIOLATIONS_TOTAL: AtomicU64 = AtomicU64::new(0);
static CLOCK_FALLBACKS_TOTAL: AtomicU64 = AtomicU64::new(0);
static NUMERIC_OUT_OF_RANGE_TOTAL: AtomicU64 = AtomicU64::new(0);
static ENCODED_BYTES_TOTAL: AtomicU64 = AtomicU64::new(0);

pub(crate) fn record_key(encoded_bytes: usize) {
    KEYS_ENCODED_TOTAL.fetch_add(1, Ordering::Relaxed);
    let bytes = u64::try_from(encoded_bytes).unwrap_or(u64::MAX);
    ENCODED_BYTES_TOTAL.fetch_add(bytes, Ordering::Relaxed);
}

pub(crate) fn record_no_key() {
    NO_KEY_TOTAL.fetch_add(1, Ordering::Relaxed);
}

pub(crate) fn record_contract_violation() {
    CONTRACT_VIOLATIONS_TOTAL.fetch_add(1, Ordering::Relaxed);
}

pub(crate) fn record_clock_fallback() {
    CLOCK_FALLBACKS_TOTAL.fetch_add(1, Ordering::Relaxed);
}

pub(crate) fn record_numeric_out_of_range() {
    NUMERIC_OUT_OF_RANGE_TOTAL.fetch_add(1, Ordering::Relaxed);
}

/// Return a snapshot of codec counters.
#[must_use]
pub fn codec_metrics_snapshot() -> CodecMetricsSnapshot {
    CodecMetricsSnapshot {
        normkey_keys_encoded_total: KEYS_ENCODED_TOTAL.load(Ordering::Relaxed),
        normkey_no_key_total: NO_KEY_TOTAL.load(Ordering::Relaxed),
        normkey_contract_violations_total: CONTRACT_VIOLATIONS_TOTAL.load(Ordering::Relaxed),
        normkey_clock_fallbacks_total: CLOCK_FALLBACKS_TOTAL.load(Ordering::Relaxed),
        normkey_numeric_out_of_range_total: NUMERIC_OUT_OF_RANGE_TOTAL.load(Ordering::Relaxed),
        normkey_encoded_bytes_total: ENCODED_BYTES_TOTAL.load(Ordering::Relaxed),
    }
}

/// Reset all codec counters.
pub fn reset_codec_metrics() {
    KEYS_ENCODED_TOTAL.store(0, Ordering::Relaxed);
    NO_KEY_TOTAL.store(0, Ordering::Relaxed);
    CONTRACT_VIOLATIONS_TOTAL.store(0, Ordering::Relaxed);
    CLOCK_FALLBACKS_TOTAL.store(0, Ordering::Relaxed);
    NUMERIC_OUT_OF_RANGE_TOTAL.store(0, Ordering::Relaxed);
    ENCODED_BYTES_TOTAL.store(0, Ordering::Relaxed);
}
