//! Order-preserving sort keys for typed record tuples.
//!
//! A tuple of `(type tag, optional value)` fields is encoded into one
//! uppercase hex string whose byte-wise order follows the typed order of the
//! fields: integers and scaled decimals compare numerically, dates
//! chronologically, times by minute of day and text case-insensitively.
//!
//! ```
//! use normkey_codec::norm_key_val;
//!
//! let key = norm_key_val(&[Some("S"), Some("I")], &[Some("ab"), Some("1")])
//!     .expect("well-formed tuple");
//! assert_eq!(key.as_deref(), Some("4142000DE0B6B3A7640000"));
//! ```
//!
//! Encoding never fails on malformed field text; only the shape of the input
//! (arity, missing type tags) is an error. See [`TupleKeyCodec`] for the
//! configurable entry point.

pub mod clock;
pub mod codec;
pub mod decimal;
pub mod guard;
pub mod hex;
pub mod instrumentation;
pub mod key;
pub mod numeric;
pub mod text;

pub use codec::{DELIMITER, TupleKeyCodec, norm_key_val};
pub use instrumentation::{CodecMetricsSnapshot, codec_metrics_snapshot, reset_codec_metrics};
pub use key::{EncodedKey, KeyOutcome};
pub use numeric::{MIN_SORTABLE, OFFSET};

pub use normkey_error::{NormKeyError, Result};
pub use normkey_types::{
    BookmarkPolicy, CodecConfig, Field, OverflowPolicy, ScaleDescriptor, Tuple, TypeTag,
};
