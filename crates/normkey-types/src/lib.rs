//! Core types for normkey: type tags, tuples and codec configuration.

pub mod config;
pub mod tag;
pub mod tuple;

pub use config::{BookmarkPolicy, CodecConfig, OverflowPolicy};
pub use tag::{CLOCK_WIDTH, NUMERIC_WIDTH, ScaleDescriptor, TypeTag};
pub use tuple::{Field, INLINE_FIELDS, Tuple};
