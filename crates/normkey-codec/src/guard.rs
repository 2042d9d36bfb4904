//! Empty-tuple guard: decides when a tuple carries no key at all.

use normkey_types::{BookmarkPolicy, Field};

/// True when every field the policy inspects is absent or zero-length.
///
/// With `BookmarkPolicy::TrailingField` the last field is the bookmark and
/// does not count, so a one-field tuple is always keyless. A tuple with no
/// fields is keyless under either policy.
#[must_use]
pub fn is_keyless(fields: &[Field<'_>], bookmark: BookmarkPolicy) -> bool {
    bookmark.inspected(fields).iter().all(Field::is_empty)
}
