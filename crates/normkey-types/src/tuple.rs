//! Fields and tuples: the codec's input.

use normkey_error::{NormKeyError, Result};
use smallvec::SmallVec;

use crate::tag::TypeTag;

/// Fields kept inline before a tuple spills to the heap.
pub const INLINE_FIELDS: usize = 10;

/// One key component: a type tag and an optional raw value.
///
/// An absent value is a null; how a null encodes depends on the tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Field<'a> {
    pub tag: TypeTag,
    pub value: Option<&'a str>,
}

impl<'a> Field<'a> {
    #[must_use]
    pub const fn new(tag: TypeTag, value: Option<&'a str>) -> Self {
        Self { tag, value }
    }

    /// True when the value is absent or zero-length.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.value.is_none_or(str::is_empty)
    }

    /// Upper bound on this field's encoded byte length.
    #[must_use]
    pub fn max_encoded_len(&self) -> usize {
        self.tag.max_encoded_len(self.value)
    }
}

/// Ordered key components of one record. Field order is the column order of
/// the resulting key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tuple<'a> {
    fields: SmallVec<[Field<'a>; INLINE_FIELDS]>,
}

impl<'a> Tuple<'a> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a tuple from the parallel type/value arrays a host hands over.
    ///
    /// # Errors
    ///
    /// `ArityMismatch` when the arrays differ in length (checked first), then
    /// `MissingTypeTag` for the first absent type string.
    pub fn from_parts(types: &[Option<&str>], values: &[Option<&'a str>]) -> Result<Self> {
        if types.len() != values.len() {
            return Err(NormKeyError::ArityMismatch {
                types: types.len(),
                values: values.len(),
            });
        }
        let mut fields = SmallVec::with_capacity(types.len());
        for (position, (type_str, value)) in types.iter().zip(values).enumerate() {
            let type_str = (*type_str).ok_or(NormKeyError::MissingTypeTag { position })?;
            fields.push(Field::new(TypeTag::parse(type_str), *value));
        }
        Ok(Self { fields })
    }

    pub fn push(&mut self, field: Field<'a>) {
        self.fields.push(field);
    }

    #[must_use]
    pub fn fields(&self) -> &[Field<'a>] {
        &self.fields
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Field<'a>> {
        self.fields.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Upper bound on the encoded byte length, delimiters included.
    #[must_use]
    pub fn max_encoded_len(&self) -> usize {
        let payload: usize = self.fields.iter().map(Field::max_encoded_len).sum();
        payload + self.fields.len().saturating_sub(1)
    }
}

impl<'a> FromIterator<Field<'a>> for Tuple<'a> {
    fn from_iter<I: IntoIterator<Item = Field<'a>>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().collect(),
        }
    }
}

impl<'t, 'a> IntoIterator for &'t Tuple<'a> {
    type Item = &'t Field<'a>;
    type IntoIter = std::slice::Iter<'t, Field<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.iter()
    }
}
