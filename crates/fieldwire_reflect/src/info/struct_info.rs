use alloc::boxed::Box;

use crate::hash::HashMap;
use crate::info::{NamedField, Type, TypePath};
use crate::ops::Struct;

/// A container for compile-time named struct info.
///
/// Field order is declaration order; [`iter`](StructInfo::iter) and
/// [`field_names`](StructInfo::field_names) preserve it, and it is the order
/// used for wire layout.
///
/// # Examples
///
/// ```
/// use fieldwire_reflect::{derive::Reflect, info::Typed};
///
/// #[derive(Reflect)]
/// struct Frame {
///     kind: u8,
///     length: u16,
/// }
///
/// let info = <Frame as Typed>::type_info().as_struct().unwrap();
///
/// assert_eq!(info.field_len(), 2);
/// assert_eq!(info.index_of("length"), Some(1));
/// assert_eq!(info.index_of("missing"), None);
/// ```
#[derive(Clone, Debug)]
pub struct StructInfo {
    ty: Type,
    fields: HashMap<&'static str, NamedField>,
    field_names: Box<[&'static str]>,
}

impl StructInfo {
    crate::info::impl_type_fn!(ty);

    /// Create a new [`StructInfo`].
    ///
    /// The order of internal fields is fixed, depends on the input order.
    pub fn new<T: Struct + TypePath>(fields: &[NamedField]) -> Self {
        let field_names = fields.iter().map(NamedField::name).collect();
        let fields = fields.iter().map(|v| (v.name(), v.clone())).collect();

        Self {
            ty: Type::of::<T>(),
            fields,
            field_names,
        }
    }

    /// Returns the [`NamedField`] for the given `name`, if present.
    pub fn field(&self, name: &str) -> Option<&NamedField> {
        self.fields.get(name)
    }

    /// Returns the [`NamedField`] at the given index, if present.
    pub fn field_at(&self, index: usize) -> Option<&NamedField> {
        self.fields.get(self.field_names.get(index)?)
    }

    /// Returns an iterator over the fields in **declaration order**.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &NamedField> {
        self.field_names
            .iter()
            .map(|name| self.fields.get(name).unwrap()) // field names should be valid
    }

    /// Returns the field names in declaration order.
    #[inline]
    pub fn field_names(&self) -> &[&'static str] {
        &self.field_names
    }

    /// Returns the index for the given field `name`.
    ///
    /// `None` is the not-found sentinel; absent names are not an error, which
    /// is what lets partial struct-to-struct copy skip unmatched fields.
    ///
    /// This is O(N) complexity.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.field_names.iter().position(|s| *s == name)
    }

    /// Returns the number of fields.
    #[inline]
    pub fn field_len(&self) -> usize {
        self.field_names.len()
    }
}
