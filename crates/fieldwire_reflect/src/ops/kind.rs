use crate::Reflect;
use crate::info::{ReflectKind, ReflectKindError};
use crate::ops::{Array, BitField, BitFields, Enum, Struct};

// Helper macro that implements type-safe accessor methods like `as_struct`.
macro_rules! impl_cast_method {
    ($name:ident : $kind:ident => $ty:ty) => {
        /// Convert this reference into a kind-specific one.
        pub fn $name(self) -> Result<$ty, ReflectKindError> {
            match self {
                Self::$kind(value) => Ok(value),
                _ => Err(ReflectKindError {
                    expected: ReflectKind::$kind,
                    received: self.kind(),
                }),
            }
        }
    };
}

// -----------------------------------------------------------------------------
// ReflectRef

/// An immutable enumeration of the reflection subtraits.
///
/// Obtained via [`Reflect::reflect_ref`], this is the dispatch point for code
/// that walks arbitrary reflected values: match on the kind once, then use the
/// kind-specific trait object.
///
/// # Examples
///
/// ```
/// use fieldwire_reflect::{derive::Reflect, ops::ReflectRef, Reflect as _};
///
/// #[derive(Reflect)]
/// struct Foo { a: u8 }
///
/// let foo = Foo { a: 7 };
/// let ReflectRef::Struct(s) = foo.reflect_ref() else {
///     unreachable!();
/// };
/// assert_eq!(s.field_len(), 1);
/// ```
///
/// [`Reflect::reflect_ref`]: crate::Reflect::reflect_ref
pub enum ReflectRef<'a> {
    Struct(&'a dyn Struct),
    Enum(&'a dyn Enum),
    Array(&'a dyn Array),
    BitFields(&'a dyn BitFields),
    BitField(&'a dyn BitField),
    Opaque(&'a dyn Reflect),
}

impl<'a> ReflectRef<'a> {
    impl_cast_method!(as_struct: Struct => &'a dyn Struct);
    impl_cast_method!(as_enum: Enum => &'a dyn Enum);
    impl_cast_method!(as_array: Array => &'a dyn Array);
    impl_cast_method!(as_bit_fields: BitFields => &'a dyn BitFields);
    impl_cast_method!(as_bit_field: BitField => &'a dyn BitField);
    impl_cast_method!(as_opaque: Opaque => &'a dyn Reflect);

    /// Returns the [`ReflectKind`] of this reference.
    pub const fn kind(&self) -> ReflectKind {
        match self {
            Self::Struct(_) => ReflectKind::Struct,
            Self::Enum(_) => ReflectKind::Enum,
            Self::Array(_) => ReflectKind::Array,
            Self::BitFields(_) => ReflectKind::BitFields,
            Self::BitField(_) => ReflectKind::BitField,
            Self::Opaque(_) => ReflectKind::Opaque,
        }
    }
}

// -----------------------------------------------------------------------------
// ReflectMut

/// A mutable enumeration of the reflection subtraits.
///
/// Obtained via [`Reflect::reflect_mut`]; the mutable counterpart of
/// [`ReflectRef`].
///
/// [`Reflect::reflect_mut`]: crate::Reflect::reflect_mut
pub enum ReflectMut<'a> {
    Struct(&'a mut dyn Struct),
    Enum(&'a mut dyn Enum),
    Array(&'a mut dyn Array),
    BitFields(&'a mut dyn BitFields),
    BitField(&'a mut dyn BitField),
    Opaque(&'a mut dyn Reflect),
}

impl<'a> ReflectMut<'a> {
    impl_cast_method!(as_struct: Struct => &'a mut dyn Struct);
    impl_cast_method!(as_enum: Enum => &'a mut dyn Enum);
    impl_cast_method!(as_array: Array => &'a mut dyn Array);
    impl_cast_method!(as_bit_fields: BitFields => &'a mut dyn BitFields);
    impl_cast_method!(as_bit_field: BitField => &'a mut dyn BitField);
    impl_cast_method!(as_opaque: Opaque => &'a mut dyn Reflect);

    /// Returns the [`ReflectKind`] of this reference.
    pub const fn kind(&self) -> ReflectKind {
        match self {
            Self::Struct(_) => ReflectKind::Struct,
            Self::Enum(_) => ReflectKind::Enum,
            Self::Array(_) => ReflectKind::Array,
            Self::BitFields(_) => ReflectKind::BitFields,
            Self::BitField(_) => ReflectKind::BitField,
            Self::Opaque(_) => ReflectKind::Opaque,
        }
    }
}
