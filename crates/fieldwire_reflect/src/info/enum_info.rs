use alloc::boxed::Box;

use crate::hash::HashMap;
use crate::info::{Type, TypePath};
use crate::ops::Enum;

// -----------------------------------------------------------------------------
// IntRepr

/// The underlying integer representation of a fieldless enum.
///
/// Parsed from the `#[repr(..)]` attribute by
/// [`#[derive(Reflect)]`](crate::derive::Reflect); defaults to [`I32`] when no
/// repr is given. This is the integer type an enum encodes as on the wire.
///
/// [`I32`]: IntRepr::I32
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IntRepr {
    U8,
    I8,
    U16,
    I16,
    U32,
    I32,
    U64,
    I64,
}

impl IntRepr {
    /// Returns the width of this representation in bytes.
    #[inline]
    pub const fn byte_width(self) -> usize {
        match self {
            Self::U8 | Self::I8 => 1,
            Self::U16 | Self::I16 => 2,
            Self::U32 | Self::I32 => 4,
            Self::U64 | Self::I64 => 8,
        }
    }

    /// Returns `true` for the signed representations.
    #[inline]
    pub const fn is_signed(self) -> bool {
        matches!(self, Self::I8 | Self::I16 | Self::I32 | Self::I64)
    }
}

// -----------------------------------------------------------------------------
// VariantInfo

/// Information for a single unit variant of a fieldless enum.
#[derive(Clone, Debug)]
pub struct VariantInfo {
    name: &'static str,
    discriminant: i64,
}

impl VariantInfo {
    /// Creates a new [`VariantInfo`].
    #[inline]
    pub const fn new(name: &'static str, discriminant: i64) -> Self {
        Self { name, discriminant }
    }

    /// Returns the variant name.
    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the variant discriminant, widened to `i64`.
    #[inline]
    pub const fn discriminant(&self) -> i64 {
        self.discriminant
    }
}

// -----------------------------------------------------------------------------
// EnumInfo

/// A container for compile-time fieldless enum info.
///
/// # Examples
///
/// ```
/// use fieldwire_reflect::{derive::Reflect, info::{Typed, IntRepr}};
///
/// #[derive(Reflect)]
/// #[repr(u8)]
/// enum Opcode {
///     Ping = 1,
///     Data = 2,
/// }
///
/// let info = <Opcode as Typed>::type_info().as_enum().unwrap();
/// assert_eq!(info.repr(), IntRepr::U8);
/// assert!(info.contains_variant("Ping"));
/// assert_eq!(info.variant_by_discriminant(2).unwrap().name(), "Data");
/// ```
#[derive(Clone, Debug)]
pub struct EnumInfo {
    ty: Type,
    repr: IntRepr,
    variants: HashMap<&'static str, VariantInfo>,
    variant_names: Box<[&'static str]>,
}

impl EnumInfo {
    crate::info::impl_type_fn!(ty);

    /// Creates a new [`EnumInfo`].
    ///
    /// The order of internal variants is fixed, depends on the input order.
    pub fn new<T: Enum + TypePath>(repr: IntRepr, variants: &[VariantInfo]) -> Self {
        let variant_names = variants.iter().map(VariantInfo::name).collect();
        let variants = variants.iter().map(|v| (v.name(), v.clone())).collect();

        Self {
            ty: Type::of::<T>(),
            repr,
            variants,
            variant_names,
        }
    }

    /// Returns the underlying integer representation.
    #[inline]
    pub const fn repr(&self) -> IntRepr {
        self.repr
    }

    /// Returns the [`VariantInfo`] for the given variant name, if present.
    pub fn variant(&self, name: &str) -> Option<&VariantInfo> {
        self.variants.get(name)
    }

    /// Returns the [`VariantInfo`] at the given index, if present.
    pub fn variant_at(&self, index: usize) -> Option<&VariantInfo> {
        self.variants.get(self.variant_names.get(index)?)
    }

    /// Returns the [`VariantInfo`] with the given discriminant, if present.
    ///
    /// This is O(N) complexity.
    pub fn variant_by_discriminant(&self, discriminant: i64) -> Option<&VariantInfo> {
        self.iter().find(|v| v.discriminant() == discriminant)
    }

    /// Returns an iterator over the variants in **declaration order**.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &VariantInfo> {
        self.variant_names
            .iter()
            .map(|name| self.variants.get(name).unwrap()) // variant names should be valid
    }

    /// Returns `true` if a variant with the given name exists.
    pub fn contains_variant(&self, name: &str) -> bool {
        self.variants.contains_key(name)
    }

    /// Returns the list of variant names in declaration order.
    #[inline]
    pub fn variant_names(&self) -> &[&'static str] {
        &self.variant_names
    }

    /// Returns the index for the given variant name, if present.
    ///
    /// This is O(N) complexity.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.variant_names.iter().position(|s| *s == name)
    }

    /// Returns the number of variants.
    #[inline]
    pub fn variant_len(&self) -> usize {
        self.variants.len()
    }
}
