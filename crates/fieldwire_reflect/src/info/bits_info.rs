use crate::info::{NamedField, StructInfo, Type, TypePath};
use crate::ops::BitFields;

// -----------------------------------------------------------------------------
// BitFieldInfo

/// A container for compile-time info of a single fixed-bit-width value,
/// such as [`U3`](crate::bits::U3) or [`I7`](crate::bits::I7).
///
/// # Examples
///
/// ```
/// use fieldwire_reflect::{bits::U3, info::Typed};
///
/// let info = <U3 as Typed>::type_info().as_bit_field().unwrap();
/// assert_eq!(info.bit_len(), 3);
/// assert!(!info.is_signed());
/// ```
#[derive(Clone, Debug)]
pub struct BitFieldInfo {
    ty: Type,
    bit_len: u32,
    signed: bool,
}

impl BitFieldInfo {
    crate::info::impl_type_fn!(ty);

    /// Creates a new [`BitFieldInfo`].
    #[inline]
    pub const fn new<T: TypePath>(bit_len: u32, signed: bool) -> Self {
        Self {
            ty: Type::of::<T>(),
            bit_len,
            signed,
        }
    }

    /// Returns the declared bit width.
    #[inline]
    pub const fn bit_len(&self) -> u32 {
        self.bit_len
    }

    /// Returns `true` if the value sign-extends on read.
    #[inline]
    pub const fn is_signed(&self) -> bool {
        self.signed
    }
}

// -----------------------------------------------------------------------------
// BitFieldsInfo

/// A container for compile-time bit-fields container info.
///
/// A bit-fields container is a named struct whose every field is a bit-field
/// value; its field metadata is an ordinary [`StructInfo`], plus the packed
/// total width. The width is checked at declaration by the derive: it must be
/// exactly 8, 16 or 32 bits.
///
/// # Examples
///
/// ```
/// use fieldwire_reflect::{bits::{U3, U5}, derive::Reflect, info::Typed};
///
/// #[derive(Reflect)]
/// #[reflect(bits)]
/// struct Flags {
///     kind: U3,
///     index: U5,
/// }
///
/// let info = <Flags as Typed>::type_info().as_bit_fields().unwrap();
/// assert_eq!(info.total_bits(), 8);
/// assert_eq!(info.field_len(), 2);
/// ```
#[derive(Clone, Debug)]
pub struct BitFieldsInfo {
    strukt: StructInfo,
    total_bits: u32,
}

impl BitFieldsInfo {
    /// Creates a new [`BitFieldsInfo`].
    ///
    /// The order of internal fields is fixed, depends on the input order.
    pub fn new<T: BitFields + TypePath>(total_bits: u32, fields: &[NamedField]) -> Self {
        Self {
            strukt: StructInfo::new::<T>(fields),
            total_bits,
        }
    }

    /// Returns the packed width of the container in bits (8, 16 or 32).
    #[inline]
    pub const fn total_bits(&self) -> u32 {
        self.total_bits
    }

    /// Returns the field metadata of the container.
    #[inline]
    pub const fn as_struct(&self) -> &StructInfo {
        &self.strukt
    }

    /// Returns the underlying [`Type`].
    #[inline]
    pub const fn ty(&self) -> &Type {
        self.strukt.ty()
    }

    /// Returns the type path.
    #[inline]
    pub fn type_path(&self) -> &'static str {
        self.strukt.type_path()
    }

    /// Returns the number of fields.
    #[inline]
    pub fn field_len(&self) -> usize {
        self.strukt.field_len()
    }

    /// Returns the [`NamedField`] at the given index, if present.
    pub fn field_at(&self, index: usize) -> Option<&NamedField> {
        self.strukt.field_at(index)
    }

    /// Returns an iterator over the fields in **declaration order**.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &NamedField> {
        self.strukt.iter()
    }
}
