use core::{error, fmt};

use crate::info::{ArrayInfo, BitFieldInfo, BitFieldsInfo};
use crate::info::{EnumInfo, OpaqueInfo, StructInfo, Type};

// -----------------------------------------------------------------------------
// ReflectKind

/// An enumeration of the "kinds" of a reflected type.
///
/// Each kind corresponds to a data-operation trait, such as
/// [`Struct`](crate::ops::Struct) or [`Enum`](crate::ops::Enum), which itself
/// corresponds to the shape of the type.
///
/// A [`ReflectKind`] is obtained via [`Reflect::reflect_kind`], or via
/// [`ReflectRef::kind`] and [`ReflectMut::kind`].
///
/// [`Reflect::reflect_kind`]: crate::Reflect::reflect_kind
/// [`ReflectRef::kind`]: crate::ops::ReflectRef::kind
/// [`ReflectMut::kind`]: crate::ops::ReflectMut::kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReflectKind {
    Struct,
    Enum,
    Array,
    /// A bit-fields container, packing to exactly 8, 16 or 32 bits.
    BitFields,
    /// A single fixed-bit-width value, such as [`U3`](crate::bits::U3).
    BitField,
    Opaque,
}

impl fmt::Display for ReflectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Struct => f.pad("Struct"),
            Self::Enum => f.pad("Enum"),
            Self::Array => f.pad("Array"),
            Self::BitFields => f.pad("BitFields"),
            Self::BitField => f.pad("BitField"),
            Self::Opaque => f.pad("Opaque"),
        }
    }
}

/// Error returned when a value is not the expected [`ReflectKind`].
#[derive(Debug)]
pub struct ReflectKindError {
    pub expected: ReflectKind,
    pub received: ReflectKind,
}

impl fmt::Display for ReflectKindError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "reflect kind mismatch: expected {}, received {}",
            self.expected, self.received
        )
    }
}

impl error::Error for ReflectKindError {}

// -----------------------------------------------------------------------------
// TypeInfo

/// Compile-time type information for reflected types.
///
/// # Content
///
/// A `TypeInfo` contains the type's kind, its [`Type`] (identity + paths) and
/// the kind-specific metadata: field descriptors for structs and bit-fields
/// containers, variant descriptors for enums, the item type and capacity for
/// arrays, and width/signedness for single bit-fields.
///
/// # Obtain
///
/// - [`Typed::type_info`] when the type is known at compile time.
/// - [`DynamicTyped::reflect_type_info`] through a `dyn Reflect`.
///
/// Both return a `&'static TypeInfo`, created once and cached.
///
/// # Examples
///
/// ```
/// use fieldwire_reflect::{derive::Reflect, info::{Typed, ReflectKind}};
///
/// #[derive(Reflect)]
/// struct Frame { kind: u8, length: u16 }
///
/// let info = Frame::type_info();
/// assert_eq!(info.kind(), ReflectKind::Struct);
/// assert_eq!(info.as_struct().unwrap().index_of("length"), Some(1));
/// ```
///
/// [`Typed::type_info`]: crate::info::Typed::type_info
/// [`DynamicTyped::reflect_type_info`]: crate::info::DynamicTyped::reflect_type_info
#[derive(Debug, Clone)]
pub enum TypeInfo {
    Struct(StructInfo),
    Enum(EnumInfo),
    Array(ArrayInfo),
    BitFields(BitFieldsInfo),
    BitField(BitFieldInfo),
    Opaque(OpaqueInfo),
}

// Helper macro that implements type-safe accessor methods like `as_struct`.
macro_rules! impl_cast_method {
    ($name:ident : $kind:ident => $info:ident) => {
        /// Convert [`TypeInfo`] to kind-specific type information.
        pub const fn $name(&self) -> Result<&$info, ReflectKindError> {
            match self {
                Self::$kind(info) => Ok(info),
                _ => Err(ReflectKindError {
                    expected: ReflectKind::$kind,
                    received: self.kind(),
                }),
            }
        }
    };
}

impl TypeInfo {
    impl_cast_method!(as_struct: Struct => StructInfo);
    impl_cast_method!(as_enum: Enum => EnumInfo);
    impl_cast_method!(as_array: Array => ArrayInfo);
    impl_cast_method!(as_bit_fields: BitFields => BitFieldsInfo);
    impl_cast_method!(as_bit_field: BitField => BitFieldInfo);
    impl_cast_method!(as_opaque: Opaque => OpaqueInfo);

    /// Returns the underlying [`Type`] metadata for this `TypeInfo`.
    pub const fn ty(&self) -> &Type {
        match self {
            Self::Struct(info) => info.ty(),
            Self::Enum(info) => info.ty(),
            Self::Array(info) => info.ty(),
            Self::BitFields(info) => info.ty(),
            Self::BitField(info) => info.ty(),
            Self::Opaque(info) => info.ty(),
        }
    }

    crate::info::impl_type_fn!();

    /// Returns the [`ReflectKind`] for this `TypeInfo` (a fast discriminator).
    ///
    /// # Examples
    ///
    /// ```
    /// use fieldwire_reflect::info::{Typed, ReflectKind};
    ///
    /// let info = i32::type_info();
    /// assert_eq!(info.kind(), ReflectKind::Opaque);
    /// ```
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
