use crate::Reflect;
use crate::ops::Struct;

// -----------------------------------------------------------------------------
// BitField trait

/// A trait for type-erased access to a single fixed-bit-width value.
///
/// Implemented by [`UBits`](crate::bits::UBits) and
/// [`IBits`](crate::bits::IBits) and their aliases. The raw bit pattern is
/// always the `bit_len()` low bits of a `u32`; signedness only affects how
/// that pattern is interpreted, never how it is stored or packed.
///
/// # Examples
///
/// ```
/// use fieldwire_reflect::{bits::I3, ops::BitField};
///
/// let v = I3::new(-4);
/// let v_ref: &dyn BitField = &v;
///
/// assert_eq!(v_ref.bit_len(), 3);
/// assert!(v_ref.is_signed());
/// assert_eq!(v_ref.raw_bits(), 0b100);
/// assert_eq!(v_ref.signed_value(), -4);
/// ```
pub trait BitField: Reflect {
    /// Returns the declared bit width (1 to 32).
    fn bit_len(&self) -> u32;

    /// Returns `true` if the value sign-extends on read.
    fn is_signed(&self) -> bool;

    /// Returns the raw bit pattern in the `bit_len()` low bits.
    ///
    /// High bits are always zero.
    fn raw_bits(&self) -> u32;

    /// Replaces the raw bit pattern.
    ///
    /// Bits above `bit_len()` are discarded.
    fn set_raw_bits(&mut self, raw: u32);

    /// Returns the logical value, widened to `i64`.
    ///
    /// Unsigned fields return the raw pattern; signed fields sign-extend
    /// from bit `bit_len() - 1`.
    fn signed_value(&self) -> i64;
}

// -----------------------------------------------------------------------------
// BitFields trait

/// A trait for type-erased access to a bit-fields container.
///
/// A container is a struct whose every field implements [`BitField`]; fields
/// pack most-significant-first into exactly 8, 16 or 32 bits. Field access
/// goes through the [`Struct`] supertrait.
///
/// # Examples
///
/// ```
/// use fieldwire_reflect::{bits::{U3, U5}, derive::Reflect, ops::{BitFields, Struct}};
///
/// #[derive(Reflect)]
/// #[reflect(bits)]
/// struct Flags {
///     kind: U3,
///     index: U5,
/// }
///
/// let flags = Flags { kind: U3::new(1), index: U5::new(9) };
/// let flags_ref: &dyn BitFields = &flags;
///
/// assert_eq!(flags_ref.total_bits(), 8);
/// assert_eq!(flags_ref.field_len(), 2);
/// ```
pub trait BitFields: Struct {
    /// Returns the packed width of the container in bits (8, 16 or 32).
    fn total_bits(&self) -> u32;
}
