//! Fixed-bit-width integer values.
//!
//! # Menu
//!
//! - [`UBits<S, N>`] / [`IBits<S, N>`]: an unsigned / signed value occupying
//!   the `N` low bits of storage `S` (`u8`, `u16` or `u32`).
//! - [`U1`]..[`U32`], [`I2`]..[`I32`]: aliases picking the smallest storage.
//! - [`FixedBits`]: compile-time width marker, used by
//!   [`#[derive(Reflect)]`](crate::derive::Reflect) to check container totals.
//!
//! # Semantics
//!
//! Assignment truncates: writing a value keeps only the `N` low bits of its
//! two's-complement pattern. Reads of an unsigned field return the raw
//! pattern; reads of a signed field sign-extend from bit `N - 1`. A 1-bit
//! signed field is rejected at compile time (its only values would be 0 and
//! -1).
//!
//! ```
//! use fieldwire_reflect::bits::{I3, U3};
//!
//! assert_eq!(U3::new(11).get(), 3);   // 0b1011 truncates to 0b011
//! assert_eq!(I3::new(-4).get(), -4);  // 0b100 stays -4
//! assert_eq!(I3::new(-5).get(), 3);   // 0b1011 truncates to 0b011 = +3
//! ```

use core::cmp::Ordering;
use core::fmt;

use crate::Reflect;
use crate::impls::{GenericTypeInfoCell, GenericTypePathCell};
use crate::info::{BitFieldInfo, TypeInfo, TypePath, Typed};
use crate::ops::BitField;

// -----------------------------------------------------------------------------
// Storage

mod sealed {
    pub trait Sealed {}
    impl Sealed for u8 {}
    impl Sealed for u16 {}
    impl Sealed for u32 {}
}

/// Backing storage for a bit-field value: `u8`, `u16` or `u32`.
pub trait BitStorage:
    sealed::Sealed
    + Copy
    + Default
    + Eq
    + Ord
    + core::hash::Hash
    + Send
    + Sync
    + TypePath
    + 'static
{
    /// Width of the storage in bits.
    const BITS: u32;

    fn from_u32(value: u32) -> Self;
    fn to_u32(self) -> u32;
}

macro_rules! impl_bit_storage {
    ($($ty:ty),*) => {$(
        impl BitStorage for $ty {
            const BITS: u32 = <$ty>::BITS;

            #[inline(always)]
            fn from_u32(value: u32) -> Self {
                value as $ty
            }

            #[inline(always)]
            fn to_u32(self) -> u32 {
                self as u32
            }
        }
    )*};
}

impl_bit_storage!(u8, u16, u32);

/// All-ones pattern in the `n` low bits.
#[inline(always)]
pub(crate) const fn bit_mask(n: u32) -> u32 {
    if n >= 32 { u32::MAX } else { (1 << n) - 1 }
}

// -----------------------------------------------------------------------------
// UBits

/// An unsigned integer occupying the `N` low bits of storage `S`.
///
/// Prefer the [`U1`]..[`U32`] aliases, which pick the smallest storage.
///
/// # Examples
///
/// ```
/// use fieldwire_reflect::bits::U3;
///
/// let mut x = U3::new(5);
/// assert_eq!(x.get(), 5);
///
/// x.set(11); // 0b1011, one bit too wide
/// assert_eq!(x.get(), 3);
/// ```
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct UBits<S: BitStorage, const N: u32> {
    raw: S,
}

impl<S: BitStorage, const N: u32> UBits<S, N> {
    // Checked on first use of `new` or `set` for each instantiation.
    const VALID: () = assert!(N >= 1 && N <= S::BITS, "bit width out of range");

    /// Creates a value, keeping only the `N` low bits.
    #[inline]
    pub fn new(value: u32) -> Self {
        let () = Self::VALID;
        Self {
            raw: S::from_u32(value & bit_mask(N)),
        }
    }

    /// Returns the value.
    #[inline]
    pub fn get(self) -> u32 {
        self.raw.to_u32()
    }

    /// Replaces the value, keeping only the `N` low bits.
    #[inline]
    pub fn set(&mut self, value: u32) {
        let () = Self::VALID;
        self.raw = S::from_u32(value & bit_mask(N));
    }
}

impl<S: BitStorage, const N: u32> fmt::Debug for UBits<S, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.get(), f)
    }
}

impl<S: BitStorage, const N: u32> From<u32> for UBits<S, N> {
    #[inline]
    fn from(value: u32) -> Self {
        Self::new(value)
    }
}

// -----------------------------------------------------------------------------
// IBits

/// A signed two's-complement integer occupying the `N` low bits of storage `S`.
///
/// Prefer the [`I2`]..[`I32`] aliases, which pick the smallest storage.
/// `N` must be at least 2; a 1-bit signed value is rejected at compile time.
///
/// # Examples
///
/// ```
/// use fieldwire_reflect::bits::I3;
///
/// let mut x = I3::new(-4);
/// assert_eq!(x.get(), -4);
///
/// x.set(-5); // 0b...1011, one bit too wide; the kept 0b011 is +3
/// assert_eq!(x.get(), 3);
/// ```
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct IBits<S: BitStorage, const N: u32> {
    raw: S,
}

impl<S: BitStorage, const N: u32> IBits<S, N> {
    // A 1-bit signed field could only hold 0 and -1, reject it outright.
    const VALID: () = assert!(N >= 2 && N <= S::BITS, "bit width out of range");

    /// Creates a value, keeping only the `N` low bits of the two's-complement
    /// pattern.
    #[inline]
    pub fn new(value: i32) -> Self {
        let () = Self::VALID;
        Self {
            raw: S::from_u32((value as u32) & bit_mask(N)),
        }
    }

    /// Returns the value, sign-extended from bit `N - 1`.
    #[inline]
    pub fn get(self) -> i32 {
        let raw = self.raw.to_u32();
        if raw >> (N - 1) & 1 == 1 {
            (raw | !bit_mask(N)) as i32
        } else {
            raw as i32
        }
    }

    /// Replaces the value, keeping only the `N` low bits of the
    /// two's-complement pattern.
    #[inline]
    pub fn set(&mut self, value: i32) {
        let () = Self::VALID;
        self.raw = S::from_u32((value as u32) & bit_mask(N));
    }
}

impl<S: BitStorage, const N: u32> fmt::Debug for IBits<S, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.get(), f)
    }
}

impl<S: BitStorage, const N: u32> From<i32> for IBits<S, N> {
    #[inline]
    fn from(value: i32) -> Self {
        Self::new(value)
    }
}

/// Ordered by the sign-extended value, not the raw pattern.
impl<S: BitStorage, const N: u32> PartialOrd for IBits<S, N> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<S: BitStorage, const N: u32> Ord for IBits<S, N> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.get().cmp(&other.get())
    }
}

// -----------------------------------------------------------------------------
// FixedBits

/// Compile-time width marker for bit-field values.
///
/// [`#[derive(Reflect)]`](crate::derive::Reflect) sums `BITS` across a
/// `#[reflect(bits)]` container's fields and rejects totals other than 8, 16
/// or 32 at compile time.
pub trait FixedBits: BitField {
    /// The declared bit width.
    const BITS: u32;
    /// Whether reads sign-extend.
    const SIGNED: bool;
}

impl<S: BitStorage, const N: u32> FixedBits for UBits<S, N> {
    const BITS: u32 = N;
    const SIGNED: bool = false;
}

impl<S: BitStorage, const N: u32> FixedBits for IBits<S, N> {
    const BITS: u32 = N;
    const SIGNED: bool = true;
}

// -----------------------------------------------------------------------------
// Reflection impls

macro_rules! impl_bits_reflect {
    ($ty:ident, $path:literal, $name:literal, $signed:literal) => {
        impl<S: BitStorage, const N: u32> TypePath for $ty<S, N> {
            fn type_path() -> &'static str {
                static CELL: GenericTypePathCell = GenericTypePathCell::new();
                CELL.get_or_insert::<Self>(|| {
                    crate::impls::concat(&[
                        $path,
                        "<",
                        S::type_path(),
                        ", ",
                        &::alloc::string::ToString::to_string(&N),
                        ">",
                    ])
                })
            }

            fn type_name() -> &'static str {
                static CELL: GenericTypePathCell = GenericTypePathCell::new();
                CELL.get_or_insert::<Self>(|| {
                    crate::impls::concat(&[
                        $name,
                        "<",
                        S::type_name(),
                        ", ",
                        &::alloc::string::ToString::to_string(&N),
                        ">",
                    ])
                })
            }

            fn type_ident() -> &'static str {
                $name
            }

            fn module_path() -> Option<&'static str> {
                Some("fieldwire_reflect::bits")
            }
        }

        impl<S: BitStorage, const N: u32> Typed for $ty<S, N> {
            fn type_info() -> &'static TypeInfo {
                static CELL: GenericTypeInfoCell = GenericTypeInfoCell::new();
                CELL.get_or_insert::<Self>(|| {
                    TypeInfo::BitField(BitFieldInfo::new::<Self>(N, $signed))
                })
            }
        }

        impl<S: BitStorage, const N: u32> Reflect for $ty<S, N> {
            crate::reflection::impl_reflect_cast_fn!(BitField);

            #[inline]
            fn try_apply(&mut self, value: &dyn Reflect) -> Result<(), crate::ops::ApplyError> {
                crate::impls::bit_field_try_apply(self, value)
            }

            #[inline]
            fn reflect_partial_eq(&self, value: &dyn Reflect) -> Option<bool> {
                crate::impls::bit_field_partial_eq(self, value)
            }

            #[inline]
            fn reflect_debug(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                fmt::Debug::fmt(self, f)
            }
        }

        impl<S: BitStorage, const N: u32> BitField for $ty<S, N> {
            #[inline]
            fn bit_len(&self) -> u32 {
                N
            }

            #[inline]
            fn is_signed(&self) -> bool {
                $signed
            }

            #[inline]
            fn raw_bits(&self) -> u32 {
                self.raw.to_u32()
            }

            #[inline]
            fn set_raw_bits(&mut self, raw: u32) {
                self.raw = S::from_u32(raw & bit_mask(N));
            }

            #[inline]
            fn signed_value(&self) -> i64 {
                let raw = self.raw.to_u32();
                if $signed && raw >> (N - 1) & 1 == 1 {
                    ((raw | !bit_mask(N)) as i32) as i64
                } else {
                    raw as i64
                }
            }
        }
    };
}

impl_bits_reflect!(UBits, "fieldwire_reflect::bits::UBits", "UBits", false);
impl_bits_reflect!(IBits, "fieldwire_reflect::bits::IBits", "IBits", true);

// -----------------------------------------------------------------------------
// Aliases

macro_rules! bits_alias {
    ($($alias:ident = $ty:ident<$storage:ty, $n:literal>;)*) => {$(
        #[doc = concat!("A ", $n, "-bit value in the smallest storage that fits.")]
        pub type $alias = $ty<$storage, $n>;
    )*};
}

bits_alias! {
    U1 = UBits<u8, 1>;
    U2 = UBits<u8, 2>;
    U3 = UBits<u8, 3>;
    U4 = UBits<u8, 4>;
    U5 = UBits<u8, 5>;
    U6 = UBits<u8, 6>;
    U7 = UBits<u8, 7>;
    U8 = UBits<u8, 8>;
    U9 = UBits<u16, 9>;
    U10 = UBits<u16, 10>;
    U11 = UBits<u16, 11>;
    U12 = UBits<u16, 12>;
    U13 = UBits<u16, 13>;
    U14 = UBits<u16, 14>;
    U15 = UBits<u16, 15>;
    U16 = UBits<u16, 16>;
    U17 = UBits<u32, 17>;
    U18 = UBits<u32, 18>;
    U19 = UBits<u32, 19>;
    U20 = UBits<u32, 20>;
    U21 = UBits<u32, 21>;
    U22 = UBits<u32, 22>;
    U23 = UBits<u32, 23>;
    U24 = UBits<u32, 24>;
    U25 = UBits<u32, 25>;
    U26 = UBits<u32, 26>;
    U27 = UBits<u32, 27>;
    U28 = UBits<u32, 28>;
    U29 = UBits<u32, 29>;
    U30 = UBits<u32, 30>;
    U31 = UBits<u32, 31>;
    U32 = UBits<u32, 32>;
}

bits_alias! {
    I2 = IBits<u8, 2>;
    I3 = IBits<u8, 3>;
    I4 = IBits<u8, 4>;
    I5 = IBits<u8, 5>;
    I6 = IBits<u8, 6>;
    I7 = IBits<u8, 7>;
    I8 = IBits<u8, 8>;
    I9 = IBits<u16, 9>;
    I10 = IBits<u16, 10>;
    I11 = IBits<u16, 11>;
    I12 = IBits<u16, 12>;
    I13 = IBits<u16, 13>;
    I14 = IBits<u16, 14>;
    I15 = IBits<u16, 15>;
    I16 = IBits<u16, 16>;
    I17 = IBits<u32, 17>;
    I18 = IBits<u32, 18>;
    I19 = IBits<u32, 19>;
    I20 = IBits<u32, 20>;
    I21 = IBits<u32, 21>;
    I22 = IBits<u32, 22>;
    I23 = IBits<u32, 23>;
    I24 = IBits<u32, 24>;
    I25 = IBits<u32, 25>;
    I26 = IBits<u32, 26>;
    I27 = IBits<u32, 27>;
    I28 = IBits<u32, 28>;
    I29 = IBits<u32, 29>;
    I30 = IBits<u32, 30>;
    I31 = IBits<u32, 31>;
    I32 = IBits<u32, 32>;
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unsigned_truncates_on_write() {
        let mut x = U3::new(0);
        x.set(11); // 0b1011
        assert_eq!(x.get(), 3);
        assert_eq!(x.raw_bits(), 0b011);
    }

    #[test]
    fn unsigned_full_width() {
        let x = U32::new(u32::MAX);
        assert_eq!(x.get(), u32::MAX);
        assert_eq!(x.bit_len(), 32);
    }

    #[test]
    fn signed_sign_extends() {
        let x = I3::new(-4); // raw 0b100, the most negative 3-bit value
        assert_eq!(x.raw_bits(), 0b100);
        assert_eq!(x.get(), -4);
        assert_eq!(x.signed_value(), -4);
    }

    #[test]
    fn signed_truncates_then_reinterprets() {
        let x = I3::new(-5); // raw ...1011 truncates to 0b011
        assert_eq!(x.raw_bits(), 0b011);
        assert_eq!(x.get(), 3);
    }

    #[test]
    fn signed_orders_by_value() {
        // raw order would put -1 (all ones) above 2
        assert!(I4::new(-1) < I4::new(2));
        assert!(I4::new(-8) < I4::new(-1));
    }

    #[test]
    fn reflect_round_trip() {
        let x = U12::new(0xABC);
        let r: &dyn Reflect = &x;

        let field = r.reflect_ref().as_bit_field().unwrap();
        assert_eq!(field.bit_len(), 12);
        assert_eq!(field.raw_bits(), 0xABC);
        assert!(!field.is_signed());
    }

    #[test]
    fn bit_field_type_info() {
        let info = <I17 as Typed>::type_info().as_bit_field().unwrap();
        assert_eq!(info.bit_len(), 17);
        assert!(info.is_signed());
        // U17 and I17 share the generic cell, must not collide
        let info = <U17 as Typed>::type_info().as_bit_field().unwrap();
        assert!(!info.is_signed());
    }

    #[test]
    fn try_apply_copies_raw_bits() {
        let mut dst = U5::new(0);
        dst.try_apply(&U5::new(19)).unwrap();
        assert_eq!(dst.get(), 19);

        // width mismatch is an error
        assert!(dst.as_reflect_mut().try_apply(&U6::new(19)).is_err());
    }
}
