use crate::Reflect;

/// A trait for type-erased fieldless enum operations via reflection.
///
/// When using [`#[derive(Reflect)]`](crate::derive::Reflect) on an enum whose
/// variants carry no data, this trait will be automatically implemented. The
/// discriminant is widened to `i64` so a single signature covers every
/// `#[repr(..)]`; the true width lives in
/// [`EnumInfo::repr`](crate::info::EnumInfo::repr).
///
/// # Examples
///
/// ```
/// use fieldwire_reflect::{derive::Reflect, ops::Enum};
///
/// #[derive(Reflect)]
/// #[repr(u8)]
/// enum Opcode {
///     Ping = 1,
///     Data = 2,
/// }
///
/// let mut op = Opcode::Ping;
/// assert_eq!(op.variant_name(), "Ping");
/// assert_eq!(op.discriminant(), 1);
///
/// assert!(op.set_by_discriminant(2));
/// assert_eq!(op.variant_name(), "Data");
///
/// assert!(!op.set_by_discriminant(9));
/// assert_eq!(op.variant_name(), "Data"); // unchanged
/// ```
pub trait Enum: Reflect {
    /// Returns the name of the current variant.
    fn variant_name(&self) -> &'static str;

    /// Returns the declaration-order index of the current variant.
    fn variant_index(&self) -> usize;

    /// Returns the discriminant of the current variant, widened to `i64`.
    fn discriminant(&self) -> i64;

    /// Replaces the value with the variant matching `discriminant`.
    ///
    /// Returns `false` and leaves the value untouched when no variant has
    /// that discriminant.
    fn set_by_discriminant(&mut self, discriminant: i64) -> bool;

    /// Replaces the value with the variant named `name`.
    ///
    /// Returns `false` and leaves the value untouched when no variant has
    /// that name.
    fn set_by_name(&mut self, name: &str) -> bool;
}
