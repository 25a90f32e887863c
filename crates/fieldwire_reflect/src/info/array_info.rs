use crate::Reflect;
use crate::info::{Type, TypeInfo, TypePath, Typed};

/// A container for compile-time fixed-size array info (e.g. `[u8; 4]`).
///
/// # Examples
///
/// ```
/// use fieldwire_reflect::info::Typed;
///
/// let info = <[u16; 3] as Typed>::type_info().as_array().unwrap();
///
/// assert_eq!(info.capacity(), 3);
/// assert!(info.item_ty().is::<u16>());
/// ```
#[derive(Clone, Debug)]
pub struct ArrayInfo {
    ty: Type,
    item_ty: Type,
    // `TypeInfo` is created on first access; using a function pointer delays it.
    item_info: fn() -> &'static TypeInfo,
    capacity: usize,
}

impl ArrayInfo {
    crate::info::impl_type_fn!(ty);

    /// Creates a new [`ArrayInfo`] for array type `A` with items of type `T`.
    #[inline]
    pub const fn new<A: Reflect + TypePath, T: Typed>(capacity: usize) -> Self {
        Self {
            ty: Type::of::<A>(),
            item_ty: Type::of::<T>(),
            item_info: T::type_info,
            capacity,
        }
    }

    /// Returns the [`Type`] of the array items.
    #[inline]
    pub const fn item_ty(&self) -> &Type {
        &self.item_ty
    }

    /// Returns the [`TypeInfo`] of the array items.
    #[inline]
    pub fn item_info(&self) -> &'static TypeInfo {
        (self.item_info)()
    }

    /// Returns the fixed number of items.
    #[inline]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }
}
