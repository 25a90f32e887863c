use crate::info::{Type, TypePath};

/// A container for compile-time info of types with no visible structure,
/// such as the primitive leaves (`u32`, `bool`, ...).
///
/// # Examples
///
/// ```
/// use fieldwire_reflect::info::Typed;
///
/// let info = <u32 as Typed>::type_info().as_opaque().unwrap();
/// assert_eq!(info.type_path(), "u32");
/// ```
#[derive(Clone, Debug)]
pub struct OpaqueInfo {
    ty: Type,
}

impl OpaqueInfo {
    crate::info::impl_type_fn!(ty);

    /// Creates a new [`OpaqueInfo`].
    #[inline]
    pub const fn new<T: TypePath + ?Sized>() -> Self {
        Self {
            ty: Type::of::<T>(),
        }
    }
}
