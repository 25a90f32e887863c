//! Reflection impls for the primitive leaf types.

use crate::Reflect;
use crate::impls::NonGenericTypeInfoCell;
use crate::info::{OpaqueInfo, TypeInfo, TypePath, Typed};

macro_rules! impl_reflect_opaque {
    ($($ty:ty),* $(,)?) => {$(
        impl TypePath for $ty {
            #[inline]
            fn type_path() -> &'static str {
                stringify!($ty)
            }
            #[inline]
            fn type_name() -> &'static str {
                stringify!($ty)
            }
            #[inline]
            fn type_ident() -> &'static str {
                stringify!($ty)
            }
        }

        impl Typed for $ty {
            fn type_info() -> &'static TypeInfo {
                static CELL: NonGenericTypeInfoCell = NonGenericTypeInfoCell::new();
                CELL.get_or_init(|| TypeInfo::Opaque(OpaqueInfo::new::<Self>()))
            }
        }

        impl Reflect for $ty {
            crate::reflection::impl_reflect_cast_fn!(Opaque);

            fn try_apply(
                &mut self,
                value: &dyn Reflect,
            ) -> Result<(), $crate::ops::ApplyError> {
                if let Some(value) = <dyn Reflect>::downcast_ref::<Self>(value) {
                    *self = *value;
                    Ok(())
                } else {
                    Err($crate::ops::ApplyError::MismatchedTypes {
                        from_type: ::alloc::borrow::Cow::Borrowed(
                            $crate::info::DynamicTypePath::reflect_type_path(value),
                        ),
                        to_type: ::alloc::borrow::Cow::Borrowed(
                            <Self as TypePath>::type_path(),
                        ),
                    })
                }
            }

            fn reflect_partial_eq(&self, value: &dyn Reflect) -> Option<bool> {
                if let Some(value) = <dyn Reflect>::downcast_ref::<Self>(value) {
                    Some(PartialEq::eq(self, value))
                } else {
                    Some(false)
                }
            }

            fn reflect_debug(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                ::core::fmt::Debug::fmt(self, f)
            }
        }
    )*};
}

impl_reflect_opaque!(bool, u8, u16, u32, u64, i8, i16, i32, i64, f32, f64);

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use crate::Reflect;
    use crate::info::{ReflectKind, Typed};

    #[test]
    fn opaque_type_info() {
        let info = u32::type_info();
        assert_eq!(info.kind(), ReflectKind::Opaque);
        assert_eq!(info.type_path(), "u32");
        assert!(info.type_is::<u32>());
    }

    #[test]
    fn opaque_try_apply() {
        let mut x = 0_u16;
        x.try_apply(&7_u16).unwrap();
        assert_eq!(x, 7);

        assert!(x.try_apply(&7_u32).is_err());
        assert_eq!(x, 7);
    }

    #[test]
    fn opaque_partial_eq() {
        assert_eq!(1_i8.reflect_partial_eq(&1_i8), Some(true));
        assert_eq!(1_i8.reflect_partial_eq(&2_i8), Some(false));
        // different type is never equal
        assert_eq!(1_i8.reflect_partial_eq(&1_u8), Some(false));
    }
}
