//! Reflection impls for fixed-size arrays.

use alloc::string::ToString;

use crate::Reflect;
use crate::impls::{GenericTypeInfoCell, GenericTypePathCell};
use crate::info::{ArrayInfo, TypeInfo, TypePath, Typed};
use crate::ops::{Array, ArrayItemIter};

impl<T: TypePath, const N: usize> TypePath for [T; N] {
    fn type_path() -> &'static str {
        static CELL: GenericTypePathCell = GenericTypePathCell::new();
        CELL.get_or_insert::<Self>(|| {
            crate::impls::concat(&["[", T::type_path(), "; ", &N.to_string(), "]"])
        })
    }

    fn type_name() -> &'static str {
        static CELL: GenericTypePathCell = GenericTypePathCell::new();
        CELL.get_or_insert::<Self>(|| {
            crate::impls::concat(&["[", T::type_name(), "; ", &N.to_string(), "]"])
        })
    }

    fn type_ident() -> &'static str {
        static CELL: GenericTypePathCell = GenericTypePathCell::new();
        CELL.get_or_insert::<Self>(|| {
            crate::impls::concat(&["[", T::type_ident(), "; ", &N.to_string(), "]"])
        })
    }
}

impl<T: Reflect + Typed, const N: usize> Typed for [T; N] {
    fn type_info() -> &'static TypeInfo {
        static CELL: GenericTypeInfoCell = GenericTypeInfoCell::new();
        CELL.get_or_insert::<Self>(|| TypeInfo::Array(ArrayInfo::new::<Self, T>(N)))
    }
}

impl<T: Reflect + Typed, const N: usize> Reflect for [T; N] {
    crate::reflection::impl_reflect_cast_fn!(Array);

    #[inline]
    fn try_apply(&mut self, value: &dyn Reflect) -> Result<(), crate::ops::ApplyError> {
        crate::impls::array_try_apply(self, value)
    }

    #[inline]
    fn reflect_partial_eq(&self, value: &dyn Reflect) -> Option<bool> {
        crate::impls::array_partial_eq(self, value)
    }

    #[inline]
    fn reflect_debug(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        crate::impls::array_debug(self, f)
    }
}

impl<T: Reflect + Typed, const N: usize> Array for [T; N] {
    #[inline]
    fn item(&self, index: usize) -> Option<&dyn Reflect> {
        <[T]>::get(self, index).map(Reflect::as_reflect)
    }

    #[inline]
    fn item_mut(&mut self, index: usize) -> Option<&mut dyn Reflect> {
        <[T]>::get_mut(self, index).map(Reflect::as_reflect_mut)
    }

    #[inline]
    fn len(&self) -> usize {
        N
    }

    #[inline]
    fn iter_items(&self) -> ArrayItemIter<'_> {
        ArrayItemIter::new(self)
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use crate::Reflect;
    use crate::info::Typed;
    use crate::ops::Array;

    #[test]
    fn array_type_info() {
        let info = <[u16; 3]>::type_info().as_array().unwrap();
        assert_eq!(info.capacity(), 3);
        assert!(info.item_ty().is::<u16>());
        assert_eq!(info.type_path(), "[u16; 3]");
    }

    #[test]
    fn array_item_access() {
        let mut values = [1_u8, 2, 3];

        let array: &dyn Array = &values;
        assert_eq!(array.item_as::<u8>(2), Some(&3));
        assert!(array.item(3).is_none());

        let array: &mut dyn Array = &mut values;
        *array.item_mut_as::<u8>(0).unwrap() = 9;
        assert_eq!(values, [9, 2, 3]);
    }

    #[test]
    fn array_try_apply() {
        let mut dst = [0_u32; 2];
        dst.try_apply(&[5_u32, 6]).unwrap();
        assert_eq!(dst, [5, 6]);

        // different length never applies
        assert!(dst.as_reflect_mut().try_apply(&[1_u32, 2, 3]).is_err());
    }
}
