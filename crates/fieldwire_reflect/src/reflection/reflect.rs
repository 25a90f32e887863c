use alloc::boxed::Box;
use core::any::{Any, TypeId};

use crate::impls::NonGenericTypeInfoCell;
use crate::info::{DynamicTypePath, DynamicTyped, TypePath, Typed};
use crate::info::{OpaqueInfo, ReflectKind, TypeInfo};
use crate::ops::{ApplyError, ReflectMut, ReflectRef};

// -----------------------------------------------------------------------------
// Reflect

/// The foundational trait for runtime reflection in [`fieldwire_reflect`].
///
/// This trait enables dynamic access and modification of data without
/// compile-time type information; the serialization layer is written entirely
/// against it.
///
/// # Recommendations
///
/// It's strongly recommended to use [the derive macro for `Reflect`] rather
/// than manually implementing this trait. The derive macro automatically
/// implements this trait along with the matching data-operation trait
/// ([`Struct`], [`Enum`] or [`BitFields`]) based on the type's shape.
///
/// # Type Identification
///
/// While `Reflect` supports [`Any`], note that [`Any::type_id`] on
/// `Box<dyn Reflect>` returns the container's type ID, not the inner value's.
/// Use [`Reflect::ty_id`] instead:
///
/// ```rust
/// # use fieldwire_reflect::Reflect;
/// # use core::any::{Any, TypeId};
/// let x: Box<dyn Reflect> = Box::new(32_i32).into_reflect();
///
/// assert!(x.type_id() != TypeId::of::<i32>());    // Container type ID
/// assert!((*x).type_id() == TypeId::of::<i32>()); // Dereferenced works
/// assert!(x.ty_id() == TypeId::of::<i32>());      // Preferred method
/// ```
///
/// # Type Casting
///
/// Use [`reflect_ref`] and [`reflect_mut`] to cast to the reflection subtraits
/// ([`Struct`], [`Enum`], etc.):
///
/// ```rust
/// # use fieldwire_reflect::{Reflect, ops::Array};
/// let values = [1, 2, 3].into_boxed_reflect();
/// let array: &dyn Array = values.reflect_ref().as_array().unwrap();
/// assert_eq!(array.len(), 3);
/// ```
///
/// Use `downcast_ref`, `downcast_mut`, and `downcast` for concrete type
/// conversion:
///
/// ```rust
/// # use fieldwire_reflect::Reflect;
/// let x: Box<dyn Reflect> = 10.into_boxed_reflect();
/// let y = x.downcast_ref::<i32>().unwrap();
/// assert_eq!(*y, 10);
/// ```
///
/// [`reflect_ref`]: Reflect::reflect_ref
/// [`reflect_mut`]: Reflect::reflect_mut
/// [`fieldwire_reflect`]: crate
/// [the derive macro for `Reflect`]: crate::derive::Reflect
/// [`Struct`]: crate::ops::Struct
/// [`Enum`]: crate::ops::Enum
/// [`BitFields`]: crate::ops::BitFields
/// [`Any`]: core::any::Any
pub trait Reflect: DynamicTypePath + DynamicTyped + Send + Sync + Any {
    /// Casts this type to a fully-reflected value.
    #[inline(always)]
    fn as_reflect(&self) -> &dyn Reflect
    where
        Self: Sized,
    {
        self
    }

    /// Casts this type to a mutable, fully-reflected value.
    #[inline(always)]
    fn as_reflect_mut(&mut self) -> &mut dyn Reflect
    where
        Self: Sized,
    {
        self
    }

    /// Casts this type to a boxed, fully-reflected value.
    #[inline(always)]
    fn into_reflect(self: Box<Self>) -> Box<dyn Reflect>
    where
        Self: Sized,
    {
        self
    }

    /// Casts this type to a boxed, fully-reflected value.
    ///
    /// # Example
    ///
    /// ```
    /// use fieldwire_reflect::Reflect;
    ///
    /// let r = 32.into_boxed_reflect();
    /// // Equal to this:
    /// // let r = Box::new(32) as Box<dyn Reflect>;
    /// ```
    #[inline(always)]
    fn into_boxed_reflect(self) -> Box<dyn Reflect>
    where
        Self: Sized,
    {
        Box::new(self)
    }

    /// Return the [`TypeId`] of underlying type.
    ///
    /// When you call `Box<dyn Reflect>::type_id`, it will return
    /// the [`TypeId`] of the entire container, instead of `dyn Reflect`.
    ///
    /// This is prone to errors, so we provide this method.
    #[inline]
    fn ty_id(&self) -> TypeId {
        TypeId::of::<Self>()
    }

    /// Performs a type-checked assignment of a reflected value to this value.
    ///
    /// This is type strict but fast; to allow compatible-but-not-identical
    /// inputs, use [`Reflect::try_apply`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use fieldwire_reflect::Reflect;
    /// let data = 3_u32.into_boxed_reflect();
    /// let mut x = 0_u32;
    ///
    /// x.set(data).unwrap();
    /// assert_eq!(x, 3);
    /// ```
    fn set(&mut self, value: Box<dyn Reflect>) -> Result<(), Box<dyn Reflect>>;

    /// Returns a pure enumeration of ["kinds"](ReflectKind) of type.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fieldwire_reflect::{Reflect, info::ReflectKind};
    /// let x = 3_u32.into_boxed_reflect();
    ///
    /// assert_eq!(x.reflect_kind(), ReflectKind::Opaque);
    /// ```
    fn reflect_kind(&self) -> ReflectKind;

    /// Returns an immutable enumeration of ["kinds"](ReflectRef) of type.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fieldwire_reflect::{Reflect, ops::Array};
    /// let values = [1, 2, 3].into_boxed_reflect();
    ///
    /// let array: &dyn Array = values.reflect_ref().as_array().unwrap();
    /// ```
    fn reflect_ref(&self) -> ReflectRef<'_>;

    /// Returns a mutable enumeration of ["kinds"](ReflectMut) of type.
    fn reflect_mut(&mut self) -> ReflectMut<'_>;

    /// Try applies a reflected value to this value.
    ///
    /// If `self.ty_id` == `value.ty_id`, this is a plain downcast and copy.
    /// Otherwise the assignment recurses by [kind](ReflectKind): structs copy
    /// field-by-field through [`struct_try_apply`], arrays item-by-item
    /// through [`array_try_apply`], and so on.
    ///
    /// # Handling Errors
    ///
    /// This function may leave `self` in a partially mutated state if an error
    /// was encountered on the way.
    ///
    /// [`struct_try_apply`]: crate::impls::struct_try_apply
    /// [`array_try_apply`]: crate::impls::array_try_apply
    fn try_apply(&mut self, value: &dyn Reflect) -> Result<(), ApplyError>;

    /// Applies a reflected value to this value.
    ///
    /// This function is similar to `try_apply(..).unwrap()`.
    ///
    /// # Panics
    ///
    /// Panics when [`Reflect::try_apply`] would return an error.
    #[inline]
    fn apply(&mut self, value: &dyn Reflect) {
        Reflect::try_apply(self, value).unwrap();
    }

    /// Returns a "partial equality" comparison result.
    ///
    /// If the underlying type does not support equality testing, returns
    /// `None`. Composite types compare field-by-field, which may not be
    /// efficient.
    #[inline]
    fn reflect_partial_eq(&self, _other: &dyn Reflect) -> Option<bool> {
        // Only inline for default implement
        None
    }

    /// Debug formatter for the value.
    ///
    /// Composite types format through their fields; opaque types without an
    /// own implementation write `"Opaque(type_path)"`.
    fn reflect_debug(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        use crate::impls;
        match self.reflect_ref() {
            ReflectRef::Struct(data) => impls::struct_debug(data, f),
            ReflectRef::Enum(data) => impls::enum_debug(data, f),
            ReflectRef::Array(data) => impls::array_debug(data, f),
            ReflectRef::BitFields(data) => impls::struct_debug(data, f),
            ReflectRef::BitField(data) => impls::bit_field_debug(data, f),
            ReflectRef::Opaque(_) => write!(f, "Opaque({})", self.reflect_type_path()),
        }
    }
}

impl dyn Reflect {
    /// Returns `true` if the underlying value is of type `T`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fieldwire_reflect::Reflect;
    /// let x: Box<dyn Reflect> = 10.into_boxed_reflect();
    ///
    /// assert!(x.is::<i32>());
    /// ```
    #[inline(always)]
    pub fn is<T: Any>(&self) -> bool {
        self.ty_id() == TypeId::of::<T>()
    }

    /// Downcasts the value to type `T` by reference.
    ///
    /// If the underlying value is not of type `T`, returns `None`.
    #[inline]
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        <dyn Any>::downcast_ref(self)
    }

    /// Downcasts the value to type `T` by mutable reference.
    ///
    /// If the underlying value is not of type `T`, returns `None`.
    #[inline]
    pub fn downcast_mut<T: Any>(&mut self) -> Option<&mut T> {
        <dyn Any>::downcast_mut(self)
    }

    /// Downcasts the value to type `T`, consuming the trait object.
    ///
    /// If the underlying value is not of type `T`, returns `Err(self)`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fieldwire_reflect::Reflect;
    /// let x: Box<dyn Reflect> = 10.into_boxed_reflect();
    ///
    /// let x: Box<i32> = x.downcast::<i32>().unwrap();
    /// assert_eq!(*x, 10);
    /// ```
    #[inline]
    pub fn downcast<T: Any>(self: Box<dyn Reflect>) -> Result<Box<T>, Box<dyn Reflect>> {
        if self.is::<T>() {
            // TODO: replace to `downcast_uncheck` when it's stable,
            #[expect(unsafe_code, reason = "type is already checked")]
            Ok(unsafe { <Box<dyn Any>>::downcast::<T>(self).unwrap_unchecked() })
        } else {
            Err(self)
        }
    }

    /// Downcasts the value to type `T`, unboxing and consuming the trait object.
    ///
    /// If the underlying value is not of type `T`, returns `Err(self)`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fieldwire_reflect::Reflect;
    /// let x: Box<dyn Reflect> = 10.into_boxed_reflect();
    ///
    /// let x = x.take::<i32>().unwrap();
    /// assert_eq!(x, 10);
    /// ```
    #[inline]
    pub fn take<T: Any>(self: Box<dyn Reflect>) -> Result<T, Box<dyn Reflect>> {
        if self.is::<T>() {
            #[expect(unsafe_code, reason = "type is already checked")]
            Ok(unsafe { *<Box<dyn Any>>::downcast::<T>(self).unwrap_unchecked() })
        } else {
            Err(self)
        }
    }
}

impl core::fmt::Debug for dyn Reflect {
    #[inline]
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        self.reflect_debug(f)
    }
}

impl TypePath for dyn Reflect {
    #[inline]
    fn type_path() -> &'static str {
        "dyn fieldwire_reflect::Reflect"
    }
    #[inline]
    fn type_name() -> &'static str {
        "dyn Reflect"
    }
    #[inline]
    fn type_ident() -> &'static str {
        "dyn Reflect"
    }
}

impl Typed for dyn Reflect {
    /// This is the [`TypeInfo`] of [`dyn Reflect`],
    /// not the [`TypeInfo`] of the underlying data!!!!
    ///
    /// Use [`DynamicTyped::reflect_type_info`] to get underlying [`TypeInfo`].
    ///
    /// [`dyn Reflect`]: crate::Reflect
    fn type_info() -> &'static TypeInfo {
        static CELL: NonGenericTypeInfoCell = NonGenericTypeInfoCell::new();
        CELL.get_or_init(|| TypeInfo::Opaque(OpaqueInfo::new::<Self>()))
    }
}

// -----------------------------------------------------------------------------
// Auxiliary macro

/// Implement some common methods like `reflect_kind` and `reflect_ref`.
macro_rules! impl_reflect_cast_fn {
    ($kind:ident) => {
        fn set(
            &mut self,
            value: ::alloc::boxed::Box<dyn $crate::Reflect>,
        ) -> Result<(), ::alloc::boxed::Box<dyn $crate::Reflect>> {
            *self = value.take::<Self>()?;
            Ok(())
        }

        #[inline]
        fn reflect_kind(&self) -> $crate::info::ReflectKind {
            $crate::info::ReflectKind::$kind
        }

        #[inline]
        fn reflect_ref(&self) -> $crate::ops::ReflectRef<'_> {
            $crate::ops::ReflectRef::$kind(self)
        }

        #[inline]
        fn reflect_mut(&mut self) -> $crate::ops::ReflectMut<'_> {
            $crate::ops::ReflectMut::$kind(self)
        }
    };
}

pub(crate) use impl_reflect_cast_fn;
