use crate::info::{TypeInfo, TypePath};

// -----------------------------------------------------------------------------
// Typed

/// A static accessor to compile-time type information.
///
/// Automatically implemented by [`#[derive(Reflect)]`](crate::derive::Reflect),
/// allowing access to type metadata without an instance of the type.
///
/// # Examples
///
/// ```
/// use fieldwire_reflect::{derive::Reflect, info::{Typed, TypeInfo}};
///
/// #[derive(Reflect)]
/// struct Header { version: u16 }
///
/// let info: &'static TypeInfo = <Header as Typed>::type_info();
/// assert_eq!(info.as_struct().unwrap().field_len(), 1);
/// ```
///
/// # Manual Implementation
///
/// Not usually needed, but [`NonGenericTypeInfoCell`] and
/// [`GenericTypeInfoCell`] keep it short when it is:
///
/// ```
/// use fieldwire_reflect::{
///     derive::Reflect,
///     info::{Typed, TypeInfo, StructInfo, NamedField},
///     impls::NonGenericTypeInfoCell,
/// };
///
/// struct Point { x: i32, y: i32 }
/// # /*
/// impl Struct for Point { /* ... */ }
/// impl Reflect for Point { /* ... */ }
/// # */
/// # impl fieldwire_reflect::info::TypePath for Point {
/// #     fn type_path() -> &'static str { "doc::Point" }
/// #     fn type_name() -> &'static str { "Point" }
/// #     fn type_ident() -> &'static str { "Point" }
/// # }
/// # impl fieldwire_reflect::Reflect for Point {
/// #     fn set(&mut self, value: Box<dyn fieldwire_reflect::Reflect>) -> Result<(), Box<dyn fieldwire_reflect::Reflect>> {
/// #         *self = value.take::<Self>()?;
/// #         Ok(())
/// #     }
/// #     fn reflect_kind(&self) -> fieldwire_reflect::info::ReflectKind {
/// #         fieldwire_reflect::info::ReflectKind::Struct
/// #     }
/// #     fn reflect_ref(&self) -> fieldwire_reflect::ops::ReflectRef<'_> {
/// #         fieldwire_reflect::ops::ReflectRef::Struct(self)
/// #     }
/// #     fn reflect_mut(&mut self) -> fieldwire_reflect::ops::ReflectMut<'_> {
/// #         fieldwire_reflect::ops::ReflectMut::Struct(self)
/// #     }
/// #     fn try_apply(&mut self, value: &dyn fieldwire_reflect::Reflect) -> Result<(), fieldwire_reflect::ops::ApplyError> {
/// #         fieldwire_reflect::impls::struct_try_apply(self, value)
/// #     }
/// # }
/// # impl fieldwire_reflect::ops::Struct for Point {
/// #     fn field(&self, name: &str) -> Option<&dyn fieldwire_reflect::Reflect> {
/// #         match name { "x" => Some(&self.x), "y" => Some(&self.y), _ => None }
/// #     }
/// #     fn field_mut(&mut self, name: &str) -> Option<&mut dyn fieldwire_reflect::Reflect> {
/// #         match name { "x" => Some(&mut self.x), "y" => Some(&mut self.y), _ => None }
/// #     }
/// #     fn field_at(&self, index: usize) -> Option<&dyn fieldwire_reflect::Reflect> {
/// #         match index { 0 => Some(&self.x), 1 => Some(&self.y), _ => None }
/// #     }
/// #     fn field_at_mut(&mut self, index: usize) -> Option<&mut dyn fieldwire_reflect::Reflect> {
/// #         match index { 0 => Some(&mut self.x), 1 => Some(&mut self.y), _ => None }
/// #     }
/// #     fn name_at(&self, index: usize) -> Option<&str> {
/// #         match index { 0 => Some("x"), 1 => Some("y"), _ => None }
/// #     }
/// #     fn field_len(&self) -> usize { 2 }
/// #     fn iter_fields(&self) -> fieldwire_reflect::ops::StructFieldIter<'_> {
/// #         fieldwire_reflect::ops::StructFieldIter::new(self)
/// #     }
/// # }
///
/// impl Typed for Point {
///     fn type_info() -> &'static TypeInfo {
///         static CELL: NonGenericTypeInfoCell = NonGenericTypeInfoCell::new();
///         CELL.get_or_init(|| TypeInfo::Struct(
///             StructInfo::new::<Self>(&[
///                 NamedField::new::<i32>("x"),
///                 NamedField::new::<i32>("y"),
///             ])
///         ))
///     }
/// }
/// ```
///
/// [`NonGenericTypeInfoCell`]: crate::impls::NonGenericTypeInfoCell
/// [`GenericTypeInfoCell`]: crate::impls::GenericTypeInfoCell
pub trait Typed: TypePath {
    /// Returns the compile-time [`TypeInfo`] of this type.
    ///
    /// Note: use [`DynamicTyped`] for dynamic dispatch.
    fn type_info() -> &'static TypeInfo;
}

// -----------------------------------------------------------------------------
// DynamicTyped

/// Provide dynamic dispatch for types that implement [`Typed`].
///
/// Auto implemented for all types that implement [`Typed`].
pub trait DynamicTyped {
    /// Returns the [`TypeInfo`] of the underlying type.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fieldwire_reflect::{derive::Reflect, Reflect, info::DynamicTyped};
    /// #[derive(Reflect)]
    /// struct Flags { raw: u8 }
    ///
    /// let flags: &dyn Reflect = &Flags { raw: 0 };
    /// let info = flags.reflect_type_info();
    /// assert!(info.type_is::<Flags>());
    /// ```
    fn reflect_type_info(&self) -> &'static TypeInfo;
}

impl<T: Typed> DynamicTyped for T {
    #[inline]
    fn reflect_type_info(&self) -> &'static TypeInfo {
        Self::type_info()
    }
}
