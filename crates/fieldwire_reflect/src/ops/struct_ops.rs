use crate::Reflect;
use crate::info::{NamedField, ReflectKind, ReflectKindError, TypeInfo, Typed};
use crate::ops::ApplyError;

// -----------------------------------------------------------------------------
// Struct trait

/// A trait for type-erased struct operations via reflection.
///
/// When using [`#[derive(Reflect)]`](crate::derive::Reflect) on a struct with
/// named fields, this trait will be automatically implemented.
///
/// Field indices follow declaration order, which is also the wire order used
/// by serialization.
///
/// # Examples
///
/// ```
/// use fieldwire_reflect::{derive::Reflect, ops::Struct};
///
/// #[derive(Reflect)]
/// struct Foo {
///     a: i32,
///     b: bool,
/// }
///
/// let foo = Foo { a: 10_i32, b: true };
/// let foo_ref: &dyn Struct = &foo;
///
/// assert_eq!(foo_ref.field_len(), 2);
/// assert_eq!(foo_ref.field_as::<i32>("a"), Some(&10));
/// assert_eq!(foo_ref.field_at_as::<bool>(1), Some(&true));
/// ```
pub trait Struct: Reflect {
    /// Returns a reference to the value of the field named `name` as a
    /// `&dyn Reflect`.
    ///
    /// Returns `None` if the field does not exist.
    ///
    /// If the field type is known, can use `<dyn Struct>::field_as` instead.
    fn field(&self, name: &str) -> Option<&dyn Reflect>;

    /// Returns a mutable reference to the value of the field named `name`
    /// as a `&mut dyn Reflect`.
    ///
    /// Returns `None` if the field does not exist.
    fn field_mut(&mut self, name: &str) -> Option<&mut dyn Reflect>;

    /// Returns a reference to the value of the field with index `index` as a
    /// `&dyn Reflect`.
    ///
    /// Returns `None` if `index` is out of bounds.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fieldwire_reflect::{derive::Reflect, ops::Struct};
    /// #[derive(Reflect)]
    /// struct Foo { a: i32, b: bool }
    ///
    /// let foo = Foo { a: 1, b: true };
    ///
    /// assert!(foo.field_at(0).is_some());
    /// assert!(foo.field_at(2).is_none());
    /// ```
    fn field_at(&self, index: usize) -> Option<&dyn Reflect>;

    /// Returns a mutable reference to the value of the field with index `index`
    /// as a `&mut dyn Reflect`.
    ///
    /// Returns `None` if `index` is out of bounds.
    fn field_at_mut(&mut self, index: usize) -> Option<&mut dyn Reflect>;

    /// Returns the name of the field with index `index`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fieldwire_reflect::{derive::Reflect, ops::Struct};
    /// #[derive(Reflect)]
    /// struct Foo { a: i32, b: bool }
    ///
    /// let foo = Foo { a: 1, b: true };
    ///
    /// assert_eq!(foo.name_at(0), Some("a"));
    /// assert_eq!(foo.name_at(2), None);
    /// ```
    fn name_at(&self, index: usize) -> Option<&str>;

    /// Returns the number of fields in the struct.
    fn field_len(&self) -> usize;

    /// Returns an iterator over the values of the struct's fields.
    ///
    /// The iterator yields references to each field in order,
    /// from index 0 to `field_len() - 1`.
    fn iter_fields(&self) -> StructFieldIter<'_>;
}

impl dyn Struct {
    /// Returns a typed reference to the field with the given name.
    ///
    /// Returns `None` if:
    /// - The field does not exist.
    /// - The field cannot be downcast to type `T`
    #[inline]
    pub fn field_as<T: Reflect>(&self, name: &str) -> Option<&T> {
        self.field(name).and_then(<dyn Reflect>::downcast_ref)
    }

    /// Returns a typed mutable reference to the field with the given name.
    ///
    /// Returns `None` if:
    /// - The field does not exist.
    /// - The field cannot be downcast to type `T`
    #[inline]
    pub fn field_mut_as<T: Reflect>(&mut self, name: &str) -> Option<&mut T> {
        self.field_mut(name).and_then(<dyn Reflect>::downcast_mut)
    }

    /// Returns a typed reference to the field at the given index.
    ///
    /// Returns `None` if:
    /// - The index is out of bounds
    /// - The field cannot be downcast to type `T`
    #[inline]
    pub fn field_at_as<T: Reflect>(&self, index: usize) -> Option<&T> {
        self.field_at(index).and_then(<dyn Reflect>::downcast_ref)
    }

    /// Returns a typed mutable reference to the field at the given index.
    ///
    /// Returns `None` if:
    /// - The index is out of bounds
    /// - The field cannot be downcast to type `T`
    #[inline]
    pub fn field_at_mut_as<T: Reflect>(&mut self, index: usize) -> Option<&mut T> {
        self.field_at_mut(index)
            .and_then(<dyn Reflect>::downcast_mut)
    }
}

// -----------------------------------------------------------------------------
// Struct Field Iterator

/// An iterator over the field values of a struct.
///
/// This is an [`ExactSizeIterator`] that yields references to each field
/// in the struct in order.
///
/// # Examples
///
/// ```
/// use fieldwire_reflect::{derive::Reflect, ops::{Struct, StructFieldIter}};
///
/// #[derive(Reflect)]
/// struct Foo { a: i32, b: bool }
///
/// let foo = Foo { a: 1, b: true };
/// let mut iter = StructFieldIter::new(&foo);
///
/// assert_eq!(iter.len(), 2);
/// assert_eq!(iter.next().and_then(|v| v.downcast_ref::<i32>()), Some(&1));
/// ```
pub struct StructFieldIter<'a> {
    struct_val: &'a dyn Struct,
    index: usize,
}

impl<'a> StructFieldIter<'a> {
    /// Creates a new iterator for the given struct.
    #[inline(always)]
    pub const fn new(value: &'a dyn Struct) -> Self {
        StructFieldIter {
            struct_val: value,
            index: 0,
        }
    }
}

impl<'a> Iterator for StructFieldIter<'a> {
    type Item = &'a dyn Reflect;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let value = self.struct_val.field_at(self.index);
        self.index += value.is_some() as usize;
        value
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let size = self.struct_val.field_len();
        (size - self.index, Some(size))
    }
}

impl<'a> ExactSizeIterator for StructFieldIter<'a> {}

// -----------------------------------------------------------------------------
// Field visitors

/// Visits every field of `value` in declaration order with its name.
///
/// # Examples
///
/// ```
/// use fieldwire_reflect::{derive::Reflect, ops::{self, Struct}};
///
/// #[derive(Reflect)]
/// struct Foo { a: u8, b: u16 }
///
/// let foo = Foo { a: 1, b: 2 };
/// let mut names = Vec::new();
/// ops::for_each_field(&foo, |name, _value| names.push(name.to_owned()));
///
/// assert_eq!(names, ["a", "b"]);
/// ```
pub fn for_each_field<F>(value: &dyn Struct, mut visit: F)
where
    F: FnMut(&str, &dyn Reflect),
{
    for index in 0..value.field_len() {
        // both lookups are in bounds by the loop range
        if let (Some(name), Some(field)) = (value.name_at(index), value.field_at(index)) {
            visit(name, field);
        }
    }
}

/// Visits the field metadata of struct type `T` without needing a value.
///
/// Works for both plain structs and bit-fields containers; any other kind
/// returns a [`ReflectKindError`].
///
/// # Examples
///
/// ```
/// use fieldwire_reflect::{derive::Reflect, ops};
///
/// #[derive(Reflect)]
/// struct Foo { a: u8, b: u16 }
///
/// let mut widths = Vec::new();
/// ops::for_each_field_meta::<Foo>(|field| {
///     widths.push(field.type_is::<u16>());
/// })
/// .unwrap();
///
/// assert_eq!(widths, [false, true]);
/// ```
pub fn for_each_field_meta<T>(
    mut visit: impl FnMut(&'static NamedField),
) -> Result<(), ReflectKindError>
where
    T: Typed,
{
    let info = T::type_info();
    match info {
        TypeInfo::Struct(strukt) => {
            strukt.iter().for_each(&mut visit);
            Ok(())
        }
        TypeInfo::BitFields(bits) => {
            bits.iter().for_each(&mut visit);
            Ok(())
        }
        _ => Err(ReflectKindError {
            expected: ReflectKind::Struct,
            received: info.kind(),
        }),
    }
}

/// Visits the fields of two structs pairwise, by position.
///
/// Fails with [`ApplyError::DifferentSize`] when the field counts differ; no
/// field is visited in that case.
///
/// # Examples
///
/// ```
/// use fieldwire_reflect::{derive::Reflect, ops};
///
/// #[derive(Reflect)]
/// struct Point { x: i32, y: i32 }
///
/// let a = Point { x: 1, y: 2 };
/// let b = Point { x: 10, y: 20 };
///
/// let mut sums = Vec::new();
/// ops::zip_fields(&a, &b, |_name, lhs, rhs| {
///     let lhs = *lhs.downcast_ref::<i32>().unwrap();
///     let rhs = *rhs.downcast_ref::<i32>().unwrap();
///     sums.push(lhs + rhs);
/// })
/// .unwrap();
///
/// assert_eq!(sums, [11, 22]);
/// ```
pub fn zip_fields<F>(a: &dyn Struct, b: &dyn Struct, mut visit: F) -> Result<(), ApplyError>
where
    F: FnMut(&str, &dyn Reflect, &dyn Reflect),
{
    if a.field_len() != b.field_len() {
        return Err(ApplyError::DifferentSize {
            from_size: b.field_len(),
            to_size: a.field_len(),
        });
    }

    for index in 0..a.field_len() {
        if let (Some(name), Some(lhs), Some(rhs)) =
            (a.name_at(index), a.field_at(index), b.field_at(index))
        {
            visit(name, lhs, rhs);
        }
    }
    Ok(())
}

/// Copies every same-named field of `src` into `dst` via
/// [`try_apply`](Reflect::try_apply).
///
/// Fields of `dst` with no name match in `src` are left untouched; the number
/// of such unmatched fields is returned. A name match with an incompatible
/// type is an error.
///
/// # Examples
///
/// ```
/// use fieldwire_reflect::{derive::Reflect, ops};
///
/// #[derive(Reflect)]
/// struct Wide { id: u32, tag: u8, extra: bool }
///
/// #[derive(Reflect)]
/// struct Narrow { id: u32, tag: u8 }
///
/// let mut dst = Wide { id: 0, tag: 0, extra: true };
/// let src = Narrow { id: 7, tag: 3 };
///
/// let unmatched = ops::copy_matching_fields(&mut dst, &src).unwrap();
/// assert_eq!(unmatched, 1); // `extra`
/// assert_eq!(dst.id, 7);
/// assert_eq!(dst.tag, 3);
/// assert!(dst.extra);
/// ```
pub fn copy_matching_fields(
    dst: &mut dyn Struct,
    src: &dyn Struct,
) -> Result<usize, ApplyError> {
    use alloc::string::ToString;

    let mut unmatched = 0;
    for index in 0..dst.field_len() {
        // owned name, releases the `dst` borrow before `field_mut`
        let Some(name) = dst.name_at(index).map(ToString::to_string) else {
            continue;
        };
        let Some(value) = src.field(&name) else {
            unmatched += 1;
            continue;
        };
        if let Some(field) = dst.field_mut(&name) {
            field.try_apply(value)?;
        }
    }
    Ok(unmatched)
}
