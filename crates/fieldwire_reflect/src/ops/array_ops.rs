use crate::Reflect;

// -----------------------------------------------------------------------------
// Array trait

/// A trait for type-erased fixed-size array operations via reflection.
///
/// Implemented for `[T; N]` where `T` is itself reflectable.
///
/// # Examples
///
/// ```
/// use fieldwire_reflect::ops::Array;
///
/// let values = [1_u16, 2, 3];
/// let values_ref: &dyn Array = &values;
///
/// assert_eq!(values_ref.len(), 3);
/// assert_eq!(values_ref.item_as::<u16>(1), Some(&2));
/// ```
pub trait Array: Reflect {
    /// Returns a reference to the item at `index` as a `&dyn Reflect`.
    ///
    /// Returns `None` if `index` is out of bounds.
    fn item(&self, index: usize) -> Option<&dyn Reflect>;

    /// Returns a mutable reference to the item at `index` as a
    /// `&mut dyn Reflect`.
    ///
    /// Returns `None` if `index` is out of bounds.
    fn item_mut(&mut self, index: usize) -> Option<&mut dyn Reflect>;

    /// Returns the number of items in the array.
    fn len(&self) -> usize;

    /// Returns `true` if the array holds no items.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns an iterator over the items of the array, in order.
    fn iter_items(&self) -> ArrayItemIter<'_>;
}

impl dyn Array {
    /// Returns a typed reference to the item at the given index.
    ///
    /// Returns `None` if:
    /// - The index is out of bounds
    /// - The item cannot be downcast to type `T`
    #[inline]
    pub fn item_as<T: Reflect>(&self, index: usize) -> Option<&T> {
        self.item(index).and_then(<dyn Reflect>::downcast_ref)
    }

    /// Returns a typed mutable reference to the item at the given index.
    ///
    /// Returns `None` if:
    /// - The index is out of bounds
    /// - The item cannot be downcast to type `T`
    #[inline]
    pub fn item_mut_as<T: Reflect>(&mut self, index: usize) -> Option<&mut T> {
        self.item_mut(index).and_then(<dyn Reflect>::downcast_mut)
    }
}

// -----------------------------------------------------------------------------
// Array Item Iterator

/// An iterator over the items of an [`Array`].
pub struct ArrayItemIter<'a> {
    array: &'a dyn Array,
    index: usize,
}

impl<'a> ArrayItemIter<'a> {
    /// Creates a new iterator for the given array.
    #[inline(always)]
    pub const fn new(value: &'a dyn Array) -> Self {
        ArrayItemIter {
            array: value,
            index: 0,
        }
    }
}

impl<'a> Iterator for ArrayItemIter<'a> {
    type Item = &'a dyn Reflect;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let value = self.array.item(self.index);
        self.index += value.is_some() as usize;
        value
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let size = self.array.len();
        (size - self.index, Some(size))
    }
}

impl<'a> ExactSizeIterator for ArrayItemIter<'a> {}
