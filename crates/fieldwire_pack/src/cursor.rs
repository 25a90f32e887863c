// -----------------------------------------------------------------------------
// ByteCursor

/// A non-owning, front-consuming view over a byte slice.
///
/// Every read either consumes the requested bytes or returns `None` and
/// consumes nothing; the cursor never reads past the end of the input.
///
/// # Examples
///
/// ```
/// use fieldwire_pack::ByteCursor;
///
/// let mut cursor = ByteCursor::new(&[0x12, 0x34, 0x56]);
///
/// assert_eq!(cursor.take_byte(), Some(0x12));
/// assert_eq!(cursor.take_array::<2>(), Some([0x34, 0x56]));
/// assert!(cursor.is_empty());
/// assert_eq!(cursor.take_byte(), None);
/// ```
pub struct ByteCursor<'a> {
    bytes: &'a [u8],
}

impl<'a> ByteCursor<'a> {
    /// Creates a cursor over the given bytes.
    #[inline]
    pub const fn new(bytes: &'a [u8]) -> Self {
        Self { bytes }
    }

    /// Returns the number of unconsumed bytes.
    #[inline]
    pub const fn remaining(&self) -> usize {
        self.bytes.len()
    }

    /// Returns `true` when all input has been consumed.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Consumes and returns the next `n` bytes.
    ///
    /// Returns `None` without consuming anything when fewer than `n` bytes
    /// remain.
    pub fn take(&mut self, n: usize) -> Option<&'a [u8]> {
        if n > self.bytes.len() {
            return None;
        }
        let (taken, rest) = self.bytes.split_at(n);
        self.bytes = rest;
        Some(taken)
    }

    /// Consumes and returns the next byte.
    #[inline]
    pub fn take_byte(&mut self) -> Option<u8> {
        let (&byte, rest) = self.bytes.split_first()?;
        self.bytes = rest;
        Some(byte)
    }

    /// Consumes and returns the next `N` bytes as a fixed array.
    ///
    /// Returns `None` without consuming anything when fewer than `N` bytes
    /// remain.
    pub fn take_array<const N: usize>(&mut self) -> Option<[u8; N]> {
        let taken = self.take(N)?;
        // length is exactly N by `take`
        let mut array = [0_u8; N];
        array.copy_from_slice(taken);
        Some(array)
    }
}

// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn take_consumes_front() {
        let mut cursor = ByteCursor::new(&[1, 2, 3, 4]);

        assert_eq!(cursor.take(2), Some(&[1, 2][..]));
        assert_eq!(cursor.remaining(), 2);
        assert_eq!(cursor.take(2), Some(&[3, 4][..]));
        assert!(cursor.is_empty());
    }

    #[test]
    fn short_read_consumes_nothing() {
        let mut cursor = ByteCursor::new(&[1, 2]);

        assert_eq!(cursor.take(3), None);
        assert_eq!(cursor.remaining(), 2);
        assert_eq!(cursor.take_array::<4>(), None);
        assert_eq!(cursor.remaining(), 2);
    }

    #[test]
    fn take_zero_is_fine() {
        let mut cursor = ByteCursor::new(&[]);

        assert_eq!(cursor.take(0), Some(&[][..]));
        assert_eq!(cursor.take_array::<0>(), Some([]));
    }
}
