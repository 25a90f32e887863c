//! A reflection-driven big-endian binary serialization framework.
//!
//! `fieldwire_pack` walks values through the [`fieldwire_reflect`] trait
//! objects, so one serializer covers every declared type: primitives, structs,
//! fixed arrays, fieldless enums and bit-fields containers, nested to any
//! depth. Formats are assembled as an ordered [`SerializerChain`] with
//! first-match-wins resolution, which makes per-type overrides and stateful
//! framing a matter of list order.
//!
//! ## Menu
//!
//! - [`serialize`], [`serialize_into`], [`deserialize`]: the default-chain
//!   entry points.
//! - [`Serializer`] and [`SerializerChain`]: the resolution protocol, for
//!   custom formats and stateful serializers.
//! - [`NetPackSerializer`]: the byte-level wire rules.
//! - [`FloatSerializer`]: the `f32`/`f64` fallback.
//! - [`ByteCursor`]: the non-owning decode input.
//! - [`EncodeError`], [`DecodeError`]: the closed result sets.
//!
//! ## Example
//!
//! ```
//! use fieldwire_pack::{deserialize, serialize, ByteCursor};
//! use fieldwire_reflect::derive::Reflect;
//!
//! #[derive(Reflect, Debug, PartialEq)]
//! struct Header {
//!     version: u16,
//!     length: u32,
//! }
//!
//! let header = Header { version: 2, length: 0x12345678 };
//!
//! let bytes = serialize(&header).unwrap();
//! assert_eq!(bytes, [0x00, 0x02, 0x12, 0x34, 0x56, 0x78]);
//!
//! let mut decoded = Header { version: 0, length: 0 };
//! deserialize(&mut decoded, &mut ByteCursor::new(&bytes)).unwrap();
//! assert_eq!(decoded, header);
//! ```

extern crate alloc;

use alloc::vec::Vec;

use fieldwire_reflect::Reflect;

// -----------------------------------------------------------------------------
// Modules

mod chain;
mod cursor;
mod error;
mod netpack;

// -----------------------------------------------------------------------------
// Exports

pub use chain::{Serializer, SerializerChain};
pub use cursor::ByteCursor;
pub use error::{DecodeError, EncodeError};
pub use netpack::{FloatSerializer, NetPackSerializer};

// -----------------------------------------------------------------------------
// Default chain

/// The default chain: [`NetPackSerializer`] first, [`FloatSerializer`] as the
/// fallback behind it.
const DEFAULT_SERIALIZERS: &[&dyn Serializer] = &[&NetPackSerializer, &FloatSerializer];

/// Serializes `value` through the default chain into a fresh buffer.
///
/// # Examples
///
/// ```
/// use fieldwire_pack::serialize;
///
/// let bytes = serialize(&0x12345678_u32).unwrap();
/// assert_eq!(bytes, [0x12, 0x34, 0x56, 0x78]);
/// ```
pub fn serialize(value: &dyn Reflect) -> Result<Vec<u8>, EncodeError> {
    let mut out = Vec::new();
    serialize_into(value, &mut out)?;
    Ok(out)
}

/// Serializes `value` through the default chain, appending to `out`.
///
/// On failure `out` may hold a partial encoding.
pub fn serialize_into(value: &dyn Reflect, out: &mut Vec<u8>) -> Result<(), EncodeError> {
    SerializerChain::new(DEFAULT_SERIALIZERS).encode(value, out)
}

/// Deserializes from `cursor` into `value` through the default chain.
///
/// `value` provides the type being decoded; on success it holds the decoded
/// data and the cursor rests on the first unconsumed byte. On failure `value`
/// may be partially overwritten.
///
/// # Examples
///
/// ```
/// use fieldwire_pack::{deserialize, ByteCursor};
///
/// let mut value = 0_u16;
/// let mut cursor = ByteCursor::new(&[0x12, 0x34, 0x56]);
///
/// deserialize(&mut value, &mut cursor).unwrap();
/// assert_eq!(value, 0x1234);
/// assert_eq!(cursor.remaining(), 1);
/// ```
pub fn deserialize(value: &mut dyn Reflect, cursor: &mut ByteCursor<'_>) -> Result<(), DecodeError> {
    SerializerChain::new(DEFAULT_SERIALIZERS).decode(value, cursor)
}
