use alloc::borrow::Cow;
use alloc::vec::Vec;
use core::any::Any;
use core::cell::RefCell;

use fieldwire_reflect::Reflect;
use fieldwire_reflect::info::IntRepr;
use fieldwire_reflect::ops::{Array, BitFields, Enum, ReflectMut, ReflectRef, Struct};

use crate::chain::{Serializer, SerializerChain};
use crate::cursor::ByteCursor;
use crate::error::{DecodeError, EncodeError};

// -----------------------------------------------------------------------------
// NetPackSerializer

/// The byte-level primitive serializer, first element of the default chain.
///
/// Wire rules:
///
/// - `bool` → `0x00`/`0x01`; any other byte decodes to `InvalidValue`.
/// - `u8`-`u64`, `i8`-`i64` → big-endian, fixed width.
/// - Structs → field-by-field in declaration order, delegated through the
///   chain.
/// - Fixed arrays → element-wise in index order, delegated through the chain.
/// - Fieldless enums → the underlying integer per `EnumInfo::repr`, delegated
///   through the chain; an undeclared discriminant decodes to `InvalidValue`.
/// - Bit-fields containers → raw field bits packed most-significant-first
///   into one integer of the container's total width, delegated through the
///   chain.
/// - Floats are not handled; they fall through to the rest of the chain.
///
/// # Examples
///
/// ```
/// use fieldwire_pack::serialize;
///
/// let bytes = serialize(&0x12345678_u32).unwrap();
/// assert_eq!(bytes, [0x12, 0x34, 0x56, 0x78]);
/// ```
pub struct NetPackSerializer;

impl Serializer for NetPackSerializer {
    fn try_encode(
        &self,
        value: &dyn Reflect,
        out: &mut Vec<u8>,
        chain: &SerializerChain<'_>,
        _state: Option<&RefCell<dyn Any>>,
    ) -> Option<Result<(), EncodeError>> {
        match value.reflect_ref() {
            ReflectRef::Opaque(data) => encode_opaque(data, out),
            ReflectRef::Struct(data) => Some(encode_struct(data, out, chain)),
            ReflectRef::Enum(data) => Some(encode_enum(data, out, chain)),
            ReflectRef::Array(data) => Some(encode_array(data, out, chain)),
            ReflectRef::BitFields(data) => Some(encode_bit_fields(data, out, chain)),
            // a lone bit-field value is not byte aligned
            ReflectRef::BitField(_) => None,
        }
    }

    fn try_decode(
        &self,
        value: &mut dyn Reflect,
        cursor: &mut ByteCursor<'_>,
        chain: &SerializerChain<'_>,
        _state: Option<&RefCell<dyn Any>>,
    ) -> Option<Result<(), DecodeError>> {
        match value.reflect_mut() {
            ReflectMut::Opaque(data) => decode_opaque(data, cursor),
            ReflectMut::Struct(data) => Some(decode_struct(data, cursor, chain)),
            ReflectMut::Enum(data) => Some(decode_enum(data, cursor, chain)),
            ReflectMut::Array(data) => Some(decode_array(data, cursor, chain)),
            ReflectMut::BitFields(data) => Some(decode_bit_fields(data, cursor, chain)),
            ReflectMut::BitField(_) => None,
        }
    }
}

// -----------------------------------------------------------------------------
// Opaque values

fn encode_opaque(value: &dyn Reflect, out: &mut Vec<u8>) -> Option<Result<(), EncodeError>> {
    if let Some(v) = value.downcast_ref::<bool>() {
        out.push(u8::from(*v));
        return Some(Ok(()));
    }

    macro_rules! be_int {
        ($($ty:ty),*) => {
            $(if let Some(v) = value.downcast_ref::<$ty>() {
                out.extend_from_slice(&v.to_be_bytes());
                return Some(Ok(()));
            })*
        };
    }
    be_int!(u8, i8, u16, i16, u32, i32, u64, i64);

    None
}

fn decode_opaque(
    value: &mut dyn Reflect,
    cursor: &mut ByteCursor<'_>,
) -> Option<Result<(), DecodeError>> {
    if let Some(v) = value.downcast_mut::<bool>() {
        return Some(match cursor.take_byte() {
            Some(0x00) => {
                *v = false;
                Ok(())
            }
            Some(0x01) => {
                *v = true;
                Ok(())
            }
            Some(_) => Err(DecodeError::InvalidValue { type_path: "bool" }),
            None => Err(DecodeError::InputTruncated {
                needed: 1,
                remaining: 0,
            }),
        });
    }

    macro_rules! be_int {
        ($($ty:ty => $width:literal),*) => {
            $(if let Some(v) = value.downcast_mut::<$ty>() {
                return Some(match cursor.take_array::<$width>() {
                    Some(bytes) => {
                        *v = <$ty>::from_be_bytes(bytes);
                        Ok(())
                    }
                    None => Err(DecodeError::InputTruncated {
                        needed: $width,
                        remaining: cursor.remaining(),
                    }),
                });
            })*
        };
    }
    be_int!(u8 => 1, i8 => 1, u16 => 2, i16 => 2, u32 => 4, i32 => 4, u64 => 8, i64 => 8);

    None
}

// -----------------------------------------------------------------------------
// Structs

fn encode_struct(
    value: &dyn Struct,
    out: &mut Vec<u8>,
    chain: &SerializerChain<'_>,
) -> Result<(), EncodeError> {
    for field in value.iter_fields() {
        chain.encode(field, out)?;
    }
    Ok(())
}

/// Visits every field position; recursion stops at the first failure, and
/// fields past it keep whatever value they held.
fn decode_struct(
    value: &mut dyn Struct,
    cursor: &mut ByteCursor<'_>,
    chain: &SerializerChain<'_>,
) -> Result<(), DecodeError> {
    let mut result = Ok(());
    for index in 0..value.field_len() {
        if result.is_ok() {
            if let Some(field) = value.field_at_mut(index) {
                result = chain.decode(field, cursor);
            }
        }
    }
    result
}

// -----------------------------------------------------------------------------
// Enums

fn encode_enum(
    value: &dyn Enum,
    out: &mut Vec<u8>,
    chain: &SerializerChain<'_>,
) -> Result<(), EncodeError> {
    let info = value.reflect_type_info().as_enum().map_err(|_| {
        EncodeError::SerializerFault {
            reason: Cow::Borrowed("enum value without enum type info"),
        }
    })?;

    // the discriminant fits the repr by declaration, the casts only narrow
    // back to the declared width
    let discriminant = value.discriminant();
    match info.repr() {
        IntRepr::U8 => chain.encode(&(discriminant as u8), out),
        IntRepr::I8 => chain.encode(&(discriminant as i8), out),
        IntRepr::U16 => chain.encode(&(discriminant as u16), out),
        IntRepr::I16 => chain.encode(&(discriminant as i16), out),
        IntRepr::U32 => chain.encode(&(discriminant as u32), out),
        IntRepr::I32 => chain.encode(&(discriminant as i32), out),
        IntRepr::U64 => chain.encode(&(discriminant as u64), out),
        IntRepr::I64 => chain.encode(&discriminant, out),
    }
}

fn decode_enum(
    value: &mut dyn Enum,
    cursor: &mut ByteCursor<'_>,
    chain: &SerializerChain<'_>,
) -> Result<(), DecodeError> {
    let info = value.reflect_type_info().as_enum().map_err(|_| {
        DecodeError::SerializerFault {
            reason: Cow::Borrowed("enum value without enum type info"),
        }
    })?;

    macro_rules! read {
        ($ty:ty) => {{
            let mut raw: $ty = 0;
            chain.decode(&mut raw, cursor)?;
            raw as i64
        }};
    }
    let discriminant = match info.repr() {
        IntRepr::U8 => read!(u8),
        IntRepr::I8 => read!(i8),
        IntRepr::U16 => read!(u16),
        IntRepr::I16 => read!(i16),
        IntRepr::U32 => read!(u32),
        IntRepr::I32 => read!(i32),
        IntRepr::U64 => read!(u64),
        IntRepr::I64 => read!(i64),
    };

    if value.set_by_discriminant(discriminant) {
        Ok(())
    } else {
        Err(DecodeError::InvalidValue {
            type_path: value.reflect_type_path(),
        })
    }
}

// -----------------------------------------------------------------------------
// Arrays

fn encode_array(
    value: &dyn Array,
    out: &mut Vec<u8>,
    chain: &SerializerChain<'_>,
) -> Result<(), EncodeError> {
    for item in value.iter_items() {
        chain.encode(item, out)?;
    }
    Ok(())
}

fn decode_array(
    value: &mut dyn Array,
    cursor: &mut ByteCursor<'_>,
    chain: &SerializerChain<'_>,
) -> Result<(), DecodeError> {
    for index in 0..value.len() {
        let item = value.item_mut(index).expect("valid index");
        chain.decode(item, cursor)?;
    }
    Ok(())
}

// -----------------------------------------------------------------------------
// Bit-fields containers

fn encode_bit_fields(
    value: &dyn BitFields,
    out: &mut Vec<u8>,
    chain: &SerializerChain<'_>,
) -> Result<(), EncodeError> {
    let mut acc = 0_u64;
    for index in 0..value.field_len() {
        let field = value.field_at(index).expect("valid index");
        let field = field.reflect_ref().as_bit_field().map_err(|_| {
            EncodeError::SerializerFault {
                reason: Cow::Borrowed("bit-fields container holds a non-bit-field"),
            }
        })?;
        acc = (acc << field.bit_len()) | u64::from(field.raw_bits());
    }

    match value.total_bits() {
        8 => chain.encode(&(acc as u8), out),
        16 => chain.encode(&(acc as u16), out),
        32 => chain.encode(&(acc as u32), out),
        _ => Err(EncodeError::SerializerFault {
            reason: Cow::Borrowed("bit-fields container has a non-byte total width"),
        }),
    }
}

fn decode_bit_fields(
    value: &mut dyn BitFields,
    cursor: &mut ByteCursor<'_>,
    chain: &SerializerChain<'_>,
) -> Result<(), DecodeError> {
    let total = value.total_bits();
    let acc: u64 = match total {
        8 => {
            let mut raw = 0_u8;
            chain.decode(&mut raw, cursor)?;
            u64::from(raw)
        }
        16 => {
            let mut raw = 0_u16;
            chain.decode(&mut raw, cursor)?;
            u64::from(raw)
        }
        32 => {
            let mut raw = 0_u32;
            chain.decode(&mut raw, cursor)?;
            u64::from(raw)
        }
        _ => {
            return Err(DecodeError::SerializerFault {
                reason: Cow::Borrowed("bit-fields container has a non-byte total width"),
            });
        }
    };

    // unpack most-significant field first
    let mut shift = total;
    for index in 0..value.field_len() {
        let field = value.field_at_mut(index).expect("valid index");
        let field = field.reflect_mut().as_bit_field().map_err(|_| {
            DecodeError::SerializerFault {
                reason: Cow::Borrowed("bit-fields container holds a non-bit-field"),
            }
        })?;

        let len = field.bit_len();
        shift = shift.checked_sub(len).ok_or(DecodeError::SerializerFault {
            reason: Cow::Borrowed("bit-fields container wider than its declared total"),
        })?;
        let mask = (1_u64 << len) - 1;
        field.set_raw_bits(((acc >> shift) & mask) as u32);
    }
    Ok(())
}

// -----------------------------------------------------------------------------
// FloatSerializer

/// The chain fallback for `f32`/`f64`.
///
/// [`NetPackSerializer`] deliberately leaves floats unhandled; this serializer
/// picks them up further down the chain and delegates their IEEE-754 bit
/// patterns as `u32`/`u64`.
pub struct FloatSerializer;

impl Serializer for FloatSerializer {
    fn try_encode(
        &self,
        value: &dyn Reflect,
        out: &mut Vec<u8>,
        chain: &SerializerChain<'_>,
        _state: Option<&RefCell<dyn Any>>,
    ) -> Option<Result<(), EncodeError>> {
        if let Some(v) = value.downcast_ref::<f32>() {
            return Some(chain.encode(&v.to_bits(), out));
        }
        if let Some(v) = value.downcast_ref::<f64>() {
            return Some(chain.encode(&v.to_bits(), out));
        }
        None
    }

    fn try_decode(
        &self,
        value: &mut dyn Reflect,
        cursor: &mut ByteCursor<'_>,
        chain: &SerializerChain<'_>,
        _state: Option<&RefCell<dyn Any>>,
    ) -> Option<Result<(), DecodeError>> {
        if let Some(v) = value.downcast_mut::<f32>() {
            let mut raw = 0_u32;
            return Some(chain.decode(&mut raw, cursor).map(|()| *v = f32::from_bits(raw)));
        }
        if let Some(v) = value.downcast_mut::<f64>() {
            let mut raw = 0_u64;
            return Some(chain.decode(&mut raw, cursor).map(|()| *v = f64::from_bits(raw)));
        }
        None
    }
}

// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    use fieldwire_reflect::bits::{I4, U3, U4, U12, U17};
    use fieldwire_reflect::derive::Reflect;

    use crate::{deserialize, serialize};

    #[test]
    fn bool_wire_image() {
        assert_eq!(serialize(&false).unwrap(), [0x00]);
        assert_eq!(serialize(&true).unwrap(), [0x01]);

        let mut value = false;
        deserialize(&mut value, &mut ByteCursor::new(&[0x01])).unwrap();
        assert!(value);

        let err = deserialize(&mut value, &mut ByteCursor::new(&[0x02])).unwrap_err();
        assert_eq!(err, DecodeError::InvalidValue { type_path: "bool" });
    }

    #[test]
    fn integers_are_big_endian() {
        assert_eq!(serialize(&0x12345678_u32).unwrap(), [0x12, 0x34, 0x56, 0x78]);
        assert_eq!(serialize(&0x1234_u16).unwrap(), [0x12, 0x34]);
        assert_eq!(serialize(&-2_i8).unwrap(), [0xFE]);
        assert_eq!(
            serialize(&-2_i64).unwrap(),
            [0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFE]
        );

        let mut value = 0_u32;
        deserialize(&mut value, &mut ByteCursor::new(&[0x12, 0x34, 0x56, 0x78])).unwrap();
        assert_eq!(value, 0x12345678);
    }

    #[test]
    fn truncated_input_is_an_error() {
        let mut value = 0_u32;
        let err = deserialize(&mut value, &mut ByteCursor::new(&[0x12, 0x34])).unwrap_err();
        assert_eq!(
            err,
            DecodeError::InputTruncated {
                needed: 4,
                remaining: 2,
            }
        );
    }

    #[derive(Reflect, Debug, PartialEq)]
    struct Header {
        version: u16,
        length: u32,
    }

    #[test]
    fn struct_fields_follow_declaration_order() {
        let header = Header {
            version: 2,
            length: 0x12345678,
        };

        let bytes = serialize(&header).unwrap();
        assert_eq!(bytes, [0x00, 0x02, 0x12, 0x34, 0x56, 0x78]);

        let mut decoded = Header {
            version: 0,
            length: 0,
        };
        let mut cursor = ByteCursor::new(&bytes);
        deserialize(&mut decoded, &mut cursor).unwrap();
        assert_eq!(decoded, header);
        assert!(cursor.is_empty());
    }

    #[test]
    fn arrays_encode_element_wise() {
        let values: [u16; 3] = [1, 2, 3];

        let bytes = serialize(&values).unwrap();
        assert_eq!(bytes, [0x00, 0x01, 0x00, 0x02, 0x00, 0x03]);

        let mut decoded = [0_u16; 3];
        deserialize(&mut decoded, &mut ByteCursor::new(&bytes)).unwrap();
        assert_eq!(decoded, values);

        // early exit: the second element fails on truncated input
        let err = deserialize(&mut decoded, &mut ByteCursor::new(&bytes[..3])).unwrap_err();
        assert_eq!(
            err,
            DecodeError::InputTruncated {
                needed: 2,
                remaining: 1,
            }
        );
    }

    #[derive(Reflect, Debug, PartialEq)]
    #[repr(u16)]
    enum Opcode {
        Ping = 1,
        Data = 2,
        Close = 100,
    }

    #[test]
    fn enums_encode_as_their_repr() {
        assert_eq!(serialize(&Opcode::Close).unwrap(), [0x00, 0x64]);

        let mut value = Opcode::Ping;
        deserialize(&mut value, &mut ByteCursor::new(&[0x00, 0x02])).unwrap();
        assert_eq!(value, Opcode::Data);
    }

    #[test]
    fn unknown_discriminant_is_invalid() {
        let mut value = Opcode::Ping;
        let err = deserialize(&mut value, &mut ByteCursor::new(&[0x00, 0x03])).unwrap_err();
        assert!(matches!(err, DecodeError::InvalidValue { .. }));
        // the value is untouched
        assert_eq!(value, Opcode::Ping);
    }

    #[derive(Reflect)]
    #[reflect(bits)]
    struct Packed {
        a: U3,
        b: U17,
        c: U12,
    }

    #[test]
    fn bit_fields_pack_msb_first() {
        let packed = Packed {
            a: U3::new(0b001),
            b: U17::new(0x1FFFF),
            c: U12::new(0b1010_1010_1010),
        };

        let bytes = serialize(&packed).unwrap();
        assert_eq!(bytes, [0x3F, 0xFF, 0xFA, 0xAA]);

        let mut decoded = Packed {
            a: U3::new(0),
            b: U17::new(0),
            c: U12::new(0),
        };
        deserialize(&mut decoded, &mut ByteCursor::new(&bytes)).unwrap();
        assert_eq!(decoded.a.get(), 0b001);
        assert_eq!(decoded.b.get(), 0x1FFFF);
        assert_eq!(decoded.c.get(), 0b1010_1010_1010);
    }

    #[derive(Reflect)]
    #[reflect(bits)]
    struct SignedPacked {
        kind: U4,
        level: I4,
    }

    #[test]
    fn signed_bit_fields_round_trip() {
        let packed = SignedPacked {
            kind: U4::new(0b1001),
            level: I4::new(-3),
        };

        let bytes = serialize(&packed).unwrap();
        // -3 in 4 bits is 0b1101
        assert_eq!(bytes, [0b1001_1101]);

        let mut decoded = SignedPacked {
            kind: U4::new(0),
            level: I4::new(0),
        };
        deserialize(&mut decoded, &mut ByteCursor::new(&bytes)).unwrap();
        assert_eq!(decoded.kind.get(), 0b1001);
        assert_eq!(decoded.level.get(), -3);
    }

    #[test]
    fn floats_fall_through_netpack() {
        let netpack = NetPackSerializer;
        let serializers = [&netpack as &dyn Serializer];
        let chain = SerializerChain::new(&serializers);

        let mut out = Vec::new();
        let err = chain.encode(&1.5_f32, &mut out).unwrap_err();
        assert_eq!(err, EncodeError::UnhandledType { type_path: "f32" });
    }

    /// Claims every value and writes a single `0xEE`; a catch-all tail.
    struct NaiveSerializer;

    impl Serializer for NaiveSerializer {
        fn try_encode(
            &self,
            _value: &dyn Reflect,
            out: &mut Vec<u8>,
            _chain: &SerializerChain<'_>,
            _state: Option<&RefCell<dyn Any>>,
        ) -> Option<Result<(), EncodeError>> {
            out.push(0xEE);
            Some(Ok(()))
        }

        fn try_decode(
            &self,
            _value: &mut dyn Reflect,
            _cursor: &mut ByteCursor<'_>,
            _chain: &SerializerChain<'_>,
            _state: Option<&RefCell<dyn Any>>,
        ) -> Option<Result<(), DecodeError>> {
            None
        }
    }

    #[test]
    fn fallback_only_handles_what_the_front_skips() {
        let chain = SerializerChain::new(&[&NetPackSerializer, &NaiveSerializer]);

        // floats fall past NetPack to the fallback
        let mut out = Vec::new();
        chain.encode(&1.5_f32, &mut out).unwrap();
        assert_eq!(out, [0xEE]);

        // integers never reach it, even though it would accept them
        out.clear();
        chain.encode(&0x12_u8, &mut out).unwrap();
        assert_eq!(out, [0x12]);
    }

    #[test]
    fn floats_encode_through_fallback() {
        let bytes = serialize(&1.5_f32).unwrap();
        assert_eq!(bytes, 1.5_f32.to_bits().to_be_bytes());

        let mut value = 0.0_f64;
        let image = core::f64::consts::PI.to_bits().to_be_bytes();
        deserialize(&mut value, &mut ByteCursor::new(&image)).unwrap();
        assert_eq!(value, core::f64::consts::PI);
    }

    #[derive(Reflect, Debug, PartialEq)]
    struct Inner {
        flag: bool,
        samples: [i16; 2],
    }

    #[derive(Reflect, Debug, PartialEq)]
    struct Middle {
        op: Opcode,
        inner: Inner,
    }

    #[derive(Reflect, Debug, PartialEq)]
    struct Outer {
        id: u8,
        middle: Middle,
        tail: f32,
    }

    #[test]
    fn nested_aggregates_round_trip() {
        let outer = Outer {
            id: 7,
            middle: Middle {
                op: Opcode::Data,
                inner: Inner {
                    flag: true,
                    samples: [-1, 0x0203],
                },
            },
            tail: 0.25,
        };

        let bytes = serialize(&outer).unwrap();
        let expected = vec![
            0x07, // id
            0x00, 0x02, // op
            0x01, // flag
            0xFF, 0xFF, 0x02, 0x03, // samples
            0x3E, 0x80, 0x00, 0x00, // 0.25f32
        ];
        assert_eq!(bytes, expected);

        let mut decoded = Outer {
            id: 0,
            middle: Middle {
                op: Opcode::Ping,
                inner: Inner {
                    flag: false,
                    samples: [0, 0],
                },
            },
            tail: 0.0,
        };
        deserialize(&mut decoded, &mut ByteCursor::new(&bytes)).unwrap();
        assert_eq!(decoded, outer);
    }
}
