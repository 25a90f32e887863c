use alloc::vec::Vec;
use core::any::Any;
use core::cell::RefCell;

use fieldwire_reflect::Reflect;

use crate::cursor::ByteCursor;
use crate::error::{DecodeError, EncodeError};

// -----------------------------------------------------------------------------
// Serializer trait

/// A single wire-format handler in a [`SerializerChain`].
///
/// A serializer decides per value whether it handles the value's exact type:
///
/// - `None` means "no handler defined here", and must be returned before any
///   byte is produced or consumed; the chain then asks the next serializer.
/// - `Some(result)` claims the value; the chain stops and returns `result`.
///
/// Handlers recurse by calling [`SerializerChain::encode`] /
/// [`SerializerChain::decode`] on the chain they were given, never on
/// themselves directly. Resolution for the nested value restarts at the front
/// of the chain, so an earlier serializer can override the handling of any
/// nested type.
///
/// `state` is the serializer's own state slot, aligned by position via
/// [`SerializerChain::with_states`]. Stateless serializers ignore it; stateful
/// ones downcast it and report a missing or wrong-typed slot as a
/// `SerializerFault`.
pub trait Serializer {
    /// Appends the encoding of `value` to `out`, if this serializer handles
    /// the value's type.
    fn try_encode(
        &self,
        value: &dyn Reflect,
        out: &mut Vec<u8>,
        chain: &SerializerChain<'_>,
        state: Option<&RefCell<dyn Any>>,
    ) -> Option<Result<(), EncodeError>>;

    /// Reads the encoding of `value` from `cursor` into `value`, if this
    /// serializer handles the value's type.
    fn try_decode(
        &self,
        value: &mut dyn Reflect,
        cursor: &mut ByteCursor<'_>,
        chain: &SerializerChain<'_>,
        state: Option<&RefCell<dyn Any>>,
    ) -> Option<Result<(), DecodeError>>;
}

// -----------------------------------------------------------------------------
// SerializerChain

/// An ordered list of serializers with first-match-wins resolution.
///
/// `encode` and `decode` walk the list front to back and return the first
/// `Some` result. When no serializer claims the type, the call fails with
/// `UnhandledType`; that is a misassembled chain, never valid data.
///
/// # Examples
///
/// ```
/// use fieldwire_pack::{ByteCursor, NetPackSerializer, Serializer, SerializerChain};
///
/// let netpack = NetPackSerializer;
/// let serializers = [&netpack as &dyn Serializer];
/// let chain = SerializerChain::new(&serializers);
///
/// let mut out = Vec::new();
/// chain.encode(&0x1234_u16, &mut out).unwrap();
/// assert_eq!(out, [0x12, 0x34]);
///
/// let mut value = 0_u16;
/// chain.decode(&mut value, &mut ByteCursor::new(&out)).unwrap();
/// assert_eq!(value, 0x1234);
/// ```
pub struct SerializerChain<'a> {
    serializers: &'a [&'a dyn Serializer],
    states: &'a [Option<&'a RefCell<dyn Any>>],
}

impl<'a> SerializerChain<'a> {
    /// Creates a chain with no serializer states.
    #[inline]
    pub const fn new(serializers: &'a [&'a dyn Serializer]) -> Self {
        Self {
            serializers,
            states: &[],
        }
    }

    /// Creates a chain whose serializers receive state slots.
    ///
    /// Slots align by position: `states[i]` is handed to `serializers[i]`.
    /// Serializers past the end of `states` receive `None`.
    #[inline]
    pub const fn with_states(
        serializers: &'a [&'a dyn Serializer],
        states: &'a [Option<&'a RefCell<dyn Any>>],
    ) -> Self {
        Self {
            serializers,
            states,
        }
    }

    /// Appends the encoding of `value` to `out`.
    ///
    /// Resolution starts at the front of the chain, also for every recursive
    /// call a handler makes for nested values.
    pub fn encode(&self, value: &dyn Reflect, out: &mut Vec<u8>) -> Result<(), EncodeError> {
        for (index, serializer) in self.serializers.iter().enumerate() {
            let state = self.states.get(index).copied().flatten();
            if let Some(result) = serializer.try_encode(value, out, self, state) {
                return result;
            }
        }
        Err(EncodeError::UnhandledType {
            type_path: value.reflect_type_path(),
        })
    }

    /// Reads the encoding of `value` from `cursor` into `value`.
    ///
    /// On failure the cursor is valid but its position is unspecified; it
    /// never moves past the end of the input.
    pub fn decode(
        &self,
        value: &mut dyn Reflect,
        cursor: &mut ByteCursor<'_>,
    ) -> Result<(), DecodeError> {
        for (index, serializer) in self.serializers.iter().enumerate() {
            let state = self.states.get(index).copied().flatten();
            if let Some(result) = serializer.try_decode(value, cursor, self, state) {
                return result;
            }
        }
        Err(DecodeError::UnhandledType {
            type_path: value.reflect_type_path(),
        })
    }
}

// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::borrow::Cow;
    use alloc::vec;

    use fieldwire_reflect::derive::Reflect;

    /// Big-endian `u8`/`u16` handler, the minimal substrate for the tests.
    struct BeInt;

    impl Serializer for BeInt {
        fn try_encode(
            &self,
            value: &dyn Reflect,
            out: &mut Vec<u8>,
            _chain: &SerializerChain<'_>,
            _state: Option<&RefCell<dyn Any>>,
        ) -> Option<Result<(), EncodeError>> {
            if let Some(v) = value.downcast_ref::<u8>() {
                out.push(*v);
                return Some(Ok(()));
            }
            if let Some(v) = value.downcast_ref::<u16>() {
                out.extend_from_slice(&v.to_be_bytes());
                return Some(Ok(()));
            }
            None
        }

        fn try_decode(
            &self,
            value: &mut dyn Reflect,
            cursor: &mut ByteCursor<'_>,
            _chain: &SerializerChain<'_>,
            _state: Option<&RefCell<dyn Any>>,
        ) -> Option<Result<(), DecodeError>> {
            if let Some(v) = value.downcast_mut::<u8>() {
                return Some(match cursor.take_byte() {
                    Some(byte) => {
                        *v = byte;
                        Ok(())
                    }
                    None => Err(DecodeError::InputTruncated {
                        needed: 1,
                        remaining: 0,
                    }),
                });
            }
            if let Some(v) = value.downcast_mut::<u16>() {
                return Some(match cursor.take_array::<2>() {
                    Some(bytes) => {
                        *v = u16::from_be_bytes(bytes);
                        Ok(())
                    }
                    None => Err(DecodeError::InputTruncated {
                        needed: 2,
                        remaining: cursor.remaining(),
                    }),
                });
            }
            None
        }
    }

    /// Encodes `u8` as `value ^ 0x80`; proves which serializer ran.
    struct XorByte;

    impl Serializer for XorByte {
        fn try_encode(
            &self,
            value: &dyn Reflect,
            out: &mut Vec<u8>,
            _chain: &SerializerChain<'_>,
            _state: Option<&RefCell<dyn Any>>,
        ) -> Option<Result<(), EncodeError>> {
            let v = value.downcast_ref::<u8>()?;
            out.push(*v ^ 0x80);
            Some(Ok(()))
        }

        fn try_decode(
            &self,
            value: &mut dyn Reflect,
            cursor: &mut ByteCursor<'_>,
            _chain: &SerializerChain<'_>,
            _state: Option<&RefCell<dyn Any>>,
        ) -> Option<Result<(), DecodeError>> {
            let v = value.downcast_mut::<u8>()?;
            Some(match cursor.take_byte() {
                Some(byte) => {
                    *v = byte ^ 0x80;
                    Ok(())
                }
                None => Err(DecodeError::InputTruncated {
                    needed: 1,
                    remaining: 0,
                }),
            })
        }
    }

    /// Handles `u16` by splitting it into two `u8` halves delegated through
    /// the chain.
    struct SplitU16;

    impl Serializer for SplitU16 {
        fn try_encode(
            &self,
            value: &dyn Reflect,
            out: &mut Vec<u8>,
            chain: &SerializerChain<'_>,
            _state: Option<&RefCell<dyn Any>>,
        ) -> Option<Result<(), EncodeError>> {
            let v = value.downcast_ref::<u16>()?;
            let [hi, lo] = v.to_be_bytes();
            Some(chain.encode(&hi, out).and_then(|()| chain.encode(&lo, out)))
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
    fn first_match_wins() {
        let chain = SerializerChain::new(&[&XorByte, &BeInt]);

        let mut out = Vec::new();
        chain.encode(&0x01_u8, &mut out).unwrap();
        // XorByte ran, not BeInt
        assert_eq!(out, [0x81]);

        let chain = SerializerChain::new(&[&BeInt, &XorByte]);
        out.clear();
        chain.encode(&0x01_u8, &mut out).unwrap();
        assert_eq!(out, [0x01]);
    }

    #[test]
    fn falls_through_to_later_serializer() {
        // XorByte does not handle u16; the chain moves on to BeInt.
        let chain = SerializerChain::new(&[&XorByte, &BeInt]);

        let mut out = Vec::new();
        chain.encode(&0x1234_u16, &mut out).unwrap();
        assert_eq!(out, [0x12, 0x34]);
    }

    #[test]
    fn recursion_restarts_at_front() {
        // SplitU16 delegates each half; resolution restarts at XorByte.
        let chain = SerializerChain::new(&[&XorByte, &SplitU16]);

        let mut out = Vec::new();
        chain.encode(&0x0102_u16, &mut out).unwrap();
        assert_eq!(out, [0x81, 0x82]);
    }

    #[test]
    fn no_match_is_an_error() {
        let chain = SerializerChain::new(&[&BeInt]);

        let mut out = Vec::new();
        let err = chain.encode(&1.5_f32, &mut out).unwrap_err();
        assert_eq!(err, EncodeError::UnhandledType { type_path: "f32" });
        assert!(out.is_empty());

        let mut value = 0_u32;
        let err = chain
            .decode(&mut value, &mut ByteCursor::new(&[0, 0, 0, 0]))
            .unwrap_err();
        assert_eq!(err, DecodeError::UnhandledType { type_path: "u32" });
    }

    // -------------------------------------------------------------------------
    // Stateful serializer

    #[derive(Reflect, PartialEq, Debug)]
    struct Frame {
        payload: u16,
    }

    struct SeqState {
        next: u8,
    }

    /// Prefixes every [`Frame`] with a monotonically increasing sequence
    /// byte, threaded through the chain-level state slot.
    struct Sequenced;

    impl Sequenced {
        fn counter<'s>(
            state: Option<&'s RefCell<dyn Any>>,
        ) -> Result<core::cell::RefMut<'s, dyn Any>, Cow<'static, str>> {
            let Some(state) = state else {
                return Err(Cow::Borrowed("sequence serializer needs a state slot"));
            };
            Ok(state.borrow_mut())
        }
    }

    impl Serializer for Sequenced {
        fn try_encode(
            &self,
            value: &dyn Reflect,
            out: &mut Vec<u8>,
            chain: &SerializerChain<'_>,
            state: Option<&RefCell<dyn Any>>,
        ) -> Option<Result<(), EncodeError>> {
            let frame = value.downcast_ref::<Frame>()?;

            let mut guard = match Self::counter(state) {
                Ok(guard) => guard,
                Err(reason) => return Some(Err(EncodeError::SerializerFault { reason })),
            };
            let Some(counter) = guard.downcast_mut::<SeqState>() else {
                return Some(Err(EncodeError::SerializerFault {
                    reason: Cow::Borrowed("sequence state slot has the wrong type"),
                }));
            };
            if counter.next == u8::MAX {
                return Some(Err(EncodeError::SerializerFault {
                    reason: Cow::Borrowed("sequence counter exhausted"),
                }));
            }

            out.push(counter.next);
            counter.next += 1;
            Some(chain.encode(&frame.payload, out))
        }

        fn try_decode(
            &self,
            value: &mut dyn Reflect,
            cursor: &mut ByteCursor<'_>,
            chain: &SerializerChain<'_>,
            state: Option<&RefCell<dyn Any>>,
        ) -> Option<Result<(), DecodeError>> {
            let frame = value.downcast_mut::<Frame>()?;

            let mut guard = match Self::counter(state) {
                Ok(guard) => guard,
                Err(reason) => return Some(Err(DecodeError::SerializerFault { reason })),
            };
            let Some(counter) = guard.downcast_mut::<SeqState>() else {
                return Some(Err(DecodeError::SerializerFault {
                    reason: Cow::Borrowed("sequence state slot has the wrong type"),
                }));
            };

            let Some(sequence) = cursor.take_byte() else {
                return Some(Err(DecodeError::InputTruncated {
                    needed: 1,
                    remaining: 0,
                }));
            };
            if sequence != counter.next {
                return Some(Err(DecodeError::UnexpectedInputData {
                    reason: Cow::Borrowed("out-of-sequence frame counter"),
                }));
            }
            counter.next += 1;
            Some(chain.decode(&mut frame.payload, cursor))
        }
    }

    #[test]
    fn stateful_counter_round_trip() {
        let state = RefCell::new(SeqState { next: 0 });
        let states: [Option<&RefCell<dyn Any>>; 1] = [Some(&state)];
        let chain = SerializerChain::with_states(&[&Sequenced, &BeInt], &states);

        let mut out = Vec::new();
        chain.encode(&Frame { payload: 0x1234 }, &mut out).unwrap();
        chain.encode(&Frame { payload: 0x5678 }, &mut out).unwrap();
        assert_eq!(out, [0x00, 0x12, 0x34, 0x01, 0x56, 0x78]);

        let read_state = RefCell::new(SeqState { next: 0 });
        let read_states: [Option<&RefCell<dyn Any>>; 1] = [Some(&read_state)];
        let chain = SerializerChain::with_states(&[&Sequenced, &BeInt], &read_states);

        let mut cursor = ByteCursor::new(&out);
        let mut frame = Frame { payload: 0 };
        chain.decode(&mut frame, &mut cursor).unwrap();
        assert_eq!(frame, Frame { payload: 0x1234 });
        chain.decode(&mut frame, &mut cursor).unwrap();
        assert_eq!(frame, Frame { payload: 0x5678 });
        assert!(cursor.is_empty());
    }

    #[test]
    fn out_of_sequence_input_is_rejected() {
        let state = RefCell::new(SeqState { next: 0 });
        let states: [Option<&RefCell<dyn Any>>; 1] = [Some(&state)];
        let chain = SerializerChain::with_states(&[&Sequenced, &BeInt], &states);

        // sequence byte claims 5, the counter expects 0
        let bytes = vec![0x05, 0x12, 0x34];
        let mut frame = Frame { payload: 0 };
        let err = chain
            .decode(&mut frame, &mut ByteCursor::new(&bytes))
            .unwrap_err();
        assert!(matches!(err, DecodeError::UnexpectedInputData { .. }));
    }

    #[test]
    fn exhausted_counter_is_fatal() {
        let state = RefCell::new(SeqState { next: u8::MAX });
        let states: [Option<&RefCell<dyn Any>>; 1] = [Some(&state)];
        let chain = SerializerChain::with_states(&[&Sequenced, &BeInt], &states);

        let mut out = Vec::new();
        let err = chain
            .encode(&Frame { payload: 0x1234 }, &mut out)
            .unwrap_err();
        assert!(matches!(err, EncodeError::SerializerFault { .. }));
        assert!(out.is_empty());
    }

    #[test]
    fn missing_state_slot_is_a_fault() {
        let chain = SerializerChain::new(&[&Sequenced, &BeInt]);

        let mut out = Vec::new();
        let err = chain
            .encode(&Frame { payload: 1 }, &mut out)
            .unwrap_err();
        assert!(matches!(err, EncodeError::SerializerFault { .. }));
    }
}
