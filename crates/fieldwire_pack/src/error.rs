use alloc::borrow::Cow;
use core::fmt;

// -----------------------------------------------------------------------------
// EncodeError

/// The error type returned by serialization.
///
/// Encoding has only two failure domains: no serializer in the chain handled
/// a type, or a stateful serializer hit a fatal condition. Everything else a
/// serializer can express about a value is a valid encoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EncodeError {
    /// No serializer in the chain defined a handler for the type.
    ///
    /// This indicates a misassembled chain, not invalid data.
    UnhandledType { type_path: &'static str },

    /// A serializer hit a fatal condition and halted the call.
    ///
    /// Typical causes are a missing or wrong-typed state slot, or an
    /// exhausted stateful resource such as a sequence counter. Output already
    /// produced before the fault is unspecified.
    SerializerFault { reason: Cow<'static, str> },
}

impl fmt::Display for EncodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnhandledType { type_path } => {
                write!(f, "no serializer in the chain handles `{type_path}`")
            }
            Self::SerializerFault { reason } => {
                write!(f, "serializer fault: {reason}")
            }
        }
    }
}

impl core::error::Error for EncodeError {}

// -----------------------------------------------------------------------------
// DecodeError

/// The error type returned by deserialization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// The input ended before a fixed-width read completed.
    ///
    /// The cursor is left where the failed read started.
    InputTruncated { needed: usize, remaining: usize },

    /// A byte pattern that no value of the target type encodes to.
    ///
    /// Produced by a non-boolean `bool` byte or an undeclared enum
    /// discriminant.
    InvalidValue { type_path: &'static str },

    /// The input decoded cleanly but contradicts the serializer's state,
    /// such as an out-of-sequence counter.
    UnexpectedInputData { reason: Cow<'static, str> },

    /// No serializer in the chain defined a handler for the type.
    UnhandledType { type_path: &'static str },

    /// A serializer hit a fatal condition and halted the call.
    SerializerFault { reason: Cow<'static, str> },
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InputTruncated { needed, remaining } => {
                write!(f, "input truncated: needed {needed} bytes, {remaining} remain")
            }
            Self::InvalidValue { type_path } => {
                write!(f, "invalid value for `{type_path}`")
            }
            Self::UnexpectedInputData { reason } => {
                write!(f, "unexpected input data: {reason}")
            }
            Self::UnhandledType { type_path } => {
                write!(f, "no serializer in the chain handles `{type_path}`")
            }
            Self::SerializerFault { reason } => {
                write!(f, "serializer fault: {reason}")
            }
        }
    }
}

impl core::error::Error for DecodeError {}
