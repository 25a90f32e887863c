//! A trait-object reflection model for wire-oriented aggregate types.
//!
//! `fieldwire_reflect` makes the fields of a declared type programmatically
//! accessible by name, type and position, without hand-written accessor code.
//! [`#[derive(Reflect)]`](derive::Reflect) covers named-field structs,
//! fieldless enums and bit-fields containers; primitives and fixed arrays are
//! implemented by the crate itself.
//!
//! ## Menu
//!
//! - [`Reflect`]: the foundational trait, with downcasting on `dyn Reflect`.
//! - [`info`]: compile-time type information ([`TypePath`], [`Typed`],
//!   [`TypeInfo`] and the per-kind info containers).
//! - [`ops`]: data-operation subtraits ([`Struct`], [`Enum`], [`Array`],
//!   [`BitField`], [`BitFields`]) and the free functions built on them
//!   ([`for_each_field`], [`zip_fields`], [`copy_matching_fields`]).
//! - [`bits`]: fixed-bit-width value types with truncating-write and
//!   sign-extending-read semantics ([`U1`]..[`U32`], [`I2`]..[`I32`]).
//! - [`impls`]: utilities for implementing the reflection traits by hand.
//!
//! Field order is declaration order, permanently: iteration order, metadata
//! order and the wire order used by `fieldwire_pack` all agree.
//!
//! [`TypePath`]: info::TypePath
//! [`Typed`]: info::Typed
//! [`TypeInfo`]: info::TypeInfo
//! [`Struct`]: ops::Struct
//! [`Enum`]: ops::Enum
//! [`Array`]: ops::Array
//! [`BitField`]: ops::BitField
//! [`BitFields`]: ops::BitFields
//! [`for_each_field`]: ops::for_each_field
//! [`zip_fields`]: ops::zip_fields
//! [`copy_matching_fields`]: ops::copy_matching_fields
//! [`U1`]: bits::U1
//! [`U32`]: bits::U32
//! [`I2`]: bits::I2
//! [`I32`]: bits::I32

extern crate alloc;

// Required by the derive macro when used inside this crate.
extern crate self as fieldwire_reflect;

// -----------------------------------------------------------------------------
// Modules

pub mod bits;
pub mod impls;
pub mod info;
pub mod ops;

mod hash;
mod reflection;

// -----------------------------------------------------------------------------
// Exports

pub use reflection::Reflect;

/// Not public API. Paths emitted by the derive macro.
#[doc(hidden)]
pub mod __macro_exports {
    pub use alloc::boxed::Box;
}

/// Re-export of the derive macro.
///
/// ```
/// use fieldwire_reflect::derive::Reflect;
///
/// #[derive(Reflect)]
/// struct Packet {
///     kind: u8,
///     length: u16,
/// }
/// ```
pub mod derive {
    pub use fieldwire_reflect_derive::Reflect;
}
