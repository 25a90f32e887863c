//! Provide interfaces for data operation.
//!
//! ## Menu
//!
//! The following are the subtraits of [`Reflect`], which provide data access
//! methods for the different kinds.
//!
//! - [`Struct`]: For struct (e.g. `A{ .. }`) .
//! - [`Enum`]: For fieldless enum (e.g. `enum Opcode { Ping = 1 }`) .
//! - [`Array`]: For array (e.g. `[i32; 5]`) .
//! - [`BitFields`]: For a bit-fields container (a struct of bit-field values).
//! - [`BitField`]: For a single fixed-bit-width value (e.g. [`U3`]).
//!
//! Dispatch over all of them at once with [`ReflectRef`] / [`ReflectMut`],
//! obtained from [`reflect_ref`] / [`reflect_mut`].
//!
//! The free functions [`for_each_field`], [`for_each_field_meta`],
//! [`zip_fields`] and [`copy_matching_fields`] cover the common whole-struct
//! walks.
//!
//! [`Reflect`]: crate::Reflect
//! [`U3`]: crate::bits::U3
//! [`reflect_ref`]: crate::Reflect::reflect_ref
//! [`reflect_mut`]: crate::Reflect::reflect_mut

// -----------------------------------------------------------------------------
// Modules

mod apply_error;
mod array_ops;
mod bits_ops;
mod enum_ops;
mod kind;
mod struct_ops;

// -----------------------------------------------------------------------------
// Exports

pub use apply_error::ApplyError;

pub use kind::{ReflectMut, ReflectRef};

pub use array_ops::{Array, ArrayItemIter};
pub use bits_ops::{BitField, BitFields};
pub use enum_ops::Enum;
pub use struct_ops::{
    Struct, StructFieldIter, copy_matching_fields, for_each_field, for_each_field_meta,
    zip_fields,
};
