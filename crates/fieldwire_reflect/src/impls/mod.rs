//! Provide some utilities for implementing reflection traits.
//!
//! - [`concat`]: An efficient string concatenation function.
//! - [`NonGenericTypeInfoCell`]: Used to implement [`Typed`] for non-generic types.
//! - [`GenericTypePathCell`]: Used to implement [`TypePath`] for generic types.
//! - [`GenericTypeInfoCell`]: Used to implement [`Typed`] for generic types.
//! - `xxx_try_apply`: Used to implement [`Reflect::try_apply`] (e.g. [`array_try_apply`]).
//! - `xxx_partial_eq`: Used to implement [`Reflect::reflect_partial_eq`] (e.g. [`array_partial_eq`]).
//! - `xxx_debug`: Used to implement [`Reflect::reflect_debug`] (e.g. [`array_debug`]).
//!
//! ## Implemented Menu
//!
//! - `bool`, `u8`-`u64`, `i8`-`i64`, `f32`, `f64`
//! - `[T; N]`
//! - the bit-field values in [`crate::bits`]
//!
//! [`Reflect::try_apply`]: crate::Reflect::try_apply
//! [`Reflect::reflect_partial_eq`]: crate::Reflect::reflect_partial_eq
//! [`Reflect::reflect_debug`]: crate::Reflect::reflect_debug
//! [`TypePath`]: crate::info::TypePath
//! [`Typed`]: crate::info::Typed

// -----------------------------------------------------------------------------
// Modules

mod array;
mod cell;
mod helpers;
mod primitives;

// -----------------------------------------------------------------------------
// Exports

pub use cell::{GenericTypeInfoCell, GenericTypePathCell, NonGenericTypeInfoCell};

pub use helpers::*;

/// An efficient string concatenation function.
///
/// This is usually used for the implementation of `TypePath`.
///
/// # Example
///
/// ```
/// use fieldwire_reflect::impls;
///
/// let s = impls::concat(&["module", "::", "name", "<", "T", ">"]);
///
/// assert_eq!(s, "module::name<T>");
/// ```
///
/// Inline is prohibited here to reduce compilation time.
#[inline(never)]
pub fn concat(arr: &[&str]) -> ::alloc::string::String {
    let mut len = 0usize;
    for &item in arr {
        len += item.len();
    }
    let mut res = ::alloc::string::String::with_capacity(len);
    for &item in arr {
        res.push_str(item);
    }
    res
}
