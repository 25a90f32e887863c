//! Derive macro for the `fieldwire_reflect` reflection traits.
#![allow(clippy::std_instead_of_core, reason = "proc-macro lib")]
#![allow(clippy::std_instead_of_alloc, reason = "proc-macro lib")]

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

static REFLECT_ATTRIBUTE_NAME: &str = "reflect";

// -----------------------------------------------------------------------------
// Modules

mod derive_data;
mod impls;

// -----------------------------------------------------------------------------
// Macros

/// # Full Reflection Derivation
///
/// `#[derive(Reflect)]` automatically implements the following traits:
///
/// - `TypePath`
/// - `Typed`
/// - `Reflect`
/// - `Struct` (for `struct T { ... }`)
/// - `Enum` (for fieldless `enum T { ... }`)
/// - `Struct` + `BitFields` (for `#[reflect(bits)] struct T { ... }`)
///
/// Supported shapes:
///
/// - Structs with named fields, every field type itself reflectable.
/// - Enums whose variants carry no data. The wire representation is taken
///   from `#[repr(u8)]`-style attributes and defaults to `i32`; explicit
///   discriminants must be integer literals, implicit ones continue from the
///   previous variant.
/// - Bit-fields containers: structs marked `#[reflect(bits)]` whose every
///   field is a fixed-bit-width value. The field widths must total exactly
///   8, 16 or 32 bits; any other total is a compile error at the declaration.
///
/// Generic types are not supported.
///
/// ## Example
///
/// ```rust, ignore
/// #[derive(Reflect)]
/// struct Header {
///     version: u16,
///     length: u32,
/// }
///
/// #[derive(Reflect)]
/// #[repr(u8)]
/// enum Opcode {
///     Ping = 1,
///     Data, // = 2
/// }
///
/// #[derive(Reflect)]
/// #[reflect(bits)]
/// struct Flags {
///     kind: U3,
///     index: U5,
/// }
/// ```
#[proc_macro_derive(Reflect, attributes(reflect))]
pub fn derive_reflect(input: TokenStream) -> TokenStream {
    let ast = parse_macro_input!(input as DeriveInput);

    match derive_data::ReflectDerive::from_input(&ast) {
        Ok(derive) => impls::reflect_impls(&derive).into(),
        Err(err) => err.into_compile_error().into(),
    }
}
