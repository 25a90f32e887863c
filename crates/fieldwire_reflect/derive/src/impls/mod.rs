//! Token generation for each supported shape.

// -----------------------------------------------------------------------------
// Modules

mod bits_kind;
mod common;
mod enum_kind;
mod struct_kind;

// -----------------------------------------------------------------------------
// Internal API

use proc_macro2::TokenStream;

use crate::derive_data::ReflectDerive;

/// Generate the full set of trait implementations for the parsed input.
pub(crate) fn reflect_impls(derive: &ReflectDerive) -> TokenStream {
    match derive {
        ReflectDerive::Struct(info) => struct_kind::impl_struct(info),
        ReflectDerive::BitFields(info) => bits_kind::impl_bit_fields(info),
        ReflectDerive::Enum(info) => enum_kind::impl_enum(info),
    }
}
