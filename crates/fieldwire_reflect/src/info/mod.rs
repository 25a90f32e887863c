//! Compile-time type information.
//!
//! # Menu
//!
//! - [`TypePath`], [`Typed`]: static path and info entry points.
//! - [`TypeInfo`]: the per-type metadata tree.
//! - [`StructInfo`], [`EnumInfo`], [`ArrayInfo`], [`BitFieldsInfo`],
//!   [`BitFieldInfo`], [`OpaqueInfo`]: per-kind containers.

mod array_info;
mod bits_info;
mod enum_info;
mod field_info;
mod opaque_info;
mod struct_info;
mod type_info;
mod type_path;
mod typed;

pub use array_info::ArrayInfo;
pub use bits_info::{BitFieldInfo, BitFieldsInfo};
pub use enum_info::{EnumInfo, IntRepr, VariantInfo};
pub use field_info::NamedField;
pub use opaque_info::OpaqueInfo;
pub use struct_info::StructInfo;
pub use type_info::{ReflectKind, ReflectKindError, TypeInfo};
pub use type_path::{DynamicTypePath, Type, TypePath, TypePathTable};
pub use typed::{DynamicTyped, Typed};

pub(crate) use type_path::impl_type_fn;
