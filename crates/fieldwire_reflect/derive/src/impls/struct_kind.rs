use proc_macro2::{Ident, Span, TokenStream};
use quote::quote;

use super::common::{impl_trait_reflect, impl_trait_type_path, impl_trait_typed};
use crate::derive_data::ReflectStruct;

/// Implement full reflection for a named-field struct.
pub(super) fn impl_struct(info: &ReflectStruct) -> TokenStream {
    let ident = info.ident;

    // trait: TypePath
    let type_path_tokens = impl_trait_type_path(ident);

    // trait: Typed
    let typed_tokens = impl_trait_typed(ident, struct_info_tokens(info));

    // trait: Struct
    let struct_tokens = impl_trait_struct(info);

    // trait: Reflect
    let kind = Ident::new("Struct", Span::call_site());
    let reflect_tokens = impl_trait_reflect(
        ident,
        &kind,
        quote! {
            fn try_apply(
                &mut self,
                value: &dyn fieldwire_reflect::Reflect,
            ) -> ::core::result::Result<(), fieldwire_reflect::ops::ApplyError> {
                fieldwire_reflect::impls::struct_try_apply(self, value)
            }

            #[inline]
            fn reflect_partial_eq(
                &self,
                other: &dyn fieldwire_reflect::Reflect,
            ) -> ::core::option::Option<bool> {
                fieldwire_reflect::impls::struct_partial_eq(self, other)
            }
        },
    );

    quote! {
        #type_path_tokens

        #typed_tokens

        #struct_tokens

        #reflect_tokens
    }
}

/// Generate the `TypeInfo` expression for a named-field struct.
fn struct_info_tokens(info: &ReflectStruct) -> TokenStream {
    let field_names: Vec<String> = info.fields.iter().map(|f| f.ident.to_string()).collect();
    let field_types: Vec<_> = info.fields.iter().map(|f| f.ty).collect();

    quote! {
        fieldwire_reflect::info::TypeInfo::Struct(
            fieldwire_reflect::info::StructInfo::new::<Self>(&[
                #(fieldwire_reflect::info::NamedField::new::<#field_types>(#field_names),)*
            ])
        )
    }
}

/// Generate `Struct` trait implementation tokens.
///
/// Shared with the bit-fields container derive, whose field access is the
/// same match-based lookup.
pub(super) fn impl_trait_struct(info: &ReflectStruct) -> TokenStream {
    let ident = info.ident;

    let field_names: Vec<String> = info.fields.iter().map(|f| f.ident.to_string()).collect();
    let field_idents: Vec<&Ident> = info.fields.iter().map(|f| f.ident).collect();
    let field_indices: Vec<usize> = (0..info.fields.len()).collect();
    let field_count = info.fields.len();

    quote! {
        impl fieldwire_reflect::ops::Struct for #ident {
            fn field(&self, name: &str) -> ::core::option::Option<&dyn fieldwire_reflect::Reflect> {
                match name {
                    #(#field_names => ::core::option::Option::Some(&self.#field_idents),)*
                    _ => ::core::option::Option::None,
                }
            }

            fn field_mut(
                &mut self,
                name: &str,
            ) -> ::core::option::Option<&mut dyn fieldwire_reflect::Reflect> {
                match name {
                    #(#field_names => ::core::option::Option::Some(&mut self.#field_idents),)*
                    _ => ::core::option::Option::None,
                }
            }

            fn field_at(
                &self,
                index: usize,
            ) -> ::core::option::Option<&dyn fieldwire_reflect::Reflect> {
                match index {
                    #(#field_indices => ::core::option::Option::Some(&self.#field_idents),)*
                    _ => ::core::option::Option::None,
                }
            }

            fn field_at_mut(
                &mut self,
                index: usize,
            ) -> ::core::option::Option<&mut dyn fieldwire_reflect::Reflect> {
                match index {
                    #(#field_indices => ::core::option::Option::Some(&mut self.#field_idents),)*
                    _ => ::core::option::Option::None,
                }
            }

            fn name_at(&self, index: usize) -> ::core::option::Option<&str> {
                match index {
                    #(#field_indices => ::core::option::Option::Some(#field_names),)*
                    _ => ::core::option::Option::None,
                }
            }

            #[inline]
            fn field_len(&self) -> usize {
                #field_count
            }

            #[inline]
            fn iter_fields(&self) -> fieldwire_reflect::ops::StructFieldIter<'_> {
                fieldwire_reflect::ops::StructFieldIter::new(self)
            }
        }
    }
}
