use proc_macro2::{Ident, Span, TokenStream};
use quote::quote;

use super::common::{impl_trait_reflect, impl_trait_type_path, impl_trait_typed};
use crate::derive_data::ReflectEnum;

/// Implement full reflection for a fieldless enum.
pub(super) fn impl_enum(info: &ReflectEnum) -> TokenStream {
    let ident = info.ident;

    // trait: TypePath
    let type_path_tokens = impl_trait_type_path(ident);

    // trait: Typed
    let typed_tokens = impl_trait_typed(ident, enum_info_tokens(info));

    // trait: Enum
    let enum_tokens = impl_trait_enum(info);

    // trait: Reflect
    let kind = Ident::new("Enum", Span::call_site());
    let reflect_tokens = impl_trait_reflect(
        ident,
        &kind,
        quote! {
            fn try_apply(
                &mut self,
                value: &dyn fieldwire_reflect::Reflect,
            ) -> ::core::result::Result<(), fieldwire_reflect::ops::ApplyError> {
                fieldwire_reflect::impls::enum_try_apply(self, value)
            }

            #[inline]
            fn reflect_partial_eq(
                &self,
                other: &dyn fieldwire_reflect::Reflect,
            ) -> ::core::option::Option<bool> {
                fieldwire_reflect::impls::enum_partial_eq(self, other)
            }
        },
    );

    quote! {
        #type_path_tokens

        #typed_tokens

        #enum_tokens

        #reflect_tokens
    }
}

/// Generate the `TypeInfo` expression for a fieldless enum.
fn enum_info_tokens(info: &ReflectEnum) -> TokenStream {
    let repr = Ident::new(info.repr.variant_ident(), Span::call_site());
    let variant_names: Vec<String> = info.variants.iter().map(|v| v.ident.to_string()).collect();
    let discriminants: Vec<i64> = info.variants.iter().map(|v| v.discriminant).collect();

    quote! {
        fieldwire_reflect::info::TypeInfo::Enum(
            fieldwire_reflect::info::EnumInfo::new::<Self>(
                fieldwire_reflect::info::IntRepr::#repr,
                &[
                    #(fieldwire_reflect::info::VariantInfo::new(#variant_names, #discriminants),)*
                ],
            )
        )
    }
}

/// Generate `Enum` trait implementation tokens.
fn impl_trait_enum(info: &ReflectEnum) -> TokenStream {
    let ident = info.ident;

    let variant_idents: Vec<&Ident> = info.variants.iter().map(|v| v.ident).collect();
    let variant_names: Vec<String> = info.variants.iter().map(|v| v.ident.to_string()).collect();
    let variant_indices: Vec<usize> = (0..info.variants.len()).collect();
    let discriminants: Vec<i64> = info.variants.iter().map(|v| v.discriminant).collect();

    quote! {
        impl fieldwire_reflect::ops::Enum for #ident {
            fn variant_name(&self) -> &'static str {
                match self {
                    #(Self::#variant_idents => #variant_names,)*
                }
            }

            fn variant_index(&self) -> usize {
                match self {
                    #(Self::#variant_idents => #variant_indices,)*
                }
            }

            fn discriminant(&self) -> i64 {
                match self {
                    #(Self::#variant_idents => #discriminants,)*
                }
            }

            fn set_by_discriminant(&mut self, discriminant: i64) -> bool {
                match discriminant {
                    #(#discriminants => *self = Self::#variant_idents,)*
                    _ => return false,
                }
                true
            }

            fn set_by_name(&mut self, name: &str) -> bool {
                match name {
                    #(#variant_names => *self = Self::#variant_idents,)*
                    _ => return false,
                }
                true
            }
        }
    }
}
