use proc_macro2::{Ident, Span, TokenStream};
use quote::quote;

use super::common::{impl_trait_reflect, impl_trait_type_path, impl_trait_typed};
use super::struct_kind::impl_trait_struct;
use crate::derive_data::ReflectStruct;

/// Implement full reflection for a `#[reflect(bits)]` container.
///
/// A container reflects like a struct for field access, with two additions:
/// the `BitFields` marker trait and a declaration-site check that the field
/// widths total exactly 8, 16 or 32 bits.
pub(super) fn impl_bit_fields(info: &ReflectStruct) -> TokenStream {
    let ident = info.ident;
    let field_types: Vec<_> = info.fields.iter().map(|f| f.ty).collect();

    // trait: TypePath
    let type_path_tokens = impl_trait_type_path(ident);

    // trait: Typed
    let typed_tokens = impl_trait_typed(ident, bits_info_tokens(info));

    // trait: Struct
    let struct_tokens = impl_trait_struct(info);

    // trait: BitFields
    let bit_fields_tokens = quote! {
        impl fieldwire_reflect::ops::BitFields for #ident {
            #[inline]
            fn total_bits(&self) -> u32 {
                0u32 #(+ <#field_types as fieldwire_reflect::bits::FixedBits>::BITS)*
            }
        }
    };

    // trait: Reflect
    let kind = Ident::new("BitFields", Span::call_site());
    let reflect_tokens = impl_trait_reflect(
        ident,
        &kind,
        quote! {
            fn try_apply(
                &mut self,
                value: &dyn fieldwire_reflect::Reflect,
            ) -> ::core::result::Result<(), fieldwire_reflect::ops::ApplyError> {
                fieldwire_reflect::impls::bit_fields_try_apply(self, value)
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

    // The total width is checked here, at the declaration, so a bad layout
    // never reaches serialization.
    let width_check_tokens = quote! {
        const _: () = {
            let total = 0u32 #(+ <#field_types as fieldwire_reflect::bits::FixedBits>::BITS)*;
            ::core::assert!(
                total == 8 || total == 16 || total == 32,
                "bit-fields container must pack to exactly 8, 16 or 32 bits",
            );
        };
    };

    quote! {
        #width_check_tokens

        #type_path_tokens

        #typed_tokens

        #struct_tokens

        #bit_fields_tokens

        #reflect_tokens
    }
}

/// Generate the `TypeInfo` expression for a bit-fields container.
fn bits_info_tokens(info: &ReflectStruct) -> TokenStream {
    let field_names: Vec<String> = info.fields.iter().map(|f| f.ident.to_string()).collect();
    let field_types: Vec<_> = info.fields.iter().map(|f| f.ty).collect();

    quote! {
        fieldwire_reflect::info::TypeInfo::BitFields(
            fieldwire_reflect::info::BitFieldsInfo::new::<Self>(
                0u32 #(+ <#field_types as fieldwire_reflect::bits::FixedBits>::BITS)*,
                &[
                    #(fieldwire_reflect::info::NamedField::new::<#field_types>(#field_names),)*
                ],
            )
        )
    }
}
