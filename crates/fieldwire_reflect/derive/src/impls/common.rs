use proc_macro2::{Ident, TokenStream};
use quote::quote;

/// Generate `TypePath` implementation tokens.
///
/// The path is anchored at the declaration site's module, so two types with
/// the same ident in different modules stay distinguishable.
pub(super) fn impl_trait_type_path(ident: &Ident) -> TokenStream {
    let name_str = ident.to_string();

    quote! {
        impl fieldwire_reflect::info::TypePath for #ident {
            #[inline]
            fn type_path() -> &'static str {
                ::core::concat!(::core::module_path!(), "::", #name_str)
            }

            #[inline]
            fn type_name() -> &'static str {
                #name_str
            }

            #[inline]
            fn type_ident() -> &'static str {
                #name_str
            }

            #[inline]
            fn module_path() -> ::core::option::Option<&'static str> {
                ::core::option::Option::Some(::core::module_path!())
            }
        }
    }
}

/// Generate `Typed` implementation tokens.
///
/// `info_tokens` is an expression building the `TypeInfo`; it is evaluated
/// once and cached for the life of the program.
pub(super) fn impl_trait_typed(ident: &Ident, info_tokens: TokenStream) -> TokenStream {
    quote! {
        impl fieldwire_reflect::info::Typed for #ident {
            fn type_info() -> &'static fieldwire_reflect::info::TypeInfo {
                static CELL: fieldwire_reflect::impls::NonGenericTypeInfoCell =
                    fieldwire_reflect::impls::NonGenericTypeInfoCell::new();
                CELL.get_or_init(|| #info_tokens)
            }
        }
    }
}

/// Generate `Reflect` implementation tokens.
///
/// `kind` selects the `ReflectKind`/`ReflectRef`/`ReflectMut` variant;
/// `fn_tokens` supplies the kind-specific `try_apply` and
/// `reflect_partial_eq` bodies.
pub(super) fn impl_trait_reflect(
    ident: &Ident,
    kind: &Ident,
    fn_tokens: TokenStream,
) -> TokenStream {
    quote! {
        impl fieldwire_reflect::Reflect for #ident {
            fn set(
                &mut self,
                value: fieldwire_reflect::__macro_exports::Box<dyn fieldwire_reflect::Reflect>,
            ) -> ::core::result::Result<
                (),
                fieldwire_reflect::__macro_exports::Box<dyn fieldwire_reflect::Reflect>,
            > {
                *self = value.take::<Self>()?;
                ::core::result::Result::Ok(())
            }

            #[inline]
            fn reflect_kind(&self) -> fieldwire_reflect::info::ReflectKind {
                fieldwire_reflect::info::ReflectKind::#kind
            }

            #[inline]
            fn reflect_ref(&self) -> fieldwire_reflect::ops::ReflectRef<'_> {
                fieldwire_reflect::ops::ReflectRef::#kind(self)
            }

            #[inline]
            fn reflect_mut(&mut self) -> fieldwire_reflect::ops::ReflectMut<'_> {
                fieldwire_reflect::ops::ReflectMut::#kind(self)
            }

            #fn_tokens
        }
    }
}
