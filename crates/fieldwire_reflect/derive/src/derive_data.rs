//! Parsed forms of the input the derive accepts.

use proc_macro2::Ident;
use syn::spanned::Spanned;
use syn::{Data, DeriveInput, Expr, ExprLit, ExprUnary, Fields, Lit, Meta, Type, UnOp};

use crate::REFLECT_ATTRIBUTE_NAME;

// -----------------------------------------------------------------------------
// ReflectDerive

/// The input shape, after validation.
pub(crate) enum ReflectDerive<'a> {
    Struct(ReflectStruct<'a>),
    BitFields(ReflectStruct<'a>),
    Enum(ReflectEnum<'a>),
}

impl<'a> ReflectDerive<'a> {
    pub fn from_input(ast: &'a DeriveInput) -> syn::Result<Self> {
        if !ast.generics.params.is_empty() {
            return Err(syn::Error::new(
                ast.generics.span(),
                "#[derive(Reflect)] does not support generic types",
            ));
        }

        let is_bits = parse_bits_flag(&ast.attrs)?;

        match &ast.data {
            Data::Struct(data) => {
                let Fields::Named(fields) = &data.fields else {
                    return Err(syn::Error::new(
                        ast.ident.span(),
                        "#[derive(Reflect)] requires named fields",
                    ));
                };

                let fields = fields
                    .named
                    .iter()
                    .map(|field| StructField {
                        // `Fields::Named` guarantees the ident
                        ident: field.ident.as_ref().unwrap(),
                        ty: &field.ty,
                    })
                    .collect();

                let strukt = ReflectStruct {
                    ident: &ast.ident,
                    fields,
                };

                if is_bits {
                    Ok(Self::BitFields(strukt))
                } else {
                    Ok(Self::Struct(strukt))
                }
            }
            Data::Enum(data) => {
                if is_bits {
                    return Err(syn::Error::new(
                        ast.ident.span(),
                        "#[reflect(bits)] only applies to structs",
                    ));
                }

                if data.variants.is_empty() {
                    return Err(syn::Error::new(
                        ast.ident.span(),
                        "#[derive(Reflect)] enums must have at least one variant",
                    ));
                }

                let mut variants = Vec::with_capacity(data.variants.len());
                let mut next_discriminant = 0_i64;

                for variant in &data.variants {
                    if !matches!(variant.fields, Fields::Unit) {
                        return Err(syn::Error::new(
                            variant.ident.span(),
                            "#[derive(Reflect)] enums must be fieldless",
                        ));
                    }

                    let discriminant = match &variant.discriminant {
                        Some((_, expr)) => parse_discriminant(expr)?,
                        None => next_discriminant,
                    };
                    next_discriminant = discriminant + 1;

                    variants.push(EnumVariant {
                        ident: &variant.ident,
                        discriminant,
                    });
                }

                Ok(Self::Enum(ReflectEnum {
                    ident: &ast.ident,
                    repr: Repr::from_attrs(ast)?,
                    variants,
                }))
            }
            Data::Union(data) => Err(syn::Error::new(
                data.union_token.span(),
                "#[derive(Reflect)] does not support unions",
            )),
        }
    }
}

// -----------------------------------------------------------------------------
// Structs

pub(crate) struct ReflectStruct<'a> {
    pub ident: &'a Ident,
    pub fields: Vec<StructField<'a>>,
}

pub(crate) struct StructField<'a> {
    pub ident: &'a Ident,
    pub ty: &'a Type,
}

// -----------------------------------------------------------------------------
// Enums

pub(crate) struct ReflectEnum<'a> {
    pub ident: &'a Ident,
    pub repr: Repr,
    pub variants: Vec<EnumVariant<'a>>,
}

pub(crate) struct EnumVariant<'a> {
    pub ident: &'a Ident,
    pub discriminant: i64,
}

/// The `#[repr(..)]` integer type of a fieldless enum; defaults to `i32`.
#[derive(Clone, Copy)]
pub(crate) enum Repr {
    U8,
    I8,
    U16,
    I16,
    U32,
    I32,
    U64,
    I64,
}

impl Repr {
    fn from_attrs(ast: &DeriveInput) -> syn::Result<Self> {
        for attr in &ast.attrs {
            if !attr.path().is_ident("repr") {
                continue;
            }
            let mut found = None;
            attr.parse_nested_meta(|meta| {
                found = Some(match () {
                    () if meta.path.is_ident("u8") => Self::U8,
                    () if meta.path.is_ident("i8") => Self::I8,
                    () if meta.path.is_ident("u16") => Self::U16,
                    () if meta.path.is_ident("i16") => Self::I16,
                    () if meta.path.is_ident("u32") => Self::U32,
                    () if meta.path.is_ident("i32") => Self::I32,
                    () if meta.path.is_ident("u64") => Self::U64,
                    () if meta.path.is_ident("i64") => Self::I64,
                    () => {
                        return Err(meta.error("unsupported enum repr for #[derive(Reflect)]"));
                    }
                });
                Ok(())
            })?;
            if let Some(repr) = found {
                return Ok(repr);
            }
        }
        Ok(Self::I32)
    }

    /// The matching `IntRepr` variant name.
    pub fn variant_ident(self) -> &'static str {
        match self {
            Self::U8 => "U8",
            Self::I8 => "I8",
            Self::U16 => "U16",
            Self::I16 => "I16",
            Self::U32 => "U32",
            Self::I32 => "I32",
            Self::U64 => "U64",
            Self::I64 => "I64",
        }
    }
}

// -----------------------------------------------------------------------------
// Attribute helpers

/// Detects `#[reflect(bits)]`; any other argument is rejected.
fn parse_bits_flag(attrs: &[syn::Attribute]) -> syn::Result<bool> {
    let mut is_bits = false;
    for attr in attrs {
        if !attr.path().is_ident(REFLECT_ATTRIBUTE_NAME) {
            continue;
        }
        match &attr.meta {
            Meta::List(_) => {
                attr.parse_nested_meta(|meta| {
                    if meta.path.is_ident("bits") {
                        is_bits = true;
                        Ok(())
                    } else {
                        Err(meta.error("unknown #[reflect(..)] argument"))
                    }
                })?;
            }
            meta => {
                return Err(syn::Error::new(
                    meta.span(),
                    "expected #[reflect(bits)]",
                ));
            }
        }
    }
    Ok(is_bits)
}

/// Explicit discriminants must be integer literals, optionally negated.
fn parse_discriminant(expr: &Expr) -> syn::Result<i64> {
    match expr {
        Expr::Lit(ExprLit {
            lit: Lit::Int(lit), ..
        }) => lit.base10_parse(),
        Expr::Unary(ExprUnary {
            op: UnOp::Neg(_),
            expr,
            ..
        }) => {
            if let Expr::Lit(ExprLit {
                lit: Lit::Int(lit), ..
            }) = &**expr
            {
                lit.base10_parse::<i64>().map(|v| -v)
            } else {
                Err(syn::Error::new(
                    expr.span(),
                    "discriminant must be an integer literal",
                ))
            }
        }
        _ => Err(syn::Error::new(
            expr.span(),
            "discriminant must be an integer literal",
        )),
    }
}
