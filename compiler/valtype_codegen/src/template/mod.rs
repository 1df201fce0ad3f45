//! Kind template engine.
//!
//! Turns a validated declaration into its value-type implementation. Every
//! kind provides the same surface (validating construction, `try_parse`,
//! canonical `Display`, ordering, equality, primitive conversions, the
//! runtime `ValueType` impl); only the predicate bodies and the wrapped
//! primitive differ, so each kind lives in its own submodule and this module
//! holds the shared scaffolding.

mod identifier;
mod integer;
mod real;
mod text;

use proc_macro2::{Span, TokenStream};
use quote::quote;
use syn::ext::IdentExt;
use syn::{Ident, LitStr, Visibility};

use crate::declaration::{NamespacePath, ValueDeclaration};
use crate::kind::{KindParams, ValueKind};
use crate::options::EmitContext;
use crate::validate::ValidatedDeclaration;

/// The emitted value type for one declaration.
#[derive(Clone, Debug)]
pub struct ValueTypeImplementation {
    pub name: Ident,
    pub vis: Visibility,
    pub namespace: NamespacePath,
    pub kind: ValueKind,
    pub tokens: TokenStream,
}

/// Emit the value-type implementation for a validated declaration.
pub fn emit(validated: &ValidatedDeclaration<'_>, cx: EmitContext<'_>) -> ValueTypeImplementation {
    let decl = validated.declaration;
    let tokens = match &validated.params {
        KindParams::Identifier => identifier::emit(decl, cx),
        KindParams::BoundedText {
            min_length,
            max_length,
            pattern,
        } => text::emit(decl, *min_length, *max_length, pattern.as_deref(), cx),
        KindParams::BoundedInteger { min, max } => integer::emit(decl, *min, *max, cx),
        KindParams::BoundedReal { min, max } => real::emit(decl, *min, *max, cx),
    };

    ValueTypeImplementation {
        name: decl.name.clone(),
        vis: decl.vis.clone(),
        namespace: decl.namespace.clone(),
        kind: validated.params.kind(),
        tokens,
    }
}

/// The declared name as a string literal, without any `r#` prefix.
pub(crate) fn name_literal(name: &Ident) -> LitStr {
    LitStr::new(&name.unraw().to_string(), name.span())
}

/// The wrapper struct itself, carrying the user's attributes and visibility.
fn wrapper_struct(
    decl: &ValueDeclaration,
    derives: &TokenStream,
    field: &TokenStream,
) -> TokenStream {
    let attrs = &decl.attrs;
    let vis = &decl.vis;
    let name = &decl.name;
    quote! {
        #(#attrs)*
        #[derive(#derives)]
        #vis struct #name(#field);
    }
}

/// Pieces of the runtime `ValueType` impl that vary per kind.
struct ValueTypeParts {
    primitive: TokenStream,
    to_primitive: TokenStream,
    try_from_primitive: TokenStream,
}

fn value_type_impl(
    decl: &ValueDeclaration,
    cx: EmitContext<'_>,
    parts: ValueTypeParts,
) -> TokenStream {
    let rt = cx.runtime;
    let name = &decl.name;
    let name_str = name_literal(name);
    let variant = Ident::new(decl.kind().runtime_variant(), Span::call_site());
    let ValueTypeParts {
        primitive,
        to_primitive,
        try_from_primitive,
    } = parts;

    quote! {
        #[automatically_derived]
        impl #rt::ValueType for #name {
            type Primitive = #primitive;

            const NAME: &'static str = #name_str;
            const KIND: #rt::ValueKind = #rt::ValueKind::#variant;

            fn try_parse(text: &str) -> ::core::option::Option<Self> {
                #name::try_parse(text)
            }

            fn to_primitive(&self) -> Self::Primitive {
                #to_primitive
            }

            fn try_from_primitive(
                value: Self::Primitive,
            ) -> ::core::result::Result<Self, #rt::ConstraintViolation> {
                #try_from_primitive
            }
        }
    }
}

/// `Display` delegating to `inner`, an expression borrowing something
/// `Display`. This is the canonical text form parsing accepts back.
fn display_impl(name: &Ident, inner: &TokenStream) -> TokenStream {
    quote! {
        #[automatically_derived]
        impl ::core::fmt::Display for #name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                ::core::fmt::Display::fmt(#inner, f)
            }
        }
    }
}

/// `FromStr` reporting why `try_parse` would have returned `None`.
fn from_str_impl(name: &Ident, cx: EmitContext<'_>, body: &TokenStream) -> TokenStream {
    let rt = cx.runtime;
    quote! {
        #[automatically_derived]
        impl ::core::str::FromStr for #name {
            type Err = #rt::DecodeError;

            fn from_str(text: &str) -> ::core::result::Result<Self, Self::Err> {
                #body
            }
        }
    }
}

/// `From<Name> for Primitive` and the validating `TryFrom<Primitive>`.
fn primitive_conversions(
    name: &Ident,
    primitive: &TokenStream,
    cx: EmitContext<'_>,
) -> TokenStream {
    let rt = cx.runtime;
    quote! {
        #[automatically_derived]
        impl ::core::convert::From<#name> for #primitive {
            fn from(value: #name) -> Self {
                value.0
            }
        }

        #[automatically_derived]
        impl ::core::convert::TryFrom<#primitive> for #name {
            type Error = #rt::ConstraintViolation;

            fn try_from(value: #primitive) -> ::core::result::Result<Self, Self::Error> {
                Self::new(value)
            }
        }
    }
}
