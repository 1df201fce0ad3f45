//! Opaque 128-bit identifiers wrapping `Uuid`.
//!
//! Construction never fails. `new` draws a random v4 value, `EMPTY` is the
//! nil sentinel and the `Default`. Ordering follows the byte representation.

use proc_macro2::TokenStream;
use quote::quote;

use super::{
    display_impl, from_str_impl, name_literal, value_type_impl, wrapper_struct, ValueTypeParts,
};
use crate::declaration::ValueDeclaration;
use crate::options::EmitContext;

pub(super) fn emit(decl: &ValueDeclaration, cx: EmitContext<'_>) -> TokenStream {
    let rt = cx.runtime;
    let name = &decl.name;
    let name_str = name_literal(name);
    let uuid = quote!(#rt::Uuid);

    let wrapper = wrapper_struct(
        decl,
        &quote!(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Debug),
        &uuid,
    );

    let inherent = quote! {
        #[allow(dead_code)]
        impl #name {
            /// The nil identifier, distinct from every generated one.
            pub const EMPTY: Self = Self(#uuid::nil());

            /// A fresh random identifier.
            pub fn new() -> Self {
                Self(#uuid::new_v4())
            }

            pub const fn empty() -> Self {
                Self::EMPTY
            }

            pub const fn from_uuid(uuid: #uuid) -> Self {
                Self(uuid)
            }

            pub fn is_empty(&self) -> bool {
                self.0.is_nil()
            }

            pub const fn as_uuid(&self) -> &#uuid {
                &self.0
            }

            pub const fn into_inner(self) -> #uuid {
                self.0
            }

            /// Parse the textual UUID form; `None` if it is not one.
            pub fn try_parse(text: &str) -> ::core::option::Option<Self> {
                #uuid::parse_str(text).ok().map(Self)
            }
        }

        #[automatically_derived]
        impl ::core::default::Default for #name {
            fn default() -> Self {
                Self::EMPTY
            }
        }

        #[automatically_derived]
        impl ::core::convert::From<#uuid> for #name {
            fn from(uuid: #uuid) -> Self {
                Self(uuid)
            }
        }

        #[automatically_derived]
        impl ::core::convert::From<#name> for #uuid {
            fn from(value: #name) -> Self {
                value.0
            }
        }

        #[automatically_derived]
        impl #rt::IdentifierValue for #name {
            const EMPTY: Self = Self(#uuid::nil());

            fn generate() -> Self {
                Self(#uuid::new_v4())
            }

            fn as_uuid(&self) -> &#uuid {
                &self.0
            }
        }
    };

    let display = display_impl(name, &quote!(&self.0.hyphenated()));
    let from_str = from_str_impl(
        name,
        cx,
        &quote! {
            Self::try_parse(text).ok_or_else(|| #rt::DecodeError::malformed(#name_str, text))
        },
    );
    let value_type = value_type_impl(
        decl,
        cx,
        ValueTypeParts {
            primitive: uuid.clone(),
            to_primitive: quote!(self.0),
            try_from_primitive: quote!(::core::result::Result::Ok(Self(value))),
        },
    );

    quote! {
        #wrapper
        #inherent
        #display
        #from_str
        #value_type
    }
}
