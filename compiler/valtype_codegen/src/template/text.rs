//! Bounded text wrapping `String`.
//!
//! Length is counted in `char`s and both bounds are inclusive. The pattern
//! check is only emitted when a pattern was given; it is an unanchored
//! search, so anchors belong in the pattern itself.

use proc_macro2::{Literal, TokenStream};
use quote::quote;

use super::{
    display_impl, from_str_impl, name_literal, primitive_conversions, value_type_impl,
    wrapper_struct, ValueTypeParts,
};
use crate::declaration::ValueDeclaration;
use crate::options::EmitContext;

pub(super) fn emit(
    decl: &ValueDeclaration,
    min_length: usize,
    max_length: usize,
    pattern: Option<&str>,
    cx: EmitContext<'_>,
) -> TokenStream {
    let rt = cx.runtime;
    let private = cx.private();
    let name = &decl.name;
    let name_str = name_literal(name);
    let min = Literal::usize_suffixed(min_length);
    let max = Literal::usize_suffixed(max_length);
    let string = quote!(::std::string::String);

    let pattern_check = pattern.map(|source| {
        quote! {
            static PATTERN: #private::CompiledPattern = #private::CompiledPattern::new(#source);
            PATTERN.check(#name_str, value)?;
        }
    });
    let pattern_const = match pattern {
        Some(source) => quote!(::core::option::Option::Some(#source)),
        None => quote!(::core::option::Option::None),
    };

    let wrapper = wrapper_struct(
        decl,
        &quote!(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug),
        &string,
    );

    let inherent = quote! {
        #[allow(dead_code)]
        impl #name {
            pub const MIN_LENGTH: usize = #min;
            pub const MAX_LENGTH: usize = #max;
            pub const PATTERN: ::core::option::Option<&'static str> = #pattern_const;

            /// Validate and wrap `value`.
            pub fn new(
                value: impl ::core::convert::Into<#string>,
            ) -> ::core::result::Result<Self, #rt::ConstraintViolation> {
                let value = value.into();
                Self::validate(&value)?;
                ::core::result::Result::Ok(Self(value))
            }

            /// `None` if `text` violates the length or pattern constraint.
            pub fn try_parse(text: &str) -> ::core::option::Option<Self> {
                Self::validate(text).ok().map(|()| Self(text.to_owned()))
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }

            pub fn into_inner(self) -> #string {
                self.0
            }

            fn validate(value: &str) -> ::core::result::Result<(), #rt::ConstraintViolation> {
                #rt::check::length(#name_str, value, #min, #max)?;
                #pattern_check
                ::core::result::Result::Ok(())
            }
        }

        #[automatically_derived]
        impl ::core::convert::AsRef<str> for #name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        #[automatically_derived]
        impl #rt::TextValue for #name {
            const MIN_LENGTH: usize = #min;
            const MAX_LENGTH: usize = #max;
            const PATTERN: ::core::option::Option<&'static str> = #pattern_const;

            fn as_str(&self) -> &str {
                &self.0
            }
        }
    };

    let display = display_impl(name, &quote!(self.0.as_str()));
    let from_str = from_str_impl(
        name,
        cx,
        &quote!(Self::new(text).map_err(#rt::DecodeError::from)),
    );
    let conversions = primitive_conversions(name, &string, cx);
    let value_type = value_type_impl(
        decl,
        cx,
        ValueTypeParts {
            primitive: string,
            to_primitive: quote!(::core::clone::Clone::clone(&self.0)),
            try_from_primitive: quote!(Self::new(value)),
        },
    );

    quote! {
        #wrapper
        #inherent
        #display
        #from_str
        #conversions
        #value_type
    }
}
