//! Bounded 32-bit signed integers. Both bounds are inclusive.

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
    min: i32,
    max: i32,
    cx: EmitContext<'_>,
) -> TokenStream {
    let rt = cx.runtime;
    let name = &decl.name;
    let name_str = name_literal(name);
    let min = Literal::i32_suffixed(min);
    let max = Literal::i32_suffixed(max);
    let primitive = quote!(i32);

    let wrapper = wrapper_struct(
        decl,
        &quote!(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Debug),
        &primitive,
    );

    let inherent = quote! {
        #[allow(dead_code)]
        impl #name {
            pub const MIN: i32 = #min;
            pub const MAX: i32 = #max;

            /// Wrap `value` if it lies within `MIN..=MAX`.
            pub fn new(value: i32) -> ::core::result::Result<Self, #rt::ConstraintViolation> {
                #rt::check::integer(#name_str, value, #min, #max)?;
                ::core::result::Result::Ok(Self(value))
            }

            /// Parse decimal text (surrounding whitespace ignored) and check the bounds.
            pub fn try_parse(text: &str) -> ::core::option::Option<Self> {
                text.trim().parse::<i32>().ok().and_then(|value| Self::new(value).ok())
            }

            pub const fn value(self) -> i32 {
                self.0
            }
        }

        #[automatically_derived]
        impl #rt::IntegerValue for #name {
            const MIN: i32 = #min;
            const MAX: i32 = #max;

            fn value(&self) -> i32 {
                self.0
            }
        }
    };

    let display = display_impl(name, &quote!(&self.0));
    let from_str = from_str_impl(
        name,
        cx,
        &quote! {
            let value = text
                .trim()
                .parse::<i32>()
                .map_err(|_| #rt::DecodeError::malformed(#name_str, text))?;
            Self::new(value).map_err(#rt::DecodeError::from)
        },
    );
    let conversions = primitive_conversions(name, &primitive, cx);
    let value_type = value_type_impl(
        decl,
        cx,
        ValueTypeParts {
            primitive,
            to_primitive: quote!(self.0),
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
