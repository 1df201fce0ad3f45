//! Bounded finite reals wrapping `f64`.
//!
//! NaN and the infinities never satisfy the bounds, which lets the wrapper
//! implement `Eq`, `Ord` and `Hash` over `total_cmp`/`to_bits`. Negative zero
//! is folded into positive zero on construction so equal values hash equal.

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
    min: f64,
    max: f64,
    cx: EmitContext<'_>,
) -> TokenStream {
    let rt = cx.runtime;
    let name = &decl.name;
    let name_str = name_literal(name);
    let min = Literal::f64_suffixed(min);
    let max = Literal::f64_suffixed(max);
    let primitive = quote!(f64);

    let wrapper = wrapper_struct(decl, &quote!(Clone, Copy, Debug), &primitive);

    let inherent = quote! {
        #[allow(dead_code)]
        impl #name {
            pub const MIN: f64 = #min;
            pub const MAX: f64 = #max;

            /// Wrap `value` if it is finite and lies within `MIN..=MAX`.
            pub fn new(value: f64) -> ::core::result::Result<Self, #rt::ConstraintViolation> {
                #rt::check::real(#name_str, value, #min, #max)?;
                ::core::result::Result::Ok(Self(value + 0.0))
            }

            /// Parse decimal text (surrounding whitespace ignored) and check the bounds.
            pub fn try_parse(text: &str) -> ::core::option::Option<Self> {
                text.trim().parse::<f64>().ok().and_then(|value| Self::new(value).ok())
            }

            pub const fn value(self) -> f64 {
                self.0
            }
        }

        #[automatically_derived]
        impl ::core::cmp::PartialEq for #name {
            fn eq(&self, other: &Self) -> bool {
                self.0.to_bits() == other.0.to_bits()
            }
        }

        #[automatically_derived]
        impl ::core::cmp::Eq for #name {}

        #[automatically_derived]
        impl ::core::cmp::PartialOrd for #name {
            fn partial_cmp(&self, other: &Self) -> ::core::option::Option<::core::cmp::Ordering> {
                ::core::option::Option::Some(::core::cmp::Ord::cmp(self, other))
            }
        }

        #[automatically_derived]
        impl ::core::cmp::Ord for #name {
            fn cmp(&self, other: &Self) -> ::core::cmp::Ordering {
                self.0.total_cmp(&other.0)
            }
        }

        #[automatically_derived]
        impl ::core::hash::Hash for #name {
            fn hash<H: ::core::hash::Hasher>(&self, state: &mut H) {
                ::core::hash::Hash::hash(&self.0.to_bits(), state);
            }
        }

        #[automatically_derived]
        impl #rt::RealValue for #name {
            const MIN: f64 = #min;
            const MAX: f64 = #max;

            fn value(&self) -> f64 {
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
                .parse::<f64>()
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
