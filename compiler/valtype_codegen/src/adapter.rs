//! Serialization adapter emitter.
//!
//! Each value type maps to exactly one JSON scalar: text for identifiers and
//! bounded text, a number for the numeric kinds. The adapter reuses the
//! type's own `Display`/`FromStr`/`new`, so encoding goes through the
//! canonical format and decoding re-applies every constraint.

use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::ext::IdentExt;
use syn::Ident;

use crate::declaration::NamespacePath;
use crate::kind::ValueKind;
use crate::options::EmitContext;
use crate::template::{name_literal, ValueTypeImplementation};

/// The emitted adapter for one value type.
#[derive(Clone, Debug)]
pub struct SerializationAdapter {
    /// `<Name>JsonAdapter`.
    pub adapter: Ident,
    /// The value type it converts.
    pub value: Ident,
    pub namespace: NamespacePath,
    pub tokens: TokenStream,
}

impl SerializationAdapter {
    /// Path from the annotated module's root, e.g. `self::billing::MonthJsonAdapter`.
    pub fn path(&self) -> TokenStream {
        let namespace = &self.namespace;
        let adapter = &self.adapter;
        quote!(self #(:: #namespace)* :: #adapter)
    }
}

/// Name of the adapter generated for `value`.
pub fn adapter_name(value: &Ident) -> Ident {
    format_ident!("{}JsonAdapter", value.unraw(), span = value.span())
}

/// Emit serde support and the scalar adapter for `implementation`.
pub fn emit(implementation: &ValueTypeImplementation, cx: EmitContext<'_>) -> SerializationAdapter {
    let adapter = adapter_name(&implementation.name);
    let serde = serde_impls(implementation, cx);
    let scalar = scalar_adapter(implementation, &adapter, cx);

    SerializationAdapter {
        adapter,
        value: implementation.name.clone(),
        namespace: implementation.namespace.clone(),
        tokens: quote! {
            #serde
            #scalar
        },
    }
}

/// `Serialize`/`Deserialize` as the single scalar, validating on the way in.
fn serde_impls(implementation: &ValueTypeImplementation, cx: EmitContext<'_>) -> TokenStream {
    let private = cx.private();
    let serde = quote!(#private::serde);
    let name = &implementation.name;

    let (serialize, primitive, convert) = match implementation.kind {
        ValueKind::Identifier => (
            quote!(serializer.collect_str(self)),
            quote!(::std::string::String),
            quote!(<#name as ::core::str::FromStr>::from_str(&value)),
        ),
        ValueKind::BoundedText => (
            quote!(serializer.serialize_str(&self.0)),
            quote!(::std::string::String),
            quote!(#name::new(value)),
        ),
        ValueKind::BoundedInteger => (
            quote!(serializer.serialize_i32(self.0)),
            quote!(i32),
            quote!(#name::new(value)),
        ),
        ValueKind::BoundedReal => (
            quote!(serializer.serialize_f64(self.0)),
            quote!(f64),
            quote!(#name::new(value)),
        ),
    };

    quote! {
        #[automatically_derived]
        impl #serde::Serialize for #name {
            fn serialize<S>(&self, serializer: S) -> ::core::result::Result<S::Ok, S::Error>
            where
                S: #serde::Serializer,
            {
                #serialize
            }
        }

        #[automatically_derived]
        impl<'de> #serde::Deserialize<'de> for #name {
            fn deserialize<D>(deserializer: D) -> ::core::result::Result<Self, D::Error>
            where
                D: #serde::Deserializer<'de>,
            {
                let value = <#primitive as #serde::Deserialize<'de>>::deserialize(deserializer)?;
                #convert.map_err(<D::Error as #serde::de::Error>::custom)
            }
        }
    }
}

fn scalar_adapter(
    implementation: &ValueTypeImplementation,
    adapter: &Ident,
    cx: EmitContext<'_>,
) -> TokenStream {
    let rt = cx.runtime;
    let name = &implementation.name;
    let vis = &implementation.vis;
    let name_str = name_literal(name);
    let doc = format!(
        " Converts [`{}`] to and from a single JSON scalar.",
        name.unraw()
    );

    let (encode, decode) = match implementation.kind {
        ValueKind::Identifier | ValueKind::BoundedText => (
            quote!(#rt::Scalar::Text(::std::string::ToString::to_string(value))),
            quote! {
                let text = scalar.require_text(#name_str)?;
                <#name as ::core::str::FromStr>::from_str(text)
            },
        ),
        ValueKind::BoundedInteger => (
            quote!(#rt::Scalar::Integer(i64::from(value.0))),
            quote! {
                let raw = scalar.require_integer(#name_str)?;
                let value = #rt::check::narrow_integer(#name_str, raw, #name::MIN, #name::MAX)?;
                #name::new(value).map_err(#rt::DecodeError::from)
            },
        ),
        ValueKind::BoundedReal => (
            quote!(#rt::Scalar::Real(value.0)),
            quote! {
                let value = scalar.require_real(#name_str)?;
                #name::new(value).map_err(#rt::DecodeError::from)
            },
        ),
    };

    quote! {
        #[doc = #doc]
        #[derive(Clone, Copy, Debug, Default)]
        #vis struct #adapter;

        #[automatically_derived]
        impl #rt::ScalarAdapter for #adapter {
            type Value = #name;

            fn encode(&self, value: &#name) -> #rt::Scalar {
                #encode
            }

            fn decode(&self, scalar: &#rt::Scalar) -> ::core::result::Result<#name, #rt::DecodeError> {
                #decode
            }
        }
    }
}
