//! Directive attribute syntax.
//!
//! Only the shape of the arguments is checked here: positional or
//! `name = literal`, with an optional leading `-` on numbers. What the
//! arguments mean is the validator's concern.

use proc_macro2::Span;
use syn::parse::{Parse, ParseStream};
use syn::punctuated::Punctuated;
use syn::spanned::Spanned;
use syn::{Attribute, Ident, Lit, LitFloat, LitInt, LitStr, Meta, Token};

use crate::kind::ValueKind;

/// A parsed `#[kind(args...)]` attribute.
#[derive(Clone, Debug)]
pub struct Directive {
    pub kind: ValueKind,
    pub span: Span,
    pub args: Vec<DirectiveArg>,
}

/// One directive argument, `literal` or `name = literal`.
#[derive(Clone, Debug)]
pub struct DirectiveArg {
    pub name: Option<Ident>,
    pub value: ArgValue,
}

impl DirectiveArg {
    pub fn span(&self) -> Span {
        match &self.name {
            Some(name) => name.span(),
            None => self.value.span(),
        }
    }
}

#[derive(Clone, Debug)]
pub enum ArgValue {
    Int { negative: bool, lit: LitInt },
    Float { negative: bool, lit: LitFloat },
    Str(LitStr),
}

impl ArgValue {
    pub fn span(&self) -> Span {
        match self {
            ArgValue::Int { lit, .. } => lit.span(),
            ArgValue::Float { lit, .. } => lit.span(),
            ArgValue::Str(lit) => lit.span(),
        }
    }
}

impl Parse for ArgValue {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let negative = if input.peek(Token![-]) {
            let _: Token![-] = input.parse()?;
            true
        } else {
            false
        };

        match input.parse::<Lit>()? {
            Lit::Int(lit) => Ok(ArgValue::Int { negative, lit }),
            Lit::Float(lit) => Ok(ArgValue::Float { negative, lit }),
            Lit::Str(lit) if !negative => Ok(ArgValue::Str(lit)),
            Lit::Str(lit) => Err(syn::Error::new(
                lit.span(),
                "a string literal cannot be negated",
            )),
            other => Err(syn::Error::new(
                other.span(),
                "expected an integer, float, or string literal",
            )),
        }
    }
}

impl Parse for DirectiveArg {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let name = if input.peek(Ident) && input.peek2(Token![=]) {
            let name: Ident = input.parse()?;
            let _: Token![=] = input.parse()?;
            Some(name)
        } else {
            None
        };
        let value = input.parse()?;
        Ok(DirectiveArg { name, value })
    }
}

impl Directive {
    /// Parse the arguments of an attribute already known to select `kind`.
    pub fn from_attribute(attr: &Attribute, kind: ValueKind) -> syn::Result<Self> {
        let args = match &attr.meta {
            Meta::Path(_) => Vec::new(),
            Meta::List(list) => list
                .parse_args_with(Punctuated::<DirectiveArg, Token![,]>::parse_terminated)?
                .into_iter()
                .collect(),
            Meta::NameValue(meta) => {
                return Err(syn::Error::new_spanned(
                    meta,
                    format!("expected `#[{kind}]` or `#[{kind}(...)]`"),
                ))
            }
        };

        Ok(Directive {
            kind,
            span: attr.path().span(),
            args,
        })
    }
}

/// The value kind an attribute selects, if it is a directive at all.
pub fn directive_kind(attr: &Attribute) -> Option<ValueKind> {
    let ident = attr.path().get_ident()?;
    ValueKind::from_directive(&ident.to_string())
}
