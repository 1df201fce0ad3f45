//! `#[value_types(...)]` options.

use proc_macro2::{Span, TokenStream};
use quote::{quote, ToTokens};
use syn::parse::Parser;
use syn::{Ident, Path};

use crate::diagnostic::{Diagnostic, ErrorCode};

/// Default name of the registration type appended to the module.
pub const DEFAULT_REGISTRY: &str = "ValueTypes";

/// Configuration for one generation pass.
#[derive(Clone, Debug)]
pub struct PassOptions {
    /// Name of the registration type emitted at the module root.
    pub registry: Ident,
    /// Absolute path of the runtime crate generated code refers to.
    pub runtime: Path,
}

impl Default for PassOptions {
    fn default() -> Self {
        PassOptions {
            registry: Ident::new(DEFAULT_REGISTRY, Span::call_site()),
            runtime: syn::parse_quote!(::valtype),
        }
    }
}

impl PassOptions {
    /// Parse `registry = Name, runtime = ::path` from the attribute arguments.
    pub fn parse(args: TokenStream) -> Result<Self, Diagnostic> {
        let mut options = PassOptions::default();
        let parser = syn::meta::parser(|meta| {
            if meta.path.is_ident("registry") {
                options.registry = meta.value()?.parse()?;
                Ok(())
            } else if meta.path.is_ident("runtime") {
                let path: Path = meta.value()?.parse()?;
                if !is_absolute(&path) {
                    return Err(syn::Error::new_spanned(
                        &path,
                        "`runtime` must be an absolute path (`::name` or `crate::...`)",
                    ));
                }
                options.runtime = path;
                Ok(())
            } else {
                Err(meta.error(format!(
                    "unknown option `{}`; expected `registry` or `runtime`",
                    meta.path.to_token_stream()
                )))
            }
        });

        parser.parse2(args).map_err(|err| {
            Diagnostic::error(ErrorCode::V2008, err.span()).with_message(err.to_string())
        })?;
        Ok(options)
    }

    pub fn emit_context(&self) -> EmitContext<'_> {
        EmitContext {
            runtime: &self.runtime,
        }
    }
}

/// Generated code is placed at varying module depths, so runtime paths must
/// not depend on where they are expanded.
fn is_absolute(path: &Path) -> bool {
    path.leading_colon.is_some()
        || path
            .segments
            .first()
            .is_some_and(|segment| segment.ident == "crate")
}

/// Shared inputs for the emitters.
#[derive(Clone, Copy, Debug)]
pub struct EmitContext<'a> {
    pub runtime: &'a Path,
}

impl EmitContext<'_> {
    /// Path to the runtime's private re-exports.
    pub fn private(&self) -> TokenStream {
        let rt = self.runtime;
        quote!(#rt::__private)
    }
}
