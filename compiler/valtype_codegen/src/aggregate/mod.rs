//! Aggregator.
//!
//! Two jobs: before emission, drop every declaration whose name is not
//! unique in the pass (all of them, not all but one) or whose generated
//! items would clash with a neighbour; after emission, build the single
//! registration type that installs every adapter in the pass.

use proc_macro2::TokenStream;
use quote::quote;
use rustc_hash::{FxHashMap, FxHashSet};
use syn::ext::IdentExt;
use syn::Ident;
use tracing::debug;

use crate::adapter::{adapter_name, SerializationAdapter};
use crate::declaration::{NamedItem, NamespacePath, ValueDeclaration};
use crate::diagnostic::{Diagnostic, ErrorCode};
use crate::options::PassOptions;

/// Declarations that survived the collision checks, plus the rejections.
#[derive(Debug)]
pub struct Deduplicated {
    pub declarations: Vec<ValueDeclaration>,
    pub diagnostics: Vec<Diagnostic>,
    /// False when an item at the module root already uses the
    /// registration type's name.
    pub registry_available: bool,
}

/// Reject declarations whose generated items could not coexist with the
/// rest of the module:
///
/// - a name used by more than one declaration in the pass (`V3001`)
/// - a root declaration named like the registration type (`V3002`)
/// - a declaration whose `<Name>JsonAdapter` is already an item in the same
///   namespace, or is the registration type (`V3002`)
///
/// A plain root item named like the registration type is reported as well,
/// and the registration is withheld for the pass.
///
/// Rejected declarations keep their source order in the diagnostics.
pub fn reject_collisions(
    declarations: Vec<ValueDeclaration>,
    items: &[NamedItem],
    registry: &Ident,
) -> Deduplicated {
    let mut by_name: FxHashMap<String, Vec<usize>> = FxHashMap::default();
    for (index, decl) in declarations.iter().enumerate() {
        by_name.entry(decl.name.unraw().to_string()).or_default().push(index);
    }
    let occupied: FxHashSet<(String, String)> = items
        .iter()
        .map(|item| {
            let name = item.name.unraw().to_string();
            (namespace_key(&item.namespace), name)
        })
        .collect();

    let registry_name = registry.unraw().to_string();
    let verdicts: Vec<Option<Diagnostic>> = declarations
        .iter()
        .enumerate()
        .map(|(index, decl)| {
            let name = decl.name.unraw().to_string();
            let at_root = decl.namespace.is_empty();
            let adapter = adapter_name(&decl.name).to_string();
            let sites = by_name.get(&name).map_or(&[][..], Vec::as_slice);

            if sites.len() > 1 {
                let others: Vec<String> = sites
                    .iter()
                    .filter(|&&other| other != index)
                    .map(|&other| format!("`{}`", declarations[other].qualified_name()))
                    .collect();
                Some(
                    Diagnostic::error(ErrorCode::V3001, decl.name.span())
                        .with_message(format!("value type `{name}` is declared more than once"))
                        .with_note(format!("also declared as {}", others.join(", ")))
                        .with_help("value type names must be unique across the annotated module"),
                )
            } else if at_root && name == registry_name {
                Some(registry_clash(&decl.name))
            } else if occupied.contains(&(namespace_key(&decl.namespace), adapter.clone()))
                || (at_root && adapter == registry_name)
            {
                Some(
                    Diagnostic::error(ErrorCode::V3002, decl.name.span())
                        .with_message(format!(
                            "adapter `{adapter}` generated for `{name}` collides with an item \
                             of the same name"
                        ))
                        .with_help(format!("rename `{name}` or the item named `{adapter}`")),
                )
            } else {
                None
            }
        })
        .collect();

    let mut diagnostics = Vec::new();
    let mut kept = Vec::new();
    for (decl, verdict) in declarations.into_iter().zip(verdicts) {
        match verdict {
            Some(diagnostic) => {
                debug!(
                    declaration = %decl.qualified_name(),
                    code = %diagnostic.code,
                    "rejected at aggregation"
                );
                diagnostics.push(diagnostic);
            }
            None => kept.push(decl),
        }
    }

    // Rejected declarations stay in the module as plain structs, so a root
    // declaration named like the registry blocks it just as a plain item does.
    let mut registry_available = true;
    for item in items {
        if item.namespace.is_empty() && item.name.unraw() == registry_name {
            registry_available = false;
            let declared = by_name.contains_key(&registry_name);
            if !declared {
                diagnostics.push(registry_clash(&item.name));
            }
        }
    }
    if !registry_available {
        debug!(registry = %registry_name, "registration name taken");
    }

    Deduplicated {
        declarations: kept,
        diagnostics,
        registry_available,
    }
}

fn registry_clash(name: &Ident) -> Diagnostic {
    Diagnostic::error(ErrorCode::V3002, name.span())
        .with_message(format!(
            "`{}` collides with the generated registration type",
            name.unraw()
        ))
        .with_help("rename the item or pass `registry = OtherName`")
}

fn namespace_key(namespace: &NamespacePath) -> String {
    namespace
        .iter()
        .map(|segment| segment.unraw().to_string())
        .collect::<Vec<_>>()
        .join("::")
}

/// One adapter in the registration, keyed by its value type's name.
#[derive(Clone, Debug)]
pub struct RegistrationEntry {
    pub name: String,
    pub adapter: TokenStream,
}

/// The single registration unit for a pass.
#[derive(Clone, Debug)]
pub struct RegistrationArtifact {
    pub registry: Ident,
    /// Sorted by `name`.
    pub entries: Vec<RegistrationEntry>,
    pub tokens: TokenStream,
}

impl RegistrationArtifact {
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.name.as_str())
    }
}

/// Build the registration for `adapters`, or `None` if there is nothing to
/// register.
pub fn aggregate(
    adapters: &[SerializationAdapter],
    options: &PassOptions,
) -> Option<RegistrationArtifact> {
    if adapters.is_empty() {
        return None;
    }

    let mut entries: Vec<RegistrationEntry> = adapters
        .iter()
        .map(|adapter| RegistrationEntry {
            name: adapter.value.unraw().to_string(),
            adapter: adapter.path(),
        })
        .collect();
    entries.sort_by(|a, b| a.name.cmp(&b.name));

    let rt = &options.runtime;
    let registry = &options.registry;
    let names = entries.iter().map(|entry| entry.name.as_str());
    let registrations = entries.iter().map(|entry| {
        let adapter = &entry.adapter;
        quote!(registry.register(#adapter)?;)
    });

    let tokens = quote! {
        /// Installs the serialization adapter of every value type in this module.
        #[derive(Clone, Copy, Debug, Default)]
        pub struct #registry;

        #[allow(dead_code)]
        impl #registry {
            /// Registered value type names, sorted.
            pub const NAMES: &'static [&'static str] = &[#(#names),*];
        }

        #[automatically_derived]
        impl #rt::Installable for #registry {
            fn install_into(
                &self,
                registry: &mut #rt::AdapterRegistry,
            ) -> ::core::result::Result<(), #rt::RegistryError> {
                #(#registrations)*
                ::core::result::Result::Ok(())
            }
        }
    };

    Some(RegistrationArtifact {
        registry: registry.clone(),
        entries,
        tokens,
    })
}

#[cfg(test)]
mod tests;
