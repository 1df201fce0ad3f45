//! Generation pass driver.
//!
//! Runs scan → uniqueness → validate → emit over one module and splices the
//! results back in place. Declarations are handled one at a time in source
//! order; the only cross-declaration step is the aggregation at the end,
//! which sorts its input, so the output depends only on the module's tokens.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use proc_macro2::TokenStream;
use quote::{quote, ToTokens};
use rustc_hash::FxHashMap;
use syn::{Item, ItemMod};
use tracing::{debug, debug_span, warn};

use crate::adapter::{self, SerializationAdapter};
use crate::aggregate::{self, RegistrationArtifact};
use crate::declaration::Slot;
use crate::diagnostic::Diagnostic;
use crate::directive::directive_kind;
use crate::options::PassOptions;
use crate::scan::{self, item_attrs_mut};
use crate::template::{self, ValueTypeImplementation};
use crate::validate;

/// One generation pass over an annotated module.
#[derive(Debug, Default)]
pub struct GenerationPass {
    options: PassOptions,
    cancel: Option<Arc<AtomicBool>>,
}

impl GenerationPass {
    pub fn new(options: PassOptions) -> Self {
        GenerationPass {
            options,
            cancel: None,
        }
    }

    /// Stop between declarations once `flag` is set. A cancelled pass
    /// emits no value types and no registration.
    #[must_use]
    pub fn with_cancellation(mut self, flag: Arc<AtomicBool>) -> Self {
        self.cancel = Some(flag);
        self
    }

    fn is_cancelled(&self) -> bool {
        self.cancel
            .as_ref()
            .is_some_and(|flag| flag.load(Ordering::Relaxed))
    }

    /// Run the pass, consuming the module and returning it rewritten.
    pub fn run(&self, mut module: ItemMod) -> PassOutput {
        let span = debug_span!("generation_pass", module = %module.ident);
        let _guard = span.enter();

        let scanned = scan::scan(&module);
        let mut diagnostics = scanned.diagnostics;
        let unique = aggregate::reject_collisions(
            scanned.declarations,
            &scanned.items,
            &self.options.registry,
        );
        diagnostics.extend(unique.diagnostics);

        let cx = self.options.emit_context();
        let mut implementations = Vec::with_capacity(unique.declarations.len());
        let mut adapters = Vec::with_capacity(unique.declarations.len());
        let mut generated: FxHashMap<Slot, TokenStream> = FxHashMap::default();
        let mut cancelled = false;

        for declaration in &unique.declarations {
            if self.is_cancelled() {
                cancelled = true;
                break;
            }

            let validated = match validate::validate(declaration) {
                Ok(validated) => validated,
                Err(err) => {
                    warn!(
                        declaration = %declaration.qualified_name(),
                        error = %err,
                        "declaration rejected"
                    );
                    diagnostics.push(err.into_diagnostic(declaration));
                    continue;
                }
            };

            let implementation = template::emit(&validated, cx);
            let adapter = adapter::emit(&implementation, cx);
            debug!(
                declaration = %declaration.qualified_name(),
                kind = %implementation.kind,
                adapter = %adapter.adapter,
                "generated value type"
            );

            let implementation_tokens = &implementation.tokens;
            let adapter_tokens = &adapter.tokens;
            generated.insert(
                declaration.slot.clone(),
                quote! {
                    #implementation_tokens
                    #adapter_tokens
                },
            );
            implementations.push(implementation);
            adapters.push(adapter);
        }

        if cancelled {
            debug!("generation pass cancelled");
            implementations.clear();
            adapters.clear();
            generated.clear();
        }

        let registration = if cancelled || !unique.registry_available {
            None
        } else {
            aggregate::aggregate(&adapters, &self.options)
        };

        if let Some((_, items)) = &mut module.content {
            rewrite_items(items, &mut Vec::new(), &mut generated);
            if let Some(registration) = &registration {
                items.push(Item::Verbatim(registration.tokens.clone()));
            }
        }

        debug!(
            generated = implementations.len(),
            rejected = diagnostics.len(),
            "generation pass finished"
        );

        PassOutput {
            module,
            implementations,
            adapters,
            registration,
            diagnostics,
            cancelled,
        }
    }
}

/// Replace generated declarations in place and strip directive attributes
/// from everything else, so rejected declarations stay plain unit structs.
fn rewrite_items(
    items: &mut [Item],
    modules: &mut Vec<usize>,
    generated: &mut FxHashMap<Slot, TokenStream>,
) {
    for (index, item) in items.iter_mut().enumerate() {
        let slot = Slot {
            modules: modules.iter().copied().collect(),
            item: index,
        };
        if let Some(tokens) = generated.remove(&slot) {
            *item = Item::Verbatim(tokens);
            continue;
        }

        if let Some(attrs) = item_attrs_mut(item) {
            attrs.retain(|attr| directive_kind(attr).is_none());
        }
        if let Item::Mod(nested) = item {
            if let Some((_, nested_items)) = &mut nested.content {
                modules.push(index);
                rewrite_items(nested_items, modules, generated);
                modules.pop();
            }
        }
    }
}

/// Everything one pass produced.
#[derive(Debug)]
pub struct PassOutput {
    /// The annotated module with declarations replaced.
    pub module: ItemMod,
    pub implementations: Vec<ValueTypeImplementation>,
    pub adapters: Vec<SerializationAdapter>,
    pub registration: Option<RegistrationArtifact>,
    pub diagnostics: Vec<Diagnostic>,
    pub cancelled: bool,
}

impl PassOutput {
    pub fn has_errors(&self) -> bool {
        !self.diagnostics.is_empty()
    }
}

impl ToTokens for PassOutput {
    fn to_tokens(&self, tokens: &mut TokenStream) {
        self.module.to_tokens(tokens);
        for diagnostic in &self.diagnostics {
            tokens.extend(diagnostic.to_compile_error());
        }
    }
}

/// Attribute-macro entry: parse options and module, run one pass.
///
/// Invalid options are reported and the pass still runs with defaults, so
/// the directives are consumed and no unrelated errors follow.
pub fn expand(args: TokenStream, item: TokenStream) -> TokenStream {
    let (options, option_error) = match PassOptions::parse(args) {
        Ok(options) => (options, None),
        Err(diagnostic) => (PassOptions::default(), Some(diagnostic)),
    };

    let module: ItemMod = match syn::parse2(item) {
        Ok(module) => module,
        Err(err) => {
            return syn::Error::new(err.span(), "`#[value_types]` expects an inline module")
                .to_compile_error();
        }
    };
    if module.content.is_none() {
        return syn::Error::new_spanned(
            &module,
            "`#[value_types]` needs the module body inline: `mod name { ... }`",
        )
        .to_compile_error();
    }

    let mut output = GenerationPass::new(options).run(module);
    if let Some(diagnostic) = option_error {
        output.diagnostics.insert(0, diagnostic);
    }
    output.into_token_stream()
}
