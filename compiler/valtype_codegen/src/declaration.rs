//! Discovered annotation sites.

use proc_macro2::Span;
use smallvec::SmallVec;
use syn::{Attribute, Ident, Visibility};

use crate::directive::Directive;
use crate::kind::ValueKind;

/// Chain of inline modules between the annotated module and a declaration.
/// Empty for declarations at the module root.
pub type NamespacePath = SmallVec<[Ident; 4]>;

/// Position of a declaration inside the annotated module.
///
/// `modules` holds the item index of each nested inline module on the way
/// down; `item` is the index of the struct inside the innermost one.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct Slot {
    pub modules: SmallVec<[usize; 4]>,
    pub item: usize,
}

/// A unit struct carrying a value-kind directive.
#[derive(Clone, Debug)]
pub struct ValueDeclaration {
    pub name: Ident,
    pub namespace: NamespacePath,
    pub directive: Directive,
    pub vis: Visibility,
    /// Attributes other than the directive, carried onto the generated type.
    pub attrs: Vec<Attribute>,
    pub slot: Slot,
}

impl ValueDeclaration {
    pub fn kind(&self) -> ValueKind {
        self.directive.kind
    }

    /// Source location diagnostics for this declaration attach to.
    pub fn span(&self) -> Span {
        self.directive.span
    }

    /// `a::b::Name`, relative to the annotated module.
    pub fn qualified_name(&self) -> String {
        let mut out = String::new();
        for segment in &self.namespace {
            out.push_str(&segment.to_string());
            out.push_str("::");
        }
        out.push_str(&self.name.to_string());
        out
    }
}

/// Any named item in the annotated module, with or without a directive.
///
/// Generated items share these namespaces, so the aggregator checks them
/// for clashes before anything is emitted.
#[derive(Clone, Debug)]
pub struct NamedItem {
    pub namespace: NamespacePath,
    pub name: Ident,
}
