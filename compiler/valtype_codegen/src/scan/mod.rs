//! Declaration scanner.
//!
//! Walks the annotated module (and every nested inline module) and produces
//! a [`ValueDeclaration`] for each unit struct that carries exactly one
//! directive. Items without a directive are ignored. Items with a directive
//! but an unsupported shape are reported and left out of the declaration set.
//!
//! Scanning borrows the module and never rewrites it, so running it twice on
//! the same input yields the same declarations in the same order.

use proc_macro2::Span;
use syn::punctuated::Punctuated;
use syn::spanned::Spanned;
use syn::{Attribute, Fields, Ident, Item, ItemMod, ItemStruct, Path, Token, UseTree, Visibility};
use thiserror::Error;

use crate::declaration::{NamedItem, NamespacePath, Slot, ValueDeclaration};
use crate::diagnostic::{Diagnostic, ErrorCode};
use crate::directive::{directive_kind, Directive};

/// Why an annotated item cannot become a value type.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ShapeError {
    #[error("`#[{directive}]` can only be applied to a struct, found {found}")]
    NotAStruct {
        directive: &'static str,
        found: &'static str,
    },

    #[error("`{name}` must be a unit struct; the generator provides the wrapped field")]
    HasFields { name: String },

    #[error("`{name}` must not have generic parameters")]
    Generic { name: String },

    #[error("`{name}` cannot derive `{derive}`; the generated value type supplies that impl")]
    GeneratedDerive { name: String, derive: String },

    #[error("`{name}` carries more than one value-kind directive")]
    ConflictingDirectives { name: String },

    #[error("`{name}` is declared in `{namespace}` with visibility the registration cannot see")]
    Unreachable { name: String, namespace: String },
}

impl ShapeError {
    pub fn code(&self) -> ErrorCode {
        match self {
            ShapeError::NotAStruct { .. }
            | ShapeError::HasFields { .. }
            | ShapeError::Generic { .. }
            | ShapeError::GeneratedDerive { .. } => ErrorCode::V1001,
            ShapeError::ConflictingDirectives { .. } => ErrorCode::V1002,
            ShapeError::Unreachable { .. } => ErrorCode::V1003,
        }
    }

    pub fn into_diagnostic(self, span: Span) -> Diagnostic {
        let help = match &self {
            ShapeError::HasFields { name } | ShapeError::Generic { name } => {
                Some(format!("declare it as `struct {name};`"))
            }
            ShapeError::GeneratedDerive { derive, .. } => {
                Some(format!("remove `{derive}` from the derive list"))
            }
            ShapeError::ConflictingDirectives { .. } => Some("keep a single directive".to_owned()),
            ShapeError::Unreachable { .. } => {
                Some("declare it `pub` or `pub(crate)` so the registration can name it".to_owned())
            }
            ShapeError::NotAStruct { .. } => None,
        };
        let diag = Diagnostic::error(self.code(), span).with_message(self.to_string());
        match help {
            Some(help) => diag.with_help(help),
            None => diag,
        }
    }
}

/// Declarations found by one scan, plus the diagnostics for rejected sites.
#[derive(Debug, Default)]
pub struct ScanOutput {
    pub declarations: Vec<ValueDeclaration>,
    pub diagnostics: Vec<Diagnostic>,
    /// Every name the module's items introduce, declarations included.
    pub items: Vec<NamedItem>,
}

/// Scan an annotated module for directive-bearing declarations.
pub fn scan(module: &ItemMod) -> ScanOutput {
    let mut out = ScanOutput::default();
    if let Some((_, items)) = &module.content {
        let mut namespace = NamespacePath::new();
        let mut modules = smallvec::SmallVec::new();
        scan_items(items, &mut namespace, &mut modules, &mut out);
    }
    out
}

fn scan_items(
    items: &[Item],
    namespace: &mut NamespacePath,
    modules: &mut smallvec::SmallVec<[usize; 4]>,
    out: &mut ScanOutput,
) {
    for (index, item) in items.iter().enumerate() {
        for name in item_names(item) {
            out.items.push(NamedItem {
                namespace: namespace.clone(),
                name: name.clone(),
            });
        }

        let directives: Vec<&Attribute> = item_attrs(item)
            .iter()
            .filter(|attr| directive_kind(attr).is_some())
            .collect();

        if let Item::Mod(nested) = item {
            if let Some((_, nested_items)) = &nested.content {
                namespace.push(nested.ident.clone());
                modules.push(index);
                scan_items(nested_items, namespace, modules, out);
                modules.pop();
                namespace.pop();
            }
        }

        let Some(first) = directives.first() else {
            continue;
        };

        let Item::Struct(item_struct) = item else {
            let directive = directive_kind(first).map_or("", |kind| kind.directive_name());
            let err = ShapeError::NotAStruct {
                directive,
                found: item_kind_name(item),
            };
            out.diagnostics.push(err.into_diagnostic(first.span()));
            continue;
        };

        let slot = Slot {
            modules: modules.clone(),
            item: index,
        };
        match declaration_from_struct(item_struct, &directives, namespace, slot) {
            Ok(declaration) => {
                tracing::trace!(
                    name = %declaration.qualified_name(),
                    kind = %declaration.kind(),
                    "discovered declaration"
                );
                out.declarations.push(declaration);
            }
            Err(diagnostic) => out.diagnostics.push(diagnostic),
        }
    }
}

fn declaration_from_struct(
    item: &ItemStruct,
    directives: &[&Attribute],
    namespace: &NamespacePath,
    slot: Slot,
) -> Result<ValueDeclaration, Diagnostic> {
    let name = item.ident.to_string();

    if let [_, second, ..] = directives {
        return Err(ShapeError::ConflictingDirectives { name }.into_diagnostic(second.span()));
    }
    let attr = directives[0];

    if !matches!(item.fields, Fields::Unit) {
        return Err(ShapeError::HasFields { name }.into_diagnostic(item.fields.span()));
    }
    if !item.generics.params.is_empty() || item.generics.where_clause.is_some() {
        return Err(ShapeError::Generic { name }.into_diagnostic(item.generics.span()));
    }
    if let Some((derive, span)) = generated_derive(&item.attrs) {
        return Err(ShapeError::GeneratedDerive { name, derive }.into_diagnostic(span));
    }
    if !reachable_from_root(&item.vis, namespace.len()) {
        let namespace = namespace
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("::");
        return Err(ShapeError::Unreachable { name, namespace }.into_diagnostic(item.ident.span()));
    }

    let kind = directive_kind(attr).ok_or_else(|| {
        Diagnostic::error(ErrorCode::V1004, attr.span()).with_message("unrecognized directive")
    })?;
    let directive = Directive::from_attribute(attr, kind)?;

    let attrs = item
        .attrs
        .iter()
        .filter(|attr| directive_kind(attr).is_none())
        .cloned()
        .collect();

    Ok(ValueDeclaration {
        name: item.ident.clone(),
        namespace: namespace.clone(),
        directive,
        vis: item.vis.clone(),
        attrs,
        slot,
    })
}

/// Traits the generated type implements or must control itself.
const GENERATED_TRAITS: &[&str] = &[
    "Clone",
    "Copy",
    "Debug",
    "Default",
    "PartialEq",
    "Eq",
    "PartialOrd",
    "Ord",
    "Hash",
    "Serialize",
    "Deserialize",
];

/// The first derived trait that would conflict with generated code.
fn generated_derive(attrs: &[Attribute]) -> Option<(String, Span)> {
    attrs
        .iter()
        .filter(|attr| attr.path().is_ident("derive"))
        .filter_map(|attr| {
            attr.parse_args_with(Punctuated::<Path, Token![,]>::parse_terminated)
                .ok()
        })
        .flatten()
        .find_map(|path| {
            let ident = &path.segments.last()?.ident;
            let derive = ident.to_string();
            GENERATED_TRAITS
                .contains(&derive.as_str())
                .then(|| (derive, ident.span()))
        })
}

/// Whether an item at `depth` nested modules below the root can be named by
/// code at the root.
fn reachable_from_root(vis: &Visibility, depth: usize) -> bool {
    if depth == 0 {
        return true;
    }
    match vis {
        Visibility::Public(_) => true,
        Visibility::Inherited => false,
        Visibility::Restricted(restricted) => {
            let path = &restricted.path;
            if path.is_ident("self") {
                false
            } else if path.is_ident("super") {
                depth == 1
            } else {
                // `pub(crate)` and `pub(in path)`; the latter cannot be
                // resolved here and is trusted.
                true
            }
        }
    }
}

/// Names an item introduces into its module's type or value namespace.
fn item_names(item: &Item) -> Vec<&Ident> {
    let mut names = Vec::new();
    match item {
        Item::Const(i) => names.push(&i.ident),
        Item::Enum(i) => names.push(&i.ident),
        Item::Fn(i) => names.push(&i.sig.ident),
        Item::Mod(i) => names.push(&i.ident),
        Item::Static(i) => names.push(&i.ident),
        Item::Struct(i) => names.push(&i.ident),
        Item::Trait(i) => names.push(&i.ident),
        Item::TraitAlias(i) => names.push(&i.ident),
        Item::Type(i) => names.push(&i.ident),
        Item::Union(i) => names.push(&i.ident),
        Item::Use(i) => use_names(&i.tree, None, &mut names),
        _ => {}
    }
    names
}

fn use_names<'a>(tree: &'a UseTree, parent: Option<&'a Ident>, names: &mut Vec<&'a Ident>) {
    match tree {
        UseTree::Path(path) => use_names(&path.tree, Some(&path.ident), names),
        UseTree::Name(name) if name.ident == "self" => names.extend(parent),
        UseTree::Name(name) => names.push(&name.ident),
        UseTree::Rename(rename) => names.push(&rename.rename),
        UseTree::Group(group) => {
            for tree in &group.items {
                use_names(tree, parent, names);
            }
        }
        UseTree::Glob(_) => {}
    }
}

/// Attributes of any item kind.
pub(crate) fn item_attrs(item: &Item) -> &[Attribute] {
    match item {
        Item::Const(i) => &i.attrs,
        Item::Enum(i) => &i.attrs,
        Item::ExternCrate(i) => &i.attrs,
        Item::Fn(i) => &i.attrs,
        Item::ForeignMod(i) => &i.attrs,
        Item::Impl(i) => &i.attrs,
        Item::Macro(i) => &i.attrs,
        Item::Mod(i) => &i.attrs,
        Item::Static(i) => &i.attrs,
        Item::Struct(i) => &i.attrs,
        Item::Trait(i) => &i.attrs,
        Item::TraitAlias(i) => &i.attrs,
        Item::Type(i) => &i.attrs,
        Item::Union(i) => &i.attrs,
        Item::Use(i) => &i.attrs,
        _ => &[],
    }
}

/// Mutable attributes of any item kind.
pub(crate) fn item_attrs_mut(item: &mut Item) -> Option<&mut Vec<Attribute>> {
    match item {
        Item::Const(i) => Some(&mut i.attrs),
        Item::Enum(i) => Some(&mut i.attrs),
        Item::ExternCrate(i) => Some(&mut i.attrs),
        Item::Fn(i) => Some(&mut i.attrs),
        Item::ForeignMod(i) => Some(&mut i.attrs),
        Item::Impl(i) => Some(&mut i.attrs),
        Item::Macro(i) => Some(&mut i.attrs),
        Item::Mod(i) => Some(&mut i.attrs),
        Item::Static(i) => Some(&mut i.attrs),
        Item::Struct(i) => Some(&mut i.attrs),
        Item::Trait(i) => Some(&mut i.attrs),
        Item::TraitAlias(i) => Some(&mut i.attrs),
        Item::Type(i) => Some(&mut i.attrs),
        Item::Union(i) => Some(&mut i.attrs),
        Item::Use(i) => Some(&mut i.attrs),
        _ => None,
    }
}

fn item_kind_name(item: &Item) -> &'static str {
    match item {
        Item::Const(_) => "a const",
        Item::Enum(_) => "an enum",
        Item::Fn(_) => "a function",
        Item::Impl(_) => "an impl block",
        Item::Mod(_) => "a module",
        Item::Static(_) => "a static",
        Item::Trait(_) => "a trait",
        Item::Type(_) => "a type alias",
        Item::Union(_) => "a union",
        Item::Use(_) => "a use declaration",
        _ => "an unsupported item",
    }
}
