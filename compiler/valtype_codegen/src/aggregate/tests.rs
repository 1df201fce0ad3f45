#![allow(clippy::unwrap_used, reason = "Tests can panic")]

use super::*;
use crate::adapter;
use crate::scan::scan;
use crate::template;
use crate::validate::validate;
use pretty_assertions::assert_eq;
use syn::{parse_quote, ItemMod};

fn registry() -> Ident {
    parse_quote!(ValueTypes)
}

fn adapters(module: &ItemMod, options: &PassOptions) -> Vec<SerializationAdapter> {
    let cx = options.emit_context();
    scan(module)
        .declarations
        .iter()
        .map(|decl| adapter::emit(&template::emit(&validate(decl).unwrap(), cx), cx))
        .collect()
}

fn collisions(module: &ItemMod) -> Deduplicated {
    let scanned = scan(module);
    reject_collisions(scanned.declarations, &scanned.items, &registry())
}

#[test]
fn test_unique_names_pass_through() {
    let module: ItemMod = parse_quote! {
        mod domain {
            #[identifier]
            pub struct CustomerId;
            #[identifier]
            pub struct OrderId;
        }
    };

    let out = collisions(&module);
    assert!(out.diagnostics.is_empty());
    assert_eq!(out.declarations.len(), 2);
}

#[test]
fn test_every_duplicate_is_rejected() {
    let module: ItemMod = parse_quote! {
        mod domain {
            #[identifier]
            pub struct CustomerId;

            #[bounded_integer(0, 10)]
            pub struct Quantity;

            pub mod legacy {
                #[identifier]
                pub struct CustomerId;
            }
        }
    };

    let out = collisions(&module);
    let kept: Vec<String> = out
        .declarations
        .iter()
        .map(ValueDeclaration::qualified_name)
        .collect();
    assert_eq!(kept, ["Quantity"]);

    assert_eq!(out.diagnostics.len(), 2);
    assert!(out.diagnostics.iter().all(|d| d.code == ErrorCode::V3001));
    assert_eq!(
        out.diagnostics[0].notes,
        ["also declared as `legacy::CustomerId`"]
    );
    assert_eq!(out.diagnostics[1].notes, ["also declared as `CustomerId`"]);
}

#[test]
fn test_registry_name_collision() {
    let module: ItemMod = parse_quote! {
        mod domain {
            #[identifier]
            pub struct ValueTypes;

            pub mod nested {
                #[identifier]
                pub struct Registry;
            }
        }
    };

    let out = collisions(&module);
    assert_eq!(out.diagnostics.len(), 1);
    assert_eq!(out.diagnostics[0].code, ErrorCode::V3002);
    assert_eq!(out.declarations.len(), 1);
    assert_eq!(out.declarations[0].name, "Registry");
    assert!(!out.registry_available);
}

#[test]
fn test_adapter_name_taken_by_declaration() {
    let module: ItemMod = parse_quote! {
        mod domain {
            #[identifier]
            pub struct Order;

            #[identifier]
            pub struct OrderJsonAdapter;
        }
    };

    let out = collisions(&module);
    assert_eq!(out.diagnostics.len(), 1);
    assert_eq!(out.diagnostics[0].code, ErrorCode::V3002);
    assert_eq!(
        out.diagnostics[0].message,
        "adapter `OrderJsonAdapter` generated for `Order` collides with an item of the same name"
    );
    let kept: Vec<String> = out
        .declarations
        .iter()
        .map(ValueDeclaration::qualified_name)
        .collect();
    assert_eq!(kept, ["OrderJsonAdapter"]);
    assert!(out.registry_available);
}

#[test]
fn test_duplicate_reported_before_adapter_clash() {
    let module: ItemMod = parse_quote! {
        mod domain {
            #[identifier]
            pub struct Order;

            pub struct OrderJsonAdapter;

            pub mod archive {
                #[identifier]
                pub struct Order;
            }
        }
    };

    let out = collisions(&module);
    let codes: Vec<ErrorCode> = out.diagnostics.iter().map(|d| d.code).collect();
    assert_eq!(codes, [ErrorCode::V3001, ErrorCode::V3001]);
}

#[test]
fn test_adapter_name_taken_by_plain_item() {
    let module: ItemMod = parse_quote! {
        mod domain {
            #[identifier]
            pub struct CustomerId;

            pub struct CustomerIdJsonAdapter;

            pub mod billing {
                #[bounded_integer(0, 100)]
                pub struct Amount;

                pub use super::CustomerId as AmountJsonAdapter;
            }

            // Different namespace: no clash.
            #[bounded_integer(0, 100)]
            pub struct Discount;

            pub mod reports {
                pub fn DiscountJsonAdapter() {}
            }
        }
    };

    let out = collisions(&module);
    assert_eq!(out.diagnostics.len(), 2);
    assert!(out.diagnostics.iter().all(|d| d.code == ErrorCode::V3002));
    let kept: Vec<String> = out
        .declarations
        .iter()
        .map(ValueDeclaration::qualified_name)
        .collect();
    assert_eq!(kept, ["Discount"]);
}

#[test]
fn test_plain_item_named_like_registry() {
    let module: ItemMod = parse_quote! {
        mod domain {
            #[identifier]
            pub struct CustomerId;

            pub fn ValueTypes() {}

            pub mod nested {
                pub struct ValueTypes;
            }
        }
    };

    let out = collisions(&module);
    assert_eq!(out.declarations.len(), 1);
    assert!(!out.registry_available);
    assert_eq!(out.diagnostics.len(), 1);
    assert_eq!(out.diagnostics[0].code, ErrorCode::V3002);
    assert_eq!(
        out.diagnostics[0].message,
        "`ValueTypes` collides with the generated registration type"
    );
}

#[test]
fn test_adapter_named_like_registry() {
    let options = PassOptions::parse(quote!(registry = TagJsonAdapter)).unwrap();
    let module: ItemMod = parse_quote! {
        mod domain {
            #[bounded_text(1, 8)]
            pub struct Tag;
        }
    };

    let scanned = scan(&module);
    let out = reject_collisions(scanned.declarations, &scanned.items, &options.registry);
    assert!(out.declarations.is_empty());
    assert_eq!(out.diagnostics[0].code, ErrorCode::V3002);
    assert!(out.registry_available);
}

#[test]
fn test_no_registration_without_adapters() {
    assert!(aggregate(&[], &PassOptions::default()).is_none());
}

#[test]
fn test_entries_sorted_by_name() {
    let options = PassOptions::default();
    let module: ItemMod = parse_quote! {
        mod domain {
            #[bounded_text(1, 50)]
            pub struct Name;
            #[identifier]
            pub struct CustomerId;
            pub mod billing {
                #[bounded_integer(0, 100000)]
                pub struct Amount;
            }
        }
    };

    let artifact = aggregate(&adapters(&module, &options), &options).unwrap();
    assert_eq!(artifact.registry, "ValueTypes");
    assert_eq!(
        artifact.names().collect::<Vec<_>>(),
        ["Amount", "CustomerId", "Name"]
    );

    let text = artifact.tokens.to_string();
    assert!(text.contains(
        "pub const NAMES : & 'static [& 'static str] = & [\"Amount\" , \"CustomerId\" , \"Name\"]"
    ));
    let amount = text.find("self :: billing :: AmountJsonAdapter").unwrap();
    let customer = text.find("self :: CustomerIdJsonAdapter").unwrap();
    let name = text.find("self :: NameJsonAdapter").unwrap();
    assert!(amount < customer && customer < name);
}

#[test]
fn test_custom_registry_name() {
    let options = PassOptions::parse(quote!(registry = DomainValueTypes)).unwrap();
    let module: ItemMod = parse_quote! {
        mod domain {
            #[identifier]
            pub struct CustomerId;
        }
    };

    let artifact = aggregate(&adapters(&module, &options), &options).unwrap();
    let text = artifact.tokens.to_string();
    assert!(text.contains("pub struct DomainValueTypes ;"));
    assert!(text.contains("impl :: valtype :: Installable for DomainValueTypes"));
}

#[test]
fn test_aggregation_is_deterministic() {
    let options = PassOptions::default();
    let module: ItemMod = parse_quote! {
        mod domain {
            #[bounded_real(0, 1)]
            pub struct Ratio;
            #[identifier]
            pub struct AccountId;
            #[bounded_text(0, 8, "^[a-z]*$")]
            pub struct Code;
        }
    };

    let first = aggregate(&adapters(&module, &options), &options).unwrap();
    let second = aggregate(&adapters(&module, &options), &options).unwrap();
    assert_eq!(first.tokens.to_string(), second.tokens.to_string());
}
