//! Declarations in nested modules are registered from the root.

use valtype::{value_types, Installable, AdapterRegistry};

#[value_types]
mod catalog {
    pub mod products {
        #[identifier]
        pub struct ProductId;

        #[bounded_text(3, 12, "^[A-Z0-9-]+$")]
        pub(crate) struct Sku;
    }

    pub mod pricing {
        #[bounded_real(min = -0.5, max = 0.5)]
        pub struct Discount;

        pub mod tiers {
            #[bounded_integer(-10, 10)]
            pub struct Tier;
        }
    }
}

fn install(registry: &mut AdapterRegistry, unit: &dyn Installable) {
    unit.install_into(registry).unwrap();
}

fn main() {
    let mut registry = AdapterRegistry::new();
    install(&mut registry, &catalog::ValueTypes);
    assert!(registry.contains("Sku"));
    assert!(registry.contains("Tier"));

    let _sku = catalog::products::Sku::new("AB-12").unwrap();
    let _tier = catalog::pricing::tiers::Tier::new(-10).unwrap();
    let _discount = catalog::pricing::Discount::new(-0.25).unwrap();
    let _id = catalog::products::ProductId::default();
}
