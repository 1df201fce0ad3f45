//! Custom registration name and a runtime reached through a re-export.

mod vt {
    pub use valtype::*;
}

#[vt::value_types(registry = BillingTypes, runtime = crate::vt)]
pub mod billing {
    #[identifier]
    pub struct InvoiceId;

    #[bounded_integer(1, 12)]
    pub struct Month;
}

fn main() {
    let registry = vt::AdapterRegistry::with(&billing::BillingTypes).unwrap();
    assert_eq!(billing::BillingTypes::NAMES, ["InvoiceId", "Month"]);
    assert!(registry.contains("Month"));
}
