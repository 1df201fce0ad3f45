//! Every directive at the module root, positional and named.

use valtype::{value_types, AdapterRegistry, ScalarAdapter};

#[value_types]
pub mod domain {
    #[identifier]
    pub struct CustomerId;

    #[bounded_text(1, 50)]
    pub struct Name;

    #[bounded_text(min_length = 1, max_length = 50, pattern = "^[A-Za-z ]*$")]
    pub struct PersonName;

    #[bounded_integer(min = 0, max = 100000)]
    pub struct Amount;

    #[bounded_real(0, 99.9)]
    pub struct Percentage;
}

fn main() {
    let id = domain::CustomerId::new();
    let _name = domain::Name::new("Ada").unwrap();
    let _person = domain::PersonName::try_parse("Jane Doe");
    let amount = domain::Amount::new(500).unwrap();
    let _percentage = domain::Percentage::new(12.5).unwrap();

    let _scalar = domain::AmountJsonAdapter.encode(&amount);
    let _text = id.to_string();

    let registry = AdapterRegistry::with(&domain::ValueTypes).unwrap();
    assert_eq!(registry.len(), domain::ValueTypes::NAMES.len());
}
