//! Error: the same name declared in two namespaces.

#[valtype::value_types]
pub mod domain {
    #[identifier] pub struct OrderId;
    pub mod archive { #[identifier] pub struct OrderId; }
}

fn main() {}
