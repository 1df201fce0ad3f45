//! Error: an item already uses the adapter's name.

#[valtype::value_types]
pub mod domain {
    #[identifier]
    pub struct Order;
    pub struct OrderJsonAdapter;
}

fn main() {}
