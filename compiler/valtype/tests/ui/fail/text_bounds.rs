//! Error: length bounds out of order.

#[valtype::value_types]
pub mod domain {
    #[bounded_text(10, 5)]
    pub struct Broken;
}

fn main() {}
