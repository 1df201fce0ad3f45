//! Error: deriving a trait the generated type already implements.

#[valtype::value_types]
pub mod domain {
    #[identifier]
    #[derive(Debug)]
    pub struct CustomerId;
}

fn main() {}
