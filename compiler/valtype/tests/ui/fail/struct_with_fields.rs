//! Error: value types wrap their own field.

#[valtype::value_types]
pub mod domain {
    #[bounded_integer(0, 10)]
    pub struct Count(pub i32);
}

fn main() {}
