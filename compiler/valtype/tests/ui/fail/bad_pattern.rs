//! Error: pattern is not a valid regular expression.

#[valtype::value_types]
pub mod domain {
    #[bounded_text(1, 10, "[unclosed")]
    pub struct Code;
}

fn main() {}
