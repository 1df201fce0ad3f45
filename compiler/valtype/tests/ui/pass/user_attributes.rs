//! User attributes and docs are kept; generated types compose with serde.

use serde::{Deserialize, Serialize};
use valtype::value_types;

#[value_types]
pub mod people {
    /// Email address, loosely checked.
    #[bounded_text(min_length = 3, max_length = 254, pattern = "^[^@\\s]+@[^@\\s]+$")]
    #[allow(clippy::doc_markdown)]
    pub struct Email;

    /// Age in whole years.
    #[bounded_integer(0, 150)]
    pub struct Age;

    pub fn adult() -> Age {
        match Age::new(18) {
            Ok(age) => age,
            Err(_) => unreachable!(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, PartialEq)]
struct Person {
    email: people::Email,
    age: people::Age,
}

fn main() {
    let person = Person {
        email: people::Email::new("ada@example.com").unwrap(),
        age: people::adult(),
    };
    let json = serde_json::to_string(&person).unwrap();
    let back: Person = serde_json::from_str(&json).unwrap();
    assert_eq!(back, person);
}
