use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_violation_messages() {
    let err = ConstraintViolation::new(
        "Name",
        Violation::Length {
            length: 51,
            min: 1,
            max: 50,
        },
    );
    assert_eq!(err.to_string(), "invalid Name: length 51 is outside 1..=50");

    let err = ConstraintViolation::new(
        "Amount",
        Violation::IntegerRange {
            value: -1,
            min: 0,
            max: 100_000,
        },
    );
    assert_eq!(err.to_string(), "invalid Amount: -1 is outside 0..=100000");

    let err = ConstraintViolation::new(
        "PersonName",
        Violation::Pattern {
            pattern: "^[A-Za-z ]*$",
        },
    );
    assert_eq!(
        err.to_string(),
        "invalid PersonName: text does not match `^[A-Za-z ]*$`"
    );
}

#[test]
fn test_decode_error_messages() {
    assert_eq!(
        DecodeError::unexpected("Amount", ScalarKind::Integer, ScalarKind::Text).to_string(),
        "Amount: expected integer scalar, found text"
    );
    assert_eq!(
        DecodeError::malformed("CustomerId", "nope").to_string(),
        "CustomerId cannot be parsed from \"nope\""
    );
}

#[test]
fn test_violation_is_transparent_through_decode_and_registry() {
    let violation = ConstraintViolation::new("Ratio", Violation::NotFinite { value: f64::NAN });
    let decode = DecodeError::from(violation.clone());
    assert_eq!(decode.to_string(), violation.to_string());

    let registry = RegistryError::from(decode.clone());
    assert_eq!(registry.to_string(), decode.to_string());
}
