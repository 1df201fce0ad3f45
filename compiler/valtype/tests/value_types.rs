//! End-to-end behaviour of generated value types.

#![allow(clippy::unwrap_used, clippy::float_cmp, reason = "Tests can panic")]
#![allow(dead_code)]

use std::collections::HashSet;

use pretty_assertions::assert_eq;
use serde_json::json;
use valtype::{
    value_types, AdapterRegistry, ConstraintViolation, DecodeError, IdentifierValue, IntegerValue,
    RealValue, RegistryError, Scalar, ScalarAdapter, TextValue, ValueKind, ValueType, Violation,
};

#[value_types]
pub mod domain {
    /// Customer primary key.
    #[identifier]
    pub struct CustomerId;

    #[bounded_integer(min = 0, max = 100000)]
    pub struct Amount;

    #[bounded_text(1, 50)]
    pub struct Name;

    #[bounded_text(min_length = 1, max_length = 50, pattern = "^[A-Za-z ]*$")]
    pub struct PersonName;

    #[bounded_integer(0, 100)]
    pub struct Score;

    #[bounded_real(min = -273.15, max = 1000)]
    pub struct Celsius;

    pub mod orders {
        #[identifier]
        pub struct OrderId;

        #[bounded_integer(1, 999)]
        pub struct Quantity;
    }
}

use domain::orders::{OrderId, Quantity};
use domain::{
    AmountJsonAdapter, CelsiusJsonAdapter, CustomerIdJsonAdapter, NameJsonAdapter,
    PersonNameJsonAdapter, ValueTypes,
};
use domain::{Amount, Celsius, CustomerId, Name, PersonName, Score};

#[test]
fn test_amount_end_to_end() {
    let amount = Amount::new(500).unwrap();
    assert_eq!(AmountJsonAdapter.encode(&amount), Scalar::Integer(500));
    assert_eq!(AmountJsonAdapter.encode_json(&amount), json!(500));

    let err = Amount::new(-1).unwrap_err();
    assert_eq!(
        err,
        ConstraintViolation {
            type_name: "Amount",
            reason: Violation::IntegerRange {
                value: -1,
                min: 0,
                max: 100_000
            },
        }
    );
}

#[test]
fn test_integer_bounds_inclusive() {
    assert!(Score::new(0).is_ok());
    assert!(Score::new(100).is_ok());
    assert!(Score::new(-1).is_err());
    assert!(Score::new(101).is_err());
    assert_eq!(Score::MIN, 0);
    assert_eq!(<Score as IntegerValue>::MAX, 100);
}

#[test]
fn test_text_length_bounds() {
    assert!(Name::new("a").is_ok());
    assert!(Name::new("a".repeat(50)).is_ok());
    assert!(matches!(
        Name::new("").unwrap_err().reason,
        Violation::Length { length: 0, .. }
    ));
    assert!(matches!(
        Name::new("a".repeat(51)).unwrap_err().reason,
        Violation::Length { length: 51, .. }
    ));
    assert_eq!(<Name as TextValue>::PATTERN, None);
}

#[test]
fn test_pattern_enforced() {
    assert_eq!(PersonName::new("Jane Doe").unwrap().as_str(), "Jane Doe");
    assert!(matches!(
        PersonName::new("Jane Doe 2").unwrap_err().reason,
        Violation::Pattern { .. }
    ));
    assert!(PersonName::try_parse("R2D2").is_none());
    assert_eq!(PersonName::PATTERN, Some("^[A-Za-z ]*$"));
}

#[test]
fn test_try_parse_never_fails_loudly() {
    assert_eq!(Amount::try_parse("500"), Some(Amount::new(500).unwrap()));
    assert_eq!(Amount::try_parse(" 42 "), Some(Amount::new(42).unwrap()));
    assert_eq!(Amount::try_parse("-1"), None);
    assert_eq!(Amount::try_parse("five"), None);
    assert_eq!(Amount::try_parse("1.5"), None);
    assert_eq!(CustomerId::try_parse("not-a-uuid"), None);
    assert!(Celsius::try_parse("NaN").is_none());
    assert!(Celsius::try_parse("inf").is_none());
}

#[test]
fn test_from_str_reports_why() {
    assert!(matches!(
        "five".parse::<Amount>(),
        Err(DecodeError::Malformed {
            type_name: "Amount",
            ..
        })
    ));
    assert!(matches!(
        "200000".parse::<Amount>(),
        Err(DecodeError::Violation(_))
    ));
    assert_eq!("77".parse::<Amount>().unwrap().value(), 77);
}

#[test]
fn test_identifier_freshness_and_empty() {
    let a = CustomerId::new();
    let b = CustomerId::new();
    assert_ne!(a, b);
    assert_ne!(a, CustomerId::EMPTY);
    assert!(CustomerId::EMPTY.is_empty());
    assert!(!a.is_empty());
    assert_eq!(CustomerId::default(), CustomerId::empty());
    assert_eq!(<CustomerId as IdentifierValue>::EMPTY, CustomerId::EMPTY);
    assert!(!<CustomerId as IdentifierValue>::generate().is_empty());
}

#[test]
fn test_identifier_text_form() {
    let id = CustomerId::from_uuid(
        valtype::Uuid::parse_str("67E55044-10B1-426F-9247-BB680E5FE0C8").unwrap(),
    );
    assert_eq!(id.to_string(), "67e55044-10b1-426f-9247-bb680e5fe0c8");
    assert_eq!(CustomerId::try_parse(&id.format()), Some(id));
    // Any form the uuid parser accepts.
    assert_eq!(
        CustomerId::try_parse("67e5504410b1426f9247bb680e5fe0c8"),
        Some(id)
    );
}

#[test]
fn test_ordering_follows_primitive() {
    let mut scores: Vec<Score> = [30, 5, 100, 0]
        .into_iter()
        .map(|v| Score::new(v).unwrap())
        .collect();
    scores.sort();
    assert_eq!(
        scores.iter().map(|s| s.value()).collect::<Vec<_>>(),
        [0, 5, 30, 100]
    );

    assert!(Name::new("Apple").unwrap() < Name::new("Banana").unwrap());
    assert!(Celsius::new(-10.5).unwrap() < Celsius::new(3.0).unwrap());

    let low = CustomerId::from_uuid(valtype::Uuid::from_u128(1));
    let high = CustomerId::from_uuid(valtype::Uuid::from_u128(2));
    assert!(low < high);
}

#[test]
fn test_real_equality_and_hashing() {
    assert_eq!(Celsius::new(-0.0).unwrap(), Celsius::new(0.0).unwrap());
    let set: HashSet<Celsius> = [0.0, -0.0, 1.5]
        .into_iter()
        .map(|v| Celsius::new(v).unwrap())
        .collect();
    assert_eq!(set.len(), 2);

    assert!(Celsius::new(f64::NAN).is_err());
    assert!(Celsius::new(-273.16).is_err());
    assert_eq!(Celsius::MIN, -273.15);
    assert_eq!(<Celsius as RealValue>::MAX, 1000.0);
}

#[test]
fn test_primitive_conversions() {
    let amount = Amount::try_from(250).unwrap();
    assert_eq!(i32::from(amount), 250);
    assert!(Amount::try_from(-5).is_err());

    let name = Name::try_from("Ada".to_owned()).unwrap();
    assert_eq!(String::from(name.clone()), "Ada");
    assert_eq!(name.as_ref(), "Ada");

    let uuid = valtype::Uuid::from_u128(7);
    let id = CustomerId::from(uuid);
    assert_eq!(valtype::Uuid::from(id), uuid);

    assert_eq!(Amount::try_from_primitive(9).unwrap().to_primitive(), 9);
    assert_eq!(f64::from(Celsius::new(21.5).unwrap()), 21.5);
}

#[test]
fn test_value_type_metadata() {
    assert_eq!(CustomerId::NAME, "CustomerId");
    assert_eq!(CustomerId::KIND, ValueKind::Identifier);
    assert_eq!(Name::KIND, ValueKind::BoundedText);
    assert_eq!(Amount::KIND, ValueKind::BoundedInteger);
    assert_eq!(Celsius::KIND, ValueKind::BoundedReal);
    assert_eq!(Name::MIN_LENGTH, 1);
    assert_eq!(Name::MAX_LENGTH, 50);
}

#[test]
fn test_adapters_round_trip() {
    let id = CustomerId::new();
    assert_eq!(
        CustomerIdJsonAdapter
            .decode(&CustomerIdJsonAdapter.encode(&id))
            .unwrap(),
        id
    );

    let name = PersonName::new("Jane Doe").unwrap();
    assert_eq!(
        PersonNameJsonAdapter.encode(&name),
        Scalar::Text("Jane Doe".to_owned())
    );
    assert_eq!(
        PersonNameJsonAdapter
            .decode(&PersonNameJsonAdapter.encode(&name))
            .unwrap(),
        name
    );

    let temperature = Celsius::new(-40.0).unwrap();
    assert_eq!(CelsiusJsonAdapter.encode(&temperature), Scalar::Real(-40.0));
    assert_eq!(
        CelsiusJsonAdapter.decode(&Scalar::Integer(-40)).unwrap(),
        temperature
    );
}

#[test]
fn test_adapter_decode_errors() {
    assert!(matches!(
        AmountJsonAdapter.decode(&Scalar::from("500")),
        Err(DecodeError::UnexpectedScalar { .. })
    ));
    assert!(matches!(
        AmountJsonAdapter.decode(&Scalar::Real(1.5)),
        Err(DecodeError::UnexpectedScalar { .. })
    ));
    assert!(matches!(
        AmountJsonAdapter.decode(&Scalar::Integer(i64::MAX)),
        Err(DecodeError::Violation(_))
    ));
    assert!(matches!(
        NameJsonAdapter.decode(&Scalar::from("")),
        Err(DecodeError::Violation(_))
    ));
    assert!(matches!(
        CustomerIdJsonAdapter.decode(&Scalar::from("nope")),
        Err(DecodeError::Malformed { .. })
    ));
    assert!(matches!(
        CustomerIdJsonAdapter.decode_json(&json!(null)),
        Err(DecodeError::NotAScalar { .. })
    ));
}

#[test]
fn test_serde_as_single_scalar() {
    #[derive(serde::Serialize, serde::Deserialize, Debug, PartialEq)]
    struct Order {
        id: OrderId,
        customer: CustomerId,
        quantity: Quantity,
        amount: Amount,
        note: Name,
    }

    let order = Order {
        id: OrderId::new(),
        customer: CustomerId::new(),
        quantity: Quantity::new(3).unwrap(),
        amount: Amount::new(500).unwrap(),
        note: Name::new("rush").unwrap(),
    };

    let json = serde_json::to_value(&order).unwrap();
    assert_eq!(json["quantity"], json!(3));
    assert_eq!(json["amount"], json!(500));
    assert_eq!(json["note"], json!("rush"));
    assert_eq!(json["id"], json!(order.id.to_string()));

    let back: Order = serde_json::from_value(json).unwrap();
    assert_eq!(back, order);

    let invalid = json!({
        "id": OrderId::new().to_string(),
        "customer": CustomerId::new().to_string(),
        "quantity": 0,
        "amount": 1,
        "note": "x",
    });
    let err = serde_json::from_value::<Order>(invalid).unwrap_err();
    assert!(err.to_string().contains("invalid Quantity"));
}

#[test]
fn test_registration_names_sorted() {
    assert_eq!(
        ValueTypes::NAMES,
        [
            "Amount",
            "Celsius",
            "CustomerId",
            "Name",
            "OrderId",
            "PersonName",
            "Quantity",
            "Score",
        ]
    );
}

#[test]
fn test_registry_install_once() {
    let mut registry = AdapterRegistry::new();
    registry.install(&ValueTypes).unwrap();

    assert_eq!(registry.len(), ValueTypes::NAMES.len());
    assert_eq!(registry.names().collect::<Vec<_>>(), ValueTypes::NAMES);
    assert_eq!(registry.kind_of("PersonName"), Some(ValueKind::BoundedText));

    assert!(matches!(
        registry.install(&ValueTypes),
        Err(RegistryError::AlreadyRegistered { type_name: "Amount" })
    ));
}

#[test]
fn test_registry_typed_and_by_name() {
    let registry = AdapterRegistry::with(&ValueTypes).unwrap();

    let amount = Amount::new(500).unwrap();
    assert_eq!(registry.encode(&amount).unwrap(), Scalar::Integer(500));
    assert_eq!(
        registry.decode::<Amount>(&Scalar::Integer(500)).unwrap(),
        amount
    );
    assert_eq!(
        registry.decode_json::<Quantity>(&json!(12)).unwrap(),
        Quantity::new(12).unwrap()
    );

    assert_eq!(
        registry.validate_json("PersonName", &json!("Jane Doe")).unwrap(),
        json!("Jane Doe")
    );
    assert!(registry.validate_json("PersonName", &json!("J4ne")).is_err());
    assert!(matches!(
        registry.decode_by_name("Unknown", &Scalar::Integer(1)),
        Err(RegistryError::UnknownType { .. })
    ));
}
