//! Primitive-wrapped value types with validation and JSON scalar adapters.
//!
//! Declare the values of a domain as unit structs inside a
//! [`#[value_types]`](value_types) module:
//!
//! ```
//! use valtype::{value_types, AdapterRegistry, Scalar};
//!
//! #[value_types]
//! pub mod domain {
//!     #[identifier]
//!     pub struct CustomerId;
//!
//!     #[bounded_integer(min = 0, max = 100000)]
//!     pub struct Amount;
//! }
//!
//! use domain::{Amount, AmountJsonAdapter, CustomerId};
//! use valtype::ScalarAdapter;
//!
//! let amount = Amount::new(500).unwrap();
//! assert_eq!(AmountJsonAdapter.encode(&amount), Scalar::Integer(500));
//! assert!(Amount::new(-1).is_err());
//! assert_ne!(CustomerId::new(), CustomerId::EMPTY);
//!
//! let registry = AdapterRegistry::with(&domain::ValueTypes).unwrap();
//! assert!(registry.contains("CustomerId"));
//! ```
//!
//! Every generated type implements [`ValueType`] and its kind trait
//! ([`IdentifierValue`], [`TextValue`], [`IntegerValue`], [`RealValue`]),
//! `Display`/`FromStr` in its canonical text form, ordering, equality,
//! hashing, primitive conversions and serde support as a single scalar.
//! The module also gains one [`ScalarAdapter`] per type and a registration
//! type implementing [`Installable`].
//!
//! Construction and decoding report [`ConstraintViolation`] and
//! [`DecodeError`]; `try_parse` returns `None` instead.

mod adapter;
pub mod check;
mod error;
mod kind;
mod pattern;
mod registry;
mod scalar;
mod value;

pub use adapter::ScalarAdapter;
pub use error::{ConstraintViolation, DecodeError, RegistryError, Violation};
pub use kind::ValueKind;
pub use registry::{AdapterRegistry, Installable};
pub use scalar::{Scalar, ScalarKind};
pub use uuid::Uuid;
pub use value::{IdentifierValue, IntegerValue, RealValue, TextValue, ValueType};
pub use valtype_macros::value_types;

/// Items generated code refers to. Not part of the public API.
#[doc(hidden)]
pub mod __private {
    pub use crate::pattern::CompiledPattern;
    pub use serde;
}
