//! Runtime errors raised by generated value types and the adapter registry.
//!
//! All of them are ordinary values returned through `Result`; nothing here
//! panics. `try_parse` never produces one at all, it returns `None`.

use thiserror::Error;

use crate::scalar::ScalarKind;

/// The predicate a value failed.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Violation {
    #[error("length {length} is outside {min}..={max}")]
    Length {
        length: usize,
        min: usize,
        max: usize,
    },

    #[error("text does not match `{pattern}`")]
    Pattern { pattern: &'static str },

    #[error("{value} is outside {min}..={max}")]
    IntegerRange { value: i64, min: i32, max: i32 },

    #[error("{value} is outside {min}..={max}")]
    RealRange { value: f64, min: f64, max: f64 },

    #[error("{value} is not a finite number")]
    NotFinite { value: f64 },

    #[error("pattern `{pattern}` cannot be compiled: {reason}")]
    PatternUnavailable {
        pattern: &'static str,
        reason: String,
    },
}

/// A value rejected by its type's constraints.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("invalid {type_name}: {reason}")]
pub struct ConstraintViolation {
    pub type_name: &'static str,
    pub reason: Violation,
}

impl ConstraintViolation {
    pub fn new(type_name: &'static str, reason: Violation) -> Self {
        ConstraintViolation { type_name, reason }
    }
}

/// An external scalar that does not decode to a valid value.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DecodeError {
    #[error("{type_name}: expected {expected} scalar, found {found}")]
    UnexpectedScalar {
        type_name: &'static str,
        expected: ScalarKind,
        found: ScalarKind,
    },

    #[error("{type_name} cannot be parsed from {text:?}")]
    Malformed {
        type_name: &'static str,
        text: String,
    },

    /// JSON `null`, booleans, arrays and objects never hold a value type.
    #[error("expected a JSON scalar, found {found}")]
    NotAScalar { found: &'static str },

    #[error(transparent)]
    Violation(#[from] ConstraintViolation),
}

impl DecodeError {
    pub fn malformed(type_name: &'static str, text: &str) -> Self {
        DecodeError::Malformed {
            type_name,
            text: text.to_owned(),
        }
    }

    pub fn unexpected(type_name: &'static str, expected: ScalarKind, found: ScalarKind) -> Self {
        DecodeError::UnexpectedScalar {
            type_name,
            expected,
            found,
        }
    }
}

/// Failures of [`AdapterRegistry`](crate::AdapterRegistry) operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RegistryError {
    #[error("an adapter for `{type_name}` is already registered")]
    AlreadyRegistered { type_name: &'static str },

    #[error("no adapter is registered for `{type_name}`")]
    UnknownType { type_name: String },

    #[error("the adapter registered as `{type_name}` does not convert the requested type")]
    TypeMismatch { type_name: &'static str },

    #[error(transparent)]
    Decode(#[from] DecodeError),
}

#[cfg(test)]
mod tests;
