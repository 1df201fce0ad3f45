//! The single external scalar every value type encodes to.
//!
//! A JSON document carries each value as exactly one string or number.
//! [`Scalar`] is that subset of `serde_json::Value`, with integers and reals
//! kept apart so integer kinds never silently accept fractional input.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};

use crate::error::DecodeError;

/// One JSON string or number.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    Integer(i64),
    Real(f64),
    Text(String),
}

/// Shape of a [`Scalar`], for error reporting.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ScalarKind {
    Integer,
    Real,
    Text,
}

impl fmt::Display for ScalarKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ScalarKind::Integer => "integer",
            ScalarKind::Real => "real",
            ScalarKind::Text => "text",
        })
    }
}

impl Scalar {
    pub fn kind(&self) -> ScalarKind {
        match self {
            Scalar::Integer(_) => ScalarKind::Integer,
            Scalar::Real(_) => ScalarKind::Real,
            Scalar::Text(_) => ScalarKind::Text,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Scalar::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Scalar::Integer(value) => Some(*value),
            _ => None,
        }
    }

    /// Reals, and integers widened to `f64`.
    #[allow(clippy::cast_precision_loss, reason = "JSON numbers are f64 on the wire")]
    pub fn as_real(&self) -> Option<f64> {
        match self {
            Scalar::Real(value) => Some(*value),
            Scalar::Integer(value) => Some(*value as f64),
            Scalar::Text(_) => None,
        }
    }

    /// The text for a textual value type, or `UnexpectedScalar`.
    pub fn require_text(&self, type_name: &'static str) -> Result<&str, DecodeError> {
        self.as_text()
            .ok_or_else(|| DecodeError::unexpected(type_name, ScalarKind::Text, self.kind()))
    }

    pub fn require_integer(&self, type_name: &'static str) -> Result<i64, DecodeError> {
        self.as_integer()
            .ok_or_else(|| DecodeError::unexpected(type_name, ScalarKind::Integer, self.kind()))
    }

    pub fn require_real(&self, type_name: &'static str) -> Result<f64, DecodeError> {
        self.as_real()
            .ok_or_else(|| DecodeError::unexpected(type_name, ScalarKind::Real, self.kind()))
    }
}

impl fmt::Display for Scalar {
    /// JSON rendering: text is quoted and escaped.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&Value::from(self.clone()), f)
    }
}

impl From<Scalar> for Value {
    fn from(scalar: Scalar) -> Self {
        match scalar {
            Scalar::Integer(value) => Value::Number(value.into()),
            // Non-finite reals have no JSON form; generated types never hold one.
            Scalar::Real(value) => Number::from_f64(value).map_or(Value::Null, Value::Number),
            Scalar::Text(text) => Value::String(text),
        }
    }
}

impl TryFrom<&Value> for Scalar {
    type Error = DecodeError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        match value {
            Value::String(text) => Ok(Scalar::Text(text.clone())),
            Value::Number(number) => number
                .as_i64()
                .map(Scalar::Integer)
                .or_else(|| number.as_f64().map(Scalar::Real))
                .ok_or(DecodeError::NotAScalar { found: "number" }),
            Value::Null => Err(DecodeError::NotAScalar { found: "null" }),
            Value::Bool(_) => Err(DecodeError::NotAScalar { found: "a boolean" }),
            Value::Array(_) => Err(DecodeError::NotAScalar { found: "an array" }),
            Value::Object(_) => Err(DecodeError::NotAScalar { found: "an object" }),
        }
    }
}

impl TryFrom<Value> for Scalar {
    type Error = DecodeError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::String(text) => Ok(Scalar::Text(text)),
            other => Scalar::try_from(&other),
        }
    }
}

impl From<&str> for Scalar {
    fn from(text: &str) -> Self {
        Scalar::Text(text.to_owned())
    }
}

impl From<String> for Scalar {
    fn from(text: String) -> Self {
        Scalar::Text(text)
    }
}

impl From<i64> for Scalar {
    fn from(value: i64) -> Self {
        Scalar::Integer(value)
    }
}

impl From<i32> for Scalar {
    fn from(value: i32) -> Self {
        Scalar::Integer(value.into())
    }
}

impl From<f64> for Scalar {
    fn from(value: f64) -> Self {
        Scalar::Real(value)
    }
}
