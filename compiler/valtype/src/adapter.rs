//! Scalar adapters: one value type to and from one JSON scalar.

use serde_json::Value;

use crate::error::DecodeError;
use crate::scalar::Scalar;
use crate::value::ValueType;

/// Encode/decode pair binding a value type to its external scalar.
///
/// `decode(&encode(v)) == Ok(v)` for every valid `v`.
pub trait ScalarAdapter: Send + Sync + 'static {
    type Value: ValueType;

    fn encode(&self, value: &Self::Value) -> Scalar;

    /// Decode, re-applying every constraint of the value type.
    fn decode(&self, scalar: &Scalar) -> Result<Self::Value, DecodeError>;

    fn encode_json(&self, value: &Self::Value) -> Value {
        self.encode(value).into()
    }

    fn decode_json(&self, json: &Value) -> Result<Self::Value, DecodeError> {
        self.decode(&Scalar::try_from(json)?)
    }
}
