//! The contract every generated value type fulfils.
//!
//! All four kinds share one surface: construct (via `try_from_primitive`),
//! parse, format, compare, and convert back to the primitive. Kind-specific
//! traits add the bounds the type was declared with.

use std::fmt;
use std::hash::Hash;
use std::str::FromStr;

use uuid::Uuid;

use crate::error::{ConstraintViolation, DecodeError};
use crate::kind::ValueKind;

/// A primitive-wrapped domain value.
///
/// `Display` is the canonical text form; `try_parse` and `FromStr` accept
/// it back, so `T::try_parse(&v.format()) == Some(v)` for every value.
pub trait ValueType:
    Sized
    + Clone
    + Eq
    + Ord
    + Hash
    + fmt::Debug
    + fmt::Display
    + FromStr<Err = DecodeError>
    + 'static
{
    /// The wrapped primitive.
    type Primitive;

    /// Declared type name, used in errors and as the registry key.
    const NAME: &'static str;
    const KIND: ValueKind;

    /// Parse canonical text; `None` instead of an error.
    fn try_parse(text: &str) -> Option<Self>;

    /// Canonical text form.
    fn format(&self) -> String {
        self.to_string()
    }

    /// Lossless conversion to the wrapped primitive.
    fn to_primitive(&self) -> Self::Primitive;

    /// Validating conversion from the primitive, with the same checks as
    /// construction.
    fn try_from_primitive(value: Self::Primitive) -> Result<Self, ConstraintViolation>;
}

/// Opaque identifiers.
pub trait IdentifierValue: ValueType<Primitive = Uuid> + Copy + Default {
    /// The nil identifier; never equal to a generated one.
    const EMPTY: Self;

    /// A fresh random identifier.
    fn generate() -> Self;

    fn as_uuid(&self) -> &Uuid;

    fn is_empty(&self) -> bool {
        self.as_uuid().is_nil()
    }
}

/// Text with an inclusive length range and an optional pattern.
pub trait TextValue: ValueType<Primitive = String> + AsRef<str> {
    const MIN_LENGTH: usize;
    const MAX_LENGTH: usize;
    const PATTERN: Option<&'static str>;

    fn as_str(&self) -> &str;
}

/// 32-bit integers with an inclusive range.
pub trait IntegerValue: ValueType<Primitive = i32> + Copy {
    const MIN: i32;
    const MAX: i32;

    fn value(&self) -> i32;
}

/// Finite reals with an inclusive range.
pub trait RealValue: ValueType<Primitive = f64> + Copy {
    const MIN: f64;
    const MAX: f64;

    fn value(&self) -> f64;
}
