//! Bound checks shared by generated constructors.
//!
//! Generated code passes its bounds in as literals, so every check here is a
//! plain comparison against the caller's constants.

use crate::error::{ConstraintViolation, Violation};

/// Length in `char`s within `min..=max`.
pub fn length(
    type_name: &'static str,
    value: &str,
    min: usize,
    max: usize,
) -> Result<(), ConstraintViolation> {
    let length = value.chars().count();
    if (min..=max).contains(&length) {
        Ok(())
    } else {
        Err(ConstraintViolation::new(
            type_name,
            Violation::Length { length, min, max },
        ))
    }
}

pub fn integer(
    type_name: &'static str,
    value: i32,
    min: i32,
    max: i32,
) -> Result<(), ConstraintViolation> {
    narrow_integer(type_name, i64::from(value), min, max).map(|_| ())
}

/// Range-check a wide integer, as found in JSON, and narrow it to `i32`.
pub fn narrow_integer(
    type_name: &'static str,
    value: i64,
    min: i32,
    max: i32,
) -> Result<i32, ConstraintViolation> {
    i32::try_from(value)
        .ok()
        .filter(|narrow| (min..=max).contains(narrow))
        .ok_or_else(|| {
            ConstraintViolation::new(type_name, Violation::IntegerRange { value, min, max })
        })
}

/// Finite and within `min..=max`.
pub fn real(
    type_name: &'static str,
    value: f64,
    min: f64,
    max: f64,
) -> Result<(), ConstraintViolation> {
    if !value.is_finite() {
        return Err(ConstraintViolation::new(type_name, Violation::NotFinite { value }));
    }
    if (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(ConstraintViolation::new(
            type_name,
            Violation::RealRange { value, min, max },
        ))
    }
}
