//! Coercion of loosely-typed JSON scalars into strict values.
//!
//! Catalog records store numbers either as JSON numbers or as strings, so every numeric field goes
//! through these functions before validation.

use std::fmt::Display;

use serde_json::{
    Number,
    Value,
};

use crate::DataError;

/// Coerces a value into an integer.
///
/// Accepts integers, integral floats, and strings whose trimmed content parses as an integral
/// number. Never truncates.
pub fn coerce_int(value: &Value) -> Result<i64, DataError> {
    match value {
        Value::Number(number) => number_to_int(number),
        Value::String(string) => {
            let trimmed = string.trim();
            match trimmed.parse::<i64>() {
                Ok(int) => Ok(int),
                Err(_) => float_to_int(parse_float(value, trimmed)?),
            }
        }
        _ => Err(DataError::NotANumber(value.to_string())),
    }
}

/// Coerces a value into a finite float.
pub fn coerce_float(value: &Value) -> Result<f64, DataError> {
    let float = match value {
        Value::Number(number) => number
            .as_f64()
            .ok_or_else(|| DataError::NotANumber(value.to_string()))?,
        Value::String(string) => parse_float(value, string.trim())?,
        _ => return Err(DataError::NotANumber(value.to_string())),
    };
    if !float.is_finite() {
        return Err(DataError::NotANumber(value.to_string()));
    }
    Ok(float)
}

/// Coerces a value into a non-empty string.
pub fn coerce_string(value: &Value) -> Result<String, DataError> {
    match value {
        Value::Null => Err(DataError::DataMissing("value is missing".to_owned())),
        Value::String(string) if string.is_empty() => {
            Err(DataError::DataMissing("value is empty".to_owned()))
        }
        Value::String(string) => Ok(string.clone()),
        _ => Err(DataError::BadConversion(format!("{value} is not a string"))),
    }
}

/// Checks if the value represents an absent optional value.
pub fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(string) => string.trim().is_empty(),
        _ => false,
    }
}

/// Passes the value through if it is strictly positive.
pub fn require_positive<T>(value: T) -> Result<T, DataError>
where
    T: PartialOrd + Default + Display,
{
    if value > T::default() {
        Ok(value)
    } else {
        Err(DataError::InvalidRange(format!(
            "{value} must be greater than 0"
        )))
    }
}

/// Passes the value through if it is not negative.
pub fn require_nonnegative<T>(value: T) -> Result<T, DataError>
where
    T: PartialOrd + Default + Display,
{
    if value >= T::default() {
        Ok(value)
    } else {
        Err(DataError::InvalidRange(format!("{value} must not be negative")))
    }
}

fn number_to_int(number: &Number) -> Result<i64, DataError> {
    if let Some(int) = number.as_i64() {
        return Ok(int);
    }
    if number.is_u64() {
        return Err(DataError::BadConversion(format!(
            "{number} does not fit in a 64-bit integer"
        )));
    }
    match number.as_f64() {
        Some(float) => float_to_int(float),
        None => Err(DataError::NotANumber(number.to_string())),
    }
}

fn parse_float(value: &Value, trimmed: &str) -> Result<f64, DataError> {
    match trimmed.parse::<f64>() {
        Ok(float) if float.is_finite() => Ok(float),
        _ => Err(DataError::NotANumber(value.to_string())),
    }
}

fn float_to_int(float: f64) -> Result<i64, DataError> {
    if float.fract() != 0.0 {
        return Err(DataError::BadConversion(format!(
            "{float} cannot be converted to an integer without rounding"
        )));
    }
    // i64::MAX as f64 rounds up to 2^63, which is already out of range.
    if float < i64::MIN as f64 || float >= i64::MAX as f64 {
        return Err(DataError::BadConversion(format!(
            "{float} does not fit in a 64-bit integer"
        )));
    }
    Ok(float as i64)
}
