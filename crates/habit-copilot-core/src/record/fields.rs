//! Per-field validators for loosely typed habit records.
//!
//! Each validator reports exactly what was wrong with one field. The
//! record normalizer decides what a failure means: a required field
//! rejects the record, an optional one falls back to its default.

use serde_json::{Map, Value};
use thiserror::Error;

/// Why a single field could not be taken as-is.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    #[error("candidate is not an object")]
    NotAnObject,

    #[error("field '{field}' is missing")]
    Missing { field: &'static str },

    #[error("field '{field}' should be {expected}")]
    WrongType {
        field: &'static str,
        expected: &'static str,
    },
}

pub type Field<T> = Result<T, FieldError>;

pub(crate) fn as_object(value: &Value) -> Field<&Map<String, Value>> {
    value.as_object().ok_or(FieldError::NotAnObject)
}

fn present<'a>(obj: &'a Map<String, Value>, field: &'static str) -> Field<&'a Value> {
    obj.get(field).ok_or(FieldError::Missing { field })
}

/// A JSON string.
pub fn string_field(obj: &Map<String, Value>, field: &'static str) -> Field<String> {
    match present(obj, field)? {
        Value::String(s) => Ok(s.clone()),
        _ => Err(FieldError::WrongType {
            field,
            expected: "a string",
        }),
    }
}

/// A JSON number, read as epoch milliseconds.
///
/// Fractional values are truncated; out-of-range values saturate.
pub fn timestamp_field(obj: &Map<String, Value>, field: &'static str) -> Field<i64> {
    let wrong = FieldError::WrongType {
        field,
        expected: "a number",
    };
    match present(obj, field)? {
        Value::Number(n) => match n.as_i64() {
            Some(ms) => Ok(ms),
            None => n.as_f64().filter(|f| f.is_finite()).map(|f| f as i64).ok_or(wrong),
        },
        _ => Err(wrong),
    }
}

/// A JSON array; elements that are not strings are dropped.
///
/// The strings themselves are not checked against the day format.
pub fn string_list_field(obj: &Map<String, Value>, field: &'static str) -> Field<Vec<String>> {
    match present(obj, field)? {
        Value::Array(items) => Ok(items
            .iter()
            .filter_map(|v| v.as_str().map(str::to_string))
            .collect()),
        _ => Err(FieldError::WrongType {
            field,
            expected: "an array",
        }),
    }
}
