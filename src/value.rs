//! Value descriptions for dynamically typed field values.
//!
//! Field values are represented uniformly as [`serde_json::Value`], and
//! checks never branch on concrete host types: everything they need to
//! know about a value is expressed by the helpers here — its kind, its
//! string and numeric forms, its length, and deep equality.

use serde_json::Value;

/// Returns a short name for the value's kind.
#[must_use]
pub fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Returns true if the value is the zero/empty value for its kind.
///
/// Null, `false`, `0`, `""`, `[]` and `{}` are all zero.
#[must_use]
pub fn is_zero(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(a) => a.is_empty(),
        Value::Object(o) => o.is_empty(),
    }
}

/// Returns the value's numeric form, if it has one.
///
/// Only JSON numbers have a numeric form; strings are never coerced.
#[must_use]
pub fn numeric_form(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        _ => None,
    }
}

/// Returns the value's string form, if it has one.
///
/// Only JSON strings have a string form; pattern checks fail for every
/// other kind.
#[must_use]
pub fn string_form(value: &Value) -> Option<&str> {
    value.as_str()
}

/// Returns the value's length, if it has one.
///
/// Strings are measured in Unicode scalar values; arrays and objects in
/// elements.  Other kinds have no defined length.
#[must_use]
pub fn length_of(value: &Value) -> Option<usize> {
    match value {
        Value::String(s) => Some(s.chars().count()),
        Value::Array(a) => Some(a.len()),
        Value::Object(o) => Some(o.len()),
        _ => None,
    }
}

/// Deep equality with numeric normalization.
///
/// Numbers compare by numeric value (`1` equals `1.0`); every other kind
/// requires an exact type and value match.  Arrays and objects compare
/// element-wise with the same rule.
#[must_use]
pub fn values_equal(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Number(x), Value::Number(y)) => x.as_f64() == y.as_f64(),
        (Value::Array(x), Value::Array(y)) => {
            x.len() == y.len() && x.iter().zip(y).all(|(l, r)| values_equal(l, r))
        }
        (Value::Object(x), Value::Object(y)) => {
            x.len() == y.len()
                && x.iter()
                    .all(|(k, l)| y.get(k).is_some_and(|r| values_equal(l, r)))
        }
        _ => a == b,
    }
}
