//! Parse-or-default helpers for loosely typed numeric input
//!
//! Room and service forms send numbers as JSON numbers, numeric strings,
//! empty strings, or not at all. Every one of those collapses to a finite
//! `f64` here so the pricing engine never sees `NaN`.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Replace `NaN` and infinities with zero.
pub fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

/// Coerce a JSON value into a finite number, falling back to zero.
pub fn numify(value: &Value) -> f64 {
    parse_loose(value).map(finite_or_zero).unwrap_or(0.0)
}

/// Like [`numify`] but keeps "unparsable" distinct from zero.
///
/// Returns `None` for values that have no numeric reading at all.
fn parse_loose(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                Some(0.0)
            } else {
                trimmed.parse::<f64>().ok()
            }
        }
        Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

/// Deserialize a required-ish numeric field, numifying whatever arrives.
pub fn numify_field<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(numify(&value))
}

/// Deserialize an optional override.
///
/// Absent or `null` yields `None`. Anything present but unusable yields
/// `Some(NaN)` so the pricing sanitizer replaces it with the default.
pub fn loose_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        None | Some(Value::Null) => None,
        Some(v) => Some(parse_loose(&v).unwrap_or(f64::NAN)),
    })
}
