//! Sponsorship value coercion.
//!
//! The sponsorship form submits `value` as a number, a numeric string, or
//! not at all. Absent, null, and empty-string all coerce to 0, so an
//! explicit zero and an omitted value are indistinguishable downstream.

use serde_json::Value;

use crate::error::CoreError;

/// Coerce a raw JSON `value` field to the stored monetary amount.
///
/// - absent / null / `""` → `0.0`
/// - JSON number → its f64 value
/// - numeric string (`"250"`) → parsed f64
/// - anything else → [`CoreError::Validation`]
pub fn coerce_value(raw: Option<&Value>) -> Result<f64, CoreError> {
    match raw {
        None | Some(Value::Null) => Ok(0.0),
        Some(Value::Number(n)) => n
            .as_f64()
            .ok_or_else(|| CoreError::Validation("value must be a number".into())),
        Some(Value::String(s)) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                return Ok(0.0);
            }
            trimmed
                .parse::<f64>()
                .map_err(|_| CoreError::Validation("value must be a number".into()))
        }
        Some(_) => Err(CoreError::Validation("value must be a number".into())),
    }
}
