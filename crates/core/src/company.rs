//! Company field normalization rules.
//!
//! The API contract treats blank strings the same as absent values:
//! optional text fields collapse to NULL, and a blank `status` falls back
//! to the default pipeline stage.

use crate::error::CoreError;

/// Default pipeline stage for a company when none is supplied.
pub const DEFAULT_STATUS: &str = "Potential";

/// Validate and trim a company name for creation.
///
/// Returns the trimmed name, or [`CoreError::Validation`] when the name is
/// empty or whitespace-only.
pub fn validate_name(name: &str) -> Result<String, CoreError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(CoreError::Validation("Name is required".into()));
    }
    Ok(trimmed.to_string())
}

/// Collapse an optional text field to `None` when absent or blank.
pub fn none_if_blank(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}

/// Resolve a supplied status, falling back to [`DEFAULT_STATUS`] when the
/// value is absent or blank.
pub fn resolve_status(status: Option<String>) -> String {
    none_if_blank(status).unwrap_or_else(|| DEFAULT_STATUS.to_string())
}
