//! Input validation rules for project payloads.
//!
//! DTOs derive [`validator::Validate`] and point their required text fields
//! at [`not_blank`]. [`into_core_error`] flattens the collected failures into
//! a single [`CoreError::Validation`] message for the HTTP layer.

use std::borrow::Cow;

use validator::{ValidationError, ValidationErrors};

use crate::error::CoreError;

/// Reject empty or whitespace-only text.
pub fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut err = ValidationError::new("blank");
        err.message = Some(Cow::Borrowed("must not be empty"));
        return Err(err);
    }
    Ok(())
}

/// Convert a set of field errors into a [`CoreError::Validation`].
///
/// Fields are reported in alphabetical order so the message is stable.
pub fn into_core_error(errors: ValidationErrors) -> CoreError {
    let mut parts: Vec<String> = errors
        .field_errors()
        .into_iter()
        .map(|(field, errs)| {
            let reasons: Vec<String> = errs
                .iter()
                .map(|e| {
                    e.message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| e.code.to_string())
                })
                .collect();
            format!("{field} {}", reasons.join(", "))
        })
        .collect();
    parts.sort();
    CoreError::Validation(parts.join("; "))
}
