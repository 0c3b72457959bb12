//! Validation utilities.

use crate::{FieldError, RosterError};
use validator::{Validate, ValidationErrors};

/// Extension trait for validation.
pub trait ValidateExt: Validate {
    /// Validates the struct and returns a `RosterError::InvalidRequest` on failure.
    fn validate_request(&self) -> Result<(), RosterError> {
        self.validate().map_err(validation_errors_to_roster_error)
    }
}

impl<T: Validate> ValidateExt for T {}

/// Converts `validator::ValidationErrors` into field errors.
#[must_use]
pub fn validation_errors_to_field_errors(errors: &ValidationErrors) -> Vec<FieldError> {
    let mut field_errors: Vec<FieldError> = errors
        .field_errors()
        .iter()
        .flat_map(|(field, errors)| {
            errors.iter().map(move |error| FieldError {
                field: (*field).to_string(),
                message: error
                    .message
                    .as_ref()
                    .map_or_else(|| error.code.to_string(), ToString::to_string),
                code: error.code.to_string(),
            })
        })
        .collect();

    // field_errors() is backed by a map; keep messages stable
    field_errors.sort_by(|a, b| a.field.cmp(&b.field));
    field_errors
}

/// Converts `validator::ValidationErrors` to `RosterError`.
#[must_use]
pub fn validation_errors_to_roster_error(errors: ValidationErrors) -> RosterError {
    let message = validation_errors_to_field_errors(&errors)
        .iter()
        .map(|e| format!("{}: {}", e.field, e.message))
        .collect::<Vec<_>>()
        .join("; ");

    RosterError::InvalidRequest(message)
}

/// Returns true if the value is absent or empty after trimming.
#[must_use]
pub fn is_blank(value: Option<&str>) -> bool {
    value.map_or(true, |v| v.trim().is_empty())
}

/// Common validation functions.
pub mod rules {
    use std::borrow::Cow;
    use validator::ValidationError;

    /// Validates that a string is not blank (not empty after trimming).
    pub fn not_blank(value: &str) -> Result<(), ValidationError> {
        if value.trim().is_empty() {
            let mut error = ValidationError::new("not_blank");
            error.message = Some(Cow::Borrowed("must not be blank"));
            return Err(error);
        }
        Ok(())
    }

    /// Validates that an optional string is present and not blank.
    pub fn required_not_blank(value: Option<&str>) -> Result<(), ValidationError> {
        match value {
            Some(v) => not_blank(v),
            None => {
                let mut error = ValidationError::new("required");
                error.message = Some(Cow::Borrowed("is required"));
                Err(error)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::rules::*;
    use super::*;
    use validator::ValidationError;

    #[test]
    fn test_not_blank() {
        assert!(not_blank("hello").is_ok());
        assert!(not_blank("   ").is_err());
        assert!(not_blank("").is_err());
        assert!(not_blank("\t\n").is_err());
    }

    #[test]
    fn test_required_not_blank() {
        assert!(required_not_blank(Some("x")).is_ok());
        assert_eq!(required_not_blank(None).unwrap_err().code, "required");
        assert_eq!(required_not_blank(Some(" ")).unwrap_err().code, "not_blank");
    }

    #[test]
    fn test_is_blank() {
        assert!(is_blank(None));
        assert!(is_blank(Some("")));
        assert!(is_blank(Some("  ")));
        assert!(!is_blank(Some(" a ")));
    }

    #[test]
    fn test_validation_errors_to_roster_error() {
        let mut errors = ValidationErrors::new();
        errors.add("username", ValidationError::new("required"));
        errors.add("email", not_blank(" ").unwrap_err());

        let err = validation_errors_to_roster_error(errors);
        match err {
            RosterError::InvalidRequest(msg) => {
                assert_eq!(msg, "email: must not be blank; username: required");
            }
            other => panic!("Expected InvalidRequest, got {other:?}"),
        }
    }
}
