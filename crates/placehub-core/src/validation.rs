//! Validation utilities.

use crate::{FieldError, PlacehubError};
use validator::{Validate, ValidationErrors};

/// Extension trait for validation.
pub trait ValidateExt: Validate {
    /// Validates the struct and returns a `PlacehubError` on failure.
    fn validate_request(&self) -> Result<(), PlacehubError> {
        self.validate().map_err(|e| validation_errors_to_placehub_error(e))
    }
}

impl<T: Validate> ValidateExt for T {}

/// Converts `validator::ValidationErrors` to `PlacehubError`.
#[must_use]
pub fn validation_errors_to_placehub_error(errors: ValidationErrors) -> PlacehubError {
    let field_errors: Vec<FieldError> = errors
        .field_errors()
        .iter()
        .flat_map(|(field, errors)| {
            errors.iter().map(move |error| FieldError {
                field: (*field).to_string(),
                message: error
                    .message
                    .as_ref()
                    .map_or_else(|| error.code.to_string(), |m| m.to_string()),
                code: error.code.to_string(),
            })
        })
        .collect();

    let message = field_errors
        .iter()
        .map(|e| format!("{}: {}", e.field, e.message))
        .collect::<Vec<_>>()
        .join("; ");

    PlacehubError::Validation(message)
}

/// Common validation functions.
pub mod rules {
    use validator::ValidationError;

    /// Validates that a string is not blank (not empty after trimming).
    pub fn not_blank(value: &str) -> Result<(), ValidationError> {
        if value.trim().is_empty() {
            return Err(ValidationError::new("not_blank"));
        }
        Ok(())
    }

    /// Validates a permission name like `user.read` or `job.create`.
    pub fn valid_permission_name(name: &str) -> Result<(), ValidationError> {
        if name.is_empty() {
            return Err(ValidationError::new("permission_name_empty"));
        }
        if name.len() > 100 {
            return Err(ValidationError::new("permission_name_too_long"));
        }
        if !name
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '.' || c == '_')
        {
            return Err(ValidationError::new("permission_name_invalid_characters"));
        }
        if name.starts_with('.') || name.ends_with('.') || name.contains("..") {
            return Err(ValidationError::new("permission_name_malformed"));
        }
        Ok(())
    }
}
