//! Unified error types for all layers of the application.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use thiserror::Error;

/// Unified error type for all layers of PlaceHub.
///
/// This enum provides a comprehensive set of error variants that cover
/// domain, application, infrastructure, and presentation layer errors.
#[derive(Error, Debug)]
pub enum PlacehubError {
    // ============ Domain Errors ============
    /// Resource not found
    #[error("Resource not found: {resource_type} with id {id}")]
    NotFound {
        resource_type: &'static str,
        id: String,
    },

    /// Validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// Conflict error (e.g., duplicate entry)
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Business rule violation
    #[error("Business rule violation: {0}")]
    BusinessRule(String),

    // ============ Authentication/Authorization Errors ============
    /// Unauthorized access
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Forbidden access
    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// Invalid credentials
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Session expired or unknown
    #[error("Session expired")]
    SessionExpired,

    // ============ Infrastructure Errors ============
    /// Database error
    #[error("Database error: {0}")]
    Database(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Redis/Cache error
    #[error("Cache error: {0}")]
    Cache(String),

    /// Timeout error
    #[error("Operation timed out: {0}")]
    Timeout(String),

    // ============ Internal Errors ============
    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),

    /// Generic error wrapper
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl PlacehubError {
    /// Returns the HTTP status code for this error.
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::NotFound { .. } => 404,
            Self::Validation(_) | Self::BusinessRule(_) => 400,
            Self::Conflict(_) => 409,
            Self::Unauthorized(_) | Self::InvalidCredentials | Self::SessionExpired => 401,
            Self::Forbidden(_) => 403,
            Self::Timeout(_) => 503,
            Self::Database(_)
            | Self::Configuration(_)
            | Self::Cache(_)
            | Self::Internal(_)
            | Self::Other(_) => 500,
        }
    }

    /// Returns a machine-readable error code.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::NotFound { .. } => "NOT_FOUND",
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::Conflict(_) => "CONFLICT",
            Self::BusinessRule(_) => "BUSINESS_RULE_VIOLATION",
            Self::Unauthorized(_) => "UNAUTHORIZED",
            Self::Forbidden(_) => "FORBIDDEN",
            Self::InvalidCredentials => "INVALID_CREDENTIALS",
            Self::SessionExpired => "SESSION_EXPIRED",
            Self::Database(_) => "DATABASE_ERROR",
            Self::Configuration(_) => "CONFIGURATION_ERROR",
            Self::Cache(_) => "CACHE_ERROR",
            Self::Timeout(_) => "TIMEOUT",
            Self::Internal(_) | Self::Other(_) => "INTERNAL_ERROR",
        }
    }

    /// Creates a not found error for a resource.
    #[must_use]
    pub fn not_found<T: ToString>(resource_type: &'static str, id: T) -> Self {
        Self::NotFound {
            resource_type,
            id: id.to_string(),
        }
    }

    /// Creates a validation error.
    #[must_use]
    pub fn validation<T: Into<String>>(message: T) -> Self {
        Self::Validation(message.into())
    }

    /// Creates a conflict error.
    #[must_use]
    pub fn conflict<T: Into<String>>(message: T) -> Self {
        Self::Conflict(message.into())
    }

    /// Creates an unauthorized error.
    #[must_use]
    pub fn unauthorized<T: Into<String>>(message: T) -> Self {
        Self::Unauthorized(message.into())
    }

    /// Creates a forbidden error.
    #[must_use]
    pub fn forbidden<T: Into<String>>(message: T) -> Self {
        Self::Forbidden(message.into())
    }

    /// Creates a database error.
    #[must_use]
    pub fn database<T: Into<String>>(message: T) -> Self {
        Self::Database(message.into())
    }

    /// Creates a cache error.
    #[must_use]
    pub fn cache<T: Into<String>>(message: T) -> Self {
        Self::Cache(message.into())
    }

    /// Creates an internal error.
    #[must_use]
    pub fn internal<T: Into<String>>(message: T) -> Self {
        Self::Internal(message.into())
    }

    /// Checks if this error is retriable.
    #[must_use]
    pub const fn is_retriable(&self) -> bool {
        matches!(self, Self::Database(_) | Self::Cache(_) | Self::Timeout(_))
    }
}

#[cfg(feature = "sqlx")]
impl From<sqlx::Error> for PlacehubError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::RowNotFound => Self::NotFound {
                resource_type: "database_row",
                id: "unknown".to_string(),
            },
            sqlx::Error::Database(db_err) => {
                // Check for unique constraint violation
                if let Some(code) = db_err.code() {
                    if code == "23505" {
                        return Self::Conflict(db_err.message().to_string());
                    }
                }
                Self::Database(err.to_string())
            }
            _ => Self::Database(err.to_string()),
        }
    }
}

impl From<serde_json::Error> for PlacehubError {
    fn from(err: serde_json::Error) -> Self {
        Self::Internal(format!("JSON serialization error: {}", err))
    }
}

/// Serializable error response for API responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ErrorResponse {
    /// Machine-readable error code
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Optional field-level errors for validation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<FieldError>>,
    /// Request trace ID for debugging
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trace_id: Option<String>,
}

/// Field-level validation error.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct FieldError {
    /// Field name
    pub field: String,
    /// Error message
    pub message: String,
    /// Error code
    pub code: String,
}

impl ErrorResponse {
    /// Creates a new error response from a `PlacehubError`.
    #[must_use]
    pub fn from_error(error: &PlacehubError) -> Self {
        Self {
            code: error.error_code().to_string(),
            message: error.to_string(),
            details: None,
            trace_id: None,
        }
    }

    /// Sets the trace ID.
    #[must_use]
    pub fn with_trace_id(mut self, trace_id: impl Into<String>) -> Self {
        self.trace_id = Some(trace_id.into());
        self
    }

    /// Sets field-level validation errors.
    #[must_use]
    pub fn with_details(mut self, details: Vec<FieldError>) -> Self {
        self.details = Some(details);
        self
    }
}

impl From<&PlacehubError> for ErrorResponse {
    fn from(error: &PlacehubError) -> Self {
        Self::from_error(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_status_codes() {
        assert_eq!(PlacehubError::not_found("Job", 1).status_code(), 404);
        assert_eq!(PlacehubError::validation("invalid email").status_code(), 400);
        assert_eq!(PlacehubError::unauthorized("not logged in").status_code(), 401);
        assert_eq!(PlacehubError::forbidden("no permission").status_code(), 403);
        assert_eq!(PlacehubError::conflict("duplicate").status_code(), 409);
        assert_eq!(PlacehubError::SessionExpired.status_code(), 401);
    }

    #[test]
    fn test_error_status_codes_extended() {
        assert_eq!(PlacehubError::InvalidCredentials.status_code(), 401);
        assert_eq!(PlacehubError::database("db error").status_code(), 500);
        assert_eq!(PlacehubError::cache("cache down").status_code(), 500);
        assert_eq!(PlacehubError::internal("oops").status_code(), 500);
        assert_eq!(PlacehubError::Timeout("timed out".to_string()).status_code(), 503);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(PlacehubError::not_found("Job", 1).error_code(), "NOT_FOUND");
        assert_eq!(PlacehubError::SessionExpired.error_code(), "SESSION_EXPIRED");
        assert_eq!(PlacehubError::validation("bad input").error_code(), "VALIDATION_ERROR");
        assert_eq!(PlacehubError::conflict("duplicate").error_code(), "CONFLICT");
        assert_eq!(PlacehubError::unauthorized("no auth").error_code(), "UNAUTHORIZED");
        assert_eq!(PlacehubError::forbidden("no perm").error_code(), "FORBIDDEN");
        assert_eq!(PlacehubError::InvalidCredentials.error_code(), "INVALID_CREDENTIALS");
        assert_eq!(PlacehubError::database("db").error_code(), "DATABASE_ERROR");
        assert_eq!(PlacehubError::cache("redis").error_code(), "CACHE_ERROR");
        assert_eq!(PlacehubError::internal("err").error_code(), "INTERNAL_ERROR");
        assert_eq!(PlacehubError::Timeout("t".to_string()).error_code(), "TIMEOUT");
    }

    #[test]
    fn test_retriable_errors() {
        assert!(PlacehubError::database("connection lost").is_retriable());
        assert!(PlacehubError::cache("redis down").is_retriable());
        assert!(PlacehubError::Timeout("request timed out".to_string()).is_retriable());
        assert!(!PlacehubError::not_found("Job", 1).is_retriable());
    }

    #[test]
    fn test_non_retriable_errors() {
        assert!(!PlacehubError::validation("bad input").is_retriable());
        assert!(!PlacehubError::forbidden("no perm").is_retriable());
        assert!(!PlacehubError::unauthorized("no auth").is_retriable());
        assert!(!PlacehubError::conflict("dup").is_retriable());
        assert!(!PlacehubError::InvalidCredentials.is_retriable());
    }

    #[test]
    fn test_error_constructors() {
        let not_found = PlacehubError::not_found("Company", "123");
        assert!(not_found.to_string().contains("Company"));

        let validation = PlacehubError::validation("invalid field");
        assert!(validation.to_string().contains("invalid field"));

        let conflict = PlacehubError::conflict("duplicate entry");
        assert!(conflict.to_string().contains("duplicate entry"));

        let unauthorized = PlacehubError::unauthorized("no session");
        assert!(unauthorized.to_string().contains("no session"));

        let forbidden = PlacehubError::forbidden("no perms");
        assert!(forbidden.to_string().contains("no perms"));

        let internal = PlacehubError::internal("panic");
        assert!(internal.to_string().contains("panic"));
    }

    #[cfg(feature = "sqlx")]
    #[test]
    fn test_from_sqlx_row_not_found() {
        let err: PlacehubError = sqlx::Error::RowNotFound.into();
        assert_eq!(err.status_code(), 404);
        assert_eq!(err.error_code(), "NOT_FOUND");
    }

    #[cfg(feature = "sqlx")]
    #[test]
    fn test_from_sqlx_other_is_database() {
        let io = std::io::Error::new(std::io::ErrorKind::ConnectionReset, "reset");
        let err: PlacehubError = sqlx::Error::Io(io).into();
        assert_eq!(err.error_code(), "DATABASE_ERROR");
        assert!(err.is_retriable());
    }

    #[test]
    fn test_error_response_from_error() {
        let err = PlacehubError::not_found("Job", 1);
        let response = ErrorResponse::from_error(&err);
        assert_eq!(response.code, "NOT_FOUND");
        assert!(!response.message.is_empty());
        assert!(response.details.is_none());
        assert!(response.trace_id.is_none());
    }

    #[test]
    fn test_error_response_with_trace_id() {
        let err = PlacehubError::not_found("Job", 1);
        let response = ErrorResponse::from_error(&err).with_trace_id("trace-123");
        assert_eq!(response.trace_id, Some("trace-123".to_string()));
    }

    #[test]
    fn test_error_response_with_details() {
        let err = PlacehubError::validation("bad input");
        let details = vec![FieldError {
            field: "email".to_string(),
            message: "Invalid email".to_string(),
            code: "INVALID_EMAIL".to_string(),
        }];
        let response = ErrorResponse::from_error(&err).with_details(details);
        assert!(response.details.is_some());
        assert_eq!(response.details.unwrap().len(), 1);
    }

    #[test]
    fn test_error_response_from_ref() {
        let err = PlacehubError::not_found("Notice", 42);
        let response: ErrorResponse = ErrorResponse::from(&err);
        assert_eq!(response.code, "NOT_FOUND");
    }
}
