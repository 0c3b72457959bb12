//! Unified error type for every layer of Roster.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use thiserror::Error;

/// Unified error type for Roster.
///
/// The first five variants form the account-service taxonomy that callers
/// translate into user-facing responses; the rest cover infrastructure
/// failures that propagate from storage or configuration.
#[derive(Error, Debug)]
pub enum RosterError {
    // ============ Request Errors ============
    /// Malformed or missing input
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Credentials did not match any stored user
    #[error("Authentication failed: {0}")]
    AuthenticationFailure(String),

    /// Resource not found
    #[error("Resource not found: {resource_type} with {id}")]
    NotFound {
        resource_type: &'static str,
        id: String,
    },

    /// Uniqueness conflict (username or email already taken)
    #[error("Already exists: {0}")]
    AlreadyExists(String),

    // ============ Integrity Errors ============
    /// A write went through but the stored state does not match what was written
    #[error("Failed transaction: {0}")]
    FailedTransaction(String),

    // ============ Infrastructure Errors ============
    /// Storage error
    #[error("Database error: {0}")]
    Database(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    // ============ Internal Errors ============
    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),

    /// Generic error wrapper
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl RosterError {
    /// Returns the HTTP status code a web layer should answer with.
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::InvalidRequest(_) => 400,
            Self::AuthenticationFailure(_) => 401,
            Self::NotFound { .. } => 404,
            Self::AlreadyExists(_) => 409,
            Self::FailedTransaction(_)
            | Self::Database(_)
            | Self::Configuration(_)
            | Self::Internal(_)
            | Self::Other(_) => 500,
        }
    }

    /// Returns a machine-readable error code.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidRequest(_) => "INVALID_REQUEST",
            Self::AuthenticationFailure(_) => "AUTHENTICATION_FAILURE",
            Self::NotFound { .. } => "NOT_FOUND",
            Self::AlreadyExists(_) => "ALREADY_EXISTS",
            Self::FailedTransaction(_) => "FAILED_TRANSACTION",
            Self::Database(_) => "DATABASE_ERROR",
            Self::Configuration(_) => "CONFIGURATION_ERROR",
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

    /// Creates an invalid request error.
    #[must_use]
    pub fn invalid_request<T: Into<String>>(message: T) -> Self {
        Self::InvalidRequest(message.into())
    }

    /// Creates an authentication failure.
    #[must_use]
    pub fn authentication_failure<T: Into<String>>(message: T) -> Self {
        Self::AuthenticationFailure(message.into())
    }

    /// Creates an already-exists error.
    #[must_use]
    pub fn already_exists<T: Into<String>>(message: T) -> Self {
        Self::AlreadyExists(message.into())
    }

    /// Creates a failed transaction error.
    #[must_use]
    pub fn failed_transaction<T: Into<String>>(message: T) -> Self {
        Self::FailedTransaction(message.into())
    }

    /// Creates an internal error.
    #[must_use]
    pub fn internal<T: Into<String>>(message: T) -> Self {
        Self::Internal(message.into())
    }

    /// Returns true for the not-found variant.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Checks if this error is retriable.
    ///
    /// Integrity failures are never retriable; only transient storage
    /// errors are.
    #[must_use]
    pub const fn is_retriable(&self) -> bool {
        matches!(self, Self::Database(_))
    }
}

/// Field-level validation error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    /// Field name
    pub field: String,
    /// Error message
    pub message: String,
    /// Error code
    pub code: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_status_codes() {
        assert_eq!(RosterError::invalid_request("blank id").status_code(), 400);
        assert_eq!(RosterError::authentication_failure("bad creds").status_code(), 401);
        assert_eq!(RosterError::not_found("User", 1).status_code(), 404);
        assert_eq!(RosterError::already_exists("email taken").status_code(), 409);
        assert_eq!(RosterError::failed_transaction("mismatch").status_code(), 500);
    }

    #[test]
    fn test_error_status_codes_infrastructure() {
        assert_eq!(RosterError::Database("down".to_string()).status_code(), 500);
        assert_eq!(RosterError::Configuration("bad".to_string()).status_code(), 500);
        assert_eq!(RosterError::internal("oops").status_code(), 500);
        assert_eq!(RosterError::from(anyhow::anyhow!("boom")).status_code(), 500);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(RosterError::invalid_request("x").error_code(), "INVALID_REQUEST");
        assert_eq!(
            RosterError::authentication_failure("x").error_code(),
            "AUTHENTICATION_FAILURE"
        );
        assert_eq!(RosterError::not_found("User", 1).error_code(), "NOT_FOUND");
        assert_eq!(RosterError::already_exists("x").error_code(), "ALREADY_EXISTS");
        assert_eq!(RosterError::failed_transaction("x").error_code(), "FAILED_TRANSACTION");
        assert_eq!(RosterError::Database("x".to_string()).error_code(), "DATABASE_ERROR");
        assert_eq!(RosterError::internal("x").error_code(), "INTERNAL_ERROR");
    }

    #[test]
    fn test_retriable_errors() {
        assert!(RosterError::Database("connection lost".to_string()).is_retriable());
        assert!(!RosterError::failed_transaction("mismatch").is_retriable());
        assert!(!RosterError::already_exists("dup").is_retriable());
        assert!(!RosterError::not_found("User", 1).is_retriable());
    }

    #[test]
    fn test_is_not_found() {
        assert!(RosterError::not_found("User", 7).is_not_found());
        assert!(!RosterError::invalid_request("x").is_not_found());
    }

    #[test]
    fn test_error_display() {
        let err = RosterError::not_found("User", "id 42");
        assert_eq!(err.to_string(), "Resource not found: User with id 42");

        let err = RosterError::already_exists("That email is taken!");
        assert!(err.to_string().contains("That email is taken!"));
    }
}
