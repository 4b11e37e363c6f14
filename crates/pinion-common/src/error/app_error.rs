//! Application error types
//!
//! Unified error handling for the entire application.

use pinion_core::DomainError;
use std::fmt;

use crate::config::ConfigError;

/// Application-wide error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    // Authentication errors
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Invalid token")]
    InvalidToken,

    #[error("Token expired")]
    TokenExpired,

    // Validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    // Store errors
    #[error("Store error: {0}")]
    Store(String),

    // Internal errors
    #[error("Internal error")]
    Internal(#[source] anyhow::Error),

    // Domain errors
    #[error(transparent)]
    Domain(#[from] DomainError),

    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),
}

impl AppError {
    /// Get error code
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidCredentials => "INVALID_CREDENTIALS",
            Self::InvalidToken => "INVALID_TOKEN",
            Self::TokenExpired => "TOKEN_EXPIRED",
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::Store(_) => "STORE_ERROR",
            Self::Internal(_) => "INTERNAL_ERROR",
            Self::Config(_) => "CONFIG_ERROR",
            Self::Domain(e) => e.code(),
        }
    }

    /// Text suitable for showing to the end user
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::InvalidCredentials => "Invalid email or password.".to_string(),
            Self::InvalidToken | Self::TokenExpired => "Please sign in to continue.".to_string(),
            Self::Validation(msg) => msg.clone(),
            Self::Store(_) => {
                "Something went wrong. Please check your internet connection and try again."
                    .to_string()
            }
            Self::Internal(_) | Self::Config(_) => {
                "Something went wrong. Please try again.".to_string()
            }
            Self::Domain(e) => domain_user_message(e),
        }
    }

    /// Whether the user can fix this by changing their input or signing in
    #[must_use]
    pub fn is_user_error(&self) -> bool {
        match self {
            Self::InvalidCredentials
            | Self::InvalidToken
            | Self::TokenExpired
            | Self::Validation(_) => true,
            Self::Store(_) | Self::Internal(_) | Self::Config(_) => false,
            Self::Domain(e) => {
                e.is_validation() || e.is_authorization() || e.is_conflict() || e.is_not_found()
            }
        }
    }

    /// Create a validation error
    #[must_use]
    pub fn validation(msg: impl fmt::Display) -> Self {
        Self::Validation(msg.to_string())
    }

    /// Create an internal error from any error
    pub fn internal(err: impl Into<anyhow::Error>) -> Self {
        Self::Internal(err.into())
    }
}

/// End-user text for a domain error
pub fn domain_user_message(err: &DomainError) -> String {
    match err {
        DomainError::NotSignedIn => "Please sign in to continue.".to_string(),
        DomainError::InvalidCredentials => "Invalid email or password.".to_string(),
        DomainError::PermissionDenied(_) => {
            "You do not have permission to do that. Please try again later.".to_string()
        }
        DomainError::NotPinOwner => "Only the creator of a pin can delete it.".to_string(),
        DomainError::StoreUnavailable(_) | DomainError::StoreError(_) => {
            "Something went wrong. Please check your internet connection and try again."
                .to_string()
        }
        DomainError::MalformedDocument { .. } | DomainError::InternalError(_) => {
            "Something went wrong. Please try again.".to_string()
        }
        other => other.to_string(),
    }
}

impl From<ConfigError> for AppError {
    fn from(err: ConfigError) -> Self {
        Self::Config(err.to_string())
    }
}

/// Lets repository code use `?` on helpers that return `AppError`
impl From<AppError> for DomainError {
    fn from(err: AppError) -> Self {
        match err {
            AppError::Domain(e) => e,
            AppError::InvalidCredentials => Self::InvalidCredentials,
            AppError::InvalidToken | AppError::TokenExpired => Self::NotSignedIn,
            AppError::Validation(msg) => Self::ValidationError(msg),
            AppError::Store(msg) => Self::StoreError(msg),
            other => Self::InternalError(other.to_string()),
        }
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(AppError::InvalidCredentials.error_code(), "INVALID_CREDENTIALS");
        assert_eq!(AppError::TokenExpired.error_code(), "TOKEN_EXPIRED");
        assert_eq!(
            AppError::Domain(DomainError::NotPinOwner).error_code(),
            "NOT_PIN_OWNER"
        );
    }

    #[test]
    fn test_is_user_error() {
        assert!(AppError::InvalidCredentials.is_user_error());
        assert!(AppError::validation("Title is required").is_user_error());
        assert!(AppError::Domain(DomainError::InvalidEmail).is_user_error());
        assert!(!AppError::Store("test".to_string()).is_user_error());
        assert!(!AppError::Domain(DomainError::StoreUnavailable("x".to_string())).is_user_error());
    }

    #[test]
    fn test_user_messages() {
        assert_eq!(
            AppError::Domain(DomainError::PermissionDenied("savedPins".to_string()))
                .user_message(),
            "You do not have permission to do that. Please try again later."
        );
        assert!(AppError::Store("503".to_string())
            .user_message()
            .contains("internet connection"));
        assert_eq!(
            AppError::validation("Title is required").user_message(),
            "Title is required"
        );
    }

    #[test]
    fn test_into_domain_error() {
        let err: DomainError = AppError::InvalidCredentials.into();
        assert!(matches!(err, DomainError::InvalidCredentials));

        let err: DomainError = AppError::Domain(DomainError::EmailAlreadyExists).into();
        assert!(matches!(err, DomainError::EmailAlreadyExists));

        let err: DomainError = AppError::internal(anyhow::anyhow!("boom")).into();
        assert!(matches!(err, DomainError::InternalError(_)));
    }

    #[test]
    fn test_config_error_conversion() {
        let err = AppError::from(ConfigError::MissingVar("SESSION_SECRET"));
        assert_eq!(err.error_code(), "CONFIG_ERROR");
        assert!(!err.is_user_error());
        assert_eq!(
            err.to_string(),
            "Configuration error: Missing required environment variable: SESSION_SECRET"
        );
        assert_eq!(err.user_message(), "Something went wrong. Please try again.");
    }

    #[test]
    fn test_helper_methods() {
        let err = AppError::validation("email is required");
        assert_eq!(err.to_string(), "Validation error: email is required");
    }
}
