//! Service layer error types
//!
//! Provides a unified error type for all service operations.

use pinion_common::{domain_user_message, AppError};
use pinion_core::DomainError;
use std::fmt;
use validator::ValidationErrors;

/// Service layer error type
#[derive(Debug)]
pub enum ServiceError {
    /// Domain rule violation or port failure
    Domain(DomainError),

    /// Application error (credentials, sessions, etc.)
    App(AppError),

    /// Validation error
    Validation(String),

    /// Writing a new pin failed on every attempt
    PinWriteFailed(DomainError),

    /// Writing a saved copy of a pin failed
    SaveFailed(DomainError),
}

impl fmt::Display for ServiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Domain(e) => write!(f, "{e}"),
            Self::App(e) => write!(f, "{e}"),
            Self::Validation(msg) => write!(f, "Validation error: {msg}"),
            Self::PinWriteFailed(e) => write!(f, "Failed to write pin: {e}"),
            Self::SaveFailed(e) => write!(f, "Failed to save pin: {e}"),
        }
    }
}

impl std::error::Error for ServiceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Domain(e) | Self::PinWriteFailed(e) | Self::SaveFailed(e) => Some(e),
            Self::App(e) => Some(e),
            _ => None,
        }
    }
}

impl ServiceError {
    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Get the error code
    pub fn error_code(&self) -> &str {
        match self {
            Self::Domain(e) => e.code(),
            Self::App(e) => e.error_code(),
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::PinWriteFailed(_) => "PIN_WRITE_FAILED",
            Self::SaveFailed(_) => "SAVE_FAILED",
        }
    }

    /// Whether the user can fix this by changing their input or signing in
    pub fn is_user_error(&self) -> bool {
        match self {
            Self::Domain(e) => {
                e.is_validation() || e.is_authorization() || e.is_conflict() || e.is_not_found()
            }
            Self::App(e) => e.is_user_error(),
            Self::Validation(_) => true,
            Self::PinWriteFailed(_) | Self::SaveFailed(_) => false,
        }
    }

    /// Text to show the end user
    pub fn user_message(&self) -> String {
        match self {
            Self::PinWriteFailed(DomainError::PermissionDenied(_))
            | Self::SaveFailed(DomainError::PermissionDenied(_)) => {
                "You do not have permission to save pins. Please try again later.".to_string()
            }
            Self::PinWriteFailed(_) => {
                "Failed to save your memory. Please check your internet connection and try again."
                    .to_string()
            }
            Self::SaveFailed(_) => "Failed to save pin. Please try again.".to_string(),
            Self::Validation(msg) => msg.clone(),
            Self::Domain(e) => domain_user_message(e),
            Self::App(e) => e.user_message(),
        }
    }
}

impl From<DomainError> for ServiceError {
    fn from(err: DomainError) -> Self {
        Self::Domain(err)
    }
}

impl From<AppError> for ServiceError {
    fn from(err: AppError) -> Self {
        Self::App(err)
    }
}

impl From<ValidationErrors> for ServiceError {
    fn from(errors: ValidationErrors) -> Self {
        let mut messages: Vec<String> = errors
            .field_errors()
            .into_iter()
            .flat_map(|(field, errs)| {
                errs.iter().map(move |e| match &e.message {
                    Some(msg) => msg.to_string(),
                    None => format!("Invalid {field}"),
                })
            })
            .collect();
        messages.sort();
        Self::Validation(messages.join("; "))
    }
}

impl From<ServiceError> for AppError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::Domain(e) => AppError::Domain(e),
            ServiceError::App(e) => e,
            ServiceError::Validation(msg) => AppError::Validation(msg),
            ServiceError::PinWriteFailed(e) | ServiceError::SaveFailed(e) => {
                AppError::Store(e.to_string())
            }
        }
    }
}

/// Result type for service operations
pub type ServiceResult<T> = Result<T, ServiceError>;
