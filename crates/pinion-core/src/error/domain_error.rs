//! Domain errors - error types for the domain layer

use thiserror::Error;

use crate::value_objects::{DocumentId, UserId};

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("Pin not found: {0}")]
    PinNotFound(DocumentId),

    #[error("User not found: {0}")]
    UserNotFound(UserId),

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Invalid email format")]
    InvalidEmail,

    #[error("Password too weak: {0}")]
    WeakPassword(String),

    #[error("Invalid coordinates: {0}")]
    InvalidCoordinates(String),

    #[error("Unknown mood: {0}")]
    UnknownMood(String),

    #[error("Invalid avatar emoji: {0}")]
    InvalidAvatar(String),

    #[error("Invalid level table: {0}")]
    InvalidLevelTable(String),

    // =========================================================================
    // Authorization Errors
    // =========================================================================
    #[error("Not signed in")]
    NotSignedIn,

    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("Not pin owner")]
    NotPinOwner,

    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    // =========================================================================
    // Conflict Errors
    // =========================================================================
    #[error("Email already in use")]
    EmailAlreadyExists,

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Store unavailable: {0}")]
    StoreUnavailable(String),

    #[error("Store error: {0}")]
    StoreError(String),

    #[error("Malformed document at {path}: {reason}")]
    MalformedDocument { path: String, reason: String },

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Get a stable error code string
    pub fn code(&self) -> &'static str {
        match self {
            // Not Found
            Self::PinNotFound(_) => "UNKNOWN_PIN",
            Self::UserNotFound(_) => "UNKNOWN_USER",

            // Validation
            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::InvalidEmail => "INVALID_EMAIL",
            Self::WeakPassword(_) => "WEAK_PASSWORD",
            Self::InvalidCoordinates(_) => "INVALID_COORDINATES",
            Self::UnknownMood(_) => "UNKNOWN_MOOD",
            Self::InvalidAvatar(_) => "INVALID_AVATAR",
            Self::InvalidLevelTable(_) => "INVALID_LEVEL_TABLE",

            // Authorization
            Self::NotSignedIn => "NOT_SIGNED_IN",
            Self::InvalidCredentials => "INVALID_CREDENTIALS",
            Self::NotPinOwner => "NOT_PIN_OWNER",
            Self::PermissionDenied(_) => "PERMISSION_DENIED",

            // Conflict
            Self::EmailAlreadyExists => "EMAIL_ALREADY_EXISTS",

            // Infrastructure
            Self::StoreUnavailable(_) => "STORE_UNAVAILABLE",
            Self::StoreError(_) => "STORE_ERROR",
            Self::MalformedDocument { .. } => "MALFORMED_DOCUMENT",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::PinNotFound(_) | Self::UserNotFound(_))
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::ValidationError(_)
                | Self::InvalidEmail
                | Self::WeakPassword(_)
                | Self::InvalidCoordinates(_)
                | Self::UnknownMood(_)
                | Self::InvalidAvatar(_)
                | Self::InvalidLevelTable(_)
        )
    }

    /// Check if this is an authorization error
    pub fn is_authorization(&self) -> bool {
        matches!(
            self,
            Self::NotSignedIn
                | Self::InvalidCredentials
                | Self::NotPinOwner
                | Self::PermissionDenied(_)
        )
    }

    /// Check if this is a conflict error
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::EmailAlreadyExists)
    }

    /// Check if this failure came from the store being unreachable
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::StoreUnavailable(_))
    }
}
