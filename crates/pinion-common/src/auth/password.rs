//! Password hashing and verification utilities
//!
//! Uses Argon2id for password hashing.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use pinion_core::DomainError;

use crate::error::AppError;

/// Shortest password the identity provider accepts
pub const MIN_PASSWORD_LENGTH: usize = 6;

/// Hash a password using Argon2id
///
/// # Errors
/// Returns an error if hashing fails
pub fn hash_password(password: &str) -> Result<String, AppError> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();

    argon2
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Password hashing failed: {e}")))
}

/// Verify a password against a hash
///
/// # Errors
/// Returns an error if the hash is invalid
pub fn verify_password(password: &str, hash: &str) -> Result<bool, AppError> {
    let parsed_hash = PasswordHash::new(hash)
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Invalid password hash format: {e}")))?;

    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok())
}

/// Password service for dependency injection
#[derive(Debug, Clone, Default)]
pub struct PasswordService;

impl PasswordService {
    /// Create a new password service
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Hash a password
    pub fn hash(&self, password: &str) -> Result<String, AppError> {
        hash_password(password)
    }

    /// Verify a password against a hash
    pub fn verify(&self, password: &str, hash: &str) -> Result<bool, AppError> {
        verify_password(password, hash)
    }

    /// Verify a password and return an error if invalid
    ///
    /// # Errors
    /// Returns `AppError::InvalidCredentials` if the password doesn't match
    pub fn verify_or_error(&self, password: &str, hash: &str) -> Result<(), AppError> {
        if self.verify(password, hash)? {
            Ok(())
        } else {
            Err(AppError::InvalidCredentials)
        }
    }
}

/// Validate password strength
///
/// The only rule is a minimum length of [`MIN_PASSWORD_LENGTH`] characters.
pub fn validate_password_strength(password: &str) -> Result<(), AppError> {
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(AppError::Domain(DomainError::WeakPassword(format!(
            "Password should be at least {MIN_PASSWORD_LENGTH} characters"
        ))));
    }

    Ok(())
}
