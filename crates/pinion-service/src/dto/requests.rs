//! Request DTOs
//!
//! All request DTOs implement `Deserialize` and `Validate` for input validation.

use pinion_core::value_objects::{GeoPoint, Mood};
use serde::Deserialize;
use validator::Validate;

// ============================================================================
// Auth Requests
// ============================================================================

/// Account registration request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SignUpRequest {
    #[validate(email(message = "Please enter a valid email address"))]
    pub email: String,

    #[validate(length(min = 6, message = "Password should be at least 6 characters"))]
    pub password: String,
}

/// Sign-in request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SignInRequest {
    #[validate(email(message = "Please enter a valid email address"))]
    pub email: String,

    #[validate(length(min = 1, message = "Please enter your password"))]
    pub password: String,
}

// ============================================================================
// Pin Requests
// ============================================================================

/// Create pin request, as filled in on the create screen
///
/// Mood and location start unset until the user picks them.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreatePinRequest {
    #[validate(length(
        min = 1,
        max = 50,
        message = "Title is required and must be at most 50 characters"
    ))]
    pub title: String,

    #[validate(length(min = 1, message = "Description is required"))]
    pub description: String,

    #[validate(required(message = "Please select a mood"))]
    pub mood: Option<Mood>,

    #[validate(required(message = "Please place a pin on the map"))]
    pub location: Option<GeoPoint>,
}

impl CreatePinRequest {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        mood: Mood,
        location: GeoPoint,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            mood: Some(mood),
            location: Some(location),
        }
    }

    /// Copy with surrounding whitespace removed from the text fields
    pub fn trimmed(self) -> Self {
        Self {
            title: self.title.trim().to_string(),
            description: self.description.trim().to_string(),
            ..self
        }
    }
}

// ============================================================================
// Profile Requests
// ============================================================================

/// Profile edit request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateProfileRequest {
    #[validate(length(min = 1, max = 32, message = "Username must be 1-32 characters"))]
    pub username: String,

    /// One of the avatar picker options
    pub emoji: String,
}

impl UpdateProfileRequest {
    pub fn new(username: impl Into<String>, emoji: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            emoji: emoji.into(),
        }
    }

    pub fn trimmed(self) -> Self {
        Self {
            username: self.username.trim().to_string(),
            emoji: self.emoji.trim().to_string(),
        }
    }
}
