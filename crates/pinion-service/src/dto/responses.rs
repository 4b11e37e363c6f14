//! Response DTOs
//!
//! All response DTOs implement `Serialize`; ids are plain strings.

use chrono::{DateTime, Utc};
use pinion_core::leveling::LevelInfo;
use pinion_core::value_objects::{GeoPoint, Mood};
use serde::Serialize;

// ============================================================================
// Auth Responses
// ============================================================================

/// Signed-in session
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionResponse {
    pub user_id: String,
    pub email: String,
    pub token: String,
    pub expires_at: DateTime<Utc>,
}

// ============================================================================
// Pin Responses
// ============================================================================

/// Pin as shown on the feed, map and detail screens
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PinResponse {
    pub id: String,
    pub title: String,
    pub description: String,
    pub mood: Mood,
    pub location: GeoPoint,
    pub user_id: String,
    pub created_at: DateTime<Utc>,
    /// Relative label such as "5m ago"
    pub time_ago: String,
}

/// Result of creating a pin
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PinCreated {
    pub pin: PinResponse,
    /// New XP level, absent when the award failed
    pub level: Option<LevelInfo>,
}

/// A pin in the user's saved list
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SavedPinResponse {
    pub pin_id: String,
    pub title: String,
    pub description: String,
    pub mood: Mood,
    pub location: GeoPoint,
    pub saved_at: DateTime<Utc>,
}

/// Outcome of saving a pin
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SaveOutcome {
    /// A saved copy was written
    Saved { level: Option<LevelInfo> },
    /// The user had already saved this pin; nothing was written
    AlreadySaved,
}

impl SaveOutcome {
    /// Confirmation text for the user
    pub fn message(&self) -> &'static str {
        match self {
            Self::Saved { .. } => "Pin saved successfully!",
            Self::AlreadySaved => "This pin is already saved.",
        }
    }
}

// ============================================================================
// Profile Responses
// ============================================================================

/// Profile display data
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProfileResponse {
    pub user_id: String,
    pub username: String,
    pub emoji: String,
    pub email: Option<String>,
    pub xp: u64,
}

/// Creator tier derived from the created-pin count
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreatorTierResponse {
    pub level: u8,
    pub title: String,
}

/// Everything the profile screen shows
///
/// `level` (from XP) and `creator_tier` (from pin count) are separate metrics.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProfileOverview {
    pub profile: ProfileResponse,
    pub pins_created: usize,
    pub pins_saved: usize,
    pub level: LevelInfo,
    pub creator_tier: CreatorTierResponse,
    pub achievements: Vec<String>,
}
