//! Entity to DTO mappers
//!
//! Implements `From` conversions from domain entities to response DTOs.

use chrono::{DateTime, Utc};
use pinion_core::entities::{Pin, SavedPin, UserProfile};
use pinion_core::leveling::CreatorTier;
use pinion_core::traits::Session;

use super::responses::{
    CreatorTierResponse, PinResponse, ProfileResponse, SavedPinResponse, SessionResponse,
};

const MINUTE: i64 = 60;
const HOUR: i64 = 60 * MINUTE;
const DAY: i64 = 24 * HOUR;
const WEEK: i64 = 7 * DAY;

/// Relative label for `ts` as seen at `now`
///
/// Timestamps in the future read as "just now"; anything a week or older
/// shows the calendar date.
pub fn format_time_ago(now: DateTime<Utc>, ts: DateTime<Utc>) -> String {
    let seconds = (now - ts).num_seconds();
    if seconds < MINUTE {
        "just now".to_string()
    } else if seconds < HOUR {
        format!("{}m ago", seconds / MINUTE)
    } else if seconds < DAY {
        format!("{}h ago", seconds / HOUR)
    } else if seconds < WEEK {
        format!("{}d ago", seconds / DAY)
    } else {
        ts.format("%Y-%m-%d").to_string()
    }
}

// ============================================================================
// Pin Mappers
// ============================================================================

impl PinResponse {
    /// Build the response with its relative label computed at `now`
    pub fn from_pin(pin: &Pin, now: DateTime<Utc>) -> Self {
        Self {
            id: pin.id.to_string(),
            title: pin.title.clone(),
            description: pin.description.clone(),
            mood: pin.mood,
            location: pin.location,
            user_id: pin.user_id.to_string(),
            created_at: pin.created_at,
            time_ago: format_time_ago(now, pin.created_at),
        }
    }
}

impl From<&Pin> for PinResponse {
    fn from(pin: &Pin) -> Self {
        Self::from_pin(pin, Utc::now())
    }
}

impl From<&SavedPin> for SavedPinResponse {
    fn from(saved: &SavedPin) -> Self {
        Self {
            pin_id: saved.pin_id.to_string(),
            title: saved.title.clone(),
            description: saved.description.clone(),
            mood: saved.mood,
            location: saved.location,
            saved_at: saved.saved_at,
        }
    }
}

// ============================================================================
// Profile Mappers
// ============================================================================

impl From<&UserProfile> for ProfileResponse {
    fn from(profile: &UserProfile) -> Self {
        Self {
            user_id: profile.id.to_string(),
            username: profile.username.clone(),
            emoji: profile.emoji.clone(),
            email: profile.email.clone(),
            xp: profile.xp,
        }
    }
}

impl From<CreatorTier> for CreatorTierResponse {
    fn from(tier: CreatorTier) -> Self {
        Self {
            level: tier.level(),
            title: tier.title().to_string(),
        }
    }
}

// ============================================================================
// Session Mappers
// ============================================================================

impl From<&Session> for SessionResponse {
    fn from(session: &Session) -> Self {
        Self {
            user_id: session.user_id.to_string(),
            email: session.email.clone(),
            token: session.token.clone(),
            expires_at: session.expires_at,
        }
    }
}
