//! Pin entity - a memory placed on the map

use chrono::{DateTime, Utc};

use crate::value_objects::{DocumentId, GeoPoint, Mood, UserId};

/// Maximum title length accepted by the pin form
pub const MAX_TITLE_LENGTH: usize = 50;

/// A stored pin
#[derive(Debug, Clone, PartialEq)]
pub struct Pin {
    pub id: DocumentId,
    pub title: String,
    pub description: String,
    pub mood: Mood,
    pub location: GeoPoint,
    pub user_id: UserId,
    pub created_at: DateTime<Utc>,
}

impl Pin {
    /// Check whether `user_id` created this pin
    #[inline]
    pub fn is_owned_by(&self, user_id: &UserId) -> bool {
        &self.user_id == user_id
    }
}

/// A pin that has not been written yet (the store assigns the id)
#[derive(Debug, Clone, PartialEq)]
pub struct PinDraft {
    pub title: String,
    pub description: String,
    pub mood: Mood,
    pub location: GeoPoint,
    pub user_id: UserId,
    pub created_at: DateTime<Utc>,
}

impl PinDraft {
    /// Create a draft stamped with the current time
    pub fn new(
        title: String,
        description: String,
        mood: Mood,
        location: GeoPoint,
        user_id: UserId,
    ) -> Self {
        Self {
            title,
            description,
            mood,
            location,
            user_id,
            created_at: Utc::now(),
        }
    }

    /// Attach the id the store assigned
    pub fn into_pin(self, id: DocumentId) -> Pin {
        Pin {
            id,
            title: self.title,
            description: self.description,
            mood: self.mood,
            location: self.location,
            user_id: self.user_id,
            created_at: self.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> PinDraft {
        PinDraft::new(
            "Sunset".to_string(),
            "Best one this year".to_string(),
            Mood::Peaceful,
            GeoPoint::new(37.8, -122.4).unwrap(),
            UserId::new("u1"),
        )
    }

    #[test]
    fn test_into_pin_keeps_fields() {
        let draft = draft();
        let created_at = draft.created_at;
        let pin = draft.into_pin(DocumentId::new("p1"));

        assert_eq!(pin.id.as_str(), "p1");
        assert_eq!(pin.title, "Sunset");
        assert_eq!(pin.mood, Mood::Peaceful);
        assert_eq!(pin.created_at, created_at);
    }

    #[test]
    fn test_ownership() {
        let pin = draft().into_pin(DocumentId::new("p1"));
        assert!(pin.is_owned_by(&UserId::new("u1")));
        assert!(!pin.is_owned_by(&UserId::new("u2")));
    }
}
