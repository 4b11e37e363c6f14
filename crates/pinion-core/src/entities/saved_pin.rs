//! SavedPin entity - a denormalized copy of a pin in a user's collection

use chrono::{DateTime, Utc};

use super::Pin;
use crate::value_objects::{DocumentId, GeoPoint, Mood, UserId};

/// A pin saved by a user
///
/// Keyed by the original pin's id inside the saver's `savedPins` collection, so
/// a user holds at most one copy of each pin.
#[derive(Debug, Clone, PartialEq)]
pub struct SavedPin {
    pub pin_id: DocumentId,
    pub title: String,
    pub description: String,
    pub mood: Mood,
    pub location: GeoPoint,
    pub saved_by: UserId,
    pub saved_at: DateTime<Utc>,
}

impl SavedPin {
    /// Copy `pin` into `saved_by`'s collection, stamped with the current time
    pub fn from_pin(pin: &Pin, saved_by: UserId) -> Self {
        Self {
            pin_id: pin.id.clone(),
            title: pin.title.clone(),
            description: pin.description.clone(),
            mood: pin.mood,
            location: pin.location,
            saved_by,
            saved_at: Utc::now(),
        }
    }
}
