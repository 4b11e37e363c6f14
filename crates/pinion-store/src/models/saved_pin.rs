//! Saved pin document model

use chrono::{DateTime, Utc};
use pinion_core::value_objects::{GeoPoint, Mood};
use serde::{Deserialize, Serialize};

/// Record stored at `users/{uid}/savedPins/{pinId}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedPinDocument {
    pub pin_id: String,
    pub title: String,
    pub description: String,
    pub mood: Mood,
    pub location: GeoPoint,
    pub saved_by: String,
    #[serde(with = "super::timestamp")]
    pub saved_at: DateTime<Utc>,
}
