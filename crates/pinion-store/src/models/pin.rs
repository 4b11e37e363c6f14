//! Pin document model

use chrono::{DateTime, Utc};
use pinion_core::value_objects::{GeoPoint, Mood};
use serde::{Deserialize, Serialize};

/// Record stored in the `pins` collection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PinDocument {
    pub title: String,
    pub description: String,
    pub mood: Mood,
    pub location: GeoPoint,
    pub user_id: String,
    #[serde(with = "super::timestamp")]
    pub created_at: DateTime<Utc>,
}
