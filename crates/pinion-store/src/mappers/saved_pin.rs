//! SavedPin entity <-> document mapper

use pinion_core::entities::SavedPin;
use pinion_core::traits::{Document, RepoResult};
use pinion_core::value_objects::{DocumentId, UserId};

use crate::models::SavedPinDocument;

impl From<&SavedPin> for SavedPinDocument {
    fn from(saved: &SavedPin) -> Self {
        Self {
            pin_id: saved.pin_id.to_string(),
            title: saved.title.clone(),
            description: saved.description.clone(),
            mood: saved.mood,
            location: saved.location,
            saved_by: saved.saved_by.to_string(),
            saved_at: saved.saved_at,
        }
    }
}

impl From<SavedPinDocument> for SavedPin {
    fn from(model: SavedPinDocument) -> Self {
        SavedPin {
            pin_id: DocumentId::new(model.pin_id),
            title: model.title,
            description: model.description,
            mood: model.mood,
            location: model.location,
            saved_by: UserId::new(model.saved_by),
            saved_at: model.saved_at,
        }
    }
}

/// Decode a stored saved pin
pub fn saved_pin_from_document(doc: &Document) -> RepoResult<SavedPin> {
    doc.decode::<SavedPinDocument>().map(SavedPin::from)
}
