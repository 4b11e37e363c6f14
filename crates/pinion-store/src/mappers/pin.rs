//! Pin entity <-> document mapper

use pinion_core::entities::{Pin, PinDraft};
use pinion_core::traits::{Document, RepoResult};
use pinion_core::value_objects::UserId;

use crate::models::PinDocument;

/// Convert a draft to the record written on creation
impl From<&PinDraft> for PinDocument {
    fn from(draft: &PinDraft) -> Self {
        Self {
            title: draft.title.clone(),
            description: draft.description.clone(),
            mood: draft.mood,
            location: draft.location,
            user_id: draft.user_id.to_string(),
            created_at: draft.created_at,
        }
    }
}

/// Decode a stored pin, taking the id from its path
pub fn pin_from_document(doc: &Document) -> RepoResult<Pin> {
    let model: PinDocument = doc.decode()?;
    Ok(Pin {
        id: doc.id().clone(),
        title: model.title,
        description: model.description,
        mood: model.mood,
        location: model.location,
        user_id: UserId::new(model.user_id),
        created_at: model.created_at,
    })
}
