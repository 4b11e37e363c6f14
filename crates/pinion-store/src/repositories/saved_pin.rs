//! Document store implementation of SavedPinRepository

use std::sync::Arc;

use async_trait::async_trait;
use tracing::instrument;

use pinion_core::entities::SavedPin;
use pinion_core::traits::{DocumentStore, Query, RepoResult, SavedPinRepository, WriteMode};
use pinion_core::value_objects::{paths, DocumentId, UserId};

use crate::mappers::{saved_pin_from_document, to_fields};
use crate::models::SavedPinDocument;

use super::error::decode_listing;

/// Saved copies under `users/{uid}/savedPins`, keyed by the original pin id
#[derive(Clone)]
pub struct DocSavedPinRepository {
    store: Arc<dyn DocumentStore>,
}

impl DocSavedPinRepository {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl SavedPinRepository for DocSavedPinRepository {
    #[instrument(skip(self))]
    async fn find(&self, user_id: &UserId, pin_id: &DocumentId) -> RepoResult<Option<SavedPin>> {
        self.store
            .get_document(&paths::saved_pin(user_id, pin_id))
            .await?
            .map(|doc| saved_pin_from_document(&doc))
            .transpose()
    }

    #[instrument(skip(self, saved), fields(user_id = %saved.saved_by, pin_id = %saved.pin_id))]
    async fn create(&self, saved: &SavedPin) -> RepoResult<()> {
        let fields = to_fields(&SavedPinDocument::from(saved))?;
        self.store
            .update_document(
                &paths::saved_pin(&saved.saved_by, &saved.pin_id),
                fields,
                WriteMode::Replace,
            )
            .await
    }

    #[instrument(skip(self))]
    async fn find_by_user(&self, user_id: &UserId) -> RepoResult<Vec<SavedPin>> {
        let docs = self
            .store
            .list_documents(&paths::saved_pins(user_id), &Query::new())
            .await?;
        Ok(decode_listing(&docs, saved_pin_from_document))
    }
}
