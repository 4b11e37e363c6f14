//! Document store implementation of PinRepository

use std::sync::Arc;

use async_trait::async_trait;
use tracing::instrument;

use pinion_core::entities::{Pin, PinDraft};
use pinion_core::traits::{DocumentStore, OrderDirection, PinRepository, Query, RepoResult};
use pinion_core::value_objects::{paths, DocumentId, UserId};

use crate::mappers::{pin_from_document, to_fields};
use crate::models::PinDocument;

use super::error::{decode_listing, pin_not_found};

/// Pins in the top-level `pins` collection
#[derive(Clone)]
pub struct DocPinRepository {
    store: Arc<dyn DocumentStore>,
}

impl DocPinRepository {
    /// Create a new DocPinRepository
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    async fn list(&self, query: &Query) -> RepoResult<Vec<Pin>> {
        let docs = self.store.list_documents(&paths::pins(), query).await?;
        Ok(decode_listing(&docs, pin_from_document))
    }
}

#[async_trait]
impl PinRepository for DocPinRepository {
    #[instrument(skip(self, draft), fields(user_id = %draft.user_id))]
    async fn create(&self, draft: &PinDraft) -> RepoResult<Pin> {
        let fields = to_fields(&PinDocument::from(draft))?;
        let id = self.store.create_document(&paths::pins(), fields).await?;

        Ok(draft.clone().into_pin(id))
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: &DocumentId) -> RepoResult<Option<Pin>> {
        self.store
            .get_document(&paths::pin(id))
            .await?
            .map(|doc| pin_from_document(&doc))
            .transpose()
    }

    #[instrument(skip(self))]
    async fn find_latest(&self, limit: usize) -> RepoResult<Vec<Pin>> {
        let query = Query::new()
            .order_by("createdAt", OrderDirection::Descending)
            .limit(limit);
        self.list(&query).await
    }

    #[instrument(skip(self))]
    async fn find_all(&self) -> RepoResult<Vec<Pin>> {
        self.list(&Query::new()).await
    }

    #[instrument(skip(self))]
    async fn find_by_user(&self, user_id: &UserId) -> RepoResult<Vec<Pin>> {
        self.list(&Query::new().where_eq("userId", user_id.as_str()))
            .await
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: &DocumentId) -> RepoResult<()> {
        let path = paths::pin(id);
        if self.store.get_document(&path).await?.is_none() {
            return Err(pin_not_found(id));
        }
        self.store.delete_document(&path).await
    }
}
