//! Document store implementation of UserProfileRepository

use std::sync::Arc;

use async_trait::async_trait;
use tracing::instrument;

use pinion_core::entities::{ProfileUpdate, UserProfile};
use pinion_core::traits::{DocumentStore, RepoResult, UserProfileRepository, WriteMode};
use pinion_core::value_objects::{paths, UserId};

use crate::mappers::{profile_from_document, profile_update_fields, to_fields, xp_fields};
use crate::models::UserDocument;

/// Profiles in the `users` collection, keyed by user id
#[derive(Clone)]
pub struct DocUserProfileRepository {
    store: Arc<dyn DocumentStore>,
}

impl DocUserProfileRepository {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl UserProfileRepository for DocUserProfileRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, user_id: &UserId) -> RepoResult<Option<UserProfile>> {
        self.store
            .get_document(&paths::user(user_id))
            .await?
            .map(|doc| profile_from_document(user_id, &doc))
            .transpose()
    }

    #[instrument(skip(self, profile), fields(user_id = %profile.id))]
    async fn create(&self, profile: &UserProfile) -> RepoResult<()> {
        let fields = to_fields(&UserDocument::from(profile))?;
        self.store
            .update_document(&paths::user(&profile.id), fields, WriteMode::Replace)
            .await
    }

    #[instrument(skip(self, update))]
    async fn update(&self, user_id: &UserId, update: &ProfileUpdate) -> RepoResult<()> {
        if update.is_empty() {
            return Ok(());
        }
        self.store
            .update_document(
                &paths::user(user_id),
                profile_update_fields(update),
                WriteMode::Merge,
            )
            .await
    }

    #[instrument(skip(self))]
    async fn set_xp(&self, user_id: &UserId, xp: u64) -> RepoResult<()> {
        self.store
            .update_document(&paths::user(user_id), xp_fields(xp), WriteMode::Merge)
            .await
    }
}
