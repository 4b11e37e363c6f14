//! Test fixtures and data generators
//!
//! Provides reusable test data and a document store wrapper that injects
//! write failures.

use std::sync::atomic::{AtomicU32, AtomicU64, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use pinion_core::error::DomainError;
use pinion_core::traits::{Document, DocumentStore, Fields, Query, RepoResult, WriteMode};
use pinion_core::value_objects::{CollectionPath, DocumentId, DocumentPath, GeoPoint, Mood};
use pinion_service::dto::{CreatePinRequest, UpdateProfileRequest};

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Get a unique suffix for test data
pub fn unique_suffix() -> u64 {
    COUNTER.fetch_add(1, Ordering::SeqCst)
}

/// Unique email address for a test account
pub fn unique_email(prefix: &str) -> String {
    format!("{prefix}{}@example.com", unique_suffix())
}

/// A valid create-pin request
pub fn pin_request(title: &str) -> CreatePinRequest {
    CreatePinRequest::new(
        title,
        "Golden hour over the bay",
        Mood::Peaceful,
        GeoPoint {
            latitude: 37.8199,
            longitude: -122.4783,
        },
    )
}

/// A valid profile edit
pub fn profile_request(username: &str) -> UpdateProfileRequest {
    UpdateProfileRequest::new(username, "🗺️")
}

/// Which writes a [`FlakyDocumentStore`] fails
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailingWrites {
    /// New documents in the `pins` collection
    PinCreates,
    /// Writes to `users/{uid}` documents
    ProfileWrites,
    /// Writes of saved copies under `users/{uid}/savedPins`
    SavedPinWrites,
}

/// Document store wrapper that fails selected writes
///
/// The first `failures` matching writes return the configured error; later
/// writes pass through to the inner store.
pub struct FlakyDocumentStore {
    inner: Arc<dyn DocumentStore>,
    target: FailingWrites,
    remaining: AtomicU32,
    attempts: AtomicU32,
    error: fn() -> DomainError,
}

impl FlakyDocumentStore {
    pub fn new(inner: Arc<dyn DocumentStore>, target: FailingWrites, failures: u32) -> Self {
        Self {
            inner,
            target,
            remaining: AtomicU32::new(failures),
            attempts: AtomicU32::new(0),
            error: || DomainError::StoreUnavailable("injected outage".to_string()),
        }
    }

    /// Fail every matching write
    pub fn always(inner: Arc<dyn DocumentStore>, target: FailingWrites) -> Self {
        Self::new(inner, target, u32::MAX)
    }

    /// Use a different injected error
    pub fn with_error(mut self, error: fn() -> DomainError) -> Self {
        self.error = error;
        self
    }

    /// Fail the next `failures` matching writes
    pub fn fail_next(&self, failures: u32) {
        self.remaining.store(failures, Ordering::SeqCst);
    }

    /// Matching writes seen so far, failed or not
    pub fn attempts(&self) -> u32 {
        self.attempts.load(Ordering::SeqCst)
    }

    fn intercept(&self, target: FailingWrites) -> RepoResult<()> {
        if target != self.target {
            return Ok(());
        }
        self.attempts.fetch_add(1, Ordering::SeqCst);
        let failed = self
            .remaining
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
            .is_ok();
        if failed {
            Err((self.error)())
        } else {
            Ok(())
        }
    }

    fn classify(path: &DocumentPath) -> Option<FailingWrites> {
        match path.parent().segments() {
            [users] if users == "users" => Some(FailingWrites::ProfileWrites),
            [users, _, saved] if users == "users" && saved == "savedPins" => {
                Some(FailingWrites::SavedPinWrites)
            }
            _ => None,
        }
    }
}

#[async_trait]
impl DocumentStore for FlakyDocumentStore {
    async fn create_document(
        &self,
        collection: &CollectionPath,
        fields: Fields,
    ) -> RepoResult<DocumentId> {
        if collection.name() == "pins" {
            self.intercept(FailingWrites::PinCreates)?;
        }
        self.inner.create_document(collection, fields).await
    }

    async fn get_document(&self, path: &DocumentPath) -> RepoResult<Option<Document>> {
        self.inner.get_document(path).await
    }

    async fn list_documents(
        &self,
        collection: &CollectionPath,
        query: &Query,
    ) -> RepoResult<Vec<Document>> {
        self.inner.list_documents(collection, query).await
    }

    async fn update_document(
        &self,
        path: &DocumentPath,
        fields: Fields,
        mode: WriteMode,
    ) -> RepoResult<()> {
        if let Some(target) = Self::classify(path) {
            self.intercept(target)?;
        }
        self.inner.update_document(path, fields, mode).await
    }

    async fn delete_document(&self, path: &DocumentPath) -> RepoResult<()> {
        self.inner.delete_document(path).await
    }
}
