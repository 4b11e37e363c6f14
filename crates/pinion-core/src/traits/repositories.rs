//! Repository traits (ports) - typed access to the app's collections
//!
//! The domain layer defines what it needs; the store crate implements these on
//! top of any [`DocumentStore`](super::DocumentStore).

use async_trait::async_trait;

use crate::entities::{Pin, PinDraft, ProfileUpdate, SavedPin, UserProfile};
use crate::error::DomainError;
use crate::value_objects::{DocumentId, UserId};

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// Pin Repository
// ============================================================================

#[async_trait]
pub trait PinRepository: Send + Sync {
    /// Write a new pin and return it with its assigned id
    async fn create(&self, draft: &PinDraft) -> RepoResult<Pin>;

    /// Find pin by ID
    async fn find_by_id(&self, id: &DocumentId) -> RepoResult<Option<Pin>>;

    /// Most recently created pins, newest first
    async fn find_latest(&self, limit: usize) -> RepoResult<Vec<Pin>>;

    /// Every pin
    async fn find_all(&self) -> RepoResult<Vec<Pin>>;

    /// Pins created by a user
    async fn find_by_user(&self, user_id: &UserId) -> RepoResult<Vec<Pin>>;

    /// Delete a pin
    async fn delete(&self, id: &DocumentId) -> RepoResult<()>;
}

// ============================================================================
// Saved Pin Repository
// ============================================================================

#[async_trait]
pub trait SavedPinRepository: Send + Sync {
    /// Find a user's saved copy of a pin
    async fn find(&self, user_id: &UserId, pin_id: &DocumentId) -> RepoResult<Option<SavedPin>>;

    /// Write a saved copy under the saver's collection
    async fn create(&self, saved: &SavedPin) -> RepoResult<()>;

    /// All pins a user has saved
    async fn find_by_user(&self, user_id: &UserId) -> RepoResult<Vec<SavedPin>>;
}

// ============================================================================
// User Profile Repository
// ============================================================================

#[async_trait]
pub trait UserProfileRepository: Send + Sync {
    /// Find profile by user ID
    async fn find_by_id(&self, user_id: &UserId) -> RepoResult<Option<UserProfile>>;

    /// Write a full profile, replacing any existing document
    async fn create(&self, profile: &UserProfile) -> RepoResult<()>;

    /// Merge the given fields into the profile
    async fn update(&self, user_id: &UserId, update: &ProfileUpdate) -> RepoResult<()>;

    /// Store a new XP total, creating the document if needed
    async fn set_xp(&self, user_id: &UserId, xp: u64) -> RepoResult<()>;
}
