//! # pinion-core
//!
//! Domain layer containing entities, value objects, the leveling schemes, and the
//! port traits for the external identity provider and document store.
//! This crate has zero dependencies on infrastructure (store clients, runtimes, etc.).

pub mod entities;
pub mod error;
pub mod leveling;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{Pin, PinDraft, ProfileUpdate, SavedPin, UserProfile};
pub use error::DomainError;
pub use leveling::{
    achievements, reward_for_tag, CreatorTier, LevelInfo, LevelTable, LevelThreshold, XpAction,
};
pub use traits::{
    Document, DocumentStore, FieldFilter, Fields, IdentityProvider, OrderBy, OrderDirection,
    PinRepository, Query, RepoResult, SavedPinRepository, Session, UserProfileRepository,
    WriteMode,
};
pub use value_objects::{
    is_valid_avatar, paths, CollectionPath, DocumentId, DocumentPath, GeoPoint, Mood, UserId,
    AVATAR_EMOJIS, DEFAULT_AVATAR_EMOJI,
};
