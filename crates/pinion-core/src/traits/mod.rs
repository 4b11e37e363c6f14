//! Port traits - the external services and typed data access the app depends on

mod document_store;
mod identity;
mod repositories;

pub use document_store::{
    Document, DocumentStore, FieldFilter, Fields, OrderBy, OrderDirection, Query, WriteMode,
};
pub use identity::{IdentityProvider, Session};
pub use repositories::{PinRepository, RepoResult, SavedPinRepository, UserProfileRepository};
