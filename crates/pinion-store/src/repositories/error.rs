//! Error handling utilities for repositories

use pinion_core::error::DomainError;
use pinion_core::traits::{Document, RepoResult};
use pinion_core::value_objects::DocumentId;

/// Create a "pin not found" error
pub fn pin_not_found(id: &DocumentId) -> DomainError {
    DomainError::PinNotFound(id.clone())
}

/// Decode every document of a listing, skipping (and logging) records that
/// do not match the expected shape
pub fn decode_listing<T, F>(docs: &[Document], decode: F) -> Vec<T>
where
    F: Fn(&Document) -> RepoResult<T>,
{
    docs.iter()
        .filter_map(|doc| match decode(doc) {
            Ok(item) => Some(item),
            Err(e) => {
                tracing::warn!(path = %doc.path, error = %e, "Skipping malformed document");
                None
            }
        })
        .collect()
}
