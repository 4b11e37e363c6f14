//! Entity to document mappers
//!
//! Conversions between domain entities (pinion-core) and stored document models.
//! - `From<&Entity> for Model`: prepare entity data for a write
//! - `*_from_document`: decode a stored document into a domain object

mod pin;
mod saved_pin;
mod user;

use pinion_core::error::DomainError;
use pinion_core::traits::{Fields, RepoResult};
use serde::Serialize;
use serde_json::Value;

pub use pin::pin_from_document;
pub use saved_pin::saved_pin_from_document;
pub use user::{profile_from_document, profile_update_fields, xp_fields};

/// Serialize a model into top-level document fields
pub fn to_fields<T: Serialize>(model: &T) -> RepoResult<Fields> {
    match serde_json::to_value(model) {
        Ok(Value::Object(fields)) => Ok(fields),
        Ok(other) => Err(DomainError::InternalError(format!(
            "Expected a record, got {other}"
        ))),
        Err(e) => Err(DomainError::InternalError(format!(
            "Failed to encode record: {e}"
        ))),
    }
}
