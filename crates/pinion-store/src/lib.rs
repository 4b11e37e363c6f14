//! # pinion-store
//!
//! Store layer implementing the repository traits on top of any
//! [`DocumentStore`](pinion_core::DocumentStore).
//!
//! ## Overview
//!
//! - Document models with camelCase serde derives, matching the stored records
//! - Entity ↔ model mappers
//! - Repository implementations
//! - In-process implementations of the external ports (document store and
//!   identity provider) for local runs and tests
//!
//! ## Usage
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use pinion_core::traits::PinRepository;
//! use pinion_store::{DocPinRepository, MemoryDocumentStore};
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let store = MemoryDocumentStore::new_shared();
//!     let pins = DocPinRepository::new(store);
//!
//!     let latest = pins.find_latest(5).await?;
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod memory;
pub mod models;
pub mod repositories;

// Re-export commonly used types
pub use memory::{MemoryDocumentStore, MemoryIdentityProvider};
pub use repositories::{DocPinRepository, DocSavedPinRepository, DocUserProfileRepository};
