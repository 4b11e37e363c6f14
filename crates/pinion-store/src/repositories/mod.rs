//! Repository implementations
//!
//! Implementations of the repository traits defined in pinion-core, written
//! against the [`DocumentStore`](pinion_core::DocumentStore) port.

mod error;
mod pin;
mod saved_pin;
mod user_profile;

pub use pin::DocPinRepository;
pub use saved_pin::DocSavedPinRepository;
pub use user_profile::DocUserProfileRepository;
