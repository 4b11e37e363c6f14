//! Business logic services
//!
//! Each service borrows the shared [`ServiceContext`] and orchestrates the
//! identity provider, repositories, retry policy and leveling tables.

pub mod auth;
pub mod context;
pub mod error;
pub mod pin;
pub mod profile;
pub mod saved_pin;
pub mod xp;

// Re-export all services for convenience
pub use auth::AuthService;
pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
pub use pin::PinService;
pub use profile::ProfileService;
pub use saved_pin::SavedPinService;
pub use xp::XpService;
