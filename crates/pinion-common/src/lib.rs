//! # pinion-common
//!
//! Shared utilities including configuration, error handling, retry with backoff,
//! credential hashing, session tokens, and telemetry.

pub mod auth;
pub mod config;
pub mod error;
pub mod retry;
pub mod telemetry;

// Re-export commonly used types at crate root
pub use auth::{
    hash_password, validate_password_strength, verify_password, IssuedToken, PasswordService,
    SessionClaims, SessionTokenService, MIN_PASSWORD_LENGTH,
};
pub use config::{
    AppConfig, AppSettings, ConfigError, Environment, FeedConfig, RetryConfig, SessionConfig,
    StoreConfig,
};
pub use error::{domain_user_message, AppError, AppResult};
pub use retry::{retry, RetryPolicy};
pub use telemetry::{
    init_tracing, init_tracing_with_config, try_init_tracing, try_init_tracing_with_config,
    TracingConfig, TracingError,
};
