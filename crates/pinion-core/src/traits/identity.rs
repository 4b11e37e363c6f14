//! Identity provider port

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use super::repositories::RepoResult;
use crate::value_objects::UserId;

/// Signed-in session issued by the identity provider
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub user_id: UserId,
    pub email: String,
    pub token: String,
    pub issued_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl Session {
    /// Check if the session has passed its expiry
    pub fn is_expired(&self) -> bool {
        Utc::now() >= self.expires_at
    }
}

/// Email/password identity service
///
/// Implementations keep the current session; signing up or in replaces it.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Register a new account and sign it in
    async fn sign_up(&self, email: &str, password: &str) -> RepoResult<Session>;

    /// Sign in to an existing account
    async fn sign_in(&self, email: &str, password: &str) -> RepoResult<Session>;

    /// The signed-in session, if any and not expired
    fn current_session(&self) -> Option<Session>;
}
