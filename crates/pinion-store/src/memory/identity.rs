//! In-memory identity provider
//!
//! Email/password accounts with Argon2 password hashes and signed session
//! tokens. Holds a single current session, like a signed-in client.

use async_trait::async_trait;
use dashmap::{mapref::entry::Entry, DashMap};
use parking_lot::RwLock;
use tracing::instrument;
use uuid::Uuid;
use validator::ValidateEmail;

use pinion_common::{
    validate_password_strength, PasswordService, SessionConfig, SessionTokenService,
};
use pinion_core::error::DomainError;
use pinion_core::traits::{IdentityProvider, RepoResult, Session};
use pinion_core::value_objects::UserId;

#[derive(Debug, Clone)]
struct Account {
    user_id: UserId,
    email: String,
    password_hash: String,
}

/// Identity provider held in process memory
pub struct MemoryIdentityProvider {
    /// Accounts by normalized email
    accounts: DashMap<String, Account>,
    passwords: PasswordService,
    tokens: SessionTokenService,
    current: RwLock<Option<Session>>,
}

impl MemoryIdentityProvider {
    pub fn new(tokens: SessionTokenService) -> Self {
        Self {
            accounts: DashMap::new(),
            passwords: PasswordService::new(),
            tokens,
            current: RwLock::new(None),
        }
    }

    pub fn from_config(config: &SessionConfig) -> Self {
        Self::new(SessionTokenService::new(&config.secret, config.expiry_secs))
    }

    /// Number of registered accounts
    pub fn account_count(&self) -> usize {
        self.accounts.len()
    }

    fn normalize(email: &str) -> String {
        email.trim().to_lowercase()
    }

    fn start_session(&self, account: &Account) -> RepoResult<Session> {
        let issued = self
            .tokens
            .issue(&account.user_id, &account.email)
            .map_err(DomainError::from)?;

        let session = Session {
            user_id: account.user_id.clone(),
            email: account.email.clone(),
            token: issued.token,
            issued_at: issued.issued_at,
            expires_at: issued.expires_at,
        };
        *self.current.write() = Some(session.clone());

        Ok(session)
    }
}

impl std::fmt::Debug for MemoryIdentityProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemoryIdentityProvider")
            .field("accounts", &self.accounts.len())
            .field("signed_in", &self.current.read().is_some())
            .finish()
    }
}

#[async_trait]
impl IdentityProvider for MemoryIdentityProvider {
    #[instrument(skip(self, password))]
    async fn sign_up(&self, email: &str, password: &str) -> RepoResult<Session> {
        let email = email.trim();
        if !email.validate_email() {
            return Err(DomainError::InvalidEmail);
        }
        validate_password_strength(password).map_err(DomainError::from)?;

        let password_hash = self.passwords.hash(password).map_err(DomainError::from)?;

        let account = match self.accounts.entry(Self::normalize(email)) {
            Entry::Occupied(_) => return Err(DomainError::EmailAlreadyExists),
            Entry::Vacant(slot) => {
                let account = Account {
                    user_id: UserId::new(Uuid::new_v4().simple().to_string()),
                    email: email.to_string(),
                    password_hash,
                };
                slot.insert(account.clone());
                account
            }
        };

        tracing::info!(user_id = %account.user_id, "Account created");

        self.start_session(&account)
    }

    #[instrument(skip(self, password))]
    async fn sign_in(&self, email: &str, password: &str) -> RepoResult<Session> {
        let account = self
            .accounts
            .get(&Self::normalize(email))
            .map(|entry| entry.value().clone())
            .ok_or(DomainError::InvalidCredentials)?;

        self.passwords
            .verify_or_error(password, &account.password_hash)
            .map_err(DomainError::from)?;

        tracing::info!(user_id = %account.user_id, "Signed in");

        self.start_session(&account)
    }

    fn current_session(&self) -> Option<Session> {
        self.current
            .read()
            .as_ref()
            .filter(|session| !session.is_expired())
            .cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn provider() -> MemoryIdentityProvider {
        MemoryIdentityProvider::new(SessionTokenService::new("test-secret", 3600))
    }

    #[tokio::test]
    async fn test_sign_up_starts_session() {
        let identity = provider();
        assert!(identity.current_session().is_none());

        let session = identity.sign_up("mira@example.com", "secret1").await.unwrap();
        assert_eq!(session.email, "mira@example.com");
        assert_eq!(identity.current_session(), Some(session));
        assert_eq!(identity.account_count(), 1);
    }

    #[tokio::test]
    async fn test_token_carries_user_id() {
        let tokens = SessionTokenService::new("test-secret", 3600);
        let identity = MemoryIdentityProvider::new(tokens.clone());

        let session = identity.sign_up("mira@example.com", "secret1").await.unwrap();
        let claims = tokens.verify(&session.token).unwrap();
        assert_eq!(claims.user_id(), session.user_id);
    }

    #[tokio::test]
    async fn test_sign_up_rejections() {
        let identity = provider();

        let err = identity.sign_up("not-an-email", "secret1").await.unwrap_err();
        assert!(matches!(err, DomainError::InvalidEmail));

        let err = identity.sign_up("a@example.com", "short").await.unwrap_err();
        assert!(matches!(err, DomainError::WeakPassword(_)));

        identity.sign_up("a@example.com", "secret1").await.unwrap();
        let err = identity.sign_up("A@Example.com", "secret2").await.unwrap_err();
        assert!(matches!(err, DomainError::EmailAlreadyExists));
    }

    #[tokio::test]
    async fn test_sign_in() {
        let identity = provider();
        let created = identity.sign_up("kai@example.com", "secret1").await.unwrap();

        let session = identity.sign_in("kai@example.com", "secret1").await.unwrap();
        assert_eq!(session.user_id, created.user_id);

        let err = identity.sign_in("kai@example.com", "wrong-pass").await.unwrap_err();
        assert!(matches!(err, DomainError::InvalidCredentials));

        let err = identity.sign_in("nobody@example.com", "secret1").await.unwrap_err();
        assert!(matches!(err, DomainError::InvalidCredentials));
    }

    #[tokio::test]
    async fn test_sign_in_replaces_session() {
        let identity = provider();
        let first = identity.sign_up("one@example.com", "secret1").await.unwrap();
        let second = identity.sign_up("two@example.com", "secret1").await.unwrap();
        assert_eq!(identity.current_session().unwrap().user_id, second.user_id);

        identity.sign_in("one@example.com", "secret1").await.unwrap();
        assert_eq!(identity.current_session().unwrap().user_id, first.user_id);
    }

    #[tokio::test]
    async fn test_expired_session_is_hidden() {
        let identity = provider();
        let mut session = identity.sign_up("old@example.com", "secret1").await.unwrap();
        session.expires_at = session.issued_at - chrono::Duration::seconds(60);
        *identity.current.write() = Some(session);

        assert!(identity.current_session().is_none());
    }

    #[tokio::test]
    async fn test_unusable_session_lifetime_fails_sign_up() {
        let identity = MemoryIdentityProvider::new(SessionTokenService::new("test-secret", i64::MAX));

        let err = identity.sign_up("far@example.com", "secret1").await.unwrap_err();
        assert!(matches!(err, DomainError::InternalError(_)));
        assert!(identity.current_session().is_none());
    }
}
