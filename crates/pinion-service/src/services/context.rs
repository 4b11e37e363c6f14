//! Service context - dependency container for services
//!
//! Holds the identity provider, repositories, retry policy and leveling table
//! needed by services.

use std::sync::Arc;

use pinion_common::{AppConfig, AppError, RetryPolicy};
use pinion_core::leveling::LevelTable;
use pinion_core::traits::{
    DocumentStore, IdentityProvider, PinRepository, SavedPinRepository, UserProfileRepository,
};
use pinion_store::{DocPinRepository, DocSavedPinRepository, DocUserProfileRepository};

use super::error::{ServiceError, ServiceResult};

/// Number of pins on the home feed when not configured
pub const DEFAULT_LATEST_LIMIT: usize = 5;

/// Service context containing all dependencies
///
/// Built once by the caller and borrowed by every service. It provides access to:
/// - The identity provider and its current session
/// - Typed repositories over the document store
/// - The retry policy for pin writes
/// - The XP level table
#[derive(Clone)]
pub struct ServiceContext {
    identity: Arc<dyn IdentityProvider>,

    // Repositories
    pin_repo: Arc<dyn PinRepository>,
    saved_pin_repo: Arc<dyn SavedPinRepository>,
    profile_repo: Arc<dyn UserProfileRepository>,

    retry_policy: RetryPolicy,
    level_table: LevelTable,
    latest_limit: usize,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    pub fn new(
        identity: Arc<dyn IdentityProvider>,
        pin_repo: Arc<dyn PinRepository>,
        saved_pin_repo: Arc<dyn SavedPinRepository>,
        profile_repo: Arc<dyn UserProfileRepository>,
        retry_policy: RetryPolicy,
        level_table: LevelTable,
        latest_limit: usize,
    ) -> Self {
        Self {
            identity,
            pin_repo,
            saved_pin_repo,
            profile_repo,
            retry_policy,
            level_table,
            latest_limit,
        }
    }

    /// Wire the document-store repositories over `store` using settings from `config`
    pub fn from_ports(
        store: Arc<dyn DocumentStore>,
        identity: Arc<dyn IdentityProvider>,
        config: &AppConfig,
    ) -> Self {
        Self::new(
            identity,
            Arc::new(DocPinRepository::new(Arc::clone(&store))),
            Arc::new(DocSavedPinRepository::new(Arc::clone(&store))),
            Arc::new(DocUserProfileRepository::new(store)),
            RetryPolicy::from(&config.retry),
            LevelTable::default(),
            config.feed.latest_limit,
        )
    }

    /// Load settings from the environment and wire the ports
    pub fn from_env(
        store: Arc<dyn DocumentStore>,
        identity: Arc<dyn IdentityProvider>,
    ) -> ServiceResult<Self> {
        let config = AppConfig::from_env().map_err(AppError::from)?;
        Ok(Self::from_ports(store, identity, &config))
    }

    /// Like [`ServiceContext::from_env`], reading settings through `lookup`
    pub fn from_lookup<F>(
        store: Arc<dyn DocumentStore>,
        identity: Arc<dyn IdentityProvider>,
        lookup: F,
    ) -> ServiceResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let config = AppConfig::from_lookup(lookup).map_err(AppError::from)?;
        Ok(Self::from_ports(store, identity, &config))
    }

    /// Get the identity provider
    pub fn identity(&self) -> &dyn IdentityProvider {
        self.identity.as_ref()
    }

    // === Repositories ===

    /// Get the pin repository
    pub fn pin_repo(&self) -> &dyn PinRepository {
        self.pin_repo.as_ref()
    }

    /// Get the saved pin repository
    pub fn saved_pin_repo(&self) -> &dyn SavedPinRepository {
        self.saved_pin_repo.as_ref()
    }

    /// Get the user profile repository
    pub fn profile_repo(&self) -> &dyn UserProfileRepository {
        self.profile_repo.as_ref()
    }

    // === Settings ===

    pub fn retry_policy(&self) -> &RetryPolicy {
        &self.retry_policy
    }

    pub fn level_table(&self) -> &LevelTable {
        &self.level_table
    }

    /// How many pins the home feed shows
    pub fn latest_limit(&self) -> usize {
        self.latest_limit
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("identity", &"dyn IdentityProvider")
            .field("repositories", &"...")
            .field("retry_policy", &self.retry_policy)
            .field("latest_limit", &self.latest_limit)
            .finish()
    }
}

/// Builder for creating ServiceContext with custom configuration
///
/// The identity provider and repositories are required; the retry policy,
/// level table and feed size fall back to their defaults.
#[derive(Default)]
pub struct ServiceContextBuilder {
    identity: Option<Arc<dyn IdentityProvider>>,
    pin_repo: Option<Arc<dyn PinRepository>>,
    saved_pin_repo: Option<Arc<dyn SavedPinRepository>>,
    profile_repo: Option<Arc<dyn UserProfileRepository>>,
    retry_policy: Option<RetryPolicy>,
    level_table: Option<LevelTable>,
    latest_limit: Option<usize>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn identity(mut self, identity: Arc<dyn IdentityProvider>) -> Self {
        self.identity = Some(identity);
        self
    }

    /// Use the document-store repositories over `store`
    pub fn store(self, store: Arc<dyn DocumentStore>) -> Self {
        self.pin_repo(Arc::new(DocPinRepository::new(Arc::clone(&store))))
            .saved_pin_repo(Arc::new(DocSavedPinRepository::new(Arc::clone(&store))))
            .profile_repo(Arc::new(DocUserProfileRepository::new(store)))
    }

    pub fn pin_repo(mut self, repo: Arc<dyn PinRepository>) -> Self {
        self.pin_repo = Some(repo);
        self
    }

    pub fn saved_pin_repo(mut self, repo: Arc<dyn SavedPinRepository>) -> Self {
        self.saved_pin_repo = Some(repo);
        self
    }

    pub fn profile_repo(mut self, repo: Arc<dyn UserProfileRepository>) -> Self {
        self.profile_repo = Some(repo);
        self
    }

    pub fn retry_policy(mut self, policy: RetryPolicy) -> Self {
        self.retry_policy = Some(policy);
        self
    }

    pub fn level_table(mut self, table: LevelTable) -> Self {
        self.level_table = Some(table);
        self
    }

    pub fn latest_limit(mut self, limit: usize) -> Self {
        self.latest_limit = Some(limit);
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if any required dependency is missing
    pub fn build(self) -> ServiceResult<ServiceContext> {
        Ok(ServiceContext::new(
            self.identity
                .ok_or_else(|| ServiceError::validation("identity is required"))?,
            self.pin_repo
                .ok_or_else(|| ServiceError::validation("pin_repo is required"))?,
            self.saved_pin_repo
                .ok_or_else(|| ServiceError::validation("saved_pin_repo is required"))?,
            self.profile_repo
                .ok_or_else(|| ServiceError::validation("profile_repo is required"))?,
            self.retry_policy.unwrap_or_default(),
            self.level_table.unwrap_or_default(),
            self.latest_limit.unwrap_or(DEFAULT_LATEST_LIMIT),
        ))
    }
}
