//! Test helpers for integration tests
//!
//! Provides a fully wired application over the in-memory ports and a test
//! configuration that needs no environment.

use std::collections::HashMap;
use std::sync::Arc;

use anyhow::Result;
use pinion_common::{try_init_tracing_with_config, AppConfig, RetryPolicy, TracingConfig};
use pinion_core::traits::DocumentStore;
use pinion_core::value_objects::UserId;
use pinion_service::dto::{SignInRequest, SignUpRequest};
use pinion_service::{AuthService, ServiceContext, ServiceContextBuilder};
use pinion_store::{MemoryDocumentStore, MemoryIdentityProvider};

/// Password used for every test account
pub const TEST_PASSWORD: &str = "pinned-memories";

/// Configuration with test values, built without reading the environment
pub fn test_config() -> Result<AppConfig> {
    let vars: HashMap<&str, &str> = HashMap::from([
        ("APP_ENV", "development"),
        ("STORE_PROJECT_ID", "pinion-test"),
        ("SESSION_SECRET", "integration-test-secret"),
        ("RETRY_BASE_DELAY_MS", "0"),
        ("RETRY_MAX_JITTER_MS", "0"),
    ]);
    Ok(AppConfig::from_lookup(|key| {
        vars.get(key).map(|v| (*v).to_string())
    })?)
}

/// Install a subscriber once so failures show logs; later calls are no-ops
pub fn init_test_tracing() {
    let _ = try_init_tracing_with_config(TracingConfig::development());
}

/// Application wired over in-memory ports
pub struct TestApp {
    pub ctx: ServiceContext,
    pub identity: Arc<MemoryIdentityProvider>,
}

impl TestApp {
    /// Start with a fresh in-memory store
    pub fn start() -> Result<Self> {
        Self::with_store(MemoryDocumentStore::new_shared())
    }

    /// Start over a specific document store
    pub fn with_store(store: Arc<dyn DocumentStore>) -> Result<Self> {
        init_test_tracing();
        let config = test_config()?;
        let identity = Arc::new(MemoryIdentityProvider::from_config(&config.session));
        let ctx = ServiceContext::from_ports(store, identity.clone(), &config);
        Ok(Self { ctx, identity })
    }

    /// Start over a specific store with a custom retry policy
    pub fn with_store_and_retry(
        store: Arc<dyn DocumentStore>,
        policy: RetryPolicy,
    ) -> Result<Self> {
        init_test_tracing();
        let config = test_config()?;
        let identity = Arc::new(MemoryIdentityProvider::from_config(&config.session));
        let ctx = ServiceContextBuilder::new()
            .identity(identity.clone())
            .store(store)
            .retry_policy(policy)
            .latest_limit(config.feed.latest_limit)
            .build()?;
        Ok(Self { ctx, identity })
    }

    /// Register an account through the auth service and return its user id
    pub async fn sign_up(&self, email: &str) -> Result<UserId> {
        let session = AuthService::new(&self.ctx)
            .sign_up(SignUpRequest {
                email: email.to_string(),
                password: TEST_PASSWORD.to_string(),
            })
            .await?;
        Ok(UserId::new(session.user_id))
    }

    /// Switch the current session to an existing account
    pub async fn sign_in(&self, email: &str) -> Result<UserId> {
        let session = AuthService::new(&self.ctx)
            .sign_in(SignInRequest {
                email: email.to_string(),
                password: TEST_PASSWORD.to_string(),
            })
            .await?;
        Ok(UserId::new(session.user_id))
    }
}
