//! Authentication service
//!
//! Handles sign-up, sign-in and access to the current session.

use pinion_core::entities::UserProfile;
use pinion_core::error::DomainError;
use pinion_core::traits::Session;
use tracing::{info, instrument, warn};
use validator::Validate;

use crate::dto::{SessionResponse, SignInRequest, SignUpRequest};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Authentication service
pub struct AuthService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AuthService<'a> {
    /// Create a new AuthService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Register an account, write its initial profile and sign it in
    #[instrument(skip(self, request), fields(email = %request.email))]
    pub async fn sign_up(&self, request: SignUpRequest) -> ServiceResult<SessionResponse> {
        let request = SignUpRequest {
            email: request.email.trim().to_string(),
            ..request
        };
        request.validate()?;

        let session = self
            .ctx
            .identity()
            .sign_up(&request.email, &request.password)
            .await?;

        let profile = UserProfile::for_new_account(session.user_id.clone(), &session.email);
        self.ctx.profile_repo().create(&profile).await?;

        info!(user_id = %session.user_id, "Account registered");

        Ok(SessionResponse::from(&session))
    }

    /// Sign in to an existing account, replacing the current session
    #[instrument(skip(self, request), fields(email = %request.email))]
    pub async fn sign_in(&self, request: SignInRequest) -> ServiceResult<SessionResponse> {
        let request = SignInRequest {
            email: request.email.trim().to_string(),
            ..request
        };
        request.validate()?;

        let session = self
            .ctx
            .identity()
            .sign_in(&request.email, &request.password)
            .await
            .inspect_err(|e| warn!(error = %e, "Sign-in failed"))?;

        info!(user_id = %session.user_id, "Signed in");

        Ok(SessionResponse::from(&session))
    }

    /// The signed-in session, if any
    pub fn current_session(&self) -> Option<Session> {
        self.ctx.identity().current_session()
    }

    /// The signed-in session, or `NotSignedIn`
    pub fn require_session(&self) -> ServiceResult<Session> {
        self.current_session()
            .ok_or(ServiceError::Domain(DomainError::NotSignedIn))
    }
}
