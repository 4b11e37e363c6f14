//! Profile service
//!
//! Profile display data, profile edits and the combined profile overview.

use pinion_core::entities::ProfileUpdate;
use pinion_core::error::DomainError;
use pinion_core::leveling::{achievements, CreatorTier};
use pinion_core::value_objects::{is_valid_avatar, UserId};
use tracing::{info, instrument, warn};
use validator::Validate;

use crate::dto::{ProfileOverview, ProfileResponse, UpdateProfileRequest};

use super::auth::AuthService;
use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};
use super::xp::XpService;

/// Profile service
pub struct ProfileService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ProfileService<'a> {
    /// Create a new ProfileService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Get a user's profile
    #[instrument(skip(self))]
    pub async fn get_profile(&self, user_id: &UserId) -> ServiceResult<ProfileResponse> {
        let profile = self
            .ctx
            .profile_repo()
            .find_by_id(user_id)
            .await
            .inspect_err(|e| warn!(%user_id, error = %e, "Failed to load profile"))?
            .ok_or_else(|| DomainError::UserNotFound(user_id.clone()))?;
        Ok(ProfileResponse::from(&profile))
    }

    /// Update the signed-in user's username and avatar
    ///
    /// The session's email is written alongside; other fields are kept.
    #[instrument(skip(self, request))]
    pub async fn update_profile(
        &self,
        request: UpdateProfileRequest,
    ) -> ServiceResult<ProfileResponse> {
        let session = AuthService::new(self.ctx).require_session()?;

        let request = request.trimmed();
        request.validate()?;
        if !is_valid_avatar(&request.emoji) {
            return Err(ServiceError::Domain(DomainError::InvalidAvatar(request.emoji)));
        }

        let update = ProfileUpdate {
            username: Some(request.username),
            emoji: Some(request.emoji),
            email: Some(session.email.clone()),
        };
        self.ctx
            .profile_repo()
            .update(&session.user_id, &update)
            .await?;

        info!(user_id = %session.user_id, "Profile updated");

        self.get_profile(&session.user_id).await
    }

    /// Profile, counts and both progress metrics for the signed-in user
    #[instrument(skip(self))]
    pub async fn overview(&self) -> ServiceResult<ProfileOverview> {
        let session = AuthService::new(self.ctx).require_session()?;
        let user_id = &session.user_id;

        let profile = self.get_profile(user_id).await?;
        let pins_created = self
            .ctx
            .pin_repo()
            .find_by_user(user_id)
            .await
            .inspect_err(|e| warn!(%user_id, error = %e, "Failed to count created pins"))?
            .len();
        let pins_saved = self
            .ctx
            .saved_pin_repo()
            .find_by_user(user_id)
            .await
            .inspect_err(|e| warn!(%user_id, error = %e, "Failed to count saved pins"))?
            .len();
        let level = XpService::new(self.ctx)
            .get_user_xp(user_id)
            .await
            .inspect_err(|e| warn!(%user_id, error = %e, "Failed to load XP"))?;

        Ok(ProfileOverview {
            profile,
            pins_created,
            pins_saved,
            level,
            creator_tier: CreatorTier::for_pin_count(pins_created).into(),
            achievements: achievements(pins_created, pins_saved),
        })
    }
}
