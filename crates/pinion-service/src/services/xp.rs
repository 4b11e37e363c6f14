//! XP service
//!
//! Reads and awards experience points and resolves them against the level table.

use pinion_core::leveling::{reward_for_tag, LevelInfo, XpAction};
use pinion_core::value_objects::UserId;
use tracing::{info, instrument, warn};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// XP service
pub struct XpService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> XpService<'a> {
    /// Create a new XpService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Current XP and level, initializing a missing profile to zero XP
    #[instrument(skip(self))]
    pub async fn get_user_xp(&self, user_id: &UserId) -> ServiceResult<LevelInfo> {
        let xp = match self.ctx.profile_repo().find_by_id(user_id).await? {
            Some(profile) => profile.xp,
            None => {
                self.ctx.profile_repo().set_xp(user_id, 0).await?;
                0
            }
        };

        Ok(self.ctx.level_table().level_info(xp))
    }

    /// Add the reward for `tag` and return the new level
    ///
    /// Unknown tags are worth nothing and leave an existing total untouched;
    /// a missing record is still initialized to zero.
    #[instrument(skip(self))]
    pub async fn award_xp(&self, user_id: &UserId, tag: &str) -> ServiceResult<LevelInfo> {
        let stored = self
            .ctx
            .profile_repo()
            .find_by_id(user_id)
            .await?
            .map(|profile| profile.xp);
        let current = stored.unwrap_or(0);

        let reward = reward_for_tag(tag);
        if reward == 0 {
            warn!(tag, "Unknown XP action, nothing awarded");
            if stored.is_none() {
                self.ctx.profile_repo().set_xp(user_id, 0).await?;
            }
            return Ok(self.ctx.level_table().level_info(current));
        }

        let total = current.saturating_add(reward);
        self.ctx.profile_repo().set_xp(user_id, total).await?;

        let level = self.ctx.level_table().level_info(total);
        info!(%user_id, tag, reward, xp = total, level = %level.title, "XP awarded");

        Ok(level)
    }

    /// Award a known action
    pub async fn award_action(
        &self,
        user_id: &UserId,
        action: XpAction,
    ) -> ServiceResult<LevelInfo> {
        self.award_xp(user_id, action.tag()).await
    }

    /// Award an action, logging and discarding any failure
    pub async fn award_quietly(&self, user_id: &UserId, action: XpAction) -> Option<LevelInfo> {
        match self.award_action(user_id, action).await {
            Ok(level) => Some(level),
            Err(e) => {
                warn!(%user_id, action = %action, error = %e, "Failed to award XP");
                None
            }
        }
    }
}
