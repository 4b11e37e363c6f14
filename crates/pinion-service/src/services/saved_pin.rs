//! Saved pin service
//!
//! Saving other users' pins into the signed-in user's collection.

use pinion_core::entities::SavedPin;
use pinion_core::error::DomainError;
use pinion_core::leveling::XpAction;
use pinion_core::value_objects::DocumentId;
use tracing::{info, instrument, warn};

use crate::dto::{SaveOutcome, SavedPinResponse};

use super::auth::AuthService;
use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};
use super::xp::XpService;

/// Saved pin service
pub struct SavedPinService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> SavedPinService<'a> {
    /// Create a new SavedPinService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Save a copy of a pin for the signed-in user
    ///
    /// Saving a pin twice writes nothing and reports `AlreadySaved`.
    #[instrument(skip(self))]
    pub async fn save_pin(&self, pin_id: &DocumentId) -> ServiceResult<SaveOutcome> {
        let session = AuthService::new(self.ctx).require_session()?;
        let user_id = session.user_id;

        if self
            .ctx
            .saved_pin_repo()
            .find(&user_id, pin_id)
            .await
            .map_err(ServiceError::SaveFailed)?
            .is_some()
        {
            info!(%user_id, %pin_id, "Pin already saved");
            return Ok(SaveOutcome::AlreadySaved);
        }

        let pin = self
            .ctx
            .pin_repo()
            .find_by_id(pin_id)
            .await?
            .ok_or_else(|| DomainError::PinNotFound(pin_id.clone()))?;

        let saved = SavedPin::from_pin(&pin, user_id.clone());
        self.ctx
            .saved_pin_repo()
            .create(&saved)
            .await
            .inspect_err(|e| warn!(%user_id, %pin_id, error = %e, "Failed to save pin"))
            .map_err(ServiceError::SaveFailed)?;

        info!(%user_id, %pin_id, "Pin saved");

        let level = XpService::new(self.ctx)
            .award_quietly(&user_id, XpAction::SavePin)
            .await;

        Ok(SaveOutcome::Saved { level })
    }

    /// The signed-in user's saved pins
    #[instrument(skip(self))]
    pub async fn saved_pins(&self) -> ServiceResult<Vec<SavedPinResponse>> {
        let session = AuthService::new(self.ctx).require_session()?;
        let saved = self
            .ctx
            .saved_pin_repo()
            .find_by_user(&session.user_id)
            .await
            .inspect_err(|e| {
                warn!(user_id = %session.user_id, error = %e, "Failed to load saved pins");
            })?;
        Ok(saved.iter().map(SavedPinResponse::from).collect())
    }
}
