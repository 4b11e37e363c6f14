//! Pin service
//!
//! Creating, listing and deleting pins.

use chrono::Utc;
use pinion_core::entities::{Pin, PinDraft};
use pinion_core::error::DomainError;
use pinion_core::leveling::XpAction;
use pinion_core::value_objects::{DocumentId, UserId};
use tracing::{info, instrument, warn};
use validator::Validate;

use crate::dto::{CreatePinRequest, PinCreated, PinResponse};

use super::auth::AuthService;
use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};
use super::xp::XpService;

/// Pin service
pub struct PinService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> PinService<'a> {
    /// Create a new PinService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Create a pin for the signed-in user
    ///
    /// The write goes through the retry policy; once it lands, `CREATE_PIN` XP
    /// is awarded on a best-effort basis.
    #[instrument(skip(self, request), fields(title = %request.title))]
    pub async fn create_pin(&self, request: CreatePinRequest) -> ServiceResult<PinCreated> {
        let session = AuthService::new(self.ctx).require_session()?;

        let request = request.trimmed();
        request.validate()?;
        let (Some(mood), Some(location)) = (request.mood, request.location) else {
            return Err(ServiceError::validation(
                "Please fill in all required fields and place a pin on the map",
            ));
        };
        location.validate()?;

        let draft = PinDraft::new(
            request.title,
            request.description,
            mood,
            location,
            session.user_id.clone(),
        );

        let pin = self
            .ctx
            .retry_policy()
            .execute(|| self.ctx.pin_repo().create(&draft))
            .await
            .map_err(ServiceError::PinWriteFailed)?;

        info!(pin_id = %pin.id, user_id = %pin.user_id, "Pin created");

        let level = XpService::new(self.ctx)
            .award_quietly(&session.user_id, XpAction::CreatePin)
            .await;

        Ok(PinCreated {
            pin: PinResponse::from(&pin),
            level,
        })
    }

    /// Get a pin by ID
    #[instrument(skip(self))]
    pub async fn get_pin(&self, id: &DocumentId) -> ServiceResult<PinResponse> {
        let pin = self.find_pin(id).await?;
        Ok(PinResponse::from(&pin))
    }

    /// Newest pins for the home feed
    #[instrument(skip(self))]
    pub async fn latest_pins(&self) -> ServiceResult<Vec<PinResponse>> {
        let pins = self
            .ctx
            .pin_repo()
            .find_latest(self.ctx.latest_limit())
            .await
            .inspect_err(|e| warn!(error = %e, "Failed to load latest pins"))?;
        Ok(to_responses(&pins))
    }

    /// Every pin, for the map
    #[instrument(skip(self))]
    pub async fn all_pins(&self) -> ServiceResult<Vec<PinResponse>> {
        let pins = self
            .ctx
            .pin_repo()
            .find_all()
            .await
            .inspect_err(|e| warn!(error = %e, "Failed to load pins"))?;
        Ok(to_responses(&pins))
    }

    /// Pins created by a user
    #[instrument(skip(self))]
    pub async fn pins_by_user(&self, user_id: &UserId) -> ServiceResult<Vec<PinResponse>> {
        let pins = self
            .ctx
            .pin_repo()
            .find_by_user(user_id)
            .await
            .inspect_err(|e| warn!(%user_id, error = %e, "Failed to load user's pins"))?;
        Ok(to_responses(&pins))
    }

    /// Delete one of the signed-in user's pins
    #[instrument(skip(self))]
    pub async fn delete_pin(&self, id: &DocumentId) -> ServiceResult<()> {
        let session = AuthService::new(self.ctx).require_session()?;
        let pin = self.find_pin(id).await?;

        if !pin.is_owned_by(&session.user_id) {
            warn!(pin_id = %id, user_id = %session.user_id, "Refusing to delete another user's pin");
            return Err(DomainError::NotPinOwner.into());
        }

        self.ctx.pin_repo().delete(id).await?;

        info!(pin_id = %id, "Pin deleted");

        Ok(())
    }

    async fn find_pin(&self, id: &DocumentId) -> ServiceResult<Pin> {
        self.ctx
            .pin_repo()
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::PinNotFound(id.clone()).into())
    }
}

fn to_responses(pins: &[Pin]) -> Vec<PinResponse> {
    let now = Utc::now();
    pins.iter().map(|pin| PinResponse::from_pin(pin, now)).collect()
}
