//! End-to-end scenarios over the in-memory ports

use std::sync::Arc;

use anyhow::Result;
use integration_tests::{
    pin_request, profile_request, unique_email, FailingWrites, FlakyDocumentStore, TestApp,
};
use pinion_common::RetryPolicy;
use pinion_core::error::DomainError;
use pinion_core::traits::DocumentStore;
use pinion_core::value_objects::DocumentId;
use pinion_service::dto::{SaveOutcome, UpdateProfileRequest};
use pinion_service::{PinService, ProfileService, SavedPinService, ServiceError, XpService};
use pinion_store::MemoryDocumentStore;

fn flaky_app(target: FailingWrites, failures: u32) -> Result<(TestApp, Arc<FlakyDocumentStore>)> {
    let store = Arc::new(FlakyDocumentStore::new(
        MemoryDocumentStore::new_shared(),
        target,
        failures,
    ));
    let app = TestApp::with_store_and_retry(
        store.clone() as Arc<dyn DocumentStore>,
        RetryPolicy::immediate(3),
    )?;
    Ok((app, store))
}

#[tokio::test]
async fn first_save_moves_user_to_five_xp() -> Result<()> {
    let app = TestApp::start()?;
    let author = unique_email("author");
    app.sign_up(&author).await?;
    let pin = PinService::new(&app.ctx).create_pin(pin_request("Pier")).await?;

    let reader = app.sign_up(&unique_email("reader")).await?;
    let outcome = SavedPinService::new(&app.ctx)
        .save_pin(&DocumentId::new(pin.pin.id))
        .await?;

    let SaveOutcome::Saved { level: Some(level) } = &outcome else {
        panic!("expected a fresh save with a level, got {outcome:?}");
    };
    assert_eq!(level.xp, 5);
    assert_eq!(level.title, "Newbie");
    assert_eq!(level.next_level_xp, 50);
    assert_eq!(outcome.message(), "Pin saved successfully!");

    let stored = XpService::new(&app.ctx).get_user_xp(&reader).await?;
    assert_eq!(stored.xp, 5);
    Ok(())
}

#[tokio::test]
async fn ten_saves_reach_story_seeker() -> Result<()> {
    let app = TestApp::start()?;
    let author = unique_email("author");
    app.sign_up(&author).await?;
    let mut pin_ids = Vec::new();
    for i in 0..10 {
        let created = PinService::new(&app.ctx)
            .create_pin(pin_request(&format!("Memory {i}")))
            .await?;
        pin_ids.push(DocumentId::new(created.pin.id));
    }

    let reader = app.sign_up(&unique_email("reader")).await?;
    let saves = SavedPinService::new(&app.ctx);
    for id in &pin_ids {
        saves.save_pin(id).await?;
    }

    let level = XpService::new(&app.ctx).get_user_xp(&reader).await?;
    assert_eq!(level.xp, 50);
    assert_eq!(level.title, "Story Seeker");
    assert_eq!(level.next_level_xp, 150);
    assert_eq!(saves.saved_pins().await?.len(), 10);
    Ok(())
}

#[tokio::test]
async fn saving_twice_awards_xp_once() -> Result<()> {
    let app = TestApp::start()?;
    app.sign_up(&unique_email("author")).await?;
    let pin = PinService::new(&app.ctx).create_pin(pin_request("Bridge")).await?;
    let pin_id = DocumentId::new(pin.pin.id);

    let reader = app.sign_up(&unique_email("reader")).await?;
    let saves = SavedPinService::new(&app.ctx);
    saves.save_pin(&pin_id).await?;
    let second = saves.save_pin(&pin_id).await?;

    assert_eq!(second, SaveOutcome::AlreadySaved);
    assert_eq!(
        serde_json::to_value(&second)?,
        serde_json::json!({ "status": "already_saved" })
    );
    assert_eq!(second.message(), "This pin is already saved.");
    assert_eq!(XpService::new(&app.ctx).get_user_xp(&reader).await?.xp, 5);
    assert_eq!(saves.saved_pins().await?.len(), 1);
    Ok(())
}

#[tokio::test]
async fn create_pin_survives_transient_failures() -> Result<()> {
    let (app, store) = flaky_app(FailingWrites::PinCreates, 2)?;
    let author = app.sign_up(&unique_email("author")).await?;

    let created = PinService::new(&app.ctx)
        .create_pin(pin_request("Third time lucky"))
        .await?;

    assert_eq!(store.attempts(), 3);
    assert_eq!(created.pin.user_id, author.as_str());
    assert_eq!(created.level.map(|l| l.xp), Some(1));
    assert_eq!(PinService::new(&app.ctx).all_pins().await?.len(), 1);
    Ok(())
}

#[tokio::test]
async fn create_pin_gives_up_after_three_attempts() -> Result<()> {
    let store = Arc::new(FlakyDocumentStore::always(
        MemoryDocumentStore::new_shared(),
        FailingWrites::PinCreates,
    ));
    let app = TestApp::with_store_and_retry(
        store.clone() as Arc<dyn DocumentStore>,
        RetryPolicy::immediate(3),
    )?;
    let author = app.sign_up(&unique_email("author")).await?;

    let err = PinService::new(&app.ctx)
        .create_pin(pin_request("Never lands"))
        .await
        .unwrap_err();

    assert_eq!(store.attempts(), 3);
    assert!(matches!(err, ServiceError::PinWriteFailed(_)));
    assert_eq!(err.error_code(), "PIN_WRITE_FAILED");
    assert_eq!(
        err.user_message(),
        "Failed to save your memory. Please check your internet connection and try again."
    );
    assert!(PinService::new(&app.ctx).all_pins().await?.is_empty());
    assert_eq!(XpService::new(&app.ctx).get_user_xp(&author).await?.xp, 0);
    Ok(())
}

#[tokio::test]
async fn xp_failure_does_not_fail_pin_creation() -> Result<()> {
    let (app, store) = flaky_app(FailingWrites::ProfileWrites, 0)?;
    let author = app.sign_up(&unique_email("author")).await?;
    store.fail_next(u32::MAX);

    let created = PinService::new(&app.ctx)
        .create_pin(pin_request("Quiet success"))
        .await?;

    assert!(created.level.is_none());
    assert_eq!(PinService::new(&app.ctx).pins_by_user(&author).await?.len(), 1);
    assert_eq!(XpService::new(&app.ctx).get_user_xp(&author).await?.xp, 0);
    Ok(())
}

#[tokio::test]
async fn permission_denied_save_reports_permission_message() -> Result<()> {
    let store = Arc::new(
        FlakyDocumentStore::always(
            MemoryDocumentStore::new_shared(),
            FailingWrites::SavedPinWrites,
        )
        .with_error(|| DomainError::PermissionDenied("savedPins".to_string())),
    );
    let app = TestApp::with_store(store.clone() as Arc<dyn DocumentStore>)?;
    app.sign_up(&unique_email("author")).await?;
    let pin = PinService::new(&app.ctx).create_pin(pin_request("Locked")).await?;

    let reader = app.sign_up(&unique_email("reader")).await?;
    let err = SavedPinService::new(&app.ctx)
        .save_pin(&DocumentId::new(pin.pin.id))
        .await
        .unwrap_err();

    assert_eq!(store.attempts(), 1);
    assert_eq!(err.error_code(), "SAVE_FAILED");
    assert_eq!(
        err.user_message(),
        "You do not have permission to save pins. Please try again later."
    );
    assert_eq!(XpService::new(&app.ctx).get_user_xp(&reader).await?.xp, 0);
    Ok(())
}

#[tokio::test]
async fn only_the_owner_can_delete_a_pin() -> Result<()> {
    let app = TestApp::start()?;
    let owner_email = unique_email("owner");
    app.sign_up(&owner_email).await?;
    let pin = PinService::new(&app.ctx).create_pin(pin_request("Mine")).await?;
    let pin_id = DocumentId::new(pin.pin.id);

    app.sign_up(&unique_email("other")).await?;
    let err = PinService::new(&app.ctx).delete_pin(&pin_id).await.unwrap_err();
    assert_eq!(err.error_code(), "NOT_PIN_OWNER");

    app.sign_in(&owner_email).await?;
    PinService::new(&app.ctx).delete_pin(&pin_id).await?;

    let err = PinService::new(&app.ctx).get_pin(&pin_id).await.unwrap_err();
    assert_eq!(err.error_code(), "UNKNOWN_PIN");
    Ok(())
}

#[tokio::test]
async fn latest_feed_is_capped_and_labelled() -> Result<()> {
    let app = TestApp::start()?;
    app.sign_up(&unique_email("author")).await?;
    let pins = PinService::new(&app.ctx);
    for i in 0..7 {
        pins.create_pin(pin_request(&format!("Walk {i}"))).await?;
    }

    let latest = pins.latest_pins().await?;
    assert_eq!(latest.len(), 5);
    assert!(latest
        .windows(2)
        .all(|w| w[0].created_at >= w[1].created_at));
    assert!(latest.iter().all(|p| p.time_ago == "just now"));
    assert_eq!(pins.all_pins().await?.len(), 7);
    Ok(())
}

#[tokio::test]
async fn profile_overview_combines_both_progress_metrics() -> Result<()> {
    let app = TestApp::start()?;
    let email = unique_email("mira");
    app.sign_up(&email).await?;
    let pins = PinService::new(&app.ctx);
    let mut ids = Vec::new();
    for i in 0..3 {
        let created = pins.create_pin(pin_request(&format!("Spot {i}"))).await?;
        ids.push(DocumentId::new(created.pin.id));
    }
    SavedPinService::new(&app.ctx).save_pin(&ids[0]).await?;

    let profiles = ProfileService::new(&app.ctx);
    profiles.update_profile(profile_request("  Mira  ")).await?;
    let overview = profiles.overview().await?;

    assert_eq!(overview.profile.username, "Mira");
    assert_eq!(overview.profile.emoji, "🗺️");
    assert_eq!(overview.profile.email.as_deref(), Some(email.as_str()));
    assert_eq!(overview.pins_created, 3);
    assert_eq!(overview.pins_saved, 1);
    assert_eq!(overview.level.xp, 8);
    assert_eq!(overview.level.title, "Newbie");
    assert_eq!(overview.creator_tier.level, 2);
    assert_eq!(overview.creator_tier.title, "⭐ Pro Pinner");
    assert_eq!(
        overview.achievements,
        vec!["lvl 1: 🌱 Noobie Explorer", "lvl 2: ⭐ Pro Pinner"]
    );
    Ok(())
}

#[tokio::test]
async fn invalid_avatar_is_rejected() -> Result<()> {
    let app = TestApp::start()?;
    app.sign_up(&unique_email("emoji")).await?;

    let err = ProfileService::new(&app.ctx)
        .update_profile(UpdateProfileRequest::new("Kai", "🦋"))
        .await
        .unwrap_err();

    assert_eq!(err.error_code(), "INVALID_AVATAR");
    Ok(())
}
