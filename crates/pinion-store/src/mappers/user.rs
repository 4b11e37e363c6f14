//! UserProfile entity <-> document mapper

use pinion_core::entities::{ProfileUpdate, UserProfile};
use pinion_core::traits::{Document, Fields, RepoResult};
use pinion_core::value_objects::UserId;
use serde_json::Value;

use crate::models::UserDocument;

impl From<&UserProfile> for UserDocument {
    fn from(profile: &UserProfile) -> Self {
        Self {
            username: profile.username.clone(),
            emoji: profile.emoji.clone(),
            email: profile.email.clone(),
            xp: profile.xp,
        }
    }
}

/// Decode a stored profile for `user_id`
pub fn profile_from_document(user_id: &UserId, doc: &Document) -> RepoResult<UserProfile> {
    let model: UserDocument = doc.decode()?;
    Ok(UserProfile {
        id: user_id.clone(),
        username: model.username,
        emoji: model.emoji,
        email: model.email,
        xp: model.xp,
    })
}

/// Fields written by a profile edit; absent values are left untouched
pub fn profile_update_fields(update: &ProfileUpdate) -> Fields {
    let mut fields = Fields::new();
    let entries = [
        ("username", &update.username),
        ("emoji", &update.emoji),
        ("email", &update.email),
    ];
    for (name, value) in entries {
        if let Some(value) = value {
            fields.insert(name.to_string(), Value::String(value.clone()));
        }
    }
    fields
}

/// Fields written when XP changes
pub fn xp_fields(xp: u64) -> Fields {
    let mut fields = Fields::new();
    fields.insert("xp".to_string(), Value::from(xp));
    fields
}
