//! User profile document model

use pinion_core::value_objects::DEFAULT_AVATAR_EMOJI;
use serde::{Deserialize, Serialize};

/// Record stored at `users/{uid}`
///
/// Every field is optional on read: documents created lazily by an XP write
/// carry nothing but `xp`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserDocument {
    #[serde(default)]
    pub username: String,
    #[serde(default = "default_emoji")]
    pub emoji: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default)]
    pub xp: u64,
}

fn default_emoji() -> String {
    DEFAULT_AVATAR_EMOJI.to_string()
}
