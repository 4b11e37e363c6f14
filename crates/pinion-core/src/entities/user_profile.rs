//! UserProfile entity - display data and XP for an account

use crate::value_objects::{UserId, DEFAULT_AVATAR_EMOJI};

/// Profile stored under `users/{uid}`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserProfile {
    pub id: UserId,
    pub username: String,
    pub emoji: String,
    pub email: Option<String>,
    pub xp: u64,
}

impl UserProfile {
    /// Profile written at sign-up: username from the email's local part, default avatar, zero XP
    pub fn for_new_account(id: UserId, email: &str) -> Self {
        Self {
            id,
            username: username_from_email(email),
            emoji: DEFAULT_AVATAR_EMOJI.to_string(),
            email: Some(email.to_string()),
            xp: 0,
        }
    }
}

/// Partial profile write from the profile editor
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileUpdate {
    pub username: Option<String>,
    pub emoji: Option<String>,
    pub email: Option<String>,
}

impl ProfileUpdate {
    pub fn is_empty(&self) -> bool {
        self.username.is_none() && self.emoji.is_none() && self.email.is_none()
    }
}

/// Part of an email address before the `@`
pub fn username_from_email(email: &str) -> String {
    email.split('@').next().unwrap_or_default().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_account_defaults() {
        let profile = UserProfile::for_new_account(UserId::new("u1"), "mira@example.com");
        assert_eq!(profile.username, "mira");
        assert_eq!(profile.emoji, "🌟");
        assert_eq!(profile.email.as_deref(), Some("mira@example.com"));
        assert_eq!(profile.xp, 0);
    }

    #[test]
    fn test_username_from_email() {
        assert_eq!(username_from_email("a.b@c.d"), "a.b");
        assert_eq!(username_from_email("no-at-sign"), "no-at-sign");
        assert_eq!(username_from_email(""), "");
    }

    #[test]
    fn test_empty_update() {
        assert!(ProfileUpdate::default().is_empty());
        let update = ProfileUpdate {
            emoji: Some("🚀".to_string()),
            ..ProfileUpdate::default()
        };
        assert!(!update.is_empty());
    }
}
