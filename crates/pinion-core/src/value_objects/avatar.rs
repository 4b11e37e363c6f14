//! Avatar emoji choices for user profiles

/// Avatar given to every new account
pub const DEFAULT_AVATAR_EMOJI: &str = "🌟";

/// Emoji a user can pick in the profile editor
pub const AVATAR_EMOJIS: [&str; 19] = [
    "😎", "🤖", "🦄", "🐸", "🍕", "🛸", "👾", "💩", "🪩", "🕺", "🔥", "🚀", "🎮", "🎧", "📚",
    "🧠", "💻", "🎯", "🗺️",
];

/// Whether `emoji` is an allowed avatar (the default or one of the picker options)
pub fn is_valid_avatar(emoji: &str) -> bool {
    emoji == DEFAULT_AVATAR_EMOJI || AVATAR_EMOJIS.contains(&emoji)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(is_valid_avatar(DEFAULT_AVATAR_EMOJI));
    }

    #[test]
    fn test_picker_options_are_valid() {
        for emoji in AVATAR_EMOJIS {
            assert!(is_valid_avatar(emoji), "{emoji} should be allowed");
        }
    }

    #[test]
    fn test_unknown_emoji_rejected() {
        assert!(!is_valid_avatar("🐙"));
        assert!(!is_valid_avatar(""));
        assert!(!is_valid_avatar("robot"));
    }
}
