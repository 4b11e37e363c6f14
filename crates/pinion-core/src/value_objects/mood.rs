//! Mood attached to a pin
//!
//! Stored as an `{emoji, text}` record so other clients of the same store can
//! render it without knowing this enum.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DomainError;

/// Fixed set of moods a memory can be tagged with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "MoodRecord", try_from = "MoodRecord")]
pub enum Mood {
    Happy,
    Sad,
    Celebratory,
    Nostalgic,
    Peaceful,
    Thoughtful,
}

impl Mood {
    /// All moods in picker order
    pub const ALL: [Mood; 6] = [
        Mood::Happy,
        Mood::Sad,
        Mood::Celebratory,
        Mood::Nostalgic,
        Mood::Peaceful,
        Mood::Thoughtful,
    ];

    pub fn emoji(self) -> &'static str {
        match self {
            Self::Happy => "😊",
            Self::Sad => "😢",
            Self::Celebratory => "🎉",
            Self::Nostalgic => "🌧️",
            Self::Peaceful => "😌",
            Self::Thoughtful => "🤔",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Happy => "Happy",
            Self::Sad => "Sad",
            Self::Celebratory => "Celebratory",
            Self::Nostalgic => "Nostalgic",
            Self::Peaceful => "Peaceful",
            Self::Thoughtful => "Thoughtful",
        }
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.emoji(), self.label())
    }
}

impl FromStr for Mood {
    type Err = DomainError;

    /// Parse from the label, case-insensitively
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|mood| mood.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| DomainError::UnknownMood(s.to_string()))
    }
}

/// Stored shape of a mood
#[derive(Debug, Clone, Serialize, Deserialize)]
struct MoodRecord {
    emoji: String,
    text: String,
}

impl From<Mood> for MoodRecord {
    fn from(mood: Mood) -> Self {
        Self {
            emoji: mood.emoji().to_string(),
            text: mood.label().to_string(),
        }
    }
}

impl TryFrom<MoodRecord> for Mood {
    type Error = DomainError;

    fn try_from(record: MoodRecord) -> Result<Self, Self::Error> {
        record.text.parse()
    }
}
