//! XP levels and rewards

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use crate::error::DomainError;

/// One row of the level table: the minimum XP for a title
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LevelThreshold {
    pub xp: u64,
    pub title: String,
}

impl LevelThreshold {
    pub fn new(xp: u64, title: impl Into<String>) -> Self {
        Self {
            xp,
            title: title.into(),
        }
    }
}

/// Ordered table of XP thresholds
///
/// Invariants: at least one row, the first row starts at 0, thresholds strictly
/// ascend. With those in place every XP value maps to exactly one row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelTable {
    tiers: Vec<LevelThreshold>,
}

impl LevelTable {
    /// Build a table, checking the ordering invariants
    pub fn new(tiers: Vec<LevelThreshold>) -> Result<Self, DomainError> {
        match tiers.first() {
            None => {
                return Err(DomainError::InvalidLevelTable(
                    "table must have at least one level".to_string(),
                ))
            }
            Some(first) if first.xp != 0 => {
                return Err(DomainError::InvalidLevelTable(format!(
                    "first level must start at 0 XP, got {}",
                    first.xp
                )))
            }
            Some(_) => {}
        }

        if let Some(pair) = tiers.windows(2).find(|pair| pair[0].xp >= pair[1].xp) {
            return Err(DomainError::InvalidLevelTable(format!(
                "thresholds must ascend: {} is not below {}",
                pair[0].xp, pair[1].xp
            )));
        }

        Ok(Self { tiers })
    }

    pub fn tiers(&self) -> &[LevelThreshold] {
        &self.tiers
    }

    /// Index of the highest row whose threshold is at most `xp`
    pub fn level_index(&self, xp: u64) -> usize {
        self.tiers.iter().rposition(|tier| xp >= tier.xp).unwrap_or(0)
    }

    /// Row with the largest threshold not above `xp`
    pub fn level_for(&self, xp: u64) -> &LevelThreshold {
        &self.tiers[self.level_index(xp)]
    }

    /// Threshold of the next row, or the top threshold when already at the top
    pub fn next_threshold(&self, xp: u64) -> u64 {
        let index = self.level_index(xp);
        self.tiers
            .get(index + 1)
            .or_else(|| self.tiers.last())
            .map_or(0, |tier| tier.xp)
    }

    /// Full level summary for `xp`
    pub fn level_info(&self, xp: u64) -> LevelInfo {
        let level = self.level_index(xp);
        LevelInfo {
            xp,
            level,
            title: self.tiers[level].title.clone(),
            next_level_xp: self.next_threshold(xp),
        }
    }
}

impl Default for LevelTable {
    fn default() -> Self {
        Self {
            tiers: vec![
                LevelThreshold::new(0, "Newbie"),
                LevelThreshold::new(50, "Story Seeker"),
                LevelThreshold::new(150, "Map Scribe"),
                LevelThreshold::new(300, "Vibe Curator"),
            ],
        }
    }
}

/// Computed level for an XP total
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LevelInfo {
    pub xp: u64,
    /// Zero-based row in the level table
    pub level: usize,
    pub title: String,
    pub next_level_xp: u64,
}

impl LevelInfo {
    /// Whether no higher level exists
    pub fn is_max_level(&self) -> bool {
        self.next_level_xp <= self.xp
    }
}

/// Actions that earn XP
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum XpAction {
    CreatePin,
    SavePin,
}

impl XpAction {
    /// Tag used when awarding by name
    pub fn tag(self) -> &'static str {
        match self {
            Self::CreatePin => "CREATE_PIN",
            Self::SavePin => "SAVE_PIN",
        }
    }

    /// XP granted for the action
    pub fn reward(self) -> u64 {
        match self {
            Self::CreatePin => 1,
            Self::SavePin => 5,
        }
    }
}

impl fmt::Display for XpAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for XpAction {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "CREATE_PIN" => Ok(Self::CreatePin),
            "SAVE_PIN" => Ok(Self::SavePin),
            other => Err(DomainError::ValidationError(format!(
                "unknown XP action: {other}"
            ))),
        }
    }
}

/// Reward for an action tag; unknown tags earn nothing
pub fn reward_for_tag(tag: &str) -> u64 {
    tag.parse::<XpAction>().map_or(0, XpAction::reward)
}
