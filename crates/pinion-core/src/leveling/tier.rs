//! Creator tiers based on how many pins a user has created

use serde::Serialize;
use std::fmt;

/// Saved-pin count that earns the collector badge
pub const COLLECTOR_MIN_SAVED: usize = 10;

/// Badge shown for [`COLLECTOR_MIN_SAVED`] or more saved pins
pub const COLLECTOR_ACHIEVEMENT: &str = "🔖 Collector";

/// Tier derived from a created-pin count
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum CreatorTier {
    NewUser,
    NoobieExplorer,
    ProPinner,
    GoatedCreator,
    Legend,
    MemoryMaster,
}

impl CreatorTier {
    /// Tiers from lowest to highest
    pub const ALL: [CreatorTier; 6] = [
        CreatorTier::NewUser,
        CreatorTier::NoobieExplorer,
        CreatorTier::ProPinner,
        CreatorTier::GoatedCreator,
        CreatorTier::Legend,
        CreatorTier::MemoryMaster,
    ];

    /// Tier for a number of created pins
    pub fn for_pin_count(count: usize) -> Self {
        if count >= 15 {
            Self::MemoryMaster
        } else if count >= 10 {
            Self::Legend
        } else if count >= 6 {
            Self::GoatedCreator
        } else if count >= 3 {
            Self::ProPinner
        } else if count >= 1 {
            Self::NoobieExplorer
        } else {
            Self::NewUser
        }
    }

    /// Numeric level, 0 through 5
    pub fn level(self) -> u8 {
        match self {
            Self::NewUser => 0,
            Self::NoobieExplorer => 1,
            Self::ProPinner => 2,
            Self::GoatedCreator => 3,
            Self::Legend => 4,
            Self::MemoryMaster => 5,
        }
    }

    /// Fewest created pins needed for this tier
    pub fn min_pins(self) -> usize {
        match self {
            Self::NewUser => 0,
            Self::NoobieExplorer => 1,
            Self::ProPinner => 3,
            Self::GoatedCreator => 6,
            Self::Legend => 10,
            Self::MemoryMaster => 15,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::NewUser => "🆕 New User",
            Self::NoobieExplorer => "🌱 Noobie Explorer",
            Self::ProPinner => "⭐ Pro Pinner",
            Self::GoatedCreator => "👑 Goated Creator",
            Self::Legend => "🔥 Legend",
            Self::MemoryMaster => "🌟 Memory Master",
        }
    }
}

impl fmt::Display for CreatorTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// Badges earned so far: one per reached creator tier, plus the collector badge
pub fn achievements(created_pins: usize, saved_pins: usize) -> Vec<String> {
    let mut earned: Vec<String> = CreatorTier::ALL
        .into_iter()
        .filter(|tier| tier.level() > 0 && created_pins >= tier.min_pins())
        .map(|tier| format!("lvl {}: {}", tier.level(), tier.title()))
        .collect();

    if saved_pins >= COLLECTOR_MIN_SAVED {
        earned.push(COLLECTOR_ACHIEVEMENT.to_string());
    }

    earned
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_boundaries() {
        let cases = [
            (0, CreatorTier::NewUser),
            (1, CreatorTier::NoobieExplorer),
            (2, CreatorTier::NoobieExplorer),
            (3, CreatorTier::ProPinner),
            (5, CreatorTier::ProPinner),
            (6, CreatorTier::GoatedCreator),
            (9, CreatorTier::GoatedCreator),
            (10, CreatorTier::Legend),
            (14, CreatorTier::Legend),
            (15, CreatorTier::MemoryMaster),
            (500, CreatorTier::MemoryMaster),
        ];
        for (count, expected) in cases {
            assert_eq!(CreatorTier::for_pin_count(count), expected, "count = {count}");
        }
    }

    #[test]
    fn test_min_pins_agrees_with_lookup() {
        for tier in CreatorTier::ALL {
            assert_eq!(CreatorTier::for_pin_count(tier.min_pins()), tier);
        }
    }

    #[test]
    fn test_levels_ascend() {
        let levels: Vec<u8> = CreatorTier::ALL.iter().map(|t| t.level()).collect();
        assert_eq!(levels, vec![0, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_achievements_none() {
        assert!(achievements(0, 9).is_empty());
    }

    #[test]
    fn test_achievements_accumulate() {
        assert_eq!(
            achievements(6, 0),
            vec![
                "lvl 1: 🌱 Noobie Explorer".to_string(),
                "lvl 2: ⭐ Pro Pinner".to_string(),
                "lvl 3: 👑 Goated Creator".to_string(),
            ]
        );
    }

    #[test]
    fn test_collector_badge() {
        let earned = achievements(0, 10);
        assert_eq!(earned, vec![COLLECTOR_ACHIEVEMENT.to_string()]);
        assert_eq!(achievements(15, 12).len(), 6);
    }
}
