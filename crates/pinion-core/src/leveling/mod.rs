//! Progress metrics
//!
//! Two independent schemes live here and are intentionally kept apart:
//!
//! - [`LevelTable`] maps accumulated XP (earned by creating and saving pins) to a title.
//! - [`CreatorTier`] maps the number of pins a user has created to a tier badge.
//!
//! They measure different things and can disagree (a user who only saves pins
//! climbs XP levels while staying a "New User" creator), so neither is derived
//! from the other.

mod tier;
mod xp;

pub use tier::{achievements, CreatorTier, COLLECTOR_ACHIEVEMENT, COLLECTOR_MIN_SAVED};
pub use xp::{reward_for_tag, LevelInfo, LevelTable, LevelThreshold, XpAction};
