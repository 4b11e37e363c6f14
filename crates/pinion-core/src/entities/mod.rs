//! Domain entities

mod pin;
mod saved_pin;
mod user_profile;

pub use pin::{Pin, PinDraft, MAX_TITLE_LENGTH};
pub use saved_pin::SavedPin;
pub use user_profile::{username_from_email, ProfileUpdate, UserProfile};
