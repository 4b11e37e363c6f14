//! Document models - serde records matching the stored field names

mod pin;
mod saved_pin;
mod timestamp;
mod user;

pub use pin::PinDocument;
pub use saved_pin::SavedPinDocument;
pub use timestamp::format_timestamp;
pub use user::UserDocument;
