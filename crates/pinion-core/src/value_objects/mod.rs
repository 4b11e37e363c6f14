//! Value objects - immutable types that represent domain concepts

mod avatar;
mod geo_point;
mod ids;
mod mood;
mod path;

pub use avatar::{is_valid_avatar, AVATAR_EMOJIS, DEFAULT_AVATAR_EMOJI};
pub use geo_point::GeoPoint;
pub use ids::{DocumentId, UserId};
pub use mood::Mood;
pub use path::{paths, CollectionPath, DocumentPath};
