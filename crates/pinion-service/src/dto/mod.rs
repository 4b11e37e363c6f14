//! Data transfer objects for service inputs and outputs
//!
//! This module provides:
//! - Request DTOs with validation for user input
//! - Response DTOs for what the screens render
//! - Mappers for converting domain entities to DTOs

pub mod mappers;
pub mod requests;
pub mod responses;

pub use mappers::format_time_ago;
pub use requests::{CreatePinRequest, SignInRequest, SignUpRequest, UpdateProfileRequest};
pub use responses::{
    CreatorTierResponse, PinCreated, PinResponse, ProfileOverview, ProfileResponse,
    SaveOutcome, SavedPinResponse, SessionResponse,
};
