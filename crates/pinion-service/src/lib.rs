//! # pinion-service
//!
//! Application layer containing the use-case services, request validation and DTOs.

pub mod dto;
pub mod services;

pub use services::{
    AuthService, PinService, ProfileService, SavedPinService, ServiceContext,
    ServiceContextBuilder, ServiceError, ServiceResult, XpService,
};
