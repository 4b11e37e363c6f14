//! Integration test utilities for Pinion
//!
//! This crate provides helpers for running end-to-end scenarios against the
//! services wired over the in-memory ports.

pub mod fixtures;
pub mod helpers;

pub use fixtures::*;
pub use helpers::*;
