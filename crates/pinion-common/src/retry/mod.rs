//! Retry with exponential backoff and random jitter
//!
//! Store writes go through [`RetryPolicy::execute`] so transient failures
//! are retried before they surface to the caller.

mod policy;

pub use policy::{retry, RetryPolicy};
