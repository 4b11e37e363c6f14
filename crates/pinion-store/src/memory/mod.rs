//! In-process implementations of the external ports
//!
//! Both are safe to share across tasks and keep everything in memory.

mod document_store;
mod identity;

pub use document_store::MemoryDocumentStore;
pub use identity::MemoryIdentityProvider;
