//! Persistent Store Module
//!
//! Typed state synchronized with a durable string key-value store, with
//! best-effort change propagation between consumers of the same store.

mod backend;
mod persistent;

// Re-export public types
pub use backend::{FileStorage, MemoryStorage, StorageBackend, StorageEvent};
pub use persistent::PersistentState;
