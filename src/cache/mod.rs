//! Response Cache Module
//!
//! Bounded in-memory caching of HTTP response payloads with TTL staleness
//! and LRU eviction. Instances are owned by an `ApiClient`, never shared
//! globally.

mod entry;
mod lru;
mod stats;
mod store;


// Re-export public types
pub use entry::CacheEntry;
pub use lru::LruTracker;
pub use stats::CacheStats;
pub use store::ResponseCache;
