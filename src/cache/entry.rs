//! Cache Entry Module
//!
//! Defines the structure for individual cached responses.

use std::time::Duration;

use serde_json::Value;
use tokio::time::Instant;

// == Cache Entry ==
/// A single cached response payload with its storage time.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// The raw JSON payload as returned by the server
    pub value: Value,
    /// When the payload was stored
    pub stored_at: Instant,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates a new cache entry timestamped with the current instant.
    pub fn new(value: Value) -> Self {
        Self {
            value,
            stored_at: Instant::now(),
        }
    }

    // == Is Fresh ==
    /// Checks whether the entry is still within the time-to-live.
    ///
    /// Boundary condition: an entry whose age equals the TTL is stale. An
    /// entry stored at `t` is fresh at `t + ttl - 1` and stale at `t + ttl`.
    pub fn is_fresh(&self, ttl: Duration) -> bool {
        self.stored_at.elapsed() < ttl
    }

    // == Age ==
    /// Returns how long ago the entry was stored.
    pub fn age(&self) -> Duration {
        self.stored_at.elapsed()
    }
}
