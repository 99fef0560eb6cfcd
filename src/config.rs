//! Configuration Module
//!
//! Handles loading client configuration from environment variables.

use std::env;

/// HTTP client configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Response cache time-to-live in milliseconds
    pub cache_ttl_ms: u64,
    /// Maximum number of entries the response cache can hold
    pub cache_capacity: usize,
    /// Outbound request timeout in seconds
    pub timeout_secs: u64,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `CACHE_TTL_MS` - Cache TTL in milliseconds (default: 300000, i.e. 5 minutes)
    /// - `CACHE_CAPACITY` - Maximum cached responses (default: 1000)
    /// - `REQUEST_TIMEOUT_SECS` - Request timeout in seconds (default: 10)
    pub fn from_env() -> Self {
        Self {
            cache_ttl_ms: env::var("CACHE_TTL_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(300_000),
            cache_capacity: env::var("CACHE_CAPACITY")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(1000),
            timeout_secs: env::var("REQUEST_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(10),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cache_ttl_ms: 300_000,
            cache_capacity: 1000,
            timeout_secs: 10,
        }
    }
}
