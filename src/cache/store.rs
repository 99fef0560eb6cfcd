//! Response Cache Module
//!
//! Cache engine combining HashMap storage with LRU tracking and TTL staleness.
//! Each `ApiClient` owns exactly one instance; nothing here is global.

use std::collections::HashMap;
use std::time::Duration;

use serde_json::Value;

use crate::cache::{CacheEntry, CacheStats, LruTracker};

// == Response Cache ==
/// Bounded response cache with TTL staleness and LRU eviction.
///
/// Keys are request signatures (`"GET:<endpoint>"`); values are the raw JSON
/// payloads returned by the server. An entry older than the TTL is treated as
/// absent and removed on lookup.
#[derive(Debug)]
pub struct ResponseCache {
    /// Key-value storage
    entries: HashMap<String, CacheEntry>,
    /// LRU access tracker
    lru: LruTracker,
    /// Performance counters
    stats: CacheStats,
    /// Maximum number of entries allowed
    capacity: usize,
    /// Time-to-live applied to every entry
    ttl: Duration,
}

impl ResponseCache {
    // == Constructor ==
    /// Creates a new ResponseCache with the given capacity and TTL.
    ///
    /// A capacity of zero is coerced to one so insertion always succeeds.
    pub fn new(capacity: usize, ttl: Duration) -> Self {
        Self {
            entries: HashMap::new(),
            lru: LruTracker::new(),
            stats: CacheStats::new(),
            capacity: capacity.max(1),
            ttl,
        }
    }

    // == Lookup ==
    /// Returns the cached payload for `key` if present and fresh.
    ///
    /// A fresh entry is counted as a hit and touched in the LRU order. A
    /// stale entry is removed and counted as a miss, as is an absent key.
    pub fn lookup(&mut self, key: &str) -> Option<Value> {
        let fresh_value = match self.entries.get(key) {
            Some(entry) if entry.is_fresh(self.ttl) => Some(entry.value.clone()),
            Some(_) => None,
            None => {
                self.stats.record_miss();
                return None;
            }
        };

        match fresh_value {
            Some(value) => {
                self.stats.record_hit();
                self.lru.touch(key);
                Some(value)
            }
            None => {
                self.entries.remove(key);
                self.lru.remove(key);
                self.stats.record_miss();
                self.stats.set_entries(self.entries.len());
                None
            }
        }
    }

    // == Insert ==
    /// Stores a payload under `key`, timestamped now.
    ///
    /// An existing entry for the key is replaced and its clock reset. At
    /// capacity, stale entries are purged first; if the cache is still full,
    /// the least recently used entry is evicted.
    pub fn insert(&mut self, key: String, value: Value) {
        let is_overwrite = self.entries.contains_key(&key);

        if !is_overwrite && self.entries.len() >= self.capacity {
            self.purge_stale();
        }
        if !is_overwrite && self.entries.len() >= self.capacity {
            if let Some(evicted) = self.lru.evict_oldest() {
                self.entries.remove(&evicted);
                self.stats.record_eviction();
            }
        }

        self.entries.insert(key.clone(), CacheEntry::new(value));
        self.lru.touch(&key);
        self.stats.set_entries(self.entries.len());
    }

    // == Remove ==
    /// Removes a single entry. Returns whether the key was present.
    pub fn remove(&mut self, key: &str) -> bool {
        let removed = self.entries.remove(key).is_some();
        if removed {
            self.lru.remove(key);
            self.stats.set_entries(self.entries.len());
        }
        removed
    }

    // == Clear ==
    /// Removes all entries.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.lru.clear();
        self.stats.set_entries(0);
    }

    // == Purge Stale ==
    /// Removes every entry older than the TTL.
    ///
    /// Returns the number of entries removed.
    pub fn purge_stale(&mut self) -> usize {
        let stale_keys: Vec<String> = self
            .entries
            .iter()
            .filter(|(_, entry)| !entry.is_fresh(self.ttl))
            .map(|(key, _)| key.clone())
            .collect();

        let count = stale_keys.len();
        for key in stale_keys {
            self.entries.remove(&key);
            self.lru.remove(&key);
        }
        self.stats.set_entries(self.entries.len());
        count
    }

    // == Stats ==
    /// Returns a snapshot of the current counters.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_entries(self.entries.len());
        stats
    }

    // == Length ==
    /// Returns the current number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // == Is Empty ==
    /// Returns true if the cache holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
