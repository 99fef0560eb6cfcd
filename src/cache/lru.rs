//! LRU Tracker Module
//!
//! Tracks key access order so the response cache can evict the least
//! recently used entry when it reaches capacity.

use std::collections::VecDeque;

// == LRU Tracker ==
/// Access-order tracker backing the cache's eviction policy.
///
/// Front = most recently used, back = least recently used. The cache is
/// bounded (hundreds of entries at most), so linear scans are acceptable.
#[derive(Debug, Default)]
pub struct LruTracker {
    order: VecDeque<String>,
}

impl LruTracker {
    // == Constructor ==
    /// Creates a new empty LRU tracker.
    pub fn new() -> Self {
        Self {
            order: VecDeque::new(),
        }
    }

    // == Touch ==
    /// Marks a key as most recently used, inserting it if new.
    pub fn touch(&mut self, key: &str) {
        self.remove(key);
        self.order.push_front(key.to_string());
    }

    // == Remove ==
    /// Removes a key from the tracker. Unknown keys are ignored.
    pub fn remove(&mut self, key: &str) {
        self.order.retain(|k| k != key);
    }

    // == Evict Oldest ==
    /// Returns and removes the least recently used key, if any.
    pub fn evict_oldest(&mut self) -> Option<String> {
        self.order.pop_back()
    }

    // == Clear ==
    /// Drops all tracked keys.
    pub fn clear(&mut self) {
        self.order.clear();
    }

    // == Length ==
    /// Returns the number of tracked keys.
    #[allow(dead_code)]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    // == Peek Oldest ==
    /// Returns the least recently used key without removing it.
    #[cfg(test)]
    pub fn peek_oldest(&self) -> Option<&String> {
        self.order.back()
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lru_touch_orders_by_insertion() {
        let mut lru = LruTracker::new();

        lru.touch("GET:/posts");
        lru.touch("GET:/posts/1");
        lru.touch("GET:/users");

        assert_eq!(lru.len(), 3);
        assert_eq!(lru.peek_oldest(), Some(&"GET:/posts".to_string()));
    }

    #[test]
    fn test_lru_touch_existing_moves_to_front() {
        let mut lru = LruTracker::new();

        lru.touch("a");
        lru.touch("b");
        lru.touch("c");
        lru.touch("a");

        assert_eq!(lru.len(), 3);
        assert_eq!(lru.peek_oldest(), Some(&"b".to_string()));
    }

    #[test]
    fn test_lru_evict_oldest() {
        let mut lru = LruTracker::new();

        lru.touch("a");
        lru.touch("b");

        assert_eq!(lru.evict_oldest(), Some("a".to_string()));
        assert_eq!(lru.evict_oldest(), Some("b".to_string()));
        assert_eq!(lru.evict_oldest(), None);
    }

    #[test]
    fn test_lru_remove_is_idempotent() {
        let mut lru = LruTracker::new();

        lru.touch("a");
        lru.remove("a");
        lru.remove("a");
        lru.remove("never-added");

        assert_eq!(lru.len(), 0);
    }

    #[test]
    fn test_lru_touch_same_key_keeps_single_entry() {
        let mut lru = LruTracker::new();

        lru.touch("a");
        lru.touch("a");
        lru.touch("a");

        assert_eq!(lru.len(), 1);
    }

    #[test]
    fn test_lru_clear() {
        let mut lru = LruTracker::new();

        lru.touch("a");
        lru.touch("b");
        lru.clear();

        assert_eq!(lru.len(), 0);
        assert_eq!(lru.evict_oldest(), None);
    }

    #[test]
    fn test_lru_eviction_order_after_touches() {
        let mut lru = LruTracker::new();

        lru.touch("a");
        lru.touch("b");
        lru.touch("c");
        // Re-access in a different order: a, then c, then b
        lru.touch("a");
        lru.touch("c");
        lru.touch("b");

        assert_eq!(lru.evict_oldest(), Some("a".to_string()));
        assert_eq!(lru.evict_oldest(), Some("c".to_string()));
        assert_eq!(lru.evict_oldest(), Some("b".to_string()));
    }
}
