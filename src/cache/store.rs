//! Recency Cache Module
//!
//! Bounded key/value store that evicts the least recently touched entry.

use std::collections::HashMap;

use tracing::debug;

use crate::cache::{CacheEntry, CacheStats, RecencyClock, RecencyIndex};

// == Recency Cache ==
/// In-memory cache holding at most `capacity` values keyed by string.
///
/// Both [`get`](Self::get) hits and [`set`](Self::set) refresh an entry's
/// recency. When an insertion pushes the entry count above capacity, the
/// single entry with the oldest recency stamp is evicted. Recency stamps
/// come from a strictly increasing logical clock, so there are never two
/// candidates for eviction.
#[derive(Debug)]
pub struct RecencyCache<V> {
    /// Key-value storage
    entries: HashMap<String, CacheEntry<V>>,
    /// Keys ordered by last touch
    recency: RecencyIndex,
    /// Source of recency stamps
    clock: RecencyClock,
    /// Lookup and eviction counters
    stats: CacheStats,
    /// Maximum number of entries, always at least 1
    capacity: usize,
}

impl<V> RecencyCache<V> {
    // == Constructor ==
    /// Creates an empty cache. A capacity of 0 is treated as 1.
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: HashMap::with_capacity(capacity),
            recency: RecencyIndex::new(),
            clock: RecencyClock::new(),
            stats: CacheStats::with_capacity(capacity),
            capacity,
        }
    }

    // == Get ==
    /// Looks up `key`, promoting it to most recently touched on a hit.
    ///
    /// A miss leaves every entry and its recency untouched.
    pub fn get(&mut self, key: &str) -> Option<&V> {
        let Some(entry) = self.entries.get_mut(key) else {
            self.stats.record_miss();
            return None;
        };

        let previous = entry.touch(self.clock.tick());
        self.recency.forget(previous);
        self.recency.record(entry.last_touched, key);
        self.stats.record_hit();

        Some(&entry.value)
    }

    // == Set ==
    /// Stores `value` under `key` as the most recently touched entry.
    ///
    /// An existing value for `key` is replaced and its recency reset. If the
    /// cache then holds more than `capacity` entries, the least recently
    /// touched one is evicted.
    pub fn set(&mut self, key: impl Into<String>, value: V) {
        let key = key.into();
        let tick = self.clock.tick();

        if let Some(previous) = self.entries.insert(key.clone(), CacheEntry::new(value, tick)) {
            self.recency.forget(previous.last_touched);
        }
        self.recency.record(tick, &key);

        self.evict_if_needed();
    }

    // == Evict ==
    /// Drops the oldest entry when over capacity. At most one entry goes.
    fn evict_if_needed(&mut self) -> Option<String> {
        if self.entries.len() <= self.capacity {
            return None;
        }

        let evicted = self.recency.evict_oldest()?;
        self.entries.remove(&evicted);
        self.stats.record_eviction();
        debug!(key = %evicted, "Evicted least recently touched entry");

        Some(evicted)
    }

    // == Clear ==
    /// Removes every entry. Capacity and counters are kept.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.recency.clear();
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            entries: self.entries.len(),
            ..self.stats.clone()
        }
    }

    // == Length ==
    /// Returns the current number of entries in the cache.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // == Is Empty ==
    /// Returns true if the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    // == Capacity ==
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cache_new() {
        let cache: RecencyCache<i32> = RecencyCache::new(3);
        assert_eq!(cache.capacity(), 3);
        assert_eq!(cache.len(), 0);
        assert!(cache.is_empty());
    }

    #[test]
    fn test_cache_zero_capacity_clamps_to_one() {
        let mut cache = RecencyCache::new(0);
        assert_eq!(cache.capacity(), 1);

        cache.set("a", 1.0);
        assert_eq!(cache.len(), 1);

        cache.set("b", 1.1);
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.get("a"), None);
        assert_eq!(cache.get("b"), Some(&1.1));

        cache.clear();
        assert_eq!(cache.len(), 0);
        assert_eq!(cache.capacity(), 1);
    }

    #[test]
    fn test_cache_set_and_get() {
        let mut cache = RecencyCache::new(10);

        cache.set("A", "a".to_string());
        assert_eq!(cache.get("A"), Some(&"a".to_string()));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_cache_get_missing() {
        let mut cache: RecencyCache<i32> = RecencyCache::new(10);
        assert_eq!(cache.get("missing"), None);
    }

    #[test]
    fn test_cache_overwrite() {
        let mut cache = RecencyCache::new(10);

        cache.set("A", "a".to_string());
        cache.set("B", "b".to_string());
        cache.set("B", "A".to_string());

        assert_eq!(cache.len(), 2);
        assert_eq!(cache.get("B"), Some(&"A".to_string()));
    }

    #[test]
    fn test_cache_evicts_oldest_on_overflow() {
        let mut cache = RecencyCache::new(3);

        cache.set("a", 1);
        cache.set("b", 2);
        cache.set("c", 3);
        assert_eq!(cache.len(), 3);

        cache.set("d", 4);

        assert_eq!(cache.len(), 3);
        assert_eq!(cache.get("a"), None);
        assert_eq!(cache.get("b"), Some(&2));
        assert_eq!(cache.get("c"), Some(&3));
        assert_eq!(cache.get("d"), Some(&4));
    }

    #[test]
    fn test_cache_get_promotes_recency() {
        let mut cache = RecencyCache::new(3);

        cache.set("a", 1);
        cache.set("b", 2);
        cache.set("c", 3);

        // a is now the most recently touched
        cache.get("a");

        cache.set("d", 4);

        assert_eq!(cache.get("a"), Some(&1));
        assert_eq!(cache.get("b"), None);
    }

    #[test]
    fn test_cache_overwrite_promotes_recency() {
        let mut cache = RecencyCache::new(2);

        cache.set("a", 1);
        cache.set("b", 2);
        cache.set("a", 10);

        cache.set("c", 3);

        assert_eq!(cache.get("b"), None);
        assert_eq!(cache.get("a"), Some(&10));
        assert_eq!(cache.get("c"), Some(&3));
    }

    #[test]
    fn test_cache_reference_walkthrough() {
        let mut cache = RecencyCache::new(3);

        cache.set("a", 1);
        assert_eq!(cache.get("a"), Some(&1));
        cache.set("b", 2);
        assert_eq!(cache.get("b"), Some(&2));
        cache.set("c", 3);
        assert_eq!(cache.get("c"), Some(&3));
        assert_eq!(cache.len(), 3);

        cache.set("d", 4);
        assert_eq!(cache.len(), 3);
        assert_eq!(cache.get("d"), Some(&4));

        cache.set("e", 5);
        assert_eq!(cache.len(), 3);
        assert_eq!(cache.get("e"), Some(&5));

        assert_eq!(cache.get("d"), Some(&4));
        assert_eq!(cache.get("c"), Some(&3));
        assert_eq!(cache.get("b"), None);
        assert_eq!(cache.get("a"), None);

        cache.set("f", 6);
        assert_eq!(cache.len(), 3);
        assert_eq!(cache.get("d"), Some(&4));
        assert_eq!(cache.get("c"), Some(&3));
        assert_eq!(cache.get("f"), Some(&6));

        cache.clear();
        assert_eq!(cache.len(), 0);
        assert_eq!(cache.capacity(), 3);
    }

    #[test]
    fn test_cache_clear_forgets_entries() {
        let mut cache = RecencyCache::new(3);
        cache.set("a", 1);
        cache.set("b", 2);

        cache.clear();

        assert!(cache.is_empty());
        assert_eq!(cache.get("a"), None);
        assert_eq!(cache.get("b"), None);

        // Refill to capacity without stale recency causing early eviction
        cache.set("x", 7);
        cache.set("y", 8);
        cache.set("z", 9);
        assert_eq!(cache.len(), 3);
        assert_eq!(cache.get("x"), Some(&7));
    }

    #[test]
    fn test_cache_stats() {
        let mut cache = RecencyCache::new(1);

        cache.set("a", 1);
        cache.get("a"); // hit
        cache.get("b"); // miss
        cache.set("b", 2); // evicts a

        let stats = cache.stats();
        assert_eq!(stats.hits, 1);
        assert_eq!(stats.misses, 1);
        assert_eq!(stats.evictions, 1);
        assert_eq!(stats.entries, 1);
        assert_eq!(stats.capacity, 1);
    }

    #[test]
    fn test_cache_eviction_is_single() {
        let mut cache = RecencyCache::new(2);

        cache.set("a", 1);
        cache.set("b", 2);
        cache.evict_if_needed();
        assert_eq!(cache.len(), 2);

        cache.set("c", 3);
        assert_eq!(cache.len(), 2);
        assert_eq!(cache.stats().evictions, 1);
    }
}
