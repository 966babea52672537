//! Cache Statistics Module
//!
//! Counts lookups and evictions for a recency cache.

use serde::Serialize;

// == Cache Stats ==
/// Point-in-time view of a cache's counters.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CacheStats {
    /// Lookups that found their key
    pub hits: u64,
    /// Lookups that did not find their key
    pub misses: u64,
    /// Entries dropped to keep the cache within capacity
    pub evictions: u64,
    /// Current number of entries
    pub entries: usize,
    /// Maximum number of entries
    pub capacity: usize,
}

impl CacheStats {
    // == Constructor ==
    /// Creates zeroed counters for a cache of the given capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            capacity,
            ..Self::default()
        }
    }

    // == Hit Rate ==
    /// Returns hits / (hits + misses), or 0.0 if no lookups have been made.
    pub fn hit_rate(&self) -> f64 {
        let lookups = self.hits + self.misses;
        if lookups == 0 {
            0.0
        } else {
            self.hits as f64 / lookups as f64
        }
    }

    pub fn record_hit(&mut self) {
        self.hits += 1;
    }

    pub fn record_miss(&mut self) {
        self.misses += 1;
    }

    pub fn record_eviction(&mut self) {
        self.evictions += 1;
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_with_capacity() {
        let stats = CacheStats::with_capacity(10);
        assert_eq!(stats.hits, 0);
        assert_eq!(stats.misses, 0);
        assert_eq!(stats.evictions, 0);
        assert_eq!(stats.entries, 0);
        assert_eq!(stats.capacity, 10);
    }

    #[test]
    fn test_hit_rate_no_lookups() {
        let stats = CacheStats::with_capacity(1);
        assert_eq!(stats.hit_rate(), 0.0);
    }

    #[test]
    fn test_hit_rate_mixed() {
        let mut stats = CacheStats::with_capacity(1);
        stats.record_hit();
        stats.record_hit();
        stats.record_hit();
        stats.record_miss();
        assert_eq!(stats.hit_rate(), 0.75);
    }

    #[test]
    fn test_record_eviction() {
        let mut stats = CacheStats::with_capacity(1);
        stats.record_eviction();
        stats.record_eviction();
        assert_eq!(stats.evictions, 2);
    }

    #[test]
    fn test_stats_serialize() {
        let mut stats = CacheStats::with_capacity(3);
        stats.record_miss();
        let json = serde_json::to_value(&stats).unwrap();
        assert_eq!(json["misses"], 1);
        assert_eq!(json["capacity"], 3);
    }
}
