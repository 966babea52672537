//! Recency Index Module
//!
//! Orders cache keys by their last-touched tick for eviction.

use std::collections::BTreeMap;

// == Recency Index ==
/// Tracks keys by recency stamp for least-recently-touched eviction.
///
/// Keys are stored in a BTreeMap keyed by tick where:
/// - First = Least recently touched
/// - Last = Most recently touched
///
/// Ticks come from a strictly increasing clock, so each tick maps to
/// exactly one key and the oldest entry is always unambiguous.
#[derive(Debug, Default)]
pub struct RecencyIndex {
    /// Keys ordered by the tick they were last touched at
    order: BTreeMap<u64, String>,
}

impl RecencyIndex {
    // == Constructor ==
    /// Creates a new empty recency index.
    pub fn new() -> Self {
        Self {
            order: BTreeMap::new(),
        }
    }

    // == Record ==
    /// Records that `key` was touched at `tick`.
    pub fn record(&mut self, tick: u64, key: &str) {
        self.order.insert(tick, key.to_string());
    }

    // == Forget ==
    /// Drops the stamp at `tick`, returning the key it belonged to.
    pub fn forget(&mut self, tick: u64) -> Option<String> {
        self.order.remove(&tick)
    }

    // == Evict Oldest ==
    /// Returns and removes the least recently touched key.
    ///
    /// Returns None if the index is empty.
    pub fn evict_oldest(&mut self) -> Option<String> {
        self.order.pop_first().map(|(_, key)| key)
    }

    // == Peek Oldest ==
    /// Returns the least recently touched key without removing it.
    #[allow(dead_code)]
    pub fn peek_oldest(&self) -> Option<&String> {
        self.order.first_key_value().map(|(_, key)| key)
    }

    // == Clear ==
    pub fn clear(&mut self) {
        self.order.clear();
    }

    // == Length ==
    /// Returns the number of tracked keys.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    // == Is Empty ==
    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_new() {
        let index = RecencyIndex::new();
        assert!(index.is_empty());
        assert_eq!(index.len(), 0);
    }

    #[test]
    fn test_index_oldest_is_lowest_tick() {
        let mut index = RecencyIndex::new();

        index.record(5, "c");
        index.record(1, "a");
        index.record(3, "b");

        assert_eq!(index.len(), 3);
        assert_eq!(index.peek_oldest(), Some(&"a".to_string()));
    }

    #[test]
    fn test_index_retouch_moves_key() {
        let mut index = RecencyIndex::new();

        index.record(0, "01d");
        index.record(1, "02d");
        index.record(2, "03d");

        // Touch 01d again at a later tick
        assert_eq!(index.forget(0), Some("01d".to_string()));
        index.record(3, "01d");

        assert_eq!(index.len(), 3);
        assert_eq!(index.peek_oldest(), Some(&"02d".to_string()));
    }

    #[test]
    fn test_index_evict_in_tick_order() {
        let mut index = RecencyIndex::new();

        index.record(0, "a");
        index.record(1, "b");
        index.record(2, "c");

        assert_eq!(index.evict_oldest(), Some("a".to_string()));
        assert_eq!(index.evict_oldest(), Some("b".to_string()));
        assert_eq!(index.evict_oldest(), Some("c".to_string()));
        assert_eq!(index.evict_oldest(), None);
    }

    #[test]
    fn test_index_forget_unknown_tick() {
        let mut index = RecencyIndex::new();
        index.record(0, "a");

        assert_eq!(index.forget(42), None);
        assert_eq!(index.len(), 1);
    }

    #[test]
    fn test_index_clear() {
        let mut index = RecencyIndex::new();
        index.record(0, "a");
        index.record(1, "b");

        index.clear();

        assert!(index.is_empty());
        assert_eq!(index.evict_oldest(), None);
    }
}
