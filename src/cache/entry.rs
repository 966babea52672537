//! Cache Entry Module
//!
//! Defines the structure for individual cache entries and the logical clock
//! that stamps them with recency.

// == Cache Entry ==
/// Represents a single cache entry with its value and recency stamp.
#[derive(Debug, Clone)]
pub struct CacheEntry<V> {
    /// The stored value
    pub value: V,
    /// Tick of the last lookup or insertion that touched this entry
    pub last_touched: u64,
}

impl<V> CacheEntry<V> {
    // == Constructor ==
    /// Creates a new cache entry touched at `tick`.
    pub fn new(value: V, tick: u64) -> Self {
        Self {
            value,
            last_touched: tick,
        }
    }

    // == Touch ==
    /// Moves the entry's recency stamp forward to `tick`.
    ///
    /// Returns the previous stamp so the caller can unlink it from the
    /// recency index.
    pub fn touch(&mut self, tick: u64) -> u64 {
        std::mem::replace(&mut self.last_touched, tick)
    }
}

// == Recency Clock ==
/// Strictly increasing logical clock.
///
/// Every call to [`RecencyClock::tick`] returns a value greater than all
/// previous ones, so two sequential cache operations can never share a
/// timestamp, no matter how quickly they run.
#[derive(Debug, Default, Clone)]
pub struct RecencyClock {
    next: u64,
}

impl RecencyClock {
    pub fn new() -> Self {
        Self::default()
    }

    // == Tick ==
    /// Issues the next timestamp.
    pub fn tick(&mut self) -> u64 {
        let now = self.next;
        self.next += 1;
        now
    }
}
