//! Shared Cache Module
//!
//! Thread-safe handle around a [`RecencyCache`] for concurrent callers.

use std::sync::Arc;

use tokio::sync::Mutex;

use crate::cache::{CacheStats, RecencyCache};

// == Shared Cache ==
/// Cloneable, lock-guarded handle to a single [`RecencyCache`].
///
/// Every method holds the lock for exactly one cache operation, so the
/// recency bump on `get` and the insert-then-evict on `set` are atomic to
/// other callers. Values are cloned out, so no lock outlives a call; wrap
/// large payloads in `Arc` to keep that cheap.
#[derive(Debug)]
pub struct SharedCache<V> {
    inner: Arc<Mutex<RecencyCache<V>>>,
    capacity: usize,
}

impl<V> Clone for SharedCache<V> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
            capacity: self.capacity,
        }
    }
}

impl<V: Clone> SharedCache<V> {
    /// Creates a shared cache. A capacity of 0 is treated as 1.
    pub fn new(capacity: usize) -> Self {
        let cache = RecencyCache::new(capacity);
        Self {
            capacity: cache.capacity(),
            inner: Arc::new(Mutex::new(cache)),
        }
    }

    /// Looks up `key`, promoting it on a hit.
    pub async fn get(&self, key: &str) -> Option<V> {
        self.inner.lock().await.get(key).cloned()
    }

    /// Stores `value` under `key`, evicting the oldest entry if needed.
    pub async fn set(&self, key: impl Into<String>, value: V) {
        self.inner.lock().await.set(key, value);
    }

    /// Removes every entry.
    pub async fn clear(&self) {
        self.inner.lock().await.clear();
    }

    pub async fn len(&self) -> usize {
        self.inner.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.inner.lock().await.is_empty()
    }

    pub async fn stats(&self) -> CacheStats {
        self.inner.lock().await.stats()
    }

    /// Capacity is fixed at construction, so no lock is taken.
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
