//! Cache Module
//!
//! Provides a bounded in-memory cache with recency-based eviction.

mod entry;
mod recency;
mod shared;
mod stats;
mod store;


// Re-export public types
pub use entry::{CacheEntry, RecencyClock};
pub use recency::RecencyIndex;
pub use shared::SharedCache;
pub use stats::CacheStats;
pub use store::RecencyCache;
