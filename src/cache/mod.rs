//! Cache Module
//!
//! Provides a bounded in-memory object cache with LRU eviction and
//! refreshable TTL expiry.

mod entry;
mod lru;
mod stats;
mod store;


// Re-export public types
pub use entry::CacheEntry;
pub use lru::LruTracker;
pub use stats::CacheStats;
pub use store::BoundedExpiringCache;

// == Public Constants ==
/// Default number of objects a cache holds
pub const DEFAULT_CAPACITY: usize = 32;

/// Default seconds an object stays valid without a refresh
pub const DEFAULT_TTL_SECS: u64 = 180;

// == Identifiable ==
/// A value that can live in a [`BoundedExpiringCache`].
///
/// The identifier must stay the same for the lifetime of the value. Two values
/// with the same id are treated as the same logical object.
pub trait Identifiable {
    /// The caller-defined key of this value.
    fn id(&self) -> &str;
}
