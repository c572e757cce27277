//! Cache Entry Module
//!
//! Defines a single cached object together with its expiry deadline and
//! last-use timestamp.

use std::sync::Arc;
use std::time::{Duration, Instant};

// == Cache Entry ==
/// Represents a single cache entry with value and temporal metadata.
#[derive(Debug)]
pub struct CacheEntry<V> {
    /// The stored value, shared with readers
    pub value: Arc<V>,
    /// Deadline after which the entry is logically absent
    pub expires_at: Instant,
    /// Last successful put, get or touch
    pub last_used_at: Instant,
}

impl<V> CacheEntry<V> {
    // == Constructor ==
    /// Creates a new entry that expires `ttl` after `now`.
    pub fn new(value: V, now: Instant, ttl: Duration) -> Self {
        Self {
            value: Arc::new(value),
            expires_at: now + ttl,
            last_used_at: now,
        }
    }

    // == Is Expired ==
    /// Checks if the entry has expired at `now`.
    ///
    /// Boundary condition: the entry is expired once `now >= expires_at`, so a
    /// deadline that has been reached exactly is already stale.
    pub fn is_expired_at(&self, now: Instant) -> bool {
        now >= self.expires_at
    }

    // == Use ==
    /// Records a read at `now`. Does not move the deadline.
    pub fn mark_used(&mut self, now: Instant) {
        self.last_used_at = now;
    }

    // == Refresh ==
    /// Pushes the deadline to `now + ttl` and records the use.
    ///
    /// Both timestamps change together under the caller's lock.
    pub fn refresh(&mut self, now: Instant, ttl: Duration) {
        self.expires_at = now + ttl;
        self.last_used_at = now;
    }

    /// Time left before expiry, zero once expired.
    pub fn ttl_remaining(&self, now: Instant) -> Duration {
        self.expires_at.saturating_duration_since(now)
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_creation() {
        let now = Instant::now();
        let entry = CacheEntry::new("value", now, Duration::from_secs(60));

        assert_eq!(*entry.value, "value");
        assert_eq!(entry.last_used_at, now);
        assert_eq!(entry.expires_at, now + Duration::from_secs(60));
        assert!(!entry.is_expired_at(now));
    }

    #[test]
    fn test_expiration_boundary_condition() {
        let now = Instant::now();
        let ttl = Duration::from_millis(10);
        let entry = CacheEntry::new("value", now, ttl);

        assert!(!entry.is_expired_at(now + Duration::from_millis(9)));
        assert!(entry.is_expired_at(now + ttl), "Entry should be expired at boundary");
        assert!(entry.is_expired_at(now + Duration::from_millis(11)));
    }

    #[test]
    fn test_mark_used_keeps_deadline() {
        let now = Instant::now();
        let mut entry = CacheEntry::new("value", now, Duration::from_secs(1));
        let later = now + Duration::from_millis(500);

        entry.mark_used(later);

        assert_eq!(entry.last_used_at, later);
        assert_eq!(entry.expires_at, now + Duration::from_secs(1));
    }

    #[test]
    fn test_refresh_moves_deadline_and_use() {
        let now = Instant::now();
        let ttl = Duration::from_secs(1);
        let mut entry = CacheEntry::new("value", now, ttl);
        let later = now + Duration::from_millis(900);

        entry.refresh(later, ttl);

        assert_eq!(entry.last_used_at, later);
        assert_eq!(entry.expires_at, later + ttl);
        assert!(!entry.is_expired_at(now + ttl));
    }

    #[test]
    fn test_ttl_remaining() {
        let now = Instant::now();
        let entry = CacheEntry::new("value", now, Duration::from_secs(10));

        assert_eq!(entry.ttl_remaining(now), Duration::from_secs(10));
        assert_eq!(
            entry.ttl_remaining(now + Duration::from_secs(4)),
            Duration::from_secs(6)
        );
        assert_eq!(entry.ttl_remaining(now + Duration::from_secs(11)), Duration::ZERO);
    }
}
