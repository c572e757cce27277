//! Cache Store Module
//!
//! Main cache engine combining HashMap storage with LRU tracking and TTL
//! expiration, guarded by a single mutex so it can be shared across threads.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::{Duration, Instant};

use tracing::{debug, warn};

use crate::cache::{
    CacheEntry, CacheStats, Identifiable, LruTracker, DEFAULT_CAPACITY, DEFAULT_TTL_SECS,
};
use crate::error::{CacheError, Result};

// == Inner State ==
/// Everything the lock protects.
#[derive(Debug)]
struct Inner<V> {
    entries: HashMap<String, CacheEntry<V>>,
    lru: LruTracker,
    stats: CacheStats,
}

impl<V> Inner<V> {
    fn remove(&mut self, id: &str) -> Option<CacheEntry<V>> {
        self.lru.remove(id);
        self.entries.remove(id)
    }

    /// Drops the entry for `id` if its deadline has passed.
    fn reclaim_if_expired(&mut self, id: &str, now: Instant) {
        let expired = self
            .entries
            .get(id)
            .is_some_and(|entry| entry.is_expired_at(now));

        if expired {
            self.remove(id);
            self.stats.record_expirations(1);
            debug!("Reclaimed expired entry '{}'", id);
        }
    }
}

// == Bounded Expiring Cache ==
/// A bounded object cache with LRU eviction and refreshable TTL expiry.
///
/// Holds at most `capacity` objects. When full, `put` evicts the entry with the
/// oldest last use, whether or not it has expired. An entry that has not been
/// put or touched within `ttl` is treated as absent by `get` and `touch`.
///
/// All operations take `&self`; share the cache as `Arc<BoundedExpiringCache<V>>`.
#[derive(Debug)]
pub struct BoundedExpiringCache<V> {
    inner: Mutex<Inner<V>>,
    capacity: usize,
    ttl: Duration,
}

impl<V: Identifiable> BoundedExpiringCache<V> {
    // == Constructor ==
    /// Creates a cache holding at most `capacity` objects that expire `ttl`
    /// after their last refresh.
    ///
    /// # Errors
    /// `CacheError::InvalidConfig` if `capacity` is 0 or `ttl` is zero.
    pub fn new(capacity: usize, ttl: Duration) -> Result<Self> {
        if capacity == 0 {
            return Err(CacheError::InvalidConfig(
                "capacity must be at least 1".to_string(),
            ));
        }
        if ttl.is_zero() {
            return Err(CacheError::InvalidConfig(
                "ttl must be greater than zero".to_string(),
            ));
        }
        Ok(Self::with_limits(capacity, ttl))
    }

    fn with_limits(capacity: usize, ttl: Duration) -> Self {
        Self {
            inner: Mutex::new(Inner {
                entries: HashMap::with_capacity(capacity),
                lru: LruTracker::new(),
                stats: CacheStats::new(),
            }),
            capacity,
            ttl,
        }
    }

    fn lock(&self) -> MutexGuard<'_, Inner<V>> {
        // Every mutation completes before anything that can panic, so the
        // state behind a poisoned lock is still consistent.
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    // == Put ==
    /// Adds `value` under `value.id()`, replacing any entry with the same id.
    ///
    /// If the cache is full, least recently used entries are evicted to make
    /// room. Replacing an existing id never evicts another entry.
    ///
    /// Returns `false`, leaving the cache untouched, if the id is empty.
    pub fn put(&self, value: V) -> bool {
        let id = value.id();
        if id.is_empty() {
            warn!("Rejected object with an empty id");
            return false;
        }
        let id = id.to_string();

        let mut guard = self.lock();
        let inner = &mut *guard;
        let now = Instant::now();

        inner.remove(&id);

        while inner.entries.len() >= self.capacity {
            let Some(evicted) = inner.lru.evict_oldest() else {
                break;
            };
            inner.entries.remove(&evicted);
            inner.stats.record_eviction();
            debug!("Evicted least recently used entry '{}'", evicted);
        }

        inner
            .entries
            .insert(id.clone(), CacheEntry::new(value, now, self.ttl));
        inner.lru.touch(&id);

        true
    }

    // == Get ==
    /// Retrieves the object stored under `id` and marks it as recently used.
    ///
    /// Reading does not extend the deadline; only `put` and `touch` do.
    ///
    /// # Errors
    /// `CacheError::NotFound` if no entry exists or it has expired.
    pub fn get(&self, id: &str) -> Result<Arc<V>> {
        let mut guard = self.lock();
        let inner = &mut *guard;
        let now = Instant::now();

        inner.reclaim_if_expired(id, now);

        let Some(entry) = inner.entries.get_mut(id) else {
            inner.stats.record_miss();
            return Err(CacheError::NotFound(id.to_string()));
        };

        entry.mark_used(now);
        let value = Arc::clone(&entry.value);
        inner.lru.touch(id);
        inner.stats.record_hit();

        Ok(value)
    }

    // == Touch ==
    /// Restarts the TTL of the object stored under `id`.
    ///
    /// Returns `false` with no effect if no live entry exists.
    pub fn touch(&self, id: &str) -> bool {
        let mut guard = self.lock();
        let inner = &mut *guard;
        let now = Instant::now();

        inner.reclaim_if_expired(id, now);

        match inner.entries.get_mut(id) {
            Some(entry) => {
                entry.refresh(now, self.ttl);
                inner.lru.touch(id);
                inner.stats.record_refresh();
                true
            }
            None => false,
        }
    }

    // == Contains ==
    /// Returns true if a live entry exists for `id`. Does not count as a use.
    pub fn contains(&self, id: &str) -> bool {
        let now = Instant::now();
        self.lock()
            .entries
            .get(id)
            .is_some_and(|entry| !entry.is_expired_at(now))
    }

    // == Purge Expired ==
    /// Removes all expired entries from the cache.
    ///
    /// Returns the number of entries removed.
    pub fn purge_expired(&self) -> usize {
        let mut guard = self.lock();
        let inner = &mut *guard;
        let now = Instant::now();

        let expired: Vec<String> = inner
            .entries
            .iter()
            .filter(|(_, entry)| entry.is_expired_at(now))
            .map(|(id, _)| id.clone())
            .collect();

        for id in &expired {
            inner.remove(id);
        }
        inner.stats.record_expirations(expired.len());

        expired.len()
    }

    // == Stats ==
    /// Returns a snapshot of the cache statistics.
    pub fn stats(&self) -> CacheStats {
        let inner = self.lock();
        let mut stats = inner.stats.clone();
        stats.set_total_entries(inner.entries.len());
        stats
    }

    // == Length ==
    /// Returns the number of entries held, including expired ones that have
    /// not been reclaimed yet.
    pub fn len(&self) -> usize {
        self.lock().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }
}

impl<V: Identifiable> Default for BoundedExpiringCache<V> {
    /// 32 objects, 180 second TTL.
    fn default() -> Self {
        Self::with_limits(DEFAULT_CAPACITY, Duration::from_secs(DEFAULT_TTL_SECS))
    }
}
