//! In-memory TTL cache keyed by string.

use std::collections::HashMap;

use parking_lot::RwLock;
use tracing::{debug, trace};

use ttlcache_core::constants::MAX_INITIAL_CAPACITY;
use ttlcache_core::{CacheConfig, CacheEntry, CacheStats};

/// In-memory cache of timestamped values.
///
/// Thread-safe: reads take a shared lock, writes an exclusive one, and no
/// lock is held while a fetch function runs. Time is never sampled
/// internally; every write and freshness check uses the `now` passed in.
///
/// Entries are never removed. A stale entry stays in the map until a later
/// write replaces it or the cache is dropped.
///
/// # Concurrent refresh
///
/// The freshness check and the refresh write in [`get_with_ttl`] are two
/// separate critical sections. Concurrent callers that all see the same
/// key as stale will each run their own fetch and each store the result;
/// the last write wins.
///
/// [`get_with_ttl`]: TtlCache::get_with_ttl
pub struct TtlCache<T> {
    entries: RwLock<HashMap<String, CacheEntry<T>>>,
    config: CacheConfig,
}

impl<T: Clone> TtlCache<T> {
    /// Creates an empty cache with default configuration.
    pub fn new() -> Self {
        Self::with_config(CacheConfig::default())
    }

    /// Creates an empty cache with custom configuration.
    pub fn with_config(config: CacheConfig) -> Self {
        let capacity = config.initial_capacity.min(MAX_INITIAL_CAPACITY);
        Self {
            entries: RwLock::new(HashMap::with_capacity(capacity)),
            config,
        }
    }

    /// Returns the configuration this cache was built with.
    pub fn config(&self) -> &CacheConfig {
        &self.config
    }

    /// Stores `value` under `key`, written at `now`.
    ///
    /// Replaces any existing entry, value and timestamp both.
    pub fn set(&self, key: impl Into<String>, value: T, now: i64) {
        let key = key.into();
        trace!(key = %key, now, "Cache set");
        self.entries.write().insert(key, CacheEntry::new(value, now));
    }

    /// Returns the stored value and `true`, or `T::default()` and `false`.
    ///
    /// Ignores age entirely and never fetches.
    pub fn get(&self, key: &str) -> (T, bool)
    where
        T: Default,
    {
        match self.peek(key) {
            Some(value) => (value, true),
            None => (T::default(), false),
        }
    }

    /// Returns the stored value regardless of age.
    pub fn peek(&self, key: &str) -> Option<T> {
        self.entries.read().get(key).map(|e| e.value.clone())
    }

    /// Returns the stored value together with its write time.
    pub fn entry(&self, key: &str) -> Option<CacheEntry<T>> {
        self.entries.read().get(key).cloned()
    }

    /// Returns the cached value if it is at most `ttl_seconds` old at `now`,
    /// otherwise calls `fetch`, stores its result at `now` and returns it.
    ///
    /// A `ttl_seconds` of zero only serves entries written at `now`; a
    /// negative one always fetches.
    pub fn get_with_ttl<F>(&self, key: &str, ttl_seconds: i64, now: i64, fetch: F) -> T
    where
        F: FnOnce() -> T,
    {
        if let Some(value) = self.fresh(key, ttl_seconds, now) {
            return value;
        }

        let value = fetch();
        self.set(key, value.clone(), now);
        value
    }

    /// [`get_with_ttl`](Self::get_with_ttl) using the configured default TTL.
    pub fn get_with_default_ttl<F>(&self, key: &str, now: i64, fetch: F) -> T
    where
        F: FnOnce() -> T,
    {
        self.get_with_ttl(key, self.config.default_ttl_seconds, now, fetch)
    }

    /// Like [`get_with_ttl`](Self::get_with_ttl), with a fallible fetch.
    ///
    /// On `Err` nothing is written: any previous entry stays as it was and
    /// the error is returned unchanged.
    pub fn try_get_with_ttl<E, F>(
        &self,
        key: &str,
        ttl_seconds: i64,
        now: i64,
        fetch: F,
    ) -> Result<T, E>
    where
        F: FnOnce() -> Result<T, E>,
    {
        if let Some(value) = self.fresh(key, ttl_seconds, now) {
            return Ok(value);
        }

        match fetch() {
            Ok(value) => {
                self.set(key, value.clone(), now);
                Ok(value)
            }
            Err(err) => {
                debug!(key, "Fetch failed, cache left unchanged");
                Err(err)
            }
        }
    }

    /// Returns the number of stored entries, fresh or not.
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    /// Returns true if nothing has been stored yet.
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    /// Counts fresh and stale entries as of `now` for `ttl_seconds`.
    pub fn stats(&self, now: i64, ttl_seconds: i64) -> CacheStats {
        let entries = self.entries.read();
        let fresh = entries
            .values()
            .filter(|e| e.is_fresh(now, ttl_seconds))
            .count();
        CacheStats {
            total_entries: entries.len(),
            fresh_entries: fresh,
            stale_entries: entries.len() - fresh,
        }
    }

    /// Shared-lock freshness check. The guard is released on return.
    fn fresh(&self, key: &str, ttl_seconds: i64, now: i64) -> Option<T> {
        let entries = self.entries.read();
        match entries.get(key) {
            Some(e) if e.is_fresh(now, ttl_seconds) => {
                trace!(key, age = e.age(now), ttl_seconds, "Cache hit");
                Some(e.value.clone())
            }
            Some(e) => {
                debug!(key, age = e.age(now), ttl_seconds, "Cache entry stale, refetching");
                None
            }
            None => {
                debug!(key, "Cache miss, fetching");
                None
            }
        }
    }
}

impl<T: Clone> Default for TtlCache<T> {
    fn default() -> Self {
        Self::new()
    }
}
