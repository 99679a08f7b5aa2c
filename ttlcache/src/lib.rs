//! Thread-safe TTL cache driven by caller-supplied logical time.
//!
//! Values are stored per string key with the time they were written.
//! Reads either return whatever is stored or, through
//! [`TtlCache::get_with_ttl`], refresh entries that are older than a TTL by
//! calling a caller-supplied fetch function.
//!
//! ```rust
//! use ttlcache::TtlCache;
//!
//! let cache = TtlCache::new();
//! cache.set("u:1", "alice".to_string(), 100);
//!
//! // 150 - 100 <= 60: served from the cache
//! let v = cache.get_with_ttl("u:1", 60, 150, || unreachable!());
//! assert_eq!(v, "alice");
//!
//! // 200 - 100 > 60: refreshed
//! let v = cache.get_with_ttl("u:1", 60, 200, || "alice2".to_string());
//! assert_eq!(v, "alice2");
//! assert_eq!(cache.get("u:1"), ("alice2".to_string(), true));
//! ```

mod cache;

pub use cache::TtlCache;
pub use ttlcache_core::{unix_seconds, CacheConfig, CacheEntry, CacheError, CacheStats};
