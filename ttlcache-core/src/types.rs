//! Stored entries and cache statistics.

use serde::{Deserialize, Serialize};

/// A value together with the logical time it was written.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheEntry<T> {
    /// The cached value
    pub value: T,
    /// Logical time (seconds) of the last write
    pub timestamp: i64,
}

impl<T> CacheEntry<T> {
    /// Creates an entry written at `timestamp`.
    pub fn new(value: T, timestamp: i64) -> Self {
        Self { value, timestamp }
    }

    /// Seconds elapsed between the write and `now`.
    ///
    /// Saturates at the `i64` bounds instead of overflowing. A `now` earlier
    /// than the write yields a negative age.
    pub fn age(&self, now: i64) -> i64 {
        now.saturating_sub(self.timestamp)
    }

    /// Returns true if the entry may still be served for `ttl_seconds`.
    ///
    /// The boundary is inclusive: an entry exactly `ttl_seconds` old is fresh.
    #[inline]
    pub fn is_fresh(&self, now: i64, ttl_seconds: i64) -> bool {
        self.age(now) <= ttl_seconds
    }
}

/// Snapshot of entry counts, evaluated against a given `(now, ttl)`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheStats {
    /// Number of keys in the map
    pub total_entries: usize,
    /// Entries that `get_with_ttl` would serve without fetching
    pub fresh_entries: usize,
    /// Entries that would trigger a fetch
    pub stale_entries: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use test_case::test_case;

    #[test_case(100, 150, 60 => true ; "within ttl")]
    #[test_case(100, 160, 60 => true ; "exactly at ttl")]
    #[test_case(100, 161, 60 => false ; "one past ttl")]
    #[test_case(100, 100, 0 => true ; "zero ttl same instant")]
    #[test_case(100, 101, 0 => false ; "zero ttl next instant")]
    #[test_case(100, 100, -1 => false ; "negative ttl")]
    #[test_case(100, 10_000_000, i64::MAX => true ; "huge ttl never expires")]
    fn test_is_fresh(written: i64, now: i64, ttl: i64) -> bool {
        CacheEntry::new((), written).is_fresh(now, ttl)
    }

    #[test]
    fn test_age_saturates() {
        let entry = CacheEntry::new(0u8, i64::MIN);
        assert_eq!(entry.age(i64::MAX), i64::MAX);

        let entry = CacheEntry::new(0u8, i64::MAX);
        assert_eq!(entry.age(i64::MIN), i64::MIN);
    }

    #[test]
    fn test_entry_serialization() {
        let entry = CacheEntry::new("alice".to_string(), 100);
        let json = serde_json::to_string(&entry).unwrap();
        assert!(json.contains("\"timestamp\":100"));
        let decoded: CacheEntry<String> = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, entry);
    }

    proptest! {
        #[test]
        fn prop_fresh_iff_age_within_ttl(
            written in -1_000_000i64..1_000_000,
            elapsed in 0i64..1_000_000,
            ttl in -10i64..1_000_000,
        ) {
            let entry = CacheEntry::new((), written);
            prop_assert_eq!(entry.age(written + elapsed), elapsed);
            prop_assert_eq!(entry.is_fresh(written + elapsed, ttl), elapsed <= ttl);
        }
    }
}
