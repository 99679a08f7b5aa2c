//! Default values and limits for cache configuration.

/// TTL used by `get_with_default_ttl` when no configuration overrides it.
pub const DEFAULT_TTL_SECONDS: i64 = 3600;

/// Default pre-allocation hint for the key map.
pub const DEFAULT_INITIAL_CAPACITY: usize = 0;

/// Largest accepted pre-allocation hint.
///
/// This only limits up-front allocation; the map itself grows without bound.
pub const MAX_INITIAL_CAPACITY: usize = 1 << 24;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_within_limits() {
        assert!(DEFAULT_INITIAL_CAPACITY <= MAX_INITIAL_CAPACITY);
        assert!(DEFAULT_TTL_SECONDS > 0);
    }
}
