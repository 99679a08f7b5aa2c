//! Cache configuration.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::constants::{DEFAULT_INITIAL_CAPACITY, DEFAULT_TTL_SECONDS, MAX_INITIAL_CAPACITY};
use crate::error::{CacheError, Result};

/// Cache configuration.
///
/// None of these settings bound the number of entries or remove anything
/// from the cache.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    /// TTL in seconds used by `get_with_default_ttl`
    pub default_ttl_seconds: i64,
    /// Number of keys to pre-allocate room for
    pub initial_capacity: usize,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            default_ttl_seconds: DEFAULT_TTL_SECONDS,
            initial_capacity: DEFAULT_INITIAL_CAPACITY,
        }
    }
}

impl CacheConfig {
    /// Parses a JSON document and validates the result.
    ///
    /// Fields missing from the document keep their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that every value is within range.
    pub fn validate(&self) -> Result<()> {
        if self.initial_capacity > MAX_INITIAL_CAPACITY {
            warn!(
                initial_capacity = self.initial_capacity,
                max = MAX_INITIAL_CAPACITY,
                "Rejecting cache config"
            );
            return Err(CacheError::Config(format!(
                "initial_capacity {} exceeds maximum {}",
                self.initial_capacity, MAX_INITIAL_CAPACITY
            )));
        }
        Ok(())
    }

    /// Sets the TTL used by `get_with_default_ttl`.
    pub fn with_default_ttl(mut self, seconds: i64) -> Self {
        self.default_ttl_seconds = seconds;
        self
    }

    /// Sets the pre-allocation hint.
    pub fn with_initial_capacity(mut self, capacity: usize) -> Self {
        self.initial_capacity = capacity;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = CacheConfig::default();
        assert_eq!(config.default_ttl_seconds, DEFAULT_TTL_SECONDS);
        assert_eq!(config.initial_capacity, DEFAULT_INITIAL_CAPACITY);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_json_partial() {
        let config = CacheConfig::from_json(r#"{"default_ttl_seconds": 60}"#).unwrap();
        assert_eq!(config.default_ttl_seconds, 60);
        assert_eq!(config.initial_capacity, DEFAULT_INITIAL_CAPACITY);
    }

    #[test]
    fn test_from_json_negative_ttl_allowed() {
        let config = CacheConfig::from_json(r#"{"default_ttl_seconds": -5}"#).unwrap();
        assert_eq!(config.default_ttl_seconds, -5);
    }

    #[test]
    fn test_from_json_rejects_huge_capacity() {
        let json = format!(r#"{{"initial_capacity": {}}}"#, MAX_INITIAL_CAPACITY + 1);
        let err = CacheConfig::from_json(&json).unwrap_err();
        assert!(err.is_config_error());
    }

    #[test]
    fn test_from_json_malformed() {
        let err = CacheConfig::from_json("{ not json").unwrap_err();
        assert!(matches!(err, CacheError::Json(_)));
    }

    #[test]
    fn test_builder() {
        let config = CacheConfig::default()
            .with_default_ttl(30)
            .with_initial_capacity(128);
        assert_eq!(config.default_ttl_seconds, 30);
        assert_eq!(config.initial_capacity, 128);

        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(CacheConfig::from_json(&json).unwrap(), config);
    }
}
