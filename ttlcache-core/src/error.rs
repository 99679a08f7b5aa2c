//! Error types for ttlcache.
//!
//! Cache reads and writes are total and never fail. Errors only arise
//! when building a cache from configuration.

use thiserror::Error;

/// Result type alias using `CacheError`.
pub type Result<T> = std::result::Result<T, CacheError>;

/// Errors produced while loading or validating cache configuration.
#[derive(Debug, Error)]
pub enum CacheError {
    /// A configuration value is out of range.
    #[error("Configuration error: {0}")]
    Config(String),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CacheError {
    /// Returns true if the configuration parsed but held an invalid value.
    pub fn is_config_error(&self) -> bool {
        matches!(self, CacheError::Config(_))
    }
}
