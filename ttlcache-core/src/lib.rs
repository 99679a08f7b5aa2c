//! # ttlcache Core
//!
//! Core types, errors, and configuration shared by the ttlcache crates.
//!
//! - **Types**: the stored entry and its freshness predicate, cache statistics
//! - **Errors**: configuration and parse failures
//! - **Config**: serde-loadable cache settings
//! - **Clock**: wall-clock helper for callers that derive logical time from it
//!
//! ## Example
//!
//! ```rust
//! use ttlcache_core::{CacheConfig, CacheEntry};
//!
//! let config = CacheConfig::from_json(r#"{"default_ttl_seconds": 60}"#).unwrap();
//! assert_eq!(config.default_ttl_seconds, 60);
//!
//! let entry = CacheEntry::new("alice", 100);
//! assert!(entry.is_fresh(150, config.default_ttl_seconds));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms, clippy::all)]

pub mod clock;
pub mod config;
pub mod constants;
pub mod error;
pub mod types;

// Re-export commonly used items at crate root
pub use clock::unix_seconds;
pub use config::CacheConfig;
pub use constants::*;
pub use error::{CacheError, Result};
pub use types::{CacheEntry, CacheStats};
