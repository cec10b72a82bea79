//! Cache Module
//!
//! The key-value cache used by the data access layer: a backend-agnostic
//! `CacheBackend` seam, the in-memory and Redis engines behind it, and the
//! `CacheService` wrapper that turns every backend failure into a miss.

mod entry;
mod redis_store;
mod service;
mod stats;
mod store;
pub mod ttl;

#[cfg(test)]
mod property_tests;

use async_trait::async_trait;
use thiserror::Error;

// Re-export public types
pub(crate) use entry::CacheEntry;
pub use redis_store::RedisBackend;
pub use service::CacheService;
pub use stats::CacheStats;
pub use store::{MemoryBackend, MemoryStore};

// == Public Constants ==
/// Maximum allowed key length in bytes
pub const MAX_KEY_LENGTH: usize = 256;

/// Maximum allowed value size in bytes
pub const MAX_VALUE_SIZE: usize = 1024 * 1024; // 1 MB

// == Backend Error ==
/// Failure reported by a cache engine. Never escapes `CacheService`.
#[derive(Error, Debug)]
pub enum BackendError {
    /// The engine refused the write (size limits, capacity)
    #[error("value rejected: {0}")]
    Rejected(String),

    /// The Redis server or connection failed
    #[error("redis error: {0}")]
    Redis(#[from] redis::RedisError),

    /// Any other engine malfunction
    #[error("backend unavailable: {0}")]
    Unavailable(String),
}

// == Cache Backend ==
/// A string key-value store with per-entry TTL.
#[async_trait]
pub trait CacheBackend: Send + Sync {
    /// Returns the live value under `key`, or None on a miss.
    async fn get(&self, key: &str) -> Result<Option<String>, BackendError>;

    /// Stores `value` under `key`, expiring after `ttl_secs` seconds.
    async fn set(&self, key: &str, value: String, ttl_secs: u64) -> Result<(), BackendError>;
}
