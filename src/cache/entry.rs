//! Cache Entry Module
//!
//! A single in-memory cache entry with absolute expiry.

use std::time::{SystemTime, UNIX_EPOCH};

// == Cache Entry ==
/// Represents a single cache entry with value and metadata.
#[derive(Debug, Clone)]
pub(crate) struct CacheEntry {
    /// The serialized value
    pub value: String,
    /// Expiration timestamp (Unix milliseconds)
    pub expires_at: u64,
    /// Access tick used for least-recently-used eviction
    pub last_access: u64,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates a new cache entry expiring `ttl_seconds` from now.
    pub(crate) fn new(value: String, ttl_seconds: u64, tick: u64) -> Self {
        Self {
            value,
            expires_at: current_timestamp_ms().saturating_add(ttl_seconds.saturating_mul(1000)),
            last_access: tick,
        }
    }

    // == Is Expired ==
    /// An entry is expired once the current time reaches `expires_at`.
    pub(crate) fn is_expired(&self) -> bool {
        current_timestamp_ms() >= self.expires_at
    }
}

// == Utility Functions ==
/// Returns current Unix timestamp in milliseconds.
pub(crate) fn current_timestamp_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}
