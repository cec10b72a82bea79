//! Cache Service
//!
//! The key-value cache handed to the data access layer. Any backend failure
//! is logged and degrades to a miss (reads) or a no-op (writes).

use std::future::Future;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};

use crate::cache::stats::CacheCounters;
use crate::cache::{ttl, BackendError, CacheBackend, CacheStats};

/// Runs a backend operation, logging and discarding its error.
///
/// Returns None when the backend failed.
async fn swallow<T, F>(op: &'static str, key: &str, fut: F) -> Option<T>
where
    F: Future<Output = Result<T, BackendError>>,
{
    match fut.await {
        Ok(value) => Some(value),
        Err(e) => {
            warn!(op, key = %key, error = %e, "cache backend error, ignoring");
            None
        }
    }
}

// == Cache Service ==
/// Get/set-with-TTL store over any `CacheBackend`.
#[derive(Clone)]
pub struct CacheService {
    backend: Arc<dyn CacheBackend>,
    counters: Arc<CacheCounters>,
}

impl CacheService {
    pub fn new(backend: Arc<dyn CacheBackend>) -> Self {
        Self {
            backend,
            counters: Arc::new(CacheCounters::default()),
        }
    }

    // == Get ==
    /// Returns the raw value under `key`; None on a miss or backend failure.
    pub async fn get(&self, key: &str) -> Option<String> {
        match swallow("get", key, self.backend.get(key)).await {
            Some(Some(value)) => {
                self.counters.record_hit();
                debug!(key = %key, "cache hit");
                Some(value)
            }
            Some(None) => {
                self.counters.record_miss();
                debug!(key = %key, "cache miss");
                None
            }
            None => {
                self.counters.record_backend_error();
                self.counters.record_miss();
                None
            }
        }
    }

    // == Set ==
    /// Stores `value` under `key`.
    ///
    /// Without an explicit `ttl` (seconds) the entry expires at the next
    /// 04:00 local time. Failures are logged and dropped.
    pub async fn set(&self, key: &str, value: String, ttl: Option<u64>) {
        let ttl_secs = ttl.unwrap_or_else(ttl::default_ttl);
        if swallow("set", key, self.backend.set(key, value, ttl_secs))
            .await
            .is_none()
        {
            self.counters.record_backend_error();
        }
    }

    /// Reads and decodes a JSON value. Undecodable entries count as a miss.
    pub async fn get_json<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let raw = self.get(key).await?;
        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(e) => {
                warn!(key = %key, error = %e, "discarding undecodable cache entry");
                None
            }
        }
    }

    /// Encodes `value` as JSON and stores it.
    pub async fn set_json<T: Serialize>(&self, key: &str, value: &T, ttl: Option<u64>) {
        match serde_json::to_string(value) {
            Ok(raw) => self.set(key, raw, ttl).await,
            Err(e) => warn!(key = %key, error = %e, "failed to encode cache value"),
        }
    }

    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        self.counters.snapshot()
    }
}
