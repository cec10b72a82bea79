//! In-Memory Cache Store
//!
//! HashMap storage with per-entry TTL and least-recently-used eviction,
//! shared behind `Arc<RwLock<_>>` as a `CacheBackend`.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::cache::{BackendError, CacheBackend, CacheEntry, MAX_KEY_LENGTH, MAX_VALUE_SIZE};

// == Memory Store ==
/// Bounded in-memory storage with TTL expiry and LRU eviction.
#[derive(Debug)]
pub struct MemoryStore {
    /// Key-value storage
    entries: HashMap<String, CacheEntry>,
    /// Monotonic access counter; larger is more recent
    tick: u64,
    /// Maximum number of entries allowed
    max_entries: usize,
}

impl MemoryStore {
    // == Constructor ==
    /// Creates a new MemoryStore holding at most `max_entries` entries.
    pub fn new(max_entries: usize) -> Self {
        Self {
            entries: HashMap::new(),
            tick: 0,
            max_entries,
        }
    }

    fn next_tick(&mut self) -> u64 {
        self.tick += 1;
        self.tick
    }

    // == Set ==
    /// Stores a key-value pair expiring after `ttl_secs`.
    ///
    /// An existing key is overwritten and its TTL reset. At capacity, the
    /// least recently used entry is evicted first.
    pub fn set(&mut self, key: String, value: String, ttl_secs: u64) -> Result<(), BackendError> {
        if key.len() > MAX_KEY_LENGTH {
            return Err(BackendError::Rejected(format!(
                "Key exceeds maximum length of {} bytes",
                MAX_KEY_LENGTH
            )));
        }

        if value.len() > MAX_VALUE_SIZE {
            return Err(BackendError::Rejected(format!(
                "Value exceeds maximum size of {} bytes",
                MAX_VALUE_SIZE
            )));
        }

        if self.max_entries == 0 {
            return Err(BackendError::Rejected("Store has zero capacity".to_string()));
        }

        if !self.entries.contains_key(&key) && self.entries.len() >= self.max_entries {
            self.evict_least_recent();
        }

        let tick = self.next_tick();
        self.entries.insert(key, CacheEntry::new(value, ttl_secs, tick));
        Ok(())
    }

    // == Get ==
    /// Returns the value if present and not expired.
    ///
    /// Expired entries are removed on read.
    pub fn get(&mut self, key: &str) -> Option<String> {
        let expired = self.entries.get(key)?.is_expired();
        if expired {
            self.entries.remove(key);
            return None;
        }

        let tick = self.next_tick();
        let entry = self.entries.get_mut(key)?;
        entry.last_access = tick;
        Some(entry.value.clone())
    }

    fn evict_least_recent(&mut self) {
        let oldest = self
            .entries
            .iter()
            .min_by_key(|(_, entry)| entry.last_access)
            .map(|(key, _)| key.clone());

        if let Some(key) = oldest {
            self.entries.remove(&key);
        }
    }

    // == Cleanup Expired ==
    /// Removes all expired entries, returning how many were removed.
    pub fn cleanup_expired(&mut self) -> usize {
        let before = self.entries.len();
        self.entries.retain(|_, entry| !entry.is_expired());
        before - self.entries.len()
    }

    /// Returns the current number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the store is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// == Memory Backend ==
/// Shareable handle to a `MemoryStore`.
#[derive(Debug, Clone)]
pub struct MemoryBackend {
    store: Arc<RwLock<MemoryStore>>,
}

impl MemoryBackend {
    pub fn new(max_entries: usize) -> Self {
        Self {
            store: Arc::new(RwLock::new(MemoryStore::new(max_entries))),
        }
    }

    /// Sweeps expired entries. Used by the background cleanup task.
    pub async fn cleanup_expired(&self) -> usize {
        self.store.write().await.cleanup_expired()
    }

    pub async fn len(&self) -> usize {
        self.store.read().await.len()
    }
}

#[async_trait]
impl CacheBackend for MemoryBackend {
    async fn get(&self, key: &str) -> Result<Option<String>, BackendError> {
        // Write lock: reads update the LRU tick
        Ok(self.store.write().await.get(key))
    }

    async fn set(&self, key: &str, value: String, ttl_secs: u64) -> Result<(), BackendError> {
        self.store.write().await.set(key.to_string(), value, ttl_secs)
    }
}
