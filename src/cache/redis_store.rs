//! Redis-backed cache engine

use async_trait::async_trait;
use redis::aio::ConnectionManager;
use redis::AsyncCommands;

use crate::cache::{BackendError, CacheBackend};

/// Cache engine storing values in Redis with `SETEX`.
///
/// The connection manager reconnects on its own; a dead server surfaces as
/// `BackendError::Redis` on each call.
#[derive(Clone)]
pub struct RedisBackend {
    conn: ConnectionManager,
}

impl RedisBackend {
    /// Connects to the Redis server at `url` (`redis://host:port/`).
    pub async fn connect(url: &str) -> Result<Self, BackendError> {
        let client = redis::Client::open(url)?;
        let conn = ConnectionManager::new(client).await?;
        tracing::info!(url = %url, "connected to redis");
        Ok(Self { conn })
    }
}

#[async_trait]
impl CacheBackend for RedisBackend {
    async fn get(&self, key: &str) -> Result<Option<String>, BackendError> {
        let mut conn = self.conn.clone();
        let value: Option<String> = conn.get(key).await?;
        Ok(value)
    }

    async fn set(&self, key: &str, value: String, ttl_secs: u64) -> Result<(), BackendError> {
        let mut conn = self.conn.clone();
        conn.set_ex::<_, _, ()>(key, value, ttl_secs.max(1)).await?;
        Ok(())
    }
}
