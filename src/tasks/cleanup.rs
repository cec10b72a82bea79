//! TTL Cleanup Task
//!
//! Background task that periodically sweeps expired entries out of the
//! in-memory cache backend. Reads already skip expired entries; the sweep
//! only bounds memory held by keys nobody asks for again.

use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::cache::MemoryBackend;

/// Spawns a background task sweeping `backend` every `cleanup_interval_secs`.
///
/// Returns a JoinHandle the caller aborts during graceful shutdown.
///
/// # Example
/// ```ignore
/// let backend = MemoryBackend::new(1000);
/// let cleanup_handle = spawn_cleanup_task(backend.clone(), 60);
/// // Later, during shutdown:
/// cleanup_handle.abort();
/// ```
pub fn spawn_cleanup_task(backend: MemoryBackend, cleanup_interval_secs: u64) -> JoinHandle<()> {
    let interval = Duration::from_secs(cleanup_interval_secs.max(1));

    tokio::spawn(async move {
        info!(
            "Starting cache cleanup task with interval of {} seconds",
            interval.as_secs()
        );

        loop {
            tokio::time::sleep(interval).await;

            let removed = backend.cleanup_expired().await;
            if removed > 0 {
                info!("Cache cleanup: removed {} expired entries", removed);
            } else {
                debug!("Cache cleanup: no expired entries found");
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::CacheBackend;

    #[tokio::test]
    async fn test_cleanup_task_removes_expired_entries() {
        let backend = MemoryBackend::new(100);
        backend
            .set("hero_1", "value".to_string(), 1)
            .await
            .unwrap();

        let handle = spawn_cleanup_task(backend.clone(), 1);

        tokio::time::sleep(Duration::from_millis(2500)).await;

        assert_eq!(backend.len().await, 0, "Expired entry should have been swept");

        handle.abort();
    }

    #[tokio::test]
    async fn test_cleanup_task_preserves_valid_entries() {
        let backend = MemoryBackend::new(100);
        backend
            .set("heroes", "[]".to_string(), 3600)
            .await
            .unwrap();

        let handle = spawn_cleanup_task(backend.clone(), 1);

        tokio::time::sleep(Duration::from_millis(1500)).await;

        assert_eq!(
            backend.get("heroes").await.unwrap().as_deref(),
            Some("[]"),
            "Valid entry should not be removed"
        );

        handle.abort();
    }

    #[tokio::test]
    async fn test_cleanup_task_can_be_aborted() {
        let handle = spawn_cleanup_task(MemoryBackend::new(10), 1);

        handle.abort();

        tokio::time::sleep(Duration::from_millis(100)).await;
        assert!(handle.is_finished(), "Task should be finished after abort");
    }
}
