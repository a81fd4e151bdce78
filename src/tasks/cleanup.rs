//! TTL Cleanup Task
//!
//! Background task that periodically removes expired cache entries.

use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::cache::SharedCache;

/// Spawns a background task that periodically sweeps expired entries from
/// `cache`.
///
/// Lookups already ignore expired entries; the sweep only bounds memory held
/// by keys that are never requested again.
///
/// # Arguments
/// * `name` - Label used in log lines
/// * `cache` - Shared reference to the cache
/// * `cleanup_interval_secs` - Interval in seconds between sweeps
///
/// # Returns
/// A JoinHandle for the spawned task, aborted during graceful shutdown.
pub fn spawn_cleanup_task<V>(
    name: &'static str,
    cache: SharedCache<V>,
    cleanup_interval_secs: u64,
) -> JoinHandle<()>
where
    V: Clone + Send + Sync + 'static,
{
    let interval = Duration::from_secs(cleanup_interval_secs.max(1));

    tokio::spawn(async move {
        info!(
            "Starting {} cleanup task with interval of {} seconds",
            name,
            interval.as_secs()
        );

        loop {
            tokio::time::sleep(interval).await;

            let removed = {
                let mut cache_guard = cache.write().await;
                cache_guard.cleanup_expired()
            };

            if removed > 0 {
                info!("{} cleanup: removed {} expired entries", name, removed);
            } else {
                debug!("{} cleanup: no expired entries found", name);
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use tokio::sync::RwLock;

    use crate::cache::CacheStore;

    #[tokio::test(start_paused = true)]
    async fn test_cleanup_task_removes_expired_entries() {
        let cache = Arc::new(RwLock::new(CacheStore::init(Duration::from_secs(30))));
        cache.write().await.set("expire_soon", "value".to_string());

        let handle = spawn_cleanup_task("test", cache.clone(), 10);

        // Paused clock auto-advances through the sweeps
        tokio::time::sleep(Duration::from_secs(45)).await;

        assert!(cache.read().await.is_empty(), "Expired entry should have been cleaned up");
        assert_eq!(cache.read().await.stats().expirations, 1);

        handle.abort();
    }

    #[tokio::test(start_paused = true)]
    async fn test_cleanup_task_preserves_valid_entries() {
        let cache = Arc::new(RwLock::new(CacheStore::init(Duration::from_secs(3600))));
        cache.write().await.set("long_lived", "value".to_string());

        let handle = spawn_cleanup_task("test", cache.clone(), 1);

        tokio::time::sleep(Duration::from_secs(5)).await;

        assert_eq!(cache.write().await.get("long_lived").as_deref(), Some("value"));

        handle.abort();
    }

    #[tokio::test]
    async fn test_cleanup_task_can_be_aborted() {
        let cache: SharedCache<String> =
            Arc::new(RwLock::new(CacheStore::init(Duration::from_secs(60))));

        let handle = spawn_cleanup_task("test", cache, 1);
        handle.abort();

        tokio::time::sleep(Duration::from_millis(100)).await;
        assert!(handle.is_finished(), "Task should be finished after abort");
    }
}
