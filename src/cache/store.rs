//! Cache Store Module
//!
//! HashMap-backed store with a fixed per-store TTL. Entries are evicted by
//! time only: there is no size bound and reads never extend a lifetime.

use std::collections::HashMap;
use std::time::Duration;

use crate::cache::{CacheEntry, CacheStats};

// == Cache Store ==
/// Time-bounded key-value store.
#[derive(Debug)]
pub struct CacheStore<V> {
    /// Key-value storage
    entries: HashMap<String, CacheEntry<V>>,
    /// Performance statistics
    stats: CacheStats,
    /// Lifetime given to every inserted entry
    ttl: Duration,
}

impl<V: Clone> CacheStore<V> {
    // == Constructor ==
    /// Creates an empty store whose entries live for `ttl` after insertion.
    pub fn init(ttl: Duration) -> Self {
        Self {
            entries: HashMap::new(),
            stats: CacheStats::new(),
            ttl,
        }
    }

    /// Returns the TTL applied to new entries.
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    // == Set ==
    /// Stores a value under `key`, replacing any previous entry and
    /// restarting its TTL.
    pub fn set(&mut self, key: impl Into<String>, value: V) {
        let entry = CacheEntry::new(value, self.ttl);
        self.entries.insert(key.into(), entry);
        self.stats.set_total_entries(self.entries.len());
    }

    // == Get ==
    /// Returns a clone of the value if present and not expired.
    ///
    /// Expired entries are removed on the spot and counted as misses.
    pub fn get(&mut self, key: &str) -> Option<V> {
        let Some(entry) = self.entries.get(key) else {
            self.stats.record_miss();
            return None;
        };

        if !entry.is_expired() {
            let value = entry.value.clone();
            self.stats.record_hit();
            return Some(value);
        }

        self.entries.remove(key);
        self.stats.record_expirations(1);
        self.stats.set_total_entries(self.entries.len());
        self.stats.record_miss();
        None
    }

    // == Clear ==
    /// Drops every entry and resets the statistics.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.stats.reset();
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.entries.len());
        stats
    }

    // == Cleanup Expired ==
    /// Removes all expired entries, returning how many were dropped.
    pub fn cleanup_expired(&mut self) -> usize {
        let before = self.entries.len();
        self.entries.retain(|_, entry| !entry.is_expired());
        let removed = before - self.entries.len();

        self.stats.record_expirations(removed);
        self.stats.set_total_entries(self.entries.len());
        removed
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    const TTL: Duration = Duration::from_secs(1800);

    #[tokio::test(start_paused = true)]
    async fn test_store_init() {
        let store: CacheStore<String> = CacheStore::init(TTL);
        assert_eq!(store.len(), 0);
        assert!(store.is_empty());
        assert_eq!(store.ttl(), TTL);
    }

    #[tokio::test(start_paused = true)]
    async fn test_store_set_and_get() {
        let mut store = CacheStore::init(TTL);

        store.set("key1", "value1".to_string());

        assert_eq!(store.get("key1").as_deref(), Some("value1"));
        assert_eq!(store.len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_store_get_nonexistent() {
        let mut store: CacheStore<String> = CacheStore::init(TTL);
        assert!(store.get("nonexistent").is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_store_overwrite_resets_ttl() {
        let mut store = CacheStore::init(TTL);

        store.set("key1", 1);
        tokio::time::advance(Duration::from_secs(1000)).await;
        store.set("key1", 2);
        tokio::time::advance(Duration::from_secs(1000)).await;

        assert_eq!(store.get("key1"), Some(2));
        assert_eq!(store.len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_store_ttl_expiration() {
        let mut store = CacheStore::init(TTL);
        store.set("key1", "value1".to_string());

        tokio::time::advance(Duration::from_secs(1799)).await;
        assert!(store.get("key1").is_some());

        tokio::time::advance(Duration::from_secs(2)).await;
        assert!(store.get("key1").is_none());
        assert!(store.is_empty());
        assert_eq!(store.stats().expirations, 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_store_read_does_not_refresh_ttl() {
        let mut store = CacheStore::init(Duration::from_secs(10));
        store.set("key1", ());

        for _ in 0..9 {
            tokio::time::advance(Duration::from_secs(1)).await;
            assert!(store.get("key1").is_some());
        }

        tokio::time::advance(Duration::from_secs(1)).await;
        assert!(store.get("key1").is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_store_clear() {
        let mut store = CacheStore::init(TTL);
        store.set("a", 1);
        store.set("b", 2);
        store.get("a");

        store.clear();

        assert!(store.is_empty());
        assert!(store.get("a").is_none());
        let stats = store.stats();
        assert_eq!(stats.hits, 0);
        assert_eq!(stats.misses, 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_store_stats() {
        let mut store = CacheStore::init(TTL);

        store.set("key1", "value1".to_string());
        store.get("key1"); // hit
        store.get("nonexistent"); // miss

        let stats = store.stats();
        assert_eq!(stats.hits, 1);
        assert_eq!(stats.misses, 1);
        assert_eq!(stats.total_entries, 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_store_cleanup_expired() {
        let mut store = CacheStore::init(Duration::from_secs(10));

        store.set("old", 1);
        tokio::time::advance(Duration::from_secs(6)).await;
        store.set("new", 2);
        tokio::time::advance(Duration::from_secs(5)).await;

        let removed = store.cleanup_expired();
        assert_eq!(removed, 1);
        assert_eq!(store.len(), 1);
        assert_eq!(store.get("new"), Some(2));
        assert_eq!(store.stats().expirations, 1);
    }
}
