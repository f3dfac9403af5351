//! In-memory store implementation with LRU eviction.
//!
//! Mirrors the subset of Redis semantics the cache adapter relies on:
//! - Keys with an expiry behave as absent once it has passed
//! - `PSETEX` with a zero expiry is rejected
//! - `KEYS` uses the Redis glob dialect

use std::num::NonZeroUsize;
use std::sync::Arc;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use lru::LruCache;
use tokio::sync::RwLock;

use redcache_core::cache::{pattern_matches, CacheError, RemoteStore, Result};

/// A single stored value with optional expiration.
#[derive(Debug, Clone)]
struct StoreEntry {
    value: String,
    expires_at: Option<Instant>,
}

impl StoreEntry {
    fn new(value: &str, ttl: Option<Duration>) -> Self {
        let expires_at = ttl.map(|d| Instant::now() + d);
        Self {
            value: value.to_string(),
            expires_at,
        }
    }

    /// Returns true if this entry has expired.
    fn is_expired(&self) -> bool {
        self.expires_at.is_some_and(|exp| Instant::now() >= exp)
    }
}

/// In-memory store with LRU eviction.
///
/// Thread-safe store using `Arc<RwLock<LruCache>>` for concurrent access.
/// Expiration is lazy: expired entries are dropped when they are touched and
/// skipped when listing keys. Cloning shares the underlying map.
#[derive(Debug, Clone)]
pub struct MemoryStore {
    entries: Arc<RwLock<LruCache<String, StoreEntry>>>,
}

impl MemoryStore {
    /// Creates a new in-memory store.
    ///
    /// # Arguments
    ///
    /// * `max_entries` - Maximum number of entries before LRU eviction kicks in.
    ///   A capacity of zero is treated as one.
    pub fn new(max_entries: usize) -> Self {
        let capacity = NonZeroUsize::new(max_entries).unwrap_or(NonZeroUsize::MIN);
        Self {
            entries: Arc::new(RwLock::new(LruCache::new(capacity))),
        }
    }

    /// Returns the number of stored entries, including expired ones not yet dropped.
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    /// Returns true if nothing is stored.
    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new(10_000)
    }
}

/// Looks up a live entry, dropping it first if it has expired.
fn get_live<'a>(
    entries: &'a mut LruCache<String, StoreEntry>,
    key: &str,
) -> Option<&'a StoreEntry> {
    if entries.peek(key).is_some_and(StoreEntry::is_expired) {
        entries.pop(key);
        return None;
    }
    entries.get(key)
}

#[async_trait]
impl RemoteStore for MemoryStore {
    async fn exists(&self, key: &str) -> Result<u64> {
        let mut entries = self.entries.write().await;
        Ok(u64::from(get_live(&mut entries, key).is_some()))
    }

    async fn get(&self, key: &str) -> Result<Option<String>> {
        let mut entries = self.entries.write().await;
        Ok(get_live(&mut entries, key).map(|entry| entry.value.clone()))
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut entries = self.entries.write().await;
        entries.put(key.to_string(), StoreEntry::new(value, None));
        Ok(())
    }

    async fn pset_ex(&self, key: &str, value: &str, millis: u64) -> Result<()> {
        if millis == 0 {
            return Err(CacheError::OperationFailed(
                "invalid expire time in 'psetex' command".to_string(),
            ));
        }

        let ttl = Duration::from_millis(millis);
        let mut entries = self.entries.write().await;
        entries.put(key.to_string(), StoreEntry::new(value, Some(ttl)));
        Ok(())
    }

    async fn del(&self, keys: &[String]) -> Result<u64> {
        let mut entries = self.entries.write().await;
        let removed = keys
            .iter()
            .filter_map(|key| entries.pop(key.as_str()))
            .filter(|entry| !entry.is_expired())
            .count();
        Ok(removed as u64)
    }

    async fn keys(&self, pattern: &str) -> Result<Vec<String>> {
        let entries = self.entries.read().await;
        Ok(entries
            .iter()
            .filter(|(key, entry)| !entry.is_expired() && pattern_matches(pattern, key))
            .map(|(key, _)| key.clone())
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys(keys: &[&str]) -> Vec<String> {
        keys.iter().map(|k| k.to_string()).collect()
    }

    #[tokio::test]
    async fn test_set_and_get() {
        let store = MemoryStore::new(100);

        store.set("key", "hello world").await.unwrap();

        assert_eq!(
            store.get("key").await.unwrap(),
            Some("hello world".to_string())
        );
        assert_eq!(store.exists("key").await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_get_nonexistent() {
        let store = MemoryStore::new(100);

        assert_eq!(store.get("missing").await.unwrap(), None);
        assert_eq!(store.exists("missing").await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_overwrite_clears_expiry() {
        let store = MemoryStore::new(100);

        store.pset_ex("key", "initial", 50).await.unwrap();
        store.set("key", "updated").await.unwrap();

        tokio::time::sleep(Duration::from_millis(100)).await;

        assert_eq!(store.get("key").await.unwrap(), Some("updated".to_string()));
    }

    #[tokio::test]
    async fn test_pset_ex_expires() {
        let store = MemoryStore::new(100);

        store.pset_ex("key", "expiring", 50).await.unwrap();
        assert_eq!(store.exists("key").await.unwrap(), 1);

        tokio::time::sleep(Duration::from_millis(100)).await;

        assert_eq!(store.exists("key").await.unwrap(), 0);
        assert_eq!(store.get("key").await.unwrap(), None);
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn test_pset_ex_zero_is_rejected() {
        let store = MemoryStore::new(100);

        let result = store.pset_ex("key", "value", 0).await;

        assert!(matches!(result, Err(CacheError::OperationFailed(_))));
        assert_eq!(store.exists("key").await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_del_counts_removed_keys() {
        let store = MemoryStore::new(100);
        store.set("a", "1").await.unwrap();
        store.set("b", "2").await.unwrap();

        let removed = store.del(&keys(&["a", "b", "c"])).await.unwrap();

        assert_eq!(removed, 2);
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn test_del_does_not_count_expired_keys() {
        let store = MemoryStore::new(100);
        store.pset_ex("a", "1", 10).await.unwrap();

        tokio::time::sleep(Duration::from_millis(50)).await;

        assert_eq!(store.del(&keys(&["a"])).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_keys_by_pattern() {
        let store = MemoryStore::new(100);
        store.set("root:a", "1").await.unwrap();
        store.set("root:b", "2").await.unwrap();
        store.set("other:c", "3").await.unwrap();

        let mut found = store.keys("root:*").await.unwrap();
        found.sort();

        assert_eq!(found, keys(&["root:a", "root:b"]));
    }

    #[tokio::test]
    async fn test_keys_skips_expired() {
        let store = MemoryStore::new(100);
        store.set("root:live", "1").await.unwrap();
        store.pset_ex("root:gone", "2", 10).await.unwrap();

        tokio::time::sleep(Duration::from_millis(50)).await;

        assert_eq!(store.keys("root:*").await.unwrap(), keys(&["root:live"]));
    }

    #[tokio::test]
    async fn test_lru_eviction() {
        let store = MemoryStore::new(2);

        store.set("a", "1").await.unwrap();
        store.set("b", "2").await.unwrap();

        // Touch "a" so "b" becomes the least recently used.
        store.get("a").await.unwrap();
        store.set("c", "3").await.unwrap();

        assert_eq!(store.exists("a").await.unwrap(), 1);
        assert_eq!(store.exists("b").await.unwrap(), 0);
        assert_eq!(store.exists("c").await.unwrap(), 1);
        assert_eq!(store.len().await, 2);
    }

    #[tokio::test]
    async fn test_zero_capacity_holds_one_entry() {
        let store = MemoryStore::new(0);

        store.set("a", "1").await.unwrap();
        store.set("b", "2").await.unwrap();

        assert_eq!(store.len().await, 1);
        assert_eq!(store.get("b").await.unwrap(), Some("2".to_string()));
    }

    #[tokio::test]
    async fn test_clones_share_entries() {
        let store = MemoryStore::new(100);
        let other = store.clone();

        store.set("shared", "yes").await.unwrap();

        assert_eq!(other.get("shared").await.unwrap(), Some("yes".to_string()));
    }
}
