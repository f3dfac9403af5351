//! Cache adapter over a remote store.
//!
//! Translates the generic [`Cache`] contract into [`RemoteStore`] commands:
//!
//! - **Keys**: every logical key is namespaced with the adapter's prefix
//! - **Writes**: the adapter default TTL wins over the per-call TTL; failures
//!   are logged and reported as `false`
//! - **Reads**: an existence check gates every fetch; failures propagate
//! - **Bulk operations**: reads and writes fan out concurrently, deletes are
//!   issued as a single `DEL`

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use futures_util::future::join_all;

use redcache_core::cache::{resolve_ttl, ttl_millis, Cache, KeyPrefix, RemoteStore, Result};

use crate::config::Config;

/// Prefixed, TTL-aware cache backed by a shared remote store.
///
/// The adapter holds no state besides its configuration; cloning it is cheap
/// and every clone talks to the same store.
#[derive(Clone)]
pub struct CacheAdapter {
    store: Arc<dyn RemoteStore>,
    prefix: KeyPrefix,
    default_ttl: Duration,
}

impl CacheAdapter {
    /// Creates an adapter with the default prefix and no default TTL.
    pub fn new(store: Arc<dyn RemoteStore>) -> Self {
        Self {
            store,
            prefix: KeyPrefix::default(),
            default_ttl: Duration::ZERO,
        }
    }

    /// Creates an adapter using the prefix and default TTL from `config`.
    pub fn from_config(store: Arc<dyn RemoteStore>, config: &Config) -> Self {
        Self::new(store)
            .with_prefix(config.prefix.as_str())
            .with_default_ttl(config.default_ttl())
    }

    /// Sets the namespace prepended to every key.
    pub fn with_prefix(mut self, prefix: impl Into<KeyPrefix>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Sets the adapter-level TTL. A non-zero value overrides every per-call TTL.
    pub fn with_default_ttl(mut self, ttl: Duration) -> Self {
        self.default_ttl = ttl;
        self
    }

    pub fn prefix(&self) -> &KeyPrefix {
        &self.prefix
    }

    pub fn default_ttl(&self) -> Duration {
        self.default_ttl
    }
}

impl std::fmt::Debug for CacheAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CacheAdapter")
            .field("prefix", &self.prefix)
            .field("default_ttl", &self.default_ttl)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl Cache for CacheAdapter {
    async fn has(&self, key: &str) -> Result<bool> {
        let count = self.store.exists(&self.prefix.apply(key)).await?;
        Ok(count > 0)
    }

    async fn get(&self, key: &str, default: Option<String>) -> Result<Option<String>> {
        if !self.has(key).await? {
            tracing::trace!(%key, "Cache miss");
            return Ok(default);
        }

        // The entry may expire between EXISTS and GET.
        let value = self.store.get(&self.prefix.apply(key)).await?;
        tracing::trace!(%key, hit = value.is_some(), "Cache lookup");
        Ok(value.or(default))
    }

    async fn set(&self, key: &str, value: &str, ttl: Option<Duration>) -> bool {
        let storage_key = self.prefix.apply(key);

        let result = match resolve_ttl(self.default_ttl, ttl) {
            Some(ttl) => {
                self.store
                    .pset_ex(&storage_key, value, ttl_millis(ttl))
                    .await
            }
            None => self.store.set(&storage_key, value).await,
        };

        match result {
            Ok(()) => true,
            Err(err) => {
                tracing::warn!(key = %storage_key, error = %err, "Failed to set cache entry");
                false
            }
        }
    }

    async fn delete(&self, key: &str) -> bool {
        let storage_key = self.prefix.apply(key);

        match self.store.del(std::slice::from_ref(&storage_key)).await {
            Ok(_) => true,
            Err(err) => {
                tracing::warn!(key = %storage_key, error = %err, "Failed to delete cache entry");
                false
            }
        }
    }

    async fn get_multiple(
        &self,
        keys: &[String],
        default: Option<String>,
    ) -> Result<HashMap<String, Option<String>>> {
        let lookups = keys.iter().map(|key| self.get(key, default.clone()));
        let results = join_all(lookups).await;

        keys.iter()
            .cloned()
            .zip(results)
            .map(|(key, result)| result.map(|value| (key, value)))
            .collect()
    }

    async fn set_multiple(
        &self,
        values: HashMap<String, String>,
        ttl: Option<Duration>,
    ) -> HashMap<String, bool> {
        let writes = values.iter().map(|(key, value)| async move {
            let stored = self.set(key, value, ttl).await;
            (key.clone(), stored)
        });

        let results: HashMap<String, bool> = join_all(writes).await.into_iter().collect();
        tracing::debug!(
            count = results.len(),
            failed = results.values().filter(|stored| !**stored).count(),
            "Set multiple cache entries"
        );
        results
    }

    async fn delete_multiple(&self, keys: &[String]) -> bool {
        if keys.is_empty() {
            return true;
        }

        let storage_keys = self.prefix.apply_all(keys);

        match self.store.del(&storage_keys).await {
            Ok(removed) => {
                tracing::debug!(requested = keys.len(), removed, "Deleted cache entries");
                true
            }
            Err(err) => {
                tracing::warn!(
                    prefix = %self.prefix,
                    count = keys.len(),
                    error = %err,
                    "Failed to delete cache entries"
                );
                false
            }
        }
    }

    async fn clear(&self) -> Result<bool> {
        let storage_keys = self.store.keys(&self.prefix.pattern()).await?;

        let keys = storage_keys
            .iter()
            .map(|storage_key| self.prefix.strip(storage_key).map(str::to_string))
            .collect::<Result<Vec<_>>>()?;

        tracing::debug!(prefix = %self.prefix, count = keys.len(), "Clearing cache namespace");
        Ok(self.delete_multiple(&keys).await)
    }
}
