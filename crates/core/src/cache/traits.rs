use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;

use super::Result;

/// Generic asynchronous key-value cache.
///
/// Keys are logical keys; implementations decide how they map onto storage.
/// Write paths report failures as `false` instead of errors, read paths
/// propagate them so callers can tell "absent" from "broken".
#[async_trait]
pub trait Cache: Send + Sync {
    /// Returns true if the key is present.
    async fn has(&self, key: &str) -> Result<bool>;

    /// Gets a value, or `default` if the key is absent.
    async fn get(&self, key: &str, default: Option<String>) -> Result<Option<String>>;

    /// Sets a value with an optional TTL. Returns false if the write failed.
    async fn set(&self, key: &str, value: &str, ttl: Option<Duration>) -> bool;

    /// Deletes a value. Returns false if the delete failed.
    async fn delete(&self, key: &str) -> bool;

    /// Gets several values at once, keyed by the requested keys.
    async fn get_multiple(
        &self,
        keys: &[String],
        default: Option<String>,
    ) -> Result<HashMap<String, Option<String>>>;

    /// Sets several values with a shared TTL, reporting success per key.
    async fn set_multiple(
        &self,
        values: HashMap<String, String>,
        ttl: Option<Duration>,
    ) -> HashMap<String, bool>;

    /// Deletes several values at once. Returns false if the delete failed.
    async fn delete_multiple(&self, keys: &[String]) -> bool;

    /// Deletes every value owned by this cache.
    async fn clear(&self) -> Result<bool>;
}

/// Minimal command set of a Redis-like remote store.
///
/// Keys are storage keys, already namespaced by the caller.
#[async_trait]
pub trait RemoteStore: Send + Sync {
    /// Number of the given keys that exist (`EXISTS`).
    async fn exists(&self, key: &str) -> Result<u64>;

    /// Gets a value (`GET`).
    async fn get(&self, key: &str) -> Result<Option<String>>;

    /// Sets a value without expiry (`SET`).
    async fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Sets a value expiring after `millis` milliseconds (`PSETEX`).
    async fn pset_ex(&self, key: &str, value: &str, millis: u64) -> Result<()>;

    /// Deletes keys, returning how many were removed (`DEL`).
    async fn del(&self, keys: &[String]) -> Result<u64>;

    /// Lists keys matching a glob pattern (`KEYS`).
    async fn keys(&self, pattern: &str) -> Result<Vec<String>>;
}
