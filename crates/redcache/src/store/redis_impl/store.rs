use std::time::Duration;

use async_trait::async_trait;
use redis::AsyncCommands;

use redcache_core::cache::{CacheError, RemoteStore, Result};

use super::error::map_redis_error;

/// How long `RedisStore::new` waits for the first connection.
pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

/// Redis store backend using connection manager for pooling.
#[derive(Clone)]
pub struct RedisStore {
    conn: redis::aio::ConnectionManager,
}

impl RedisStore {
    /// Creates a new Redis store connection.
    ///
    /// # Arguments
    ///
    /// * `url` - Redis connection URL (e.g., "redis://localhost:6379")
    ///
    /// # Errors
    ///
    /// Returns `CacheError::ConnectionFailed` if the connection cannot be
    /// established within `DEFAULT_CONNECT_TIMEOUT`.
    pub async fn new(url: &str) -> Result<Self> {
        Self::with_connect_timeout(url, DEFAULT_CONNECT_TIMEOUT).await
    }

    /// Creates a new Redis store connection, giving up after `timeout`.
    ///
    /// The connection manager keeps retrying a refused connection, so the
    /// first connect is bounded here.
    pub async fn with_connect_timeout(url: &str, timeout: Duration) -> Result<Self> {
        let client = redis::Client::open(url).map_err(map_redis_error)?;
        let conn = tokio::time::timeout(timeout, redis::aio::ConnectionManager::new(client))
            .await
            .map_err(|_| {
                CacheError::ConnectionFailed(format!(
                    "timed out after {}ms connecting to {}",
                    timeout.as_millis(),
                    url
                ))
            })?
            .map_err(map_redis_error)?;
        tracing::debug!(%url, "Connected to Redis");
        Ok(Self { conn })
    }

    /// Wraps an already established connection manager.
    pub fn from_manager(conn: redis::aio::ConnectionManager) -> Self {
        Self { conn }
    }
}

#[async_trait]
impl RemoteStore for RedisStore {
    async fn exists(&self, key: &str) -> Result<u64> {
        let mut conn = self.conn.clone();
        conn.exists::<_, u64>(key).await.map_err(map_redis_error)
    }

    async fn get(&self, key: &str) -> Result<Option<String>> {
        let mut conn = self.conn.clone();
        conn.get::<_, Option<String>>(key)
            .await
            .map_err(map_redis_error)
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut conn = self.conn.clone();
        conn.set::<_, _, ()>(key, value)
            .await
            .map_err(map_redis_error)
    }

    async fn pset_ex(&self, key: &str, value: &str, millis: u64) -> Result<()> {
        let mut conn = self.conn.clone();
        conn.pset_ex::<_, _, ()>(key, value, millis)
            .await
            .map_err(map_redis_error)
    }

    async fn del(&self, keys: &[String]) -> Result<u64> {
        // DEL with no arguments is a protocol error.
        if keys.is_empty() {
            return Ok(0);
        }

        let mut conn = self.conn.clone();
        conn.del::<_, u64>(keys).await.map_err(map_redis_error)
    }

    async fn keys(&self, pattern: &str) -> Result<Vec<String>> {
        let mut conn = self.conn.clone();
        conn.keys::<_, Vec<String>>(pattern)
            .await
            .map_err(map_redis_error)
    }
}
