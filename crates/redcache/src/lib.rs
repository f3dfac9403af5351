//! redcache - a prefixed, TTL-aware async cache over a Redis-like store.
//!
//! [`CacheAdapter`] implements the generic [`Cache`] contract on top of any
//! [`RemoteStore`]. Every logical key is namespaced with a [`KeyPrefix`]
//! before it reaches the store, writes resolve their TTL against the
//! adapter's default, and write failures are reported as `false`.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use std::time::Duration;
//!
//! use redcache::{Cache, CacheAdapter, MemoryStore};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let store = Arc::new(MemoryStore::new(1_000));
//! let cache = CacheAdapter::new(store).with_prefix("app:");
//!
//! assert!(cache.set("greeting", "hello", Some(Duration::from_secs(60))).await);
//! assert_eq!(
//!     cache.get("greeting", None).await.unwrap(),
//!     Some("hello".to_string())
//! );
//! # }
//! ```

mod adapter;
pub mod config;
pub mod store;

pub use adapter::CacheAdapter;
pub use config::Config;
pub use redcache_core::cache::{Cache, CacheError, KeyPrefix, RemoteStore, Result, DEFAULT_PREFIX};

#[cfg(feature = "memory")]
pub use store::MemoryStore;

#[cfg(feature = "redis")]
pub use store::RedisStore;
