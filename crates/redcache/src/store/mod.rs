//! Remote store backends.
//!
//! This module provides concrete implementations of the
//! `redcache_core::cache::RemoteStore` trait. They are selected at compile
//! time via feature flags.
//!
//! # Feature Flags
//!
//! - `memory` (default): In-process store using an LRU map and tokio locks
//! - `redis`: Redis store using the redis crate's connection manager
//!
//! Both backends can be compiled in at the same time; the adapter receives
//! whichever store it is given.

#[cfg(feature = "memory")]
pub mod memory;

#[cfg(feature = "redis")]
pub mod redis_impl;

#[cfg(feature = "memory")]
pub use memory::MemoryStore;

#[cfg(feature = "redis")]
pub use redis_impl::RedisStore;
