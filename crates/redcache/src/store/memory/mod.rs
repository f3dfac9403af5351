//! In-memory store backend.
//!
//! Provides a single-process stand-in for Redis, suitable for tests and for
//! running without a Redis server.

mod store;

pub use store::MemoryStore;
