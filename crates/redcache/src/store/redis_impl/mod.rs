//! Redis store backend implementation.
//!
//! Talks to a Redis server through the redis crate's connection manager,
//! which reconnects transparently and is cheap to clone per command.

mod error;
mod store;

pub use error::map_redis_error;
pub use store::{RedisStore, DEFAULT_CONNECT_TIMEOUT};
