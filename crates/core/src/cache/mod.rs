mod error;
mod keys;
mod patterns;
mod traits;
mod ttl;

pub use error::{CacheError, Result};
pub use keys::{escape_pattern, KeyPrefix, DEFAULT_PREFIX};
pub use patterns::pattern_matches;
pub use traits::{Cache, RemoteStore};
pub use ttl::{resolve_ttl, ttl_millis};
