use std::{env, time::Duration};

use redcache_core::cache::DEFAULT_PREFIX;

/// Cache configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Redis connection URL (default: "redis://localhost:6379")
    /// Note: Only used when a `RedisStore` is built from this config.
    pub redis_url: String,
    /// Namespace prepended to every key (default: "redcache:")
    pub prefix: String,
    /// Adapter-level TTL in seconds, 0 means unset (default: 0)
    pub default_ttl_seconds: u64,
    /// Maximum number of entries held by a `MemoryStore` (default: 10,000)
    pub max_entries: usize,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `REDIS_URL` - Redis connection URL (default: "redis://localhost:6379")
    /// - `CACHE_PREFIX` - Key namespace (default: "redcache:")
    /// - `CACHE_TTL_SECONDS` - Default TTL in seconds, 0 for none (default: 0)
    /// - `CACHE_MAX_ENTRIES` - Maximum in-memory entries (default: 10,000)
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    ///
    /// Values that fail to parse fall back to their defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            redis_url: lookup("REDIS_URL").unwrap_or_else(|| "redis://localhost:6379".to_string()),
            prefix: lookup("CACHE_PREFIX").unwrap_or_else(|| DEFAULT_PREFIX.to_string()),
            default_ttl_seconds: lookup("CACHE_TTL_SECONDS")
                .and_then(|v| v.parse().ok())
                .unwrap_or(0),
            max_entries: lookup("CACHE_MAX_ENTRIES")
                .and_then(|v| v.parse().ok())
                .unwrap_or(10_000),
        }
    }

    /// Get the default TTL as a Duration. `Duration::ZERO` means unset.
    pub fn default_ttl(&self) -> Duration {
        Duration::from_secs(self.default_ttl_seconds)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|name| vars.get(name).cloned())
    }

    #[test]
    fn test_default_values() {
        let config = config_from(&[]);

        assert_eq!(config.redis_url, "redis://localhost:6379");
        assert_eq!(config.prefix, "redcache:");
        assert_eq!(config.default_ttl_seconds, 0);
        assert_eq!(config.max_entries, 10_000);
        assert_eq!(config.default_ttl(), Duration::ZERO);
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[
            ("REDIS_URL", "redis://cache:6380"),
            ("CACHE_PREFIX", "root:"),
            ("CACHE_TTL_SECONDS", "123"),
            ("CACHE_MAX_ENTRIES", "50"),
        ]);

        assert_eq!(config.redis_url, "redis://cache:6380");
        assert_eq!(config.prefix, "root:");
        assert_eq!(config.default_ttl(), Duration::from_secs(123));
        assert_eq!(config.max_entries, 50);
    }

    #[test]
    fn test_invalid_numbers_fall_back() {
        let config = config_from(&[("CACHE_TTL_SECONDS", "-5"), ("CACHE_MAX_ENTRIES", "lots")]);

        assert_eq!(config.default_ttl_seconds, 0);
        assert_eq!(config.max_entries, 10_000);
    }

    #[test]
    fn test_empty_prefix_is_kept() {
        let config = config_from(&[("CACHE_PREFIX", "")]);
        assert_eq!(config.prefix, "");
    }
}
