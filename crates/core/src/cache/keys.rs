use super::{CacheError, Result};

/// Namespace applied to keys when no prefix is configured.
pub const DEFAULT_PREFIX: &str = "redcache:";

/// Namespace prepended to every logical key before it reaches the store.
///
/// The translation is total and reversible: [`KeyPrefix::apply`] builds the
/// storage key and [`KeyPrefix::strip`] recovers the logical key from it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyPrefix(String);

impl KeyPrefix {
    /// Creates a prefix from any string. An empty prefix is allowed.
    pub fn new(prefix: impl Into<String>) -> Self {
        Self(prefix.into())
    }

    /// Returns the raw prefix.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the storage key for a logical key.
    ///
    /// # Examples
    ///
    /// ```
    /// use redcache_core::cache::KeyPrefix;
    ///
    /// let prefix = KeyPrefix::new("root:");
    /// assert_eq!(prefix.apply("key"), "root:key");
    /// ```
    pub fn apply(&self, key: &str) -> String {
        let mut storage_key = String::with_capacity(self.0.len() + key.len());
        storage_key.push_str(&self.0);
        storage_key.push_str(key);
        storage_key
    }

    /// Returns the storage keys for a slice of logical keys, in order.
    pub fn apply_all(&self, keys: &[String]) -> Vec<String> {
        keys.iter().map(|key| self.apply(key)).collect()
    }

    /// Recovers the logical key from a storage key.
    ///
    /// # Errors
    ///
    /// Returns `CacheError::PrefixMismatch` if `storage_key` does not start
    /// with this prefix.
    ///
    /// # Examples
    ///
    /// ```
    /// use redcache_core::cache::KeyPrefix;
    ///
    /// let prefix = KeyPrefix::new("root:");
    /// assert_eq!(prefix.strip("root:a").unwrap(), "a");
    /// assert!(prefix.strip("other:a").is_err());
    /// ```
    pub fn strip<'a>(&self, storage_key: &'a str) -> Result<&'a str> {
        storage_key
            .strip_prefix(self.0.as_str())
            .ok_or_else(|| CacheError::PrefixMismatch {
                prefix: self.0.clone(),
                key: storage_key.to_string(),
            })
    }

    /// Returns the glob pattern matching every key under this prefix.
    ///
    /// Glob metacharacters inside the prefix are escaped so the pattern only
    /// matches keys that literally start with the prefix.
    ///
    /// # Examples
    ///
    /// ```
    /// use redcache_core::cache::KeyPrefix;
    ///
    /// assert_eq!(KeyPrefix::new("root:").pattern(), "root:*");
    /// assert_eq!(KeyPrefix::new("a*b:").pattern(), "a\\*b:*");
    /// ```
    pub fn pattern(&self) -> String {
        let mut pattern = escape_pattern(&self.0);
        pattern.push('*');
        pattern
    }
}

impl Default for KeyPrefix {
    fn default() -> Self {
        Self::new(DEFAULT_PREFIX)
    }
}

impl From<&str> for KeyPrefix {
    fn from(prefix: &str) -> Self {
        Self::new(prefix)
    }
}

impl From<String> for KeyPrefix {
    fn from(prefix: String) -> Self {
        Self(prefix)
    }
}

impl std::fmt::Display for KeyPrefix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Escapes the Redis glob metacharacters (`*`, `?`, `[`, `]`, `\`) in `literal`.
pub fn escape_pattern(literal: &str) -> String {
    let mut escaped = String::with_capacity(literal.len());
    for c in literal.chars() {
        if matches!(c, '*' | '?' | '[' | ']' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_prepends_prefix() {
        let prefix = KeyPrefix::new("root:");
        assert_eq!(prefix.apply("key"), "root:key");
        assert_eq!(prefix.apply(""), "root:");
    }

    #[test]
    fn test_apply_all_preserves_order() {
        let prefix = KeyPrefix::new("root:");
        let keys = vec!["b".to_string(), "a".to_string()];
        assert_eq!(prefix.apply_all(&keys), vec!["root:b", "root:a"]);
    }

    #[test]
    fn test_strip_reverses_apply() {
        let prefix = KeyPrefix::new("root:");
        let storage_key = prefix.apply("nested:key");
        assert_eq!(prefix.strip(&storage_key).unwrap(), "nested:key");
    }

    #[test]
    fn test_strip_only_removes_leading_prefix() {
        let prefix = KeyPrefix::new("root:");
        assert_eq!(prefix.strip("root:root:a").unwrap(), "root:a");
    }

    #[test]
    fn test_strip_mismatch_is_error() {
        let prefix = KeyPrefix::new("root:");
        let err = prefix.strip("other:a").unwrap_err();
        assert_eq!(
            err,
            CacheError::PrefixMismatch {
                prefix: "root:".to_string(),
                key: "other:a".to_string(),
            }
        );
    }

    #[test]
    fn test_empty_prefix() {
        let prefix = KeyPrefix::new("");
        assert_eq!(prefix.apply("a"), "a");
        assert_eq!(prefix.strip("a").unwrap(), "a");
        assert_eq!(prefix.pattern(), "*");
    }

    #[test]
    fn test_default_prefix() {
        assert_eq!(KeyPrefix::default().as_str(), DEFAULT_PREFIX);
    }

    #[test]
    fn test_escape_pattern() {
        assert_eq!(escape_pattern("plain:"), "plain:");
        assert_eq!(escape_pattern("a?b[c]d\\"), "a\\?b\\[c\\]d\\\\");
    }
}
