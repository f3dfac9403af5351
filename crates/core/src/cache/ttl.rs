//! TTL resolution policy.

use std::time::Duration;

/// Resolves the expiry applied to a single write.
///
/// A non-zero `default_ttl` always wins over the per-call `ttl`. Otherwise
/// the per-call `ttl` is used, and `None` means the entry never expires.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use redcache_core::cache::resolve_ttl;
///
/// let default_ttl = Duration::from_secs(123);
/// let per_call = Some(Duration::from_secs(999));
/// assert_eq!(resolve_ttl(default_ttl, per_call), Some(default_ttl));
/// assert_eq!(resolve_ttl(Duration::ZERO, per_call), per_call);
/// assert_eq!(resolve_ttl(Duration::ZERO, None), None);
/// ```
pub fn resolve_ttl(default_ttl: Duration, ttl: Option<Duration>) -> Option<Duration> {
    if default_ttl.is_zero() {
        ttl
    } else {
        Some(default_ttl)
    }
}

/// Converts a TTL to whole milliseconds, truncating sub-millisecond parts.
pub fn ttl_millis(ttl: Duration) -> u64 {
    u64::try_from(ttl.as_millis()).unwrap_or(u64::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_wins_over_per_call() {
        let resolved = resolve_ttl(Duration::from_secs(123), Some(Duration::from_secs(999)));
        assert_eq!(resolved, Some(Duration::from_secs(123)));
    }

    #[test]
    fn test_default_applies_without_per_call() {
        let resolved = resolve_ttl(Duration::from_secs(5), None);
        assert_eq!(resolved, Some(Duration::from_secs(5)));
    }

    #[test]
    fn test_per_call_used_when_default_unset() {
        let resolved = resolve_ttl(Duration::ZERO, Some(Duration::from_secs(7)));
        assert_eq!(resolved, Some(Duration::from_secs(7)));
    }

    #[test]
    fn test_no_expiry_when_both_unset() {
        assert_eq!(resolve_ttl(Duration::ZERO, None), None);
    }

    #[test]
    fn test_millis_conversion() {
        assert_eq!(ttl_millis(Duration::from_secs(123)), 123_000);
        assert_eq!(ttl_millis(Duration::from_secs_f64(1.5)), 1_500);
        assert_eq!(ttl_millis(Duration::from_micros(2_999)), 2);
        assert_eq!(ttl_millis(Duration::ZERO), 0);
    }

    #[test]
    fn test_millis_saturates() {
        assert_eq!(ttl_millis(Duration::MAX), u64::MAX);
    }
}
