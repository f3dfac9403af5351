//! Pure pattern matching functions for cache keys.
//!
//! Patterns follow the Redis `KEYS` glob dialect:
//!
//! - `*` matches any sequence of characters (including none)
//! - `?` matches exactly one character
//! - `[abc]`, `[^abc]` and `[a-z]` match one character from a class
//! - `\x` matches the character `x` literally

/// Checks if a cache key matches a glob pattern.
///
/// # Examples
///
/// ```
/// use redcache_core::cache::pattern_matches;
///
/// // Exact match
/// assert!(pattern_matches("user:123", "user:123"));
///
/// // Wildcard at end
/// assert!(pattern_matches("redcache:*", "redcache:session:42"));
///
/// // Single character and classes
/// assert!(pattern_matches("h?llo", "hello"));
/// assert!(pattern_matches("h[ae]llo", "hallo"));
///
/// // Escaped wildcard only matches a literal `*`
/// assert!(pattern_matches("a\\*:*", "a*:key"));
/// assert!(!pattern_matches("a\\*:*", "ab:key"));
/// ```
pub fn pattern_matches(pattern: &str, key: &str) -> bool {
    if pattern == "*" {
        return true;
    }

    let pattern: Vec<char> = pattern.chars().collect();
    let key: Vec<char> = key.chars().collect();

    let (mut p, mut k) = (0, 0);
    // Pattern position after the last `*` and the key position it was tried at.
    let mut backtrack: Option<(usize, usize)> = None;

    while k < key.len() {
        if pattern.get(p) == Some(&'*') {
            p += 1;
            backtrack = Some((p, k));
            continue;
        }

        if p < pattern.len() {
            if let Some(width) = match_one(&pattern[p..], key[k]) {
                p += width;
                k += 1;
                continue;
            }
        }

        // Let the last `*` swallow one more character and retry.
        match backtrack {
            Some((star_p, star_k)) => {
                p = star_p;
                k = star_k + 1;
                backtrack = Some((star_p, star_k + 1));
            }
            None => return false,
        }
    }

    pattern[p..].iter().all(|c| *c == '*')
}

/// Matches the pattern token at the start of `pattern` against `c`.
///
/// Returns the number of pattern characters consumed on a match.
fn match_one(pattern: &[char], c: char) -> Option<usize> {
    match pattern[0] {
        '?' => Some(1),
        '\\' => match pattern.get(1) {
            Some(&escaped) => (escaped == c).then_some(2),
            None => (c == '\\').then_some(1),
        },
        '[' => match match_class(pattern, c) {
            Some((matched, width)) => matched.then_some(width),
            // Unterminated class, the bracket is a literal.
            None => (c == '[').then_some(1),
        },
        literal => (literal == c).then_some(1),
    }
}

/// Evaluates a `[...]` class starting at `pattern[0]`.
///
/// Returns whether `c` belongs to the class and the width of the class, or
/// `None` if the class is never closed.
fn match_class(pattern: &[char], c: char) -> Option<(bool, usize)> {
    let mut i = 1;
    let negate = pattern.get(i) == Some(&'^');
    if negate {
        i += 1;
    }

    let mut matched = false;
    while let Some(&current) = pattern.get(i) {
        match current {
            ']' => return Some((matched != negate, i + 1)),
            '\\' => {
                let escaped = *pattern.get(i + 1)?;
                matched |= escaped == c;
                i += 2;
            }
            start
                if pattern.get(i + 1) == Some(&'-')
                    && pattern.get(i + 2).is_some_and(|end| *end != ']') =>
            {
                let end = pattern[i + 2];
                let (lo, hi) = if start <= end {
                    (start, end)
                } else {
                    (end, start)
                };
                matched |= (lo..=hi).contains(&c);
                i += 3;
            }
            literal => {
                matched |= literal == c;
                i += 1;
            }
        }
    }

    None
}
