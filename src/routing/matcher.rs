//! Route matching logic.
//!
//! # Responsibilities
//! - Match a request path against a registered prefix
//! - Expose the path remainder after the prefix
//!
//! # Design Decisions
//! - Path matching is case-sensitive
//! - A prefix ending in `/` matches its whole subtree
//! - A prefix without a trailing `/` matches only itself
//! - No regex to guarantee O(n) matching

/// Matches the request path against a registered prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathPrefixMatcher {
    prefix: String,
}

impl PathPrefixMatcher {
    /// Create a new path prefix matcher.
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    /// The registered prefix.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Whether the prefix covers a subtree rather than a single path.
    pub fn is_subtree(&self) -> bool {
        self.prefix.ends_with('/')
    }

    /// Returns the part of `path` after the prefix, or `None` if it does not match.
    pub fn remainder<'a>(&self, path: &'a str) -> Option<&'a str> {
        if self.is_subtree() {
            path.strip_prefix(self.prefix.as_str())
        } else if path == self.prefix {
            Some("")
        } else {
            None
        }
    }

    /// Returns true if the path matches this prefix.
    pub fn matches(&self, path: &str) -> bool {
        self.remainder(path).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subtree_matcher() {
        let matcher = PathPrefixMatcher::new("/3/device/");
        assert!(matcher.is_subtree());

        assert_eq!(matcher.remainder("/3/device/abcdef"), Some("abcdef"));
        assert_eq!(matcher.remainder("/3/device/"), Some(""));
        assert_eq!(matcher.remainder("/3/device/ab/cd"), Some("ab/cd"));
        assert_eq!(matcher.remainder("/3/device"), None);
        assert_eq!(matcher.remainder("/3/DEVICE/ab"), None);
    }

    #[test]
    fn test_exact_matcher() {
        let matcher = PathPrefixMatcher::new("/vui/VuiServlet");
        assert!(!matcher.is_subtree());

        assert!(matcher.matches("/vui/VuiServlet"));
        assert!(!matcher.matches("/vui/VuiServlet/"));
        assert!(!matcher.matches("/vui/VuiServletX"));
        assert!(!matcher.matches("/vui"));
    }
}
