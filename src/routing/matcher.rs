//! Link acceptance checks applied before path matching.
//!
//! # Responsibilities
//! - Match the URL scheme (web links only)
//! - Match the URL host (exact match, case-insensitive)
//! - Combine conditions with AND semantics
//!
//! # Design Decisions
//! - Host matching is case-insensitive
//! - An empty host list accepts nothing
//! - Path matching is not a `Matcher`; it lives in `pattern.rs` because it
//!   produces bindings, not a yes/no answer

use url::Url;

/// Trait for matching inbound links against conditions.
pub trait Matcher: Send + Sync + std::fmt::Debug {
    /// Returns true if the link matches this condition.
    fn matches(&self, url: &Url) -> bool;
}

/// Matches the URL host against a set of accepted hosts.
#[derive(Debug, Clone)]
pub struct HostMatcher {
    expected_hosts: Vec<String>,
}

impl HostMatcher {
    /// Create a new host matcher.
    /// Hosts are normalized to lowercase for case-insensitive matching.
    pub fn new<I, S>(hosts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            expected_hosts: hosts.into_iter().map(|h| h.into().to_lowercase()).collect(),
        }
    }
}

impl Matcher for HostMatcher {
    fn matches(&self, url: &Url) -> bool {
        url.host_str()
            .map(|h| {
                let host = h.to_lowercase();
                self.expected_hosts.iter().any(|expected| *expected == host)
            })
            .unwrap_or(false)
    }
}

/// Matches `http` and `https` links.
#[derive(Debug, Clone, Default)]
pub struct WebSchemeMatcher;

impl Matcher for WebSchemeMatcher {
    fn matches(&self, url: &Url) -> bool {
        matches!(url.scheme(), "http" | "https")
    }
}

/// Combines multiple matchers with AND semantics.
#[derive(Debug)]
pub struct AndMatcher {
    matchers: Vec<Box<dyn Matcher>>,
}

impl AndMatcher {
    pub fn new(matchers: Vec<Box<dyn Matcher>>) -> Self {
        Self { matchers }
    }
}

impl Matcher for AndMatcher {
    fn matches(&self, url: &Url) -> bool {
        self.matchers.iter().all(|m| m.matches(url))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn url(s: &str) -> Url {
        Url::parse(s).unwrap()
    }

    #[test]
    fn test_host_matcher() {
        let matcher = HostMatcher::new(["wordpress.com", "WWW.wordpress.com"]);

        assert!(matcher.matches(&url("https://wordpress.com/read")));
        assert!(matcher.matches(&url("https://WordPress.COM/read"))); // Case insensitive
        assert!(matcher.matches(&url("https://www.wordpress.com/read")));
        assert!(!matcher.matches(&url("https://example.com/read")));
        assert!(!matcher.matches(&url("mailto:someone@wordpress.com")));
    }

    #[test]
    fn test_empty_host_list() {
        let matcher = HostMatcher::new(Vec::<String>::new());
        assert!(!matcher.matches(&url("https://wordpress.com/read")));
    }

    #[test]
    fn test_scheme_matcher() {
        let matcher = WebSchemeMatcher;

        assert!(matcher.matches(&url("https://wordpress.com/read")));
        assert!(matcher.matches(&url("http://wordpress.com/read")));
        assert!(!matcher.matches(&url("wordpress://read")));
        assert!(!matcher.matches(&url("ftp://wordpress.com/read")));
    }

    #[test]
    fn test_and_matcher() {
        let matcher = AndMatcher::new(vec![
            Box::new(WebSchemeMatcher),
            Box::new(HostMatcher::new(["wordpress.com"])),
        ]);

        assert!(matcher.matches(&url("https://wordpress.com/tag/rust")));
        assert!(!matcher.matches(&url("ftp://wordpress.com/tag/rust")));
        assert!(!matcher.matches(&url("https://example.com/tag/rust")));
    }
}
