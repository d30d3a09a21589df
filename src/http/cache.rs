//! HTTP cache control module
//!
//! Provides `ETag` generation, conditional request handling, and the
//! Cache-Control policy applied to production assets.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

/// Generate `ETag` using fast hashing
///
/// Returns a quoted `ETag` string, e.g., `"abc123def"`
#[must_use]
pub fn generate_etag(content: &[u8]) -> String {
    let mut hasher = DefaultHasher::new();
    content.hash(&mut hasher);
    let v = hasher.finish();
    format!("\"{v:x}\"")
}

/// Check if client's `If-None-Match` header matches the server's `ETag`
///
/// Supports a single `ETag`, a comma-separated list, and the `*` wildcard.
/// Returns true if matched (should return 304).
#[must_use]
pub fn check_etag_match(if_none_match: Option<&str>, etag: &str) -> bool {
    if_none_match.is_some_and(|client_etag| {
        client_etag
            .split(',')
            .any(|e| e.trim() == etag || e.trim() == "*")
    })
}

/// Cache control policy for served files
#[derive(Debug, Clone, Copy)]
pub enum CachePolicy {
    /// Public cache with specified max-age (seconds); used for build output
    Public(u32),
    /// No caching; used for in-progress source files in development mode
    NoCache,
}

impl CachePolicy {
    /// Convert to Cache-Control header value
    #[must_use]
    pub fn to_header_value(self) -> String {
        match self {
            Self::Public(max_age) => format!("public, max-age={max_age}"),
            Self::NoCache => "no-cache".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_etag() {
        let etag = generate_etag(b"hello world");
        assert!(etag.starts_with('"'));
        assert!(etag.ends_with('"'));
        assert!(etag.len() > 2);
    }

    #[test]
    fn test_etag_consistency() {
        assert_eq!(generate_etag(b"same content"), generate_etag(b"same content"));
        assert_ne!(generate_etag(b"content a"), generate_etag(b"content b"));
    }

    #[test]
    fn test_check_etag_match() {
        let etag = "\"abc123\"";
        assert!(check_etag_match(Some("\"abc123\""), etag));
        assert!(check_etag_match(Some("\"xyz\", \"abc123\""), etag));
        assert!(check_etag_match(Some("*"), etag));
        assert!(!check_etag_match(Some("\"different\""), etag));
        assert!(!check_etag_match(None, etag));
    }

    #[test]
    fn test_cache_policy() {
        assert_eq!(
            CachePolicy::Public(3600).to_header_value(),
            "public, max-age=3600"
        );
        assert_eq!(CachePolicy::NoCache.to_header_value(), "no-cache");
    }
}
