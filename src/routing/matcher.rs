//! Route matching logic.
//!
//! # Responsibilities
//! - Match the API path prefix (case-sensitive)
//! - Decide whether a path names a file (has an extension)
//!
//! # Design Decisions
//! - Plain prefix matching, no regex
//! - Prefix matching is on the raw path; `/apiary` matches `/api`

use axum::http::Uri;

/// Matches the request path prefix.
#[derive(Debug, Clone)]
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

    pub fn matches(&self, uri: &Uri) -> bool {
        uri.path().starts_with(&self.prefix)
    }
}

/// True when the last path segment carries no `.`, i.e. the path looks like
/// a client-side route rather than a file.
pub fn is_extensionless(path: &str) -> bool {
    let last_segment = path.rsplit('/').next().unwrap_or(path);
    !last_segment.contains('.')
}
