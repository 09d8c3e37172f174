//! Shared-secret token authentication.
//!
//! The token travels in the `x-token` header or, failing that, the `x-token`
//! query parameter. Comparison is exact: case-sensitive, no trimming.

use axum::http::{HeaderMap, Uri};

/// Header and query parameter carrying the shared secret.
pub const TOKEN_HEADER: &str = "x-token";

/// Extract the presented token. An empty header counts as absent and falls
/// through to the query string.
pub fn extract_token(headers: &HeaderMap, uri: &Uri) -> Option<String> {
    if let Some(value) = headers.get(TOKEN_HEADER) {
        if !value.is_empty() {
            // A non-UTF-8 header is presented but can never match.
            return Some(match std::str::from_utf8(value.as_bytes()) {
                Ok(token) => token.to_string(),
                Err(_) => String::new(),
            });
        }
    }

    uri.query().and_then(|query| {
        url::form_urlencoded::parse(query.as_bytes())
            .find(|(key, _)| key == TOKEN_HEADER)
            .map(|(_, value)| value.into_owned())
            .filter(|token| !token.is_empty())
    })
}

/// True only when both sides are present and byte-for-byte equal.
pub fn is_authorized(presented: Option<&str>, expected: Option<&str>) -> bool {
    match (presented, expected) {
        (Some(presented), Some(expected)) if !expected.is_empty() => presented == expected,
        _ => false,
    }
}
