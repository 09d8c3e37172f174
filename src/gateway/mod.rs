//! The gateway core.
//!
//! # Data Flow
//! ```text
//! route_request
//!     → path starts with API prefix?
//!         yes → api.rs: token check → POST forward | GET demo fetch
//!         no  → asset service
//!                 → hit: returned unchanged
//!                 → miss + GET + extensionless path: index document
//!                 → miss otherwise: 404 Not found
//! ```
//!
//! # Design Decisions
//! - `Gateway` is a cheap clone: config and assets behind `Arc`
//! - Configuration is read-only; handlers never mutate it
//! - Exactly one outbound call per API request, no retries

mod api;

use std::sync::Arc;
use std::time::Instant;

use axum::body::Body;
use axum::http::{Method, Request, StatusCode, Uri};
use axum::response::{IntoResponse, Response};

use crate::assets::AssetService;
use crate::config::GatewayConfig;
use crate::error::GatewayError;
use crate::observability::metrics;
use crate::routing::{is_extensionless, PathPrefixMatcher};
use crate::upstream::Upstream;

/// Request handler state shared by every connection.
#[derive(Clone)]
pub struct Gateway {
    config: Arc<GatewayConfig>,
    api_matcher: PathPrefixMatcher,
    upstream: Upstream,
    assets: Arc<dyn AssetService>,
}

impl Gateway {
    pub fn new(
        config: Arc<GatewayConfig>,
        upstream: Upstream,
        assets: Arc<dyn AssetService>,
    ) -> Self {
        Self {
            api_matcher: PathPrefixMatcher::new(config.api.prefix.clone()),
            config,
            upstream,
            assets,
        }
    }

    /// Entry point for every inbound request.
    pub async fn route_request(&self, request: Request<Body>) -> Response {
        let start = Instant::now();
        let method = request.method().clone();

        let (route, response) = if self.api_matcher.matches(request.uri()) {
            ("api", self.handle_api(request).await)
        } else {
            ("assets", self.serve_asset(request).await)
        };

        metrics::record_request(route, &method, response.status().as_u16(), start);
        response
    }

    async fn serve_asset(&self, request: Request<Body>) -> Response {
        let fallback = (self.config.assets.spa_fallback
            && request.method() == Method::GET
            && is_extensionless(request.uri().path()))
        .then(|| index_request(&request, &self.config.assets.index_document));

        let response = self.assets.fetch(request).await;
        if response.status() != StatusCode::NOT_FOUND {
            return response;
        }

        match fallback {
            Some(index) => {
                tracing::debug!(uri = %index.uri(), "Asset miss, serving index document");
                self.assets.fetch(index).await
            }
            None => GatewayError::NotFound.into_response(),
        }
    }
}

/// Synthetic GET for the index document at the same origin, carrying the
/// original method, version and headers.
fn index_request(original: &Request<Body>, index_document: &str) -> Request<Body> {
    let path = format!("/{index_document}");
    let uri = match (original.uri().scheme(), original.uri().authority()) {
        (Some(scheme), Some(authority)) => Uri::builder()
            .scheme(scheme.clone())
            .authority(authority.clone())
            .path_and_query(path.as_str())
            .build()
            .ok(),
        _ => None,
    }
    .or_else(|| path.parse().ok())
    .unwrap_or_else(|| Uri::from_static("/index.html"));

    let mut request = Request::new(Body::empty());
    *request.method_mut() = original.method().clone();
    *request.version_mut() = original.version();
    *request.uri_mut() = uri;
    *request.headers_mut() = original.headers().clone();
    request
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::header;

    #[test]
    fn test_index_request_keeps_metadata() {
        let original = Request::builder()
            .uri("/dashboard?tab=1")
            .header(header::ACCEPT, "text/html")
            .body(Body::empty())
            .unwrap();

        let index = index_request(&original, "index.html");
        assert_eq!(index.uri(), "/index.html");
        assert_eq!(index.method(), Method::GET);
        assert_eq!(index.headers()[header::ACCEPT], "text/html");
    }

    #[test]
    fn test_index_request_same_origin() {
        let original = Request::builder()
            .uri("https://app.example.com/settings/profile")
            .body(Body::empty())
            .unwrap();

        let index = index_request(&original, "app.html");
        assert_eq!(index.uri(), "https://app.example.com/app.html");
    }
}
