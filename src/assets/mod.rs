//! Static asset service.
//!
//! Non-API requests are handed to an [`AssetService`]. The gateway only relies
//! on one part of the contract: a miss is answered with `404 Not Found`.
//!
//! # Implementations
//! - [`DirAssets`]: files under a directory (tower-http `ServeDir`)
//! - [`NoAssets`]: every lookup misses; used when no asset root is configured

mod dir;

pub use dir::DirAssets;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::response::{IntoResponse, Response};

/// Capability to resolve a request against stored assets.
#[async_trait]
pub trait AssetService: Send + Sync + 'static {
    async fn fetch(&self, request: Request<Body>) -> Response;
}

/// Asset service with nothing in it.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoAssets;

#[async_trait]
impl AssetService for NoAssets {
    async fn fetch(&self, _request: Request<Body>) -> Response {
        StatusCode::NOT_FOUND.into_response()
    }
}
