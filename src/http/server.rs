//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Build the gateway (outbound client, asset service) from config
//! - Create the Axum Router with a single catch-all handler
//! - Wire up middleware (request ID, tracing, request timeout)
//! - Serve until the shutdown signal fires

use std::sync::Arc;

use axum::{
    body::Body,
    extract::State,
    http::Request,
    response::Response,
    Router,
};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use crate::assets::{AssetService, DirAssets, NoAssets};
use crate::config::GatewayConfig;
use crate::gateway::Gateway;
use crate::http::request::{propagate_request_id_layer, set_request_id_layer};
use crate::resilience::request_timeout;
use crate::upstream::Upstream;

/// HTTP server for the gateway.
pub struct HttpServer {
    router: Router,
}

impl HttpServer {
    /// Create a server whose asset service follows `config.assets.root`.
    pub fn new(config: GatewayConfig) -> Result<Self, reqwest::Error> {
        let assets: Arc<dyn AssetService> = match &config.assets.root {
            Some(root) => {
                let assets = DirAssets::new(root);
                tracing::info!(root = %assets.root().display(), "Serving static assets");
                Arc::new(assets)
            }
            None => {
                tracing::info!("No asset root configured; non-API paths will 404");
                Arc::new(NoAssets)
            }
        };
        Self::with_assets(config, assets)
    }

    /// Create a server with an injected asset service.
    pub fn with_assets(
        config: GatewayConfig,
        assets: Arc<dyn AssetService>,
    ) -> Result<Self, reqwest::Error> {
        let upstream = Upstream::new(&config.upstream)?;
        let config = Arc::new(config);

        if config.api.xtoken().is_none() {
            tracing::warn!("XTOKEN is not set; every API request will be denied");
        }
        if config.api.backend_url().is_none() {
            tracing::warn!("BACKEND_URL is not set; API POST requests will fail");
        }

        let gateway = Gateway::new(config.clone(), upstream, assets);
        let router = build_router(&config, gateway);
        Ok(Self { router })
    }

    /// The fully layered router, for driving the gateway without a socket.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Run the server, accepting connections on the given listener.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                tracing::info!("Shutdown signal received");
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

/// Build the Axum router with all middleware layers.
#[allow(deprecated)]
pub fn build_router(config: &GatewayConfig, gateway: Gateway) -> Router {
    Router::new()
        .fallback(gateway_handler)
        .with_state(gateway)
        .layer(TimeoutLayer::new(request_timeout(&config.timeouts)))
        .layer(propagate_request_id_layer())
        .layer(TraceLayer::new_for_http())
        .layer(set_request_id_layer())
}

async fn gateway_handler(State(gateway): State<Gateway>, request: Request<Body>) -> Response {
    gateway.route_request(request).await
}
