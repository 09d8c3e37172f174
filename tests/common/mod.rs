//! Shared utilities for integration tests.

#![allow(dead_code)]

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use axum::body::{Body, Bytes};
use axum::http::{HeaderMap, Request, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::Router;
use edge_gateway::assets::AssetService;
use edge_gateway::config::GatewayConfig;
use edge_gateway::HttpServer;
use tokio::net::TcpListener;

pub const TOKEN: &str = "9999";

/// What a mock backend saw.
#[derive(Debug, Clone)]
pub struct Captured {
    pub headers: HeaderMap,
    pub body: Bytes,
}

pub type Captures = Arc<Mutex<Vec<Captured>>>;

/// Serve `app` on an ephemeral loopback port.
pub async fn spawn_app(app: Router) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });
    addr
}

/// Backend recording every POST to `/ingest` and answering with a fixed JSON body.
pub async fn start_recording_backend(reply: &'static str) -> (SocketAddr, Captures) {
    let captures: Captures = Arc::default();
    let sink = captures.clone();
    let app = Router::new().route(
        "/ingest",
        post(move |headers: HeaderMap, body: Bytes| {
            let sink = sink.clone();
            async move {
                sink.lock().unwrap().push(Captured { headers, body });
                (
                    StatusCode::ACCEPTED,
                    [("content-type", "application/json"), ("x-backend", "mock")],
                    reply,
                )
            }
        }),
    );
    (spawn_app(app).await, captures)
}

/// Backend that stalls longer than any test timeout.
pub async fn start_slow_backend(delay: Duration) -> SocketAddr {
    let app = Router::new().route(
        "/ingest",
        post(move || async move {
            tokio::time::sleep(delay).await;
            "late"
        }),
    );
    spawn_app(app).await
}

/// Demo endpoint serving `/todos/1` with the given raw body.
pub async fn start_demo_endpoint(body: &'static str) -> SocketAddr {
    let app = Router::new().route(
        "/todos/1",
        get(move || async move { ([("content-type", "application/json")], body) }),
    );
    spawn_app(app).await
}

/// In-memory asset service recording the paths it was asked for.
#[derive(Default)]
pub struct StubAssets {
    files: HashMap<String, &'static str>,
    pub requests: Mutex<Vec<String>>,
}

impl StubAssets {
    pub fn with_files(files: &[(&str, &'static str)]) -> Self {
        Self {
            files: files.iter().map(|(p, c)| (p.to_string(), *c)).collect(),
            requests: Mutex::default(),
        }
    }

    pub fn requested(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl AssetService for StubAssets {
    async fn fetch(&self, request: Request<Body>) -> Response {
        let path = request.uri().path().to_string();
        self.requests.lock().unwrap().push(path.clone());
        match self.files.get(&path) {
            Some(content) => (StatusCode::OK, *content).into_response(),
            None => StatusCode::NOT_FOUND.into_response(),
        }
    }
}

/// Config with a token, no system proxy and short outbound timeouts.
pub fn test_config() -> GatewayConfig {
    let mut config = GatewayConfig::default();
    config.api.xtoken = Some(TOKEN.to_string());
    config.upstream.system_proxy = false;
    config.upstream.timeout_ms = 2_000;
    config.upstream.connect_timeout_ms = 1_000;
    config
}

/// Router for `config` backed by `assets`.
pub fn router(config: GatewayConfig, assets: Arc<dyn AssetService>) -> Router {
    HttpServer::with_assets(config, assets).unwrap().router()
}

pub async fn body_string(response: Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}
