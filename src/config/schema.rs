//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the gateway.
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

/// Default endpoint serving the demonstration payload for `GET /api`.
pub const DEFAULT_DEMO_URL: &str = "https://jsonplaceholder.typicode.com/todos/1";

/// Root configuration for the gateway.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct GatewayConfig {
    /// Listener configuration (bind address).
    pub listener: ListenerConfig,

    /// API surface: prefix, shared secret and backend target.
    pub api: ApiConfig,

    /// Static asset store and SPA fallback.
    pub assets: AssetsConfig,

    /// Outbound HTTP client settings.
    pub upstream: UpstreamConfig,

    /// Inbound timeout configuration.
    pub timeouts: TimeoutConfig,

    /// Request limits.
    pub security: SecurityConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:8787").
    pub bind_address: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8787".to_string(),
        }
    }
}

/// How a successful backend response is rendered back to the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ResponseMode {
    /// Relay the backend's response body bytes.
    #[default]
    Body,
    /// Render a JSON description of the backend response (status, url, headers).
    Metadata,
}

/// Handling of API methods other than GET and POST.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum MethodPolicy {
    /// Anything that is not POST gets the demo fetch.
    #[default]
    Permissive,
    /// Only GET, HEAD and POST are served; everything else is 405.
    Strict,
}

/// API surface configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Path prefix that selects the API handler.
    pub prefix: String,

    /// Forwarding target for POST requests (`BACKEND_URL`).
    pub backend_url: Option<String>,

    /// Shared secret expected in `x-token` (`XTOKEN`).
    pub xtoken: Option<String>,

    /// Endpoint fetched for GET requests.
    pub demo_url: String,

    pub response_mode: ResponseMode,

    pub method_policy: MethodPolicy,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            prefix: "/api".to_string(),
            backend_url: None,
            xtoken: None,
            demo_url: DEFAULT_DEMO_URL.to_string(),
            response_mode: ResponseMode::default(),
            method_policy: MethodPolicy::default(),
        }
    }
}

impl ApiConfig {
    /// Backend URL, treating an empty string as unset.
    pub fn backend_url(&self) -> Option<&str> {
        self.backend_url.as_deref().filter(|url| !url.is_empty())
    }

    /// Expected token, treating an empty string as unset.
    pub fn xtoken(&self) -> Option<&str> {
        self.xtoken.as_deref().filter(|token| !token.is_empty())
    }
}

/// Static asset configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct AssetsConfig {
    /// Directory served for non-API paths. `None` means every lookup is a miss.
    pub root: Option<String>,

    /// Document served for extensionless GET misses.
    pub index_document: String,

    /// Retry extensionless GET misses against the index document.
    pub spa_fallback: bool,
}

impl Default for AssetsConfig {
    fn default() -> Self {
        Self {
            root: None,
            index_document: "index.html".to_string(),
            spa_fallback: true,
        }
    }
}

/// Outbound client configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct UpstreamConfig {
    /// Total deadline for one outbound call, in milliseconds.
    pub timeout_ms: u64,

    /// Connection establishment deadline, in milliseconds.
    pub connect_timeout_ms: u64,

    /// Honour `HTTP_PROXY`/`HTTPS_PROXY` from the environment.
    pub system_proxy: bool,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            timeout_ms: 10_000,
            connect_timeout_ms: 5_000,
            system_proxy: true,
        }
    }
}

/// Timeout configuration for inbound requests.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TimeoutConfig {
    /// Request timeout (total time for request/response) in seconds.
    pub request_secs: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self { request_secs: 30 }
    }
}

/// Request limits.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct SecurityConfig {
    /// Maximum buffered body size in bytes.
    pub max_body_size: usize,
}

impl Default for SecurityConfig {
    fn default() -> Self {
        Self {
            max_body_size: 2 * 1024 * 1024, // 2MB
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Enable metrics endpoint.
    pub metrics_enabled: bool,

    /// Metrics endpoint bind address.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            metrics_enabled: false,
            metrics_address: "0.0.0.0:9090".to_string(),
        }
    }
}
