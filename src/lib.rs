//! Edge request gateway library.
//!
//! Authenticates `/api` requests with a shared-secret token, forwards POST
//! bodies to a single backend, serves a demo JSON payload for GET, and hands
//! every other path to a static asset service with SPA index fallback.

pub mod assets;
pub mod config;
pub mod error;
pub mod gateway;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod resilience;
pub mod routing;
pub mod security;
pub mod upstream;

pub use config::GatewayConfig;
pub use gateway::Gateway;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
