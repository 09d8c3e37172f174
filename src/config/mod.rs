//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! optional config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → environment overlay (BACKEND_URL, XTOKEN)
//!     → validation.rs (semantic checks)
//!     → GatewayConfig (validated, immutable)
//!     → shared via Arc with the request handler
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; no request can change it
//! - All fields have defaults to allow minimal configs
//! - Environment lookup is injectable so tests never touch process state

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, load_config_with, ConfigError};
pub use schema::{
    ApiConfig, AssetsConfig, GatewayConfig, ListenerConfig, MethodPolicy, ObservabilityConfig,
    ResponseMode, SecurityConfig, TimeoutConfig, UpstreamConfig,
};
