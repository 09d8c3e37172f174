//! Outbound calls: the backend forward (POST) and the demo fetch (GET).
//!
//! # Data Flow
//! ```text
//! handle_api
//!     → client.rs (single bounded outbound call)
//!     → relay.rs (render the backend response per ResponseMode)
//! ```

pub mod client;
pub mod relay;

pub use client::{forwardable_headers, Upstream};
pub use relay::{render, BackendMetadata};
