//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Gateway and middleware produce:
//!     → logging.rs (structured tracing events, tower-http request spans)
//!     → metrics.rs (counters, histograms)
//!
//! Consumers:
//!     → stdout (tracing-subscriber fmt layer)
//!     → Metrics endpoint (Prometheus scrape, optional)
//! ```
//!
//! # Design Decisions
//! - Request ID (x-request-id) is attached to every request and response
//! - Log filter configurable via config and RUST_LOG
//! - Metrics disabled by default

pub mod logging;
pub mod metrics;
