//! Resilience subsystem.
//!
//! # Data Flow
//! ```text
//! Request to backend or demo endpoint:
//!     → timeouts.rs (connect + total deadline)
//!     → On failure: terminal 500, no retry
//! ```
//!
//! # Design Decisions
//! - Timeouts are non-negotiable; every external call has a deadline
//! - Exactly one outbound attempt per request

pub mod timeouts;

pub use timeouts::{request_timeout, UpstreamTimeouts};
