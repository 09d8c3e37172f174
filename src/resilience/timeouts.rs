//! Timeout enforcement.
//!
//! # Responsibilities
//! - Bound every outbound call (connect + total deadline)
//! - Bound the whole inbound request via tower-http
//!
//! # Design Decisions
//! - Outbound deadlines live on the reqwest client, so a timeout surfaces as
//!   an ordinary `reqwest::Error` and takes the regular 500 failure path
//! - No retries after a timeout

use std::time::Duration;

use crate::config::{TimeoutConfig, UpstreamConfig};

/// Outbound deadlines derived from configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UpstreamTimeouts {
    pub connect: Duration,
    pub total: Duration,
}

impl From<&UpstreamConfig> for UpstreamTimeouts {
    fn from(config: &UpstreamConfig) -> Self {
        let total = Duration::from_millis(config.timeout_ms);
        Self {
            // A connect deadline longer than the total deadline is meaningless.
            connect: Duration::from_millis(config.connect_timeout_ms).min(total),
            total,
        }
    }
}

/// Deadline for the whole inbound request.
pub fn request_timeout(config: &TimeoutConfig) -> Duration {
    Duration::from_secs(config.request_secs)
}
