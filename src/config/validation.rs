//! Configuration validation.
//!
//! Serde handles the syntactic side; this pass checks values that parse but
//! cannot work at runtime. All errors are collected, not just the first.

use thiserror::Error;
use url::Url;

use crate::config::schema::GatewayConfig;

/// A single semantic problem in a loaded configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("api.prefix must start with '/' (got {0:?})")]
    InvalidPrefix(String),

    #[error("api.backend_url is not an absolute http(s) URL: {0}")]
    InvalidBackendUrl(String),

    #[error("api.demo_url is not an absolute http(s) URL: {0}")]
    InvalidDemoUrl(String),

    #[error("{0} must be greater than zero")]
    ZeroValue(&'static str),

    #[error("assets.index_document must be a plain file name (got {0:?})")]
    InvalidIndexDocument(String),

    #[error(
        "timeouts.request_secs ({request_secs}s) must exceed upstream.timeout_ms ({timeout_ms}ms)"
    )]
    RequestDeadlineTooShort { request_secs: u64, timeout_ms: u64 },
}

/// Validate a configuration. Pure: `GatewayConfig → Result<(), Vec<ValidationError>>`.
pub fn validate_config(config: &GatewayConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if !config.api.prefix.starts_with('/') {
        errors.push(ValidationError::InvalidPrefix(config.api.prefix.clone()));
    }

    if let Some(url) = config.api.backend_url() {
        if !is_http_url(url) {
            errors.push(ValidationError::InvalidBackendUrl(url.to_string()));
        }
    }

    if !is_http_url(&config.api.demo_url) {
        errors.push(ValidationError::InvalidDemoUrl(config.api.demo_url.clone()));
    }

    if config.upstream.timeout_ms == 0 {
        errors.push(ValidationError::ZeroValue("upstream.timeout_ms"));
    }
    if config.upstream.connect_timeout_ms == 0 {
        errors.push(ValidationError::ZeroValue("upstream.connect_timeout_ms"));
    }
    if config.timeouts.request_secs == 0 {
        errors.push(ValidationError::ZeroValue("timeouts.request_secs"));
    }
    // The inbound deadline must outlast the outbound one, otherwise a slow
    // backend ends as an empty 408 instead of a forwarding error.
    let request_ms = config.timeouts.request_secs.saturating_mul(1000);
    if config.timeouts.request_secs > 0 && request_ms <= config.upstream.timeout_ms {
        errors.push(ValidationError::RequestDeadlineTooShort {
            request_secs: config.timeouts.request_secs,
            timeout_ms: config.upstream.timeout_ms,
        });
    }
    if config.security.max_body_size == 0 {
        errors.push(ValidationError::ZeroValue("security.max_body_size"));
    }

    let index = &config.assets.index_document;
    if index.is_empty() || index.contains('/') {
        errors.push(ValidationError::InvalidIndexDocument(index.clone()));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn is_http_url(raw: &str) -> bool {
    Url::parse(raw)
        .map(|url| matches!(url.scheme(), "http" | "https") && url.has_host())
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert_eq!(validate_config(&GatewayConfig::default()), Ok(()));
    }

    #[test]
    fn test_collects_every_error() {
        let mut config = GatewayConfig::default();
        config.api.prefix = "api".into();
        config.api.backend_url = Some("backend:8080/ingest".into());
        config.upstream.timeout_ms = 0;
        config.assets.index_document = "nested/index.html".into();

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 4);
        assert!(errors.contains(&ValidationError::InvalidPrefix("api".into())));
        assert!(errors.contains(&ValidationError::ZeroValue("upstream.timeout_ms")));
    }

    #[test]
    fn test_request_deadline_must_exceed_upstream_timeout() {
        let mut config = GatewayConfig::default();
        config.timeouts.request_secs = 1;
        config.upstream.timeout_ms = 3_000;
        assert_eq!(
            validate_config(&config),
            Err(vec![ValidationError::RequestDeadlineTooShort {
                request_secs: 1,
                timeout_ms: 3_000,
            }])
        );

        config.upstream.timeout_ms = 1_000;
        assert!(validate_config(&config).is_err());

        config.upstream.timeout_ms = 999;
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_unset_backend_is_not_an_error() {
        let mut config = GatewayConfig::default();
        config.api.backend_url = Some(String::new());
        assert!(validate_config(&config).is_ok());
    }
}
