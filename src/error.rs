//! Request-time error taxonomy.
//!
//! Every failure ends the request with a complete HTTP response. Nothing is
//! retried and nothing propagates past the handler.

use std::error::Error as _;

use axum::http::{header, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::http::response::text;

/// Body used when a forwarding failure carries no description.
pub const UNKNOWN_ERROR: &str = "Unknown error occurred";

/// Failures on the POST forwarding path.
#[derive(Debug, Error)]
pub enum ForwardError {
    #[error("BACKEND_URL environment variable not set")]
    MissingBackendUrl,

    #[error(transparent)]
    Body(#[from] axum::Error),

    #[error(transparent)]
    Upstream(#[from] reqwest::Error),
}

impl ForwardError {
    /// Human-readable description including its causes, or [`UNKNOWN_ERROR`]
    /// if the whole chain is blank.
    pub fn message(&self) -> String {
        let mut parts = vec![self.to_string()];
        let mut source = self.source();
        while let Some(err) = source {
            parts.push(err.to_string());
            source = err.source();
        }
        parts.retain(|part| !part.trim().is_empty());

        if parts.is_empty() {
            UNKNOWN_ERROR.to_string()
        } else {
            parts.join(": ")
        }
    }
}

/// Errors that terminate an inbound request.
#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("access denied")]
    AccessDenied,

    #[error("forwarding failed: {0}")]
    Forward(#[from] ForwardError),

    #[error("demo fetch failed: {0}")]
    DemoFetch(reqwest::Error),

    #[error("method not allowed")]
    MethodNotAllowed,

    #[error("not found")]
    NotFound,
}

impl GatewayError {
    pub fn status(&self) -> StatusCode {
        match self {
            GatewayError::AccessDenied => StatusCode::FORBIDDEN,
            GatewayError::Forward(_) | GatewayError::DemoFetch(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            GatewayError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            GatewayError::NotFound => StatusCode::NOT_FOUND,
        }
    }

    /// True only when an outbound call was attempted and failed.
    pub fn is_upstream_failure(&self) -> bool {
        matches!(
            self,
            GatewayError::Forward(ForwardError::Upstream(_)) | GatewayError::DemoFetch(_)
        )
    }
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let status = self.status();
        match self {
            GatewayError::AccessDenied => text(status, "Access denied"),
            GatewayError::Forward(err) => {
                text(status, format!("Error forwarding request: {}", err.message()))
            }
            GatewayError::DemoFetch(_) => text(status, "Error fetching data"),
            GatewayError::MethodNotAllowed => {
                let mut response = text(status, "Method not allowed");
                response
                    .headers_mut()
                    .insert(header::ALLOW, HeaderValue::from_static("GET, HEAD, POST"));
                response
            }
            GatewayError::NotFound => text(status, "Not found"),
        }
    }
}
