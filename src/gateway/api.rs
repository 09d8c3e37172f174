//! API handler: token check, then POST forward or GET demo fetch.

use axum::body::Body;
use axum::http::{Method, Request};
use axum::response::{IntoResponse, Response};
use axum::Json;

use super::Gateway;
use crate::config::MethodPolicy;
use crate::error::{ForwardError, GatewayError};
use crate::observability::metrics;
use crate::security::{extract_token, is_authorized};
use crate::upstream;

impl Gateway {
    /// Authenticate, then run the method branch. Always yields a complete
    /// response.
    pub async fn handle_api(&self, request: Request<Body>) -> Response {
        match self.try_handle_api(request).await {
            Ok(response) => response,
            Err(err) => {
                match &err {
                    GatewayError::AccessDenied => {
                        tracing::warn!("API request rejected: bad or missing token")
                    }
                    GatewayError::MethodNotAllowed => tracing::debug!("API method not allowed"),
                    other => {
                        if other.is_upstream_failure() {
                            metrics::record_upstream_failure();
                        }
                        tracing::error!(error = %other, "API request failed");
                    }
                }
                err.into_response()
            }
        }
    }

    async fn try_handle_api(&self, request: Request<Body>) -> Result<Response, GatewayError> {
        let token = extract_token(request.headers(), request.uri());
        if !is_authorized(token.as_deref(), self.config.api.xtoken()) {
            return Err(GatewayError::AccessDenied);
        }

        let method = request.method().clone();
        if method == Method::POST {
            return Ok(self.forward(request).await?);
        }

        if self.config.api.method_policy == MethodPolicy::Strict
            && method != Method::GET
            && method != Method::HEAD
        {
            return Err(GatewayError::MethodNotAllowed);
        }

        self.fetch_demo().await
    }

    /// Buffer the body and POST it to the configured backend.
    async fn forward(&self, request: Request<Body>) -> Result<Response, ForwardError> {
        let backend_url = self
            .config
            .api
            .backend_url()
            .ok_or(ForwardError::MissingBackendUrl)?;

        let (parts, body) = request.into_parts();
        let body = axum::body::to_bytes(body, self.config.security.max_body_size).await?;

        tracing::debug!(backend = %backend_url, bytes = body.len(), "Forwarding request body");

        let response = self.upstream.forward(backend_url, &parts.headers, body).await?;
        tracing::debug!(status = %response.status(), "Backend responded");

        Ok(upstream::render(self.config.api.response_mode, response).await?)
    }

    async fn fetch_demo(&self) -> Result<Response, GatewayError> {
        let value = self
            .upstream
            .fetch_json(&self.config.api.demo_url)
            .await
            .map_err(GatewayError::DemoFetch)?;
        Ok(Json(value).into_response())
    }
}
