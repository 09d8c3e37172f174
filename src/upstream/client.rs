//! Outbound HTTP client.
//!
//! One client is built at startup and cloned into every request; reqwest
//! pools connections internally.

use axum::body::Bytes;
use axum::http::{header, HeaderMap, HeaderName};

use crate::config::UpstreamConfig;
use crate::resilience::UpstreamTimeouts;

/// Headers describing the inbound connection rather than the message. The
/// outbound client recomputes these for its own connection.
const CONNECTION_HEADERS: [HeaderName; 9] = [
    header::HOST,
    header::CONTENT_LENGTH,
    header::TRANSFER_ENCODING,
    header::CONNECTION,
    header::TE,
    header::TRAILER,
    header::UPGRADE,
    header::PROXY_AUTHORIZATION,
    // The client does not decode compressed bodies.
    header::ACCEPT_ENCODING,
];

/// Cloneable handle to the outbound client.
#[derive(Debug, Clone)]
pub struct Upstream {
    client: reqwest::Client,
}

impl Upstream {
    pub fn new(config: &UpstreamConfig) -> Result<Self, reqwest::Error> {
        let timeouts = UpstreamTimeouts::from(config);

        let mut builder = reqwest::Client::builder()
            .connect_timeout(timeouts.connect)
            .timeout(timeouts.total)
            .user_agent(concat!("edge-gateway/", env!("CARGO_PKG_VERSION")));
        if !config.system_proxy {
            builder = builder.no_proxy();
        }

        Ok(Self {
            client: builder.build()?,
        })
    }

    /// POST `body` to `url` with the inbound headers.
    pub async fn forward(
        &self,
        url: &str,
        headers: &HeaderMap,
        body: Bytes,
    ) -> Result<reqwest::Response, reqwest::Error> {
        self.client
            .post(url)
            .headers(forwardable_headers(headers))
            .body(body)
            .send()
            .await
    }

    /// GET `url` and parse the body as JSON. Status codes are not inspected.
    pub async fn fetch_json(&self, url: &str) -> Result<serde_json::Value, reqwest::Error> {
        self.client.get(url).send().await?.json().await
    }
}

/// Copy of `headers` without connection-level fields. Repeated headers keep
/// every value, in order.
pub fn forwardable_headers(headers: &HeaderMap) -> HeaderMap {
    let mut forwarded = HeaderMap::with_capacity(headers.len());
    for (name, value) in headers {
        if !CONNECTION_HEADERS.contains(name) {
            forwarded.append(name.clone(), value.clone());
        }
    }
    forwarded
}
