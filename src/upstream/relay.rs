//! Rendering of a successful backend response for the client.
//!
//! `body` relays the backend's bytes. `metadata` renders a descriptive JSON
//! summary of the response itself (status, url, headers).

use std::collections::BTreeMap;

use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::config::ResponseMode;
use crate::http::response::json_bytes;

/// JSON description of a backend response.
#[derive(Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct BackendMetadata {
    pub status: u16,
    pub status_text: String,
    pub ok: bool,
    pub url: String,
    /// Lowercased names; repeated headers joined with ", ".
    pub headers: BTreeMap<String, String>,
}

impl From<&reqwest::Response> for BackendMetadata {
    fn from(response: &reqwest::Response) -> Self {
        let status = response.status();
        let mut headers: BTreeMap<String, String> = BTreeMap::new();
        for (name, value) in response.headers() {
            let value = String::from_utf8_lossy(value.as_bytes());
            headers
                .entry(name.as_str().to_string())
                .and_modify(|existing| {
                    existing.push_str(", ");
                    existing.push_str(&value);
                })
                .or_insert_with(|| value.into_owned());
        }

        Self {
            status: status.as_u16(),
            status_text: status.canonical_reason().unwrap_or_default().to_string(),
            ok: status.is_success(),
            url: response.url().to_string(),
            headers,
        }
    }
}

/// Turn the backend response into the client-facing `200 application/json`.
pub async fn render(
    mode: ResponseMode,
    response: reqwest::Response,
) -> Result<Response, reqwest::Error> {
    match mode {
        ResponseMode::Body => {
            let bytes = response.bytes().await?;
            Ok(json_bytes(bytes))
        }
        ResponseMode::Metadata => Ok(Json(BackendMetadata::from(&response)).into_response()),
    }
}
