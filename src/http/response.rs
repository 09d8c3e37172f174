//! Response construction helpers.
//!
//! The gateway answers with exactly two content types: `text/plain` for
//! errors and `application/json` for API results.

use axum::body::Body;
use axum::http::{header, HeaderValue, StatusCode};
use axum::response::Response;

pub const TEXT_PLAIN: &str = "text/plain";
pub const APPLICATION_JSON: &str = "application/json";

/// Plain-text response with the given status.
pub fn text(status: StatusCode, body: impl Into<String>) -> Response {
    with_content_type(status, Body::from(body.into()), TEXT_PLAIN)
}

/// `200 OK` JSON response from pre-serialized bytes.
pub fn json_bytes(body: impl Into<Body>) -> Response {
    with_content_type(StatusCode::OK, body.into(), APPLICATION_JSON)
}

fn with_content_type(status: StatusCode, body: Body, content_type: &'static str) -> Response {
    let mut response = Response::new(body);
    *response.status_mut() = status;
    response
        .headers_mut()
        .insert(header::CONTENT_TYPE, HeaderValue::from_static(content_type));
    response
}
