//! Request ID middleware for HTTP request correlation
//!
//! Reuses a valid incoming `X-Request-Id` or generates a UUID v7, runs the
//! request inside a span carrying it, and echoes it on the response.

use axum::{
    extract::Request,
    http::{HeaderValue, header::HeaderName},
    middleware::Next,
    response::Response,
};
use tracing::Instrument;
use uuid::Uuid;

/// The header name for the request ID
pub const REQUEST_ID_HEADER: HeaderName = HeaderName::from_static("x-request-id");

/// Request ID stored in the request extensions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestId(pub Uuid);

impl std::fmt::Display for RequestId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

fn incoming_id(request: &Request) -> Option<Uuid> {
    request
        .headers()
        .get(&REQUEST_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .and_then(|s| Uuid::parse_str(s.trim()).ok())
}

/// Middleware function; install with `axum::middleware::from_fn(request_id)`
pub async fn request_id(mut request: Request, next: Next) -> Response {
    let id = RequestId(incoming_id(&request).unwrap_or_else(Uuid::now_v7));
    request.extensions_mut().insert(id);

    let span = tracing::info_span!(
        "http_request",
        request_id = %id,
        method = %request.method(),
        uri = %request.uri().path(),
    );

    let mut response = next.run(request).instrument(span).await;
    if let Ok(value) = HeaderValue::from_str(&id.to_string()) {
        response.headers_mut().insert(REQUEST_ID_HEADER, value);
    }
    response
}
