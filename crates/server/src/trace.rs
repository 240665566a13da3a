//! Request correlation.
//!
//! Every request carries a [`TraceId`]: the client's `x-trace-id` header when
//! usable, a fresh UUID otherwise. Handler logs run inside a span tagged with
//! it and the ID is echoed on the response.

use axum::extract::Request;
use axum::http::{HeaderMap, HeaderValue};
use axum::middleware::Next;
use axum::response::Response;
use std::fmt;
use tracing::Instrument;
use uuid::Uuid;

/// Header carrying the trace ID in both directions.
pub const TRACE_ID_HEADER: &str = "x-trace-id";

/// Client-supplied IDs are cut to this many characters.
const MAX_TRACE_ID_LEN: usize = 128;

/// Correlation ID for one request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TraceId(String);

impl TraceId {
    /// A fresh random ID.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Take the client's ID from the request headers.
    ///
    /// Only printable ASCII survives; a missing or empty result yields a
    /// generated ID instead.
    pub fn from_headers(headers: &HeaderMap) -> Self {
        let Some(raw) = headers
            .get(TRACE_ID_HEADER)
            .and_then(|value| value.to_str().ok())
        else {
            return Self::generate();
        };

        let cleaned: String = raw
            .chars()
            .filter(|c| c.is_ascii_graphic() || *c == ' ')
            .take(MAX_TRACE_ID_LEN)
            .collect();

        match cleaned.trim() {
            "" => Self::generate(),
            trimmed => Self(trimmed.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TraceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Run the request inside a span tagged with its [`TraceId`] and echo the ID
/// on the response.
pub async fn trace_id_middleware(req: Request, next: Next) -> Response {
    let trace_id = TraceId::from_headers(req.headers());
    let span = tracing::info_span!(
        "request",
        trace_id = %trace_id,
        method = %req.method(),
        path = %req.uri().path(),
    );

    let mut response = next.run(req).instrument(span).await;

    if let Ok(value) = HeaderValue::from_str(trace_id.as_str()) {
        response.headers_mut().insert(TRACE_ID_HEADER, value);
    }
    response
}
