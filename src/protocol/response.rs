//! Response definitions
//!
//! Represents responses to clients.

use bytes::Bytes;
use http::header::{HeaderValue, CONTENT_TYPE};
use http::{HeaderMap, StatusCode};

/// Media type announced on every response
pub const CONTENT_TYPE_JSON: &str = "application/json";

/// A response to send to client
#[derive(Debug, Clone)]
pub struct Response {
    /// Status code
    pub status: StatusCode,

    /// Response headers (framing headers are added by the transport)
    pub headers: HeaderMap,

    /// Body: JSON for successes, plain text for errors
    pub body: Bytes,
}

impl Response {
    /// Create a response with the JSON content-type already set
    pub fn new(status: StatusCode, body: impl Into<Bytes>) -> Self {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static(CONTENT_TYPE_JSON));
        Self {
            status,
            headers,
            body: body.into(),
        }
    }

    /// Create an OK response carrying an already-serialized body
    pub fn ok(body: impl Into<Bytes>) -> Self {
        Self::new(StatusCode::OK, body)
    }

    /// Create a NOT_FOUND response with a plain text message
    pub fn not_found(message: &str) -> Self {
        Self::new(StatusCode::NOT_FOUND, message.as_bytes().to_vec())
    }

    /// Create an INTERNAL_SERVER_ERROR response
    pub fn internal_error() -> Self {
        Self::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            Bytes::from_static(b"internal server error"),
        )
    }

    /// Create a BAD_REQUEST response for unreadable requests
    ///
    /// Only the transport layer uses this; the dispatcher never does.
    pub fn bad_request(message: &str) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message.as_bytes().to_vec())
    }

    /// Create a PAYLOAD_TOO_LARGE response
    pub fn payload_too_large() -> Self {
        Self::new(
            StatusCode::PAYLOAD_TOO_LARGE,
            Bytes::from_static(b"payload too large"),
        )
    }

    /// Create a SERVICE_UNAVAILABLE response for a saturated worker pool
    pub fn busy() -> Self {
        Self::new(
            StatusCode::SERVICE_UNAVAILABLE,
            Bytes::from_static(b"server busy"),
        )
    }

    /// Body as UTF-8 text, lossily
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}
