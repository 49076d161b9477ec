//! Dispatch outcomes that end a request without a success response.

use http::StatusCode;
use thiserror::Error;

use crate::protocol::Response;

/// Result type alias for route handlers
pub type DispatchResult<T> = std::result::Result<T, DispatchError>;

/// The two ways a dispatched request can fail
///
/// Both are terminal for the request. Neither is ever produced after a
/// success status has been chosen.
#[derive(Debug, Error)]
pub enum DispatchError {
    /// No route matched, or the looked-up id is absent
    #[error("{0}")]
    NotFound(String),

    /// Body failed to decode, record was rejected, or serialization failed
    #[error("internal failure: {0}")]
    Internal(String),
}

impl DispatchError {
    /// Generic "not found" for unmatched routes
    pub fn no_route() -> Self {
        DispatchError::NotFound("not found".to_string())
    }

    /// Status code sent for this outcome
    pub fn status(&self) -> StatusCode {
        match self {
            DispatchError::NotFound(_) => StatusCode::NOT_FOUND,
            DispatchError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Build the wire response
    ///
    /// Internal details stay in the logs; the client only sees a fixed message.
    pub fn into_response(self) -> Response {
        match self {
            DispatchError::NotFound(message) => Response::not_found(&message),
            DispatchError::Internal(_) => Response::internal_error(),
        }
    }
}
