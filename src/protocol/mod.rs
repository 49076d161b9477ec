//! Protocol Module
//!
//! Request and response types for client-server communication.
//!
//! HTTP/1.1 framing is handled by `tiny_http`; the types here are what
//! the dispatcher sees:
//!
//! ```text
//! tiny_http::Request ──read_request──▶ Request ──dispatch──▶ Response
//!                                                              │
//! tiny_http::Response ◀──────────────into_reply────────────────┘
//! ```
//!
//! Every response announces `application/json`, error bodies included.
//! Paths are percent-decoded before routing.

mod request;
mod response;
mod adapter;

pub use request::Request;
pub use response::{Response, CONTENT_TYPE_JSON};
pub use adapter::{into_reply, parse_target, read_request, rejection, Reply};
