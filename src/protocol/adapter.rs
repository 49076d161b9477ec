//! Translation between tiny_http messages and the dispatcher's types
//!
//! tiny_http owns connection handling (framing, keep-alive,
//! `Expect: 100-continue`). This module only reads what the dispatcher
//! needs out of a received request and turns a [`Response`] back into
//! something tiny_http can write.

use std::io::{Cursor, Read};

use bytes::Bytes;
use http::header::{HeaderName, HeaderValue};
use http::{HeaderMap, Method};

use crate::error::{RestError, Result};
use super::{Request, Response};

/// Reply type handed to `tiny_http::Request::respond`
pub type Reply = tiny_http::Response<Cursor<Vec<u8>>>;

/// Read a received request into a [`Request`]
///
/// The body is read in full, up to `max_body` bytes. A declared or actual
/// body above that limit is rejected with [`RestError::BodyTooLarge`]
/// before or while reading, never buffered whole.
pub fn read_request(incoming: &mut tiny_http::Request, max_body: usize) -> Result<Request> {
    let method = incoming.method().to_string();
    let method = Method::from_bytes(method.as_bytes())
        .map_err(|_| RestError::Protocol(format!("Invalid method: {:?}", method)))?;

    let (path, query) = parse_target(incoming.url())?;

    let headers = incoming
        .headers()
        .iter()
        .filter_map(|header| {
            let name = HeaderName::from_bytes(header.field.as_str().as_bytes()).ok()?;
            let value = HeaderValue::from_bytes(header.value.as_bytes()).ok()?;
            Some((name, value))
        })
        .collect::<HeaderMap>();

    if matches!(incoming.body_length(), Some(len) if len > max_body) {
        return Err(RestError::BodyTooLarge(max_body));
    }

    let mut body = Vec::new();
    incoming
        .as_reader()
        .take(max_body as u64 + 1)
        .read_to_end(&mut body)?;
    if body.len() > max_body {
        return Err(RestError::BodyTooLarge(max_body));
    }

    Ok(Request {
        method,
        path,
        query,
        headers,
        body: Bytes::from(body),
    })
}

/// Split a request target into a percent-decoded path and a raw query
///
/// Accepts origin-form (`/users?x=1`) and absolute-form
/// (`http://host/users`) targets. A path that decodes to invalid UTF-8
/// is a protocol error.
pub fn parse_target(target: &str) -> Result<(String, Option<String>)> {
    let origin = if let Some(rest) = target
        .strip_prefix("http://")
        .or_else(|| target.strip_prefix("https://"))
    {
        match rest.find('/') {
            Some(idx) => &rest[idx..],
            None => "/",
        }
    } else if target.starts_with('/') {
        target
    } else {
        return Err(RestError::Protocol(format!(
            "Unsupported request target: {:?}",
            target
        )));
    };

    let (raw_path, query) = match origin.split_once('?') {
        Some((path, query)) => (path, Some(query.to_string())),
        None => (origin, None),
    };

    let path = urlencoding::decode(raw_path)
        .map_err(|_| RestError::Protocol(format!("Path is not valid UTF-8: {:?}", raw_path)))?
        .into_owned();

    Ok((path, query))
}

/// Map a transport failure onto the response the client gets
pub fn rejection(err: &RestError) -> Response {
    match err {
        RestError::BodyTooLarge(_) => Response::payload_too_large(),
        other => Response::bad_request(&other.to_string()),
    }
}

/// Turn a [`Response`] into a tiny_http reply
///
/// Content-length and connection management are left to tiny_http.
pub fn into_reply(response: Response) -> Reply {
    let mut reply =
        tiny_http::Response::from_data(response.body.to_vec()).with_status_code(response.status.as_u16());

    for (name, value) in &response.headers {
        // Header values that are not visible ASCII cannot be represented
        if let Ok(header) = tiny_http::Header::from_bytes(name.as_str().as_bytes(), value.as_bytes()) {
            reply.add_header(header);
        }
    }

    reply
}
