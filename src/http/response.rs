//! HTTP response building module
//!
//! Builds the final hyper response from a status/content-type descriptor
//! and a body. Construction is the single finalization point for a
//! response; nothing writes to it afterwards.

use crate::logger;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;

/// Transient response descriptor: status code plus content-type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResponseHead<'a> {
    pub status: u16,
    pub content_type: &'a str,
}

impl<'a> ResponseHead<'a> {
    #[must_use]
    pub const fn new(status: u16, content_type: &'a str) -> Self {
        Self {
            status,
            content_type,
        }
    }
}

/// Build a response with the descriptor's status, a single Content-Type
/// header, and the given body
pub fn build_response(body: Bytes, head: &ResponseHead<'_>) -> Response<Full<Bytes>> {
    let content_length = body.len();
    Response::builder()
        .status(head.status)
        .header("Content-Type", head.content_type)
        .header("Content-Length", content_length)
        .body(Full::new(body))
        .unwrap_or_else(|e| {
            log_build_error(head.status, &e);
            Response::new(Full::new(Bytes::new()))
        })
}

/// Build a plain-text response, the common case for small handlers
pub fn build_text_response(status: u16, body: &str) -> Response<Full<Bytes>> {
    build_response(
        Bytes::from(body.to_owned()),
        &ResponseHead::new(status, "text/plain"),
    )
}

/// Log response build error
fn log_build_error(status: u16, error: &hyper::http::Error) {
    logger::log_error(&format!("Failed to build {status} response: {error}"));
}
