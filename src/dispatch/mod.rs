//! Request dispatch module
//!
//! Defines the handler type shared by every dispatch stage, the
//! collaborator matcher contract, the exact-path resolver registry, and the
//! dispatcher that walks the priority chain.

pub mod chain;
pub mod registry;

pub use chain::{Dispatcher, RequestMatcher};
pub use registry::ResolverRegistry;

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Request, Response};
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

/// Future produced by a handler; resolves to the single response for the
/// request
pub type HandlerFuture = Pin<Box<dyn Future<Output = Response<Full<Bytes>>> + Send>>;

/// A request handler. Consumes the (body-less) request and produces exactly
/// one response. Handlers are cheaply cloneable and shared across requests.
pub type Handler = Arc<dyn Fn(Request<()>) -> HandlerFuture + Send + Sync>;

/// Wrap an async closure as a [`Handler`]
pub fn handler_fn<F, Fut>(f: F) -> Handler
where
    F: Fn(Request<()>) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Response<Full<Bytes>>> + Send + 'static,
{
    Arc::new(move |req| -> HandlerFuture { Box::pin(f(req)) })
}

/// Lookup key for exact-path resolution: the request path including the
/// query string exactly as received, without normalization
#[must_use]
pub fn request_key(req: &Request<()>) -> &str {
    req.uri()
        .path_and_query()
        .map_or_else(|| req.uri().path(), |pq| pq.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_request(uri: &str) -> Request<()> {
        Request::builder().uri(uri).body(()).expect("valid request")
    }

    #[test]
    fn test_request_key_includes_query() {
        let req = make_request("/search?q=rust&page=2");
        assert_eq!(request_key(&req), "/search?q=rust&page=2");
    }

    #[test]
    fn test_request_key_plain_path() {
        let req = make_request("/index.html");
        assert_eq!(request_key(&req), "/index.html");
    }
}
