//! Priority-chain dispatch module
//!
//! The dispatcher walks an explicit ordered list of matcher strategies and
//! invokes the first handler any of them yields, falling back to a terminal
//! handler when none match. Exactly one handler runs per request.

use super::Handler;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Request, Response};
use std::sync::Arc;

/// Contract for a dispatch stage: a pure function of the request returning
/// an invocable handler, or `None` when the stage does not match.
///
/// The resolver registry implements this, and embedding applications supply
/// their REST and endpoints matchers behind the same trait.
pub trait RequestMatcher: Send + Sync {
    fn get_res(&self, req: &Request<()>) -> Option<Handler>;
}

/// Ordered matcher chain with a terminal fallback handler
pub struct Dispatcher {
    chain: Vec<Arc<dyn RequestMatcher>>,
    fallback: Handler,
}

impl Dispatcher {
    #[must_use]
    pub fn new(chain: Vec<Arc<dyn RequestMatcher>>, fallback: Handler) -> Self {
        Self { chain, fallback }
    }

    /// Return the handler for this request: the first stage that matches
    /// short-circuits the rest, and the fallback handler is returned when
    /// no stage matches
    #[must_use]
    pub fn select(&self, req: &Request<()>) -> Handler {
        for matcher in &self.chain {
            if let Some(handler) = matcher.get_res(req) {
                return handler;
            }
        }
        Arc::clone(&self.fallback)
    }

    /// Select and invoke exactly one handler for the request
    pub async fn dispatch(&self, req: Request<()>) -> Response<Full<Bytes>> {
        let handler = self.select(&req);
        handler(req).await
    }
}
