//! Resolver registry module
//!
//! Exact-path-to-handler mapping, the highest-priority dispatch stage.
//! Registration may happen at any time during the process lifetime, before
//! or after the server starts accepting; entries are never removed.

use super::{request_key, Handler, RequestMatcher};
use hyper::Request;
use std::collections::HashMap;
use std::sync::RwLock;

/// Explicit mapping from exact request path (including query string) to
/// handler
#[derive(Default)]
pub struct ResolverRegistry {
    entries: RwLock<HashMap<String, Handler>>,
}

impl ResolverRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a handler under the given path, overwriting any prior handler
    /// for that exact path
    pub fn register(&self, path: impl Into<String>, handler: Handler) {
        self.entries
            .write()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .insert(path.into(), handler);
    }

    /// Exact string match; absence is a normal outcome that drives
    /// fallthrough to the next dispatch stage
    pub fn lookup(&self, key: &str) -> Option<Handler> {
        self.entries
            .read()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .get(key)
            .cloned()
    }

    pub fn len(&self) -> usize {
        self.entries
            .read()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl RequestMatcher for ResolverRegistry {
    fn get_res(&self, req: &Request<()>) -> Option<Handler> {
        self.lookup(request_key(req))
    }
}
