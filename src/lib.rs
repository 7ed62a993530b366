//! pathserve — a minimal embeddable HTTP server shim.
//!
//! Incoming requests are resolved through a fixed priority chain: an
//! exact-path resolver registry, then any pluggable request matchers supplied
//! by the embedding application (typically a REST-style matcher and a static
//! endpoints matcher), and finally a built-in not-found handler that serves a
//! configurable 404 page from disk. File contents are served asynchronously
//! with a best-effort MIME type lookup.
//!
//! ```no_run
//! use pathserve::{build_text_response, handler_fn, App, Config};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let app = App::start(Config::load()?, None, None)?;
//!     app.add_resolver("/ping", handler_fn(|_req| async {
//!         build_text_response(200, "pong")
//!     }));
//!     tokio::signal::ctrl_c().await?;
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod dispatch;
pub mod handler;
pub mod http;
pub mod logger;
pub mod server;

pub use config::Config;
pub use dispatch::{handler_fn, Dispatcher, Handler, HandlerFuture, RequestMatcher, ResolverRegistry};
pub use handler::files::serve_from_fs;
pub use http::mime::MimeTable;
pub use http::response::{build_response, build_text_response, ResponseHead};
pub use server::App;
