//! Application module
//!
//! [`App`] owns the resolver registry, the matcher chain, and the MIME
//! table. Constructing it binds the configured address and starts
//! accepting connections immediately; there is no separate start step.

use std::io;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicBool, AtomicUsize};
use std::sync::Arc;

use tokio::net::TcpListener;

use super::{connection, listener};
use crate::config::Config;
use crate::dispatch::{Dispatcher, Handler, RequestMatcher, ResolverRegistry};
use crate::handler::not_found;
use crate::http::MimeTable;
use crate::logger;

/// Shared state for one server instance.
///
/// Everything except the registry is read-only once the `App` is built;
/// the registry mutates only through [`App::add_resolver`].
pub struct AppState {
    pub config: Config,
    pub registry: Arc<ResolverRegistry>,
    pub dispatcher: Dispatcher,
    pub cached_access_log: AtomicBool,
    pub active_connections: AtomicUsize,
}

/// An embeddable server instance.
///
/// Each `App` owns its own registry and chain, so multiple independent
/// instances can coexist in one process.
pub struct App {
    state: Arc<AppState>,
    local_addr: SocketAddr,
}

impl App {
    /// Bind the configured address and start serving.
    ///
    /// The priority chain is fixed: resolver registry, then the `rest`
    /// matcher, then the `endpoints` matcher, then the built-in not-found
    /// handler. Either collaborator slot may be left empty.
    ///
    /// Must be called from within a tokio runtime. Port 0 binds an
    /// ephemeral port; see [`App::local_addr`].
    pub fn start(
        config: Config,
        rest: Option<Arc<dyn RequestMatcher>>,
        endpoints: Option<Arc<dyn RequestMatcher>>,
    ) -> io::Result<Self> {
        let addr = config
            .socket_addr()
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;
        let tcp_listener = listener::create_reusable_listener(addr)?;
        let local_addr = tcp_listener.local_addr()?;

        let mime = Arc::new(match config.resources.mime_types.as_deref() {
            Some(path) => MimeTable::load(path)?,
            None => MimeTable::builtin(),
        });

        let registry = Arc::new(ResolverRegistry::new());
        let mut chain: Vec<Arc<dyn RequestMatcher>> =
            vec![Arc::clone(&registry) as Arc<dyn RequestMatcher>];
        if let Some(matcher) = rest {
            chain.push(matcher);
        }
        if let Some(matcher) = endpoints {
            chain.push(matcher);
        }

        let fallback = not_found::not_found_handler(
            mime,
            Arc::from(config.resources.not_found_page.as_str()),
        );
        let dispatcher = Dispatcher::new(chain, fallback);

        let state = Arc::new(AppState {
            cached_access_log: AtomicBool::new(config.logging.access_log),
            active_connections: AtomicUsize::new(0),
            registry,
            dispatcher,
            config,
        });

        logger::log_server_start(&local_addr, &state.config);

        tokio::spawn(accept_loop(tcp_listener, Arc::clone(&state)));

        Ok(Self { state, local_addr })
    }

    /// Register a handler for an exact request path (including any query
    /// string). Overwrites a prior handler for the same path. Safe to call
    /// before or after the server starts accepting.
    pub fn add_resolver(&self, path: impl Into<String>, handler: Handler) {
        self.state.registry.register(path, handler);
    }

    /// The address the server is bound to
    #[must_use]
    pub const fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }

    /// Shared state, mainly for inspection in tests
    #[must_use]
    pub fn state(&self) -> &Arc<AppState> {
        &self.state
    }
}

async fn accept_loop(tcp_listener: TcpListener, state: Arc<AppState>) {
    loop {
        match tcp_listener.accept().await {
            Ok((stream, peer_addr)) => connection::accept_connection(stream, peer_addr, &state),
            Err(e) => logger::log_error(&format!("Failed to accept connection: {e}")),
        }
    }
}
