// Connection handling module
// Accepts and serves a single TCP connection

use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::atomic::Ordering;
use std::sync::Arc;

use http_body_util::Full;
use hyper::body::{Body as _, Bytes, Incoming};
use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper::{Request, Response};
use hyper_util::rt::TokioIo;

use super::app::AppState;
use crate::dispatch::request_key;
use crate::logger::{self, AccessLogEntry};

/// Accept a connection, applying the connection limit and logging
pub fn accept_connection(
    stream: tokio::net::TcpStream,
    peer_addr: SocketAddr,
    state: &Arc<AppState>,
) {
    // Increment counter first, then check limit (prevents race condition)
    let prev_count = state.active_connections.fetch_add(1, Ordering::SeqCst);

    if let Some(max_conn) = state.config.performance.max_connections {
        if prev_count >= usize::try_from(max_conn).unwrap_or(usize::MAX) {
            // Exceeded limit: rollback counter and reject
            state.active_connections.fetch_sub(1, Ordering::SeqCst);
            logger::log_warning(&format!(
                "Max connections reached: {prev_count}/{max_conn}. Connection rejected."
            ));
            drop(stream);
            return;
        }
    }

    if state.cached_access_log.load(Ordering::Relaxed) {
        logger::log_connection_accepted(&peer_addr);
    }

    handle_connection(stream, peer_addr, Arc::clone(state));
}

/// Serve a single connection in a spawned task.
///
/// Wraps the stream in `TokioIo`, configures HTTP/1.1 keep-alive, serves
/// requests through the dispatcher, applies the connection-level timeout,
/// and decrements the connection counter when done.
fn handle_connection(stream: tokio::net::TcpStream, peer_addr: SocketAddr, state: Arc<AppState>) {
    tokio::spawn(async move {
        let io = TokioIo::new(stream);

        let keep_alive_timeout = state.config.performance.keep_alive_timeout;
        let timeout_duration = std::time::Duration::from_secs(std::cmp::max(
            state.config.performance.read_timeout,
            state.config.performance.write_timeout,
        ));

        let mut builder = http1::Builder::new();
        if keep_alive_timeout > 0 {
            builder.keep_alive(true);
        }

        let service_state = Arc::clone(&state);
        let conn = builder.serve_connection(
            io,
            service_fn(move |req| {
                let state = Arc::clone(&service_state);
                async move { Ok::<_, Infallible>(serve_request(req, peer_addr, &state).await) }
            }),
        );

        match tokio::time::timeout(timeout_duration, conn).await {
            Ok(Ok(())) => {}
            Ok(Err(err)) => logger::log_connection_error(&err),
            Err(_) => {
                logger::log_warning(&format!(
                    "Connection timeout after {} seconds",
                    timeout_duration.as_secs()
                ));
            }
        }

        state.active_connections.fetch_sub(1, Ordering::SeqCst);
    });
}

/// Dispatch one request and emit the access log entry.
///
/// The request body is dropped before dispatch: the core never parses
/// bodies, and handlers see a head-only request. No method is privileged
/// here; the chain treats every method alike.
async fn serve_request(
    req: Request<Incoming>,
    peer_addr: SocketAddr,
    state: &Arc<AppState>,
) -> Response<Full<Bytes>> {
    let access_log = state.cached_access_log.load(Ordering::Relaxed);
    if access_log {
        logger::log_request(req.method(), req.uri(), req.version());
    }

    let method = req.method().clone();
    let (parts, _body) = req.into_parts();
    let req = Request::from_parts(parts, ());
    let key = request_key(&req).to_string();

    let response = state.dispatcher.dispatch(req).await;

    if access_log {
        let bytes = response.body().size_hint().exact().unwrap_or(0);
        let entry = AccessLogEntry::new(
            peer_addr,
            method.as_str(),
            &key,
            response.status().as_u16(),
            bytes,
        );
        logger::log_access(&entry, &state.config.logging.access_log_format);
    }

    response
}
