//! Dispatch-chain integration tests
//!
//! Drive the dispatcher directly, without a network listener, covering the
//! resolver registry, pluggable matchers, and the filesystem fallback.

use http_body_util::{BodyExt, Full};
use hyper::body::Bytes;
use hyper::{Request, Response};
use pathserve::handler::not_found_handler;
use pathserve::{
    build_text_response, handler_fn, serve_from_fs, Dispatcher, Handler, MimeTable,
    RequestMatcher, ResolverRegistry,
};
use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;
use tempfile::TempDir;

fn make_request(uri: &str) -> Request<()> {
    Request::builder().uri(uri).body(()).expect("valid request")
}

async fn body_bytes(resp: Response<Full<Bytes>>) -> Bytes {
    resp.into_body().collect().await.expect("body").to_bytes()
}

fn content_type(resp: &Response<Full<Bytes>>) -> &str {
    resp.headers()
        .get("Content-Type")
        .and_then(|v| v.to_str().ok())
        .expect("content-type present")
}

fn write_file(dir: &TempDir, name: &str, contents: &[u8]) -> PathBuf {
    let path = dir.path().join(name);
    let mut file = std::fs::File::create(&path).expect("create file");
    file.write_all(contents).expect("write file");
    path
}

/// Dispatcher wired the way `App::start` wires it: registry first, then
/// optional matchers, then the not-found fallback serving `not_found_page`.
fn make_dispatcher(
    registry: &Arc<ResolverRegistry>,
    matchers: Vec<Arc<dyn RequestMatcher>>,
    not_found_page: &str,
) -> Dispatcher {
    let mut chain: Vec<Arc<dyn RequestMatcher>> =
        vec![Arc::clone(registry) as Arc<dyn RequestMatcher>];
    chain.extend(matchers);
    let fallback = not_found_handler(Arc::new(MimeTable::builtin()), Arc::from(not_found_page));
    Dispatcher::new(chain, fallback)
}

/// Endpoints-style collaborator: serves any request path from a root
/// directory on disk
struct FsEndpoints {
    root: PathBuf,
    not_found_page: String,
}

impl RequestMatcher for FsEndpoints {
    fn get_res(&self, req: &Request<()>) -> Option<Handler> {
        let relative = req.uri().path().trim_start_matches('/');
        let file_path = self.root.join(relative);
        if !file_path.is_file() {
            return None;
        }
        let file_path = file_path.to_str()?.to_string();
        let not_found_page = self.not_found_page.clone();
        Some(handler_fn(move |_req| {
            let file_path = file_path.clone();
            let not_found_page = not_found_page.clone();
            async move { serve_from_fs(&file_path, &MimeTable::builtin(), &not_found_page).await }
        }))
    }
}

#[tokio::test]
async fn scenario_a_registered_path_invokes_its_handler() {
    let registry = Arc::new(ResolverRegistry::new());
    registry.register(
        "/ping",
        handler_fn(|_req| async { build_text_response(200, "pong") }),
    );
    let dispatcher = make_dispatcher(&registry, Vec::new(), "/nowhere/404.html");

    let resp = dispatcher.dispatch(make_request("/ping")).await;
    assert_eq!(resp.status(), 200);
    assert_eq!(&body_bytes(resp).await[..], b"pong");
}

#[tokio::test]
async fn scenario_b_unmatched_path_serves_404_page_contents() {
    let dir = TempDir::new().expect("temp dir");
    let page = write_file(&dir, "404.html", b"<h1>custom not found</h1>");
    let page = page.to_str().expect("utf-8 path");

    let registry = Arc::new(ResolverRegistry::new());
    let dispatcher = make_dispatcher(&registry, Vec::new(), page);

    let resp = dispatcher.dispatch(make_request("/missing")).await;
    assert_eq!(resp.status(), 404);
    assert_eq!(content_type(&resp), "text/html");
    assert_eq!(&body_bytes(resp).await[..], b"<h1>custom not found</h1>");
}

#[tokio::test]
async fn scenario_c_missing_404_page_still_reports_404() {
    let registry = Arc::new(ResolverRegistry::new());
    let dispatcher = make_dispatcher(&registry, Vec::new(), "/nowhere/404.html");

    let resp = dispatcher.dispatch(make_request("/missing")).await;
    assert_eq!(resp.status(), 404);
    assert_eq!(content_type(&resp), "text/html");
    let body = body_bytes(resp).await;
    assert!(body.starts_with(b"error while loading file from fs:\n"));
}

#[tokio::test]
async fn scenario_d_endpoints_matcher_serves_css_with_mapped_type() {
    let dir = TempDir::new().expect("temp dir");
    write_file(&dir, "style.css", b"body { color: red }");

    let endpoints: Arc<dyn RequestMatcher> = Arc::new(FsEndpoints {
        root: dir.path().to_path_buf(),
        not_found_page: "/nowhere/404.html".to_string(),
    });
    let registry = Arc::new(ResolverRegistry::new());
    let dispatcher = make_dispatcher(&registry, vec![endpoints], "/nowhere/404.html");

    let resp = dispatcher.dispatch(make_request("/style.css")).await;
    assert_eq!(resp.status(), 200);
    assert_eq!(content_type(&resp), "text/css");
    assert_eq!(&body_bytes(resp).await[..], b"body { color: red }");
}

#[tokio::test]
async fn registry_outranks_matchers() {
    let dir = TempDir::new().expect("temp dir");
    write_file(&dir, "style.css", b"from disk");

    let endpoints: Arc<dyn RequestMatcher> = Arc::new(FsEndpoints {
        root: dir.path().to_path_buf(),
        not_found_page: "/nowhere/404.html".to_string(),
    });
    let registry = Arc::new(ResolverRegistry::new());
    registry.register(
        "/style.css",
        handler_fn(|_req| async { build_text_response(200, "from resolver") }),
    );
    let dispatcher = make_dispatcher(&registry, vec![endpoints], "/nowhere/404.html");

    let resp = dispatcher.dispatch(make_request("/style.css")).await;
    assert_eq!(&body_bytes(resp).await[..], b"from resolver");
}

#[tokio::test]
async fn re_registration_overwrites_previous_handler() {
    let registry = Arc::new(ResolverRegistry::new());
    registry.register(
        "/greet",
        handler_fn(|_req| async { build_text_response(200, "first") }),
    );
    registry.register(
        "/greet",
        handler_fn(|_req| async { build_text_response(200, "second") }),
    );
    let dispatcher = make_dispatcher(&registry, Vec::new(), "/nowhere/404.html");

    let resp = dispatcher.dispatch(make_request("/greet")).await;
    assert_eq!(&body_bytes(resp).await[..], b"second");
}

#[tokio::test]
async fn query_string_is_part_of_the_resolver_key() {
    let registry = Arc::new(ResolverRegistry::new());
    registry.register(
        "/report?format=csv",
        handler_fn(|_req| async { build_text_response(200, "csv") }),
    );
    let dispatcher = make_dispatcher(&registry, Vec::new(), "/nowhere/404.html");

    let resp = dispatcher.dispatch(make_request("/report?format=csv")).await;
    assert_eq!(resp.status(), 200);

    // Bare path misses the resolver and falls through to the 404 handler
    let resp = dispatcher.dispatch(make_request("/report")).await;
    assert_eq!(resp.status(), 404);
}
