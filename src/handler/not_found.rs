//! Not-found fallback module
//!
//! Terminal dispatch stage: logs the unmatched path and serves the
//! configured 404 page through the file server. It always produces a
//! response, even when the 404 asset itself is unreadable.

use super::files;
use crate::dispatch::{request_key, Handler, HandlerFuture};
use crate::http::MimeTable;
use crate::logger;
use hyper::Request;
use std::sync::Arc;

/// Build the fallback handler serving `not_found_page` for every request
/// that reaches it
pub fn not_found_handler(mime: Arc<MimeTable>, not_found_page: Arc<str>) -> Handler {
    Arc::new(move |req: Request<()>| -> HandlerFuture {
        let mime = Arc::clone(&mime);
        let page = Arc::clone(&not_found_page);
        Box::pin(async move {
            logger::log_not_found(request_key(&req));
            files::serve_from_fs(&page, &mime, &page).await
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;
    use std::io::Write;

    fn make_request(uri: &str) -> Request<()> {
        Request::builder().uri(uri).body(()).expect("valid request")
    }

    #[tokio::test]
    async fn test_serves_configured_page_as_404() {
        let dir = tempfile::TempDir::new().expect("temp dir");
        let path = dir.path().join("404.html");
        let mut file = std::fs::File::create(&path).expect("create");
        file.write_all(b"<p>nothing here</p>").expect("write");

        let handler = not_found_handler(
            Arc::new(MimeTable::builtin()),
            Arc::from(path.to_str().expect("utf-8 path")),
        );

        let resp = handler(make_request("/missing?id=7")).await;
        assert_eq!(resp.status(), 404);
        let body = resp.into_body().collect().await.expect("body").to_bytes();
        assert_eq!(&body[..], b"<p>nothing here</p>");
    }

    #[tokio::test]
    async fn test_always_responds_without_asset() {
        let handler = not_found_handler(
            Arc::new(MimeTable::builtin()),
            Arc::from("/nowhere/404.html"),
        );

        let resp = handler(make_request("/missing")).await;
        assert_eq!(resp.status(), 404);
        assert_eq!(
            resp.headers()
                .get("Content-Type")
                .and_then(|v| v.to_str().ok()),
            Some("text/html")
        );
    }
}
