//! File serving module
//!
//! Reads a file from disk asynchronously and produces a response whose
//! status and content-type are derived from the read outcome and the
//! requested path.

use crate::http::{build_response, MimeTable, ResponseHead};
use crate::logger;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;
use tokio::fs;

/// Serve the file at `file_path`.
///
/// Outcome policy:
/// - read succeeds on the designated not-found page: 404, `text/html`,
///   body = file bytes. The not-found page is never served as 200.
/// - read succeeds elsewhere: 200 with the content-type from the MIME table.
/// - read fails on the designated not-found page: status stays 404 with
///   `text/html`, body = diagnostic text. The path being the fallback asset
///   takes precedence over the underlying read error.
/// - read fails elsewhere: 500, `text/plain`, body = diagnostic text
///   embedding the error detail.
///
/// The read is independent per call: no caching, no de-duplication, no
/// timeout at this layer.
pub async fn serve_from_fs(
    file_path: &str,
    mime: &MimeTable,
    not_found_page: &str,
) -> Response<Full<Bytes>> {
    logger::log_file_read(file_path);

    match fs::read(file_path).await {
        Ok(data) if file_path == not_found_page => {
            build_response(Bytes::from(data), &ResponseHead::new(404, "text/html"))
        }
        Ok(data) => build_response(
            Bytes::from(data),
            &ResponseHead::new(200, mime.mime_for(file_path)),
        ),
        Err(err) => {
            logger::log_error(&format!("Failed to read file '{file_path}': {err}"));
            let body = Bytes::from(format!("error while loading file from fs:\n{err}"));
            let head = if file_path == not_found_page {
                ResponseHead::new(404, "text/html")
            } else {
                ResponseHead::new(500, "text/plain")
            };
            build_response(body, &head)
        }
    }
}
