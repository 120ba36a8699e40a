//! Static file serving module
//!
//! Serves assets under /static/ with MIME type detection and ETag-based
//! conditional requests.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;
use std::path::Path;
use tokio::fs;

use crate::handler::router::RequestContext;
use crate::http::{self, cache, mime};
use crate::logger;

/// Serve a file under the static directory
///
/// `path` is the full request path including the /static/ prefix.
pub async fn serve_static(
    ctx: &RequestContext<'_>,
    static_dir: &str,
) -> Response<Full<Bytes>> {
    match load_static(static_dir, ctx.path).await {
        Some((content, content_type)) => {
            let etag = cache::generate_etag(&content);
            if cache::check_etag_match(ctx.if_none_match.as_deref(), &etag) {
                return http::build_304_response(&etag);
            }
            if ctx.access_log {
                logger::log_response(content.len());
            }
            http::response::build_cached_response(
                Bytes::from(content),
                content_type,
                &etag,
                ctx.is_head,
            )
        }
        None => http::build_404_response(),
    }
}

/// Load a static file from disk, refusing paths that escape the directory
async fn load_static(static_dir: &str, path: &str) -> Option<(Vec<u8>, &'static str)> {
    // Remove prefix and leading slash, prevent directory traversal
    let relative = path
        .strip_prefix("/static/")?
        .trim_start_matches('/')
        .replace("..", "");
    if relative.is_empty() {
        return None;
    }

    let file_path = Path::new(static_dir).join(&relative);
    let content = match fs::read(&file_path).await {
        Ok(data) => data,
        Err(_) => return None, // missing files are ordinary 404s
    };

    let extension = file_path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);
    let content_type = mime::get_content_type(extension.as_deref());

    Some((content, content_type))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_missing_file_is_none() {
        assert!(load_static("static", "/static/no-such-file.css").await.is_none());
    }

    #[tokio::test]
    async fn test_empty_and_traversal_paths_rejected() {
        assert!(load_static("static", "/static/").await.is_none());
        assert!(load_static("static", "/elsewhere/file.css").await.is_none());
        // ".." is stripped, so this cannot reach the parent directory
        assert!(load_static("static", "/static/../Cargo.toml").await.is_none());
    }

    #[tokio::test]
    async fn test_serves_real_file_with_etag() {
        let dir = std::env::temp_dir().join("damwatch-static-test");
        tokio::fs::create_dir_all(&dir).await.unwrap();
        tokio::fs::write(dir.join("app.css"), b"body{}").await.unwrap();

        let (content, content_type) =
            load_static(dir.to_str().unwrap(), "/static/app.css").await.unwrap();
        assert_eq!(content, b"body{}");
        assert_eq!(content_type, "text/css");
    }
}
