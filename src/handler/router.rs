//! Request routing dispatch module
//!
//! Entry point for HTTP request processing, responsible for method
//! validation, route matching, and dispatching to pages, static assets, or
//! the JSON API.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Method, Request, Response};
use std::convert::Infallible;
use std::sync::Arc;

use crate::config::AppState;
use crate::handler::{pages, static_files};
use crate::http;
use crate::logger;

/// Request context encapsulating information needed for request processing
pub struct RequestContext<'a> {
    pub path: &'a str,
    pub is_head: bool,
    pub if_none_match: Option<String>,
    pub access_log: bool,
}

/// Main entry point for HTTP request handling
pub async fn handle_request(
    req: Request<hyper::body::Incoming>,
    state: Arc<AppState>,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let method = req.method().clone();
    let path = req.uri().path().to_string();
    let is_head = method == Method::HEAD;

    let access_log = state.config.logging.access_log;
    if access_log {
        logger::log_request(&method, req.uri(), req.version());
    }
    logger::log_headers_count(req.headers().len(), state.config.logging.show_headers);

    // 1. Preflight
    if method == Method::OPTIONS {
        return Ok(http::build_options_response(state.config.http.enable_cors));
    }

    // 2. Body size guard
    if let Some(resp) = check_body_size(&req, state.config.http.max_body_size) {
        return Ok(resp);
    }

    // 3. JSON API
    if path.starts_with("/api/") {
        return crate::api::handle_api(req, state).await;
    }

    // 4. Pages
    if let Some(html) = pages::page_for(&path) {
        if matches!(method, Method::GET | Method::HEAD) {
            return Ok(pages::serve_page(html, is_head, access_log));
        }
        logger::log_warning(&format!("Method not allowed: {method} {path}"));
        return Ok(http::build_405_response("GET, HEAD, OPTIONS"));
    }

    // 5. Static assets
    if path.starts_with("/static/") {
        if !matches!(method, Method::GET | Method::HEAD) {
            return Ok(http::build_405_response("GET, HEAD, OPTIONS"));
        }
        let ctx = RequestContext {
            path: &path,
            is_head,
            if_none_match: req
                .headers()
                .get("if-none-match")
                .and_then(|v| v.to_str().ok())
                .map(ToString::to_string),
            access_log,
        };
        return Ok(static_files::serve_static(&ctx, &state.config.resources.static_dir).await);
    }

    Ok(http::build_404_response())
}

/// Validate Content-Length header and return 413 if exceeded
fn check_body_size(
    req: &Request<hyper::body::Incoming>,
    max_body_size: u64,
) -> Option<Response<Full<Bytes>>> {
    let content_length = req.headers().get("content-length")?;
    content_length.to_str().map_or_else(
        |_| {
            logger::log_warning("Content-Length header contains non-ASCII characters");
            None
        },
        |size_str| match size_str.parse::<u64>() {
            Ok(size) if size > max_body_size => {
                logger::log_error(&format!(
                    "Request body too large: {size} bytes (max: {max_body_size})"
                ));
                Some(http::build_413_response())
            }
            Err(_) => {
                logger::log_warning(&format!(
                    "Invalid Content-Length value: '{size_str}', skipping size check"
                ));
                None
            }
            _ => None,
        },
    )
}
