//! Page serving module
//!
//! The five dashboard pages are plain HTML rendered without parameters, so
//! they are embedded at compile time and served as-is.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;

use crate::http;
use crate::logger;

/// Look up the embedded template for a page path
pub fn page_for(path: &str) -> Option<&'static str> {
    match path {
        "/" => Some(include_str!("templates/index.html")),
        "/dashboard" => Some(include_str!("templates/dashboard.html")),
        "/crack-detection" => Some(include_str!("templates/crack_detection.html")),
        "/map-system" => Some(include_str!("templates/map_system.html")),
        "/surveillance" => Some(include_str!("templates/surveillance.html")),
        _ => None,
    }
}

/// Serve an embedded page
pub fn serve_page(html: &'static str, is_head: bool, access_log: bool) -> Response<Full<Bytes>> {
    if access_log {
        logger::log_response(html.len());
    }
    http::build_html_response(html.to_string(), is_head)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_pages_resolve() {
        for path in ["/", "/dashboard", "/crack-detection", "/map-system", "/surveillance"] {
            let html = page_for(path).unwrap_or_else(|| panic!("missing page for {path}"));
            assert!(html.contains("<html"), "{path} is not an HTML document");
        }
    }

    #[test]
    fn test_unknown_page() {
        assert!(page_for("/nope").is_none());
        assert!(page_for("/dashboard/").is_none());
    }

    #[test]
    fn test_serve_page_status() {
        let resp = serve_page(page_for("/").unwrap(), false, false);
        assert_eq!(resp.status(), 200);
        assert_eq!(
            resp.headers().get("Content-Type").unwrap(),
            "text/html; charset=utf-8"
        );
    }
}
