// API module entry
// JSON endpoints backed by the simulated data source

mod handlers;
mod response;
pub mod simulator;
mod types;

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Method, Request, Response};
use std::convert::Infallible;
use std::sync::Arc;

use crate::config::AppState;
use crate::logger;

// Re-export public types
pub use response::*;

/// API route handler
///
/// Dispatches to handler functions based on request path and method.
pub async fn handle_api(
    req: Request<hyper::body::Incoming>,
    state: Arc<AppState>,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let path = req.uri().path().to_string();
    let method = req.method().clone();

    match (method, path.as_str()) {
        // Simulated real-time dashboard reading
        (Method::GET, "/api/dashboard-data") => handlers::dashboard_data(&state.simulator).await,
        // Manual anomaly check (independent draw)
        (Method::POST, "/api/check-anomalies") => handlers::check_anomalies(&state.simulator).await,
        // Image upload, echoed back as a data URI
        (Method::POST, "/api/upload-image") => handlers::upload_image(req).await,
        // Mock crack detection with artificial latency
        (Method::POST, "/api/process-crack-detection") => {
            handlers::process_crack_detection(req, &state.simulator).await
        }
        // Known endpoint, wrong method
        (_, "/api/dashboard-data") => {
            logger::log_api_request(req.method().as_str(), &path, 405);
            Ok(method_not_allowed("GET, OPTIONS"))
        }
        (_, "/api/check-anomalies" | "/api/upload-image" | "/api/process-crack-detection") => {
            logger::log_api_request(req.method().as_str(), &path, 405);
            Ok(method_not_allowed("POST, OPTIONS"))
        }
        // Unknown route
        _ => {
            logger::log_api_request(req.method().as_str(), &path, 404);
            Ok(not_found())
        }
    }
}
