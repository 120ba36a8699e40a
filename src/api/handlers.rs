// Mock endpoint handlers module
// Every data-producing endpoint draws from the simulated data source or
// echoes its input; nothing is persisted.

use http_body_util::{BodyExt, Full};
use hyper::body::Bytes;
use hyper::{Request, Response, StatusCode};
use std::convert::Infallible;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use chrono::Utc;

use super::response::{bad_request, json_response, server_error};
use super::simulator::DataSource;
use super::types::{AnomalyCheck, DashboardReading, DetectionRequest, DetectionResult, UploadResult};
use crate::http::multipart::{self, Part};
use crate::logger;

/// GET /api/dashboard-data
///
/// Fresh simulated reading per request; repeated calls yield different values.
pub async fn dashboard_data(
    source: &impl DataSource,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let reading = source.reading();
    let body = DashboardReading::from_reading(&reading, epoch_seconds());

    logger::log_api_request("GET", "/api/dashboard-data", 200);
    json_response(StatusCode::OK, &body)
}

/// POST /api/check-anomalies
///
/// Independent draw from the dashboard endpoint; no body required.
pub async fn check_anomalies(
    source: &impl DataSource,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let reading = source.reading();
    let body = AnomalyCheck::from(&reading);

    logger::log_api_request("POST", "/api/check-anomalies", 200);
    json_response(StatusCode::OK, &body)
}

/// POST /api/upload-image
///
/// Accepts a multipart form with a `file` part, validates the filename, and
/// returns the content re-encoded as a base64 data URI. The file is never
/// written to the upload directory.
pub async fn upload_image(
    req: Request<hyper::body::Incoming>,
) -> Result<Response<Full<Bytes>>, Infallible> {
    const PATH: &str = "/api/upload-image";

    let boundary = req
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .and_then(multipart::parse_boundary);
    let Some(boundary) = boundary else {
        logger::log_api_request("POST", PATH, 400);
        return Ok(bad_request("No file uploaded"));
    };

    let body = match req.collect().await {
        Ok(collected) => collected.to_bytes(),
        Err(e) => {
            logger::log_api_request("POST", PATH, 500);
            return Ok(server_error(&format!("Error processing image: {e}")));
        }
    };

    let parts = multipart::parse_form_data(&body, &boundary);
    match upload_from_parts(&parts) {
        Ok(result) => {
            logger::log_api_request("POST", PATH, 200);
            json_response(StatusCode::OK, &result)
        }
        Err(message) => {
            logger::log_api_request("POST", PATH, 400);
            Ok(bad_request(message))
        }
    }
}

/// Validate the form parts and build the upload result
fn upload_from_parts(parts: &[Part]) -> Result<UploadResult, &'static str> {
    let file = parts
        .iter()
        .find(|p| p.name == "file" && p.filename.is_some())
        .ok_or("No file uploaded")?;

    let filename = file.filename.as_deref().unwrap_or_default();
    if filename.is_empty() {
        return Err("No file selected");
    }
    if !allowed_extension(filename) {
        return Err("Invalid file type");
    }

    Ok(UploadResult {
        success: true,
        image_data: to_data_uri(&file.data),
        message: "Image uploaded successfully",
    })
}

/// Check the extension after the last '.' against the image whitelist
fn allowed_extension(filename: &str) -> bool {
    filename.rsplit_once('.').is_some_and(|(_, ext)| {
        matches!(
            ext.to_ascii_lowercase().as_str(),
            "png" | "jpg" | "jpeg" | "gif"
        )
    })
}

/// Encode uploaded bytes as a data URI for frontend display
///
/// The MIME label is fixed to image/jpeg regardless of actual format; the
/// original frontend expects exactly this prefix.
fn to_data_uri(data: &[u8]) -> String {
    format!("data:image/jpeg;base64,{}", STANDARD.encode(data))
}

/// POST /api/process-crack-detection
///
/// Echoes `image_data` back with random detection fields after the configured
/// artificial delay.
pub async fn process_crack_detection(
    req: Request<hyper::body::Incoming>,
    source: &impl DataSource,
) -> Result<Response<Full<Bytes>>, Infallible> {
    const PATH: &str = "/api/process-crack-detection";

    let body = match req.collect().await {
        Ok(collected) => collected.to_bytes(),
        Err(e) => {
            logger::log_api_request("POST", PATH, 500);
            return Ok(server_error(&format!("Error in crack detection: {e}")));
        }
    };

    match detection_from_body(&body, source).await {
        Ok(result) => {
            logger::log_api_request("POST", PATH, 200);
            json_response(StatusCode::OK, &result)
        }
        Err(DetectionFailure::BadRequest(message)) => {
            logger::log_api_request("POST", PATH, 400);
            Ok(bad_request(message))
        }
        Err(DetectionFailure::Processing(message)) => {
            logger::log_api_request("POST", PATH, 500);
            Ok(server_error(&message))
        }
    }
}

/// Why a detection request was rejected
#[derive(Debug)]
enum DetectionFailure {
    /// Missing or empty input (HTTP 400)
    BadRequest(&'static str),
    /// Unexpected failure, message text exposed to the client (HTTP 500)
    Processing(String),
}

/// Parse the request body, wait out the simulated latency, and draw a result
async fn detection_from_body(
    body: &[u8],
    source: &impl DataSource,
) -> Result<DetectionResult, DetectionFailure> {
    let request: DetectionRequest = serde_json::from_slice(body)
        .map_err(|e| DetectionFailure::Processing(format!("Error in crack detection: {e}")))?;

    let image_data = request
        .image_data
        .filter(|data| !data.is_empty())
        .ok_or(DetectionFailure::BadRequest("No image data provided"))?;

    // Simulated processing time; real inference would happen here
    tokio::time::sleep(source.processing_delay()).await;

    Ok(DetectionResult::new(&source.detection(), image_data))
}

/// Current time as fractional seconds since epoch
#[allow(clippy::cast_precision_loss)]
fn epoch_seconds() -> f64 {
    Utc::now().timestamp_micros() as f64 / 1_000_000.0
}
