// API response types module
// Serde structures for the JSON endpoints

use serde::{Deserialize, Serialize};

use super::simulator::{Detection, Reading};

/// Coarse textual label derived from the anomaly flag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum IntegrityStatus {
    #[serde(rename = "Normal")]
    Normal,
    #[serde(rename = "Anomaly Detected")]
    AnomalyDetected,
}

impl From<bool> for IntegrityStatus {
    fn from(has_anomaly: bool) -> Self {
        if has_anomaly {
            Self::AnomalyDetected
        } else {
            Self::Normal
        }
    }
}

/// Response body for GET /api/dashboard-data
#[derive(Debug, Serialize)]
pub struct DashboardReading {
    pub power_output: String,
    pub water_flow: String,
    pub integrity_status: IntegrityStatus,
    pub has_anomaly: bool,
    /// Seconds since epoch
    pub timestamp: f64,
}

impl DashboardReading {
    pub fn from_reading(reading: &Reading, timestamp: f64) -> Self {
        Self {
            power_output: format!("{:.1} MW", reading.power_output),
            water_flow: format!("{:.1} m³/s", reading.water_flow),
            integrity_status: IntegrityStatus::from(reading.has_anomaly),
            has_anomaly: reading.has_anomaly,
            timestamp,
        }
    }
}

/// Response body for POST /api/check-anomalies
#[derive(Debug, Serialize)]
pub struct AnomalyCheck {
    pub has_anomaly: bool,
    pub integrity_status: IntegrityStatus,
    pub message: &'static str,
}

impl From<&Reading> for AnomalyCheck {
    fn from(reading: &Reading) -> Self {
        Self {
            has_anomaly: reading.has_anomaly,
            integrity_status: IntegrityStatus::from(reading.has_anomaly),
            message: if reading.has_anomaly {
                "Anomaly detected in turbine!"
            } else {
                "System operating normally"
            },
        }
    }
}

/// Response body for POST /api/upload-image
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct UploadResult {
    pub success: bool,
    /// base64 data URI for frontend display
    pub image_data: String,
    pub message: &'static str,
}

/// Request body for POST /api/process-crack-detection
#[derive(Debug, Deserialize)]
pub struct DetectionRequest {
    #[serde(default)]
    pub image_data: Option<String>,
}

/// Response body for POST /api/process-crack-detection
#[derive(Debug, Serialize)]
pub struct DetectionResult {
    pub success: bool,
    /// Echo of the submitted image (no real processing happens)
    pub processed_image: String,
    pub cracks_detected: bool,
    pub confidence: f64,
    pub crack_count: u32,
    pub message: &'static str,
}

impl DetectionResult {
    pub fn new(detection: &Detection, processed_image: String) -> Self {
        Self {
            success: true,
            processed_image,
            cracks_detected: detection.cracks_detected,
            confidence: detection.confidence,
            crack_count: detection.crack_count,
            message: "Crack detection completed",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integrity_status_serialization() {
        assert_eq!(
            serde_json::to_string(&IntegrityStatus::Normal).unwrap(),
            "\"Normal\""
        );
        assert_eq!(
            serde_json::to_string(&IntegrityStatus::AnomalyDetected).unwrap(),
            "\"Anomaly Detected\""
        );
    }

    #[test]
    fn test_status_matches_flag() {
        assert_eq!(IntegrityStatus::from(true), IntegrityStatus::AnomalyDetected);
        assert_eq!(IntegrityStatus::from(false), IntegrityStatus::Normal);
    }

    #[test]
    fn test_dashboard_reading_formatting() {
        let reading = Reading {
            power_output: 499.5,
            water_flow: 300.0,
            has_anomaly: false,
        };
        let body = DashboardReading::from_reading(&reading, 1000.5);
        assert_eq!(body.power_output, "499.5 MW");
        assert_eq!(body.water_flow, "300.0 m³/s");
        assert!(!body.has_anomaly);
        assert_eq!(body.integrity_status, IntegrityStatus::Normal);

        let json: serde_json::Value = serde_json::to_value(&body).unwrap();
        assert_eq!(json["integrity_status"], "Normal");
        assert_eq!(json["timestamp"], 1000.5);
    }

    #[test]
    fn test_anomaly_check_message_mapping() {
        let anomalous = Reading {
            power_output: 500.0,
            water_flow: 300.0,
            has_anomaly: true,
        };
        let check = AnomalyCheck::from(&anomalous);
        assert_eq!(check.message, "Anomaly detected in turbine!");
        assert_eq!(check.integrity_status, IntegrityStatus::AnomalyDetected);

        let normal = Reading {
            has_anomaly: false,
            ..anomalous
        };
        let check = AnomalyCheck::from(&normal);
        assert_eq!(check.message, "System operating normally");
        assert_eq!(check.integrity_status, IntegrityStatus::Normal);
    }

    #[test]
    fn test_detection_request_tolerates_empty_object() {
        let req: DetectionRequest = serde_json::from_str("{}").unwrap();
        assert!(req.image_data.is_none());

        let req: DetectionRequest =
            serde_json::from_str(r#"{"image_data":"abc"}"#).unwrap();
        assert_eq!(req.image_data.as_deref(), Some("abc"));
    }
}
