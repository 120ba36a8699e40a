//! Simulated sensor data source
//!
//! The dashboard has no real sensors or image analysis behind it; everything
//! observable comes from the random draws in this module. The `DataSource`
//! trait is the seam where a real sensor/ML backend would plug in without
//! touching the HTTP contract.

use rand::Rng;
use std::time::Duration;

/// One snapshot of the simulated dam instrumentation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Reading {
    /// Turbine output in MW
    pub power_output: f64,
    /// Spillway flow in m³/s
    pub water_flow: f64,
    pub has_anomaly: bool,
}

/// One simulated crack detection outcome
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Detection {
    pub cracks_detected: bool,
    /// Model confidence in [0.70, 0.95]
    pub confidence: f64,
    /// Number of cracks found, at most 5
    pub crack_count: u32,
}

/// Source of readings and detection results
pub trait DataSource {
    fn reading(&self) -> Reading;
    fn detection(&self) -> Detection;
    /// Artificial latency applied before a detection result is returned
    fn processing_delay(&self) -> Duration;
}

/// Pseudo-random `DataSource` used by every endpoint
pub struct Simulator {
    processing_delay: Duration,
}

impl Simulator {
    pub const fn new(processing_delay: Duration) -> Self {
        Self { processing_delay }
    }
}

impl DataSource for Simulator {
    fn reading(&self) -> Reading {
        let mut rng = rand::thread_rng();
        Reading {
            power_output: round1(480.0 + rng.gen::<f64>() * 40.0),
            water_flow: round1(290.0 + rng.gen::<f64>() * 20.0),
            has_anomaly: rng.gen_bool(0.3),
        }
    }

    fn detection(&self) -> Detection {
        let mut rng = rand::thread_rng();
        Detection {
            cracks_detected: rng.gen_bool(0.5),
            confidence: round2(rng.gen_range(0.70..=0.95)),
            crack_count: rng.gen_range(0..=5),
        }
    }

    fn processing_delay(&self) -> Duration {
        self.processing_delay
    }
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
