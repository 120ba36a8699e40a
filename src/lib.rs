//! Demo backend for a dam-monitoring dashboard.
//!
//! Serves five static pages plus a JSON API of simulated sensor readings and
//! crack-detection results. There is no real sensor integration or image
//! analysis behind any endpoint.

pub mod api;
pub mod config;
pub mod handler;
pub mod http;
pub mod logger;
