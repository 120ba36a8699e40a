// Application state module
// Immutable per-process state shared across connection tasks

use std::time::Duration;

use super::types::Config;
use crate::api::simulator::Simulator;

/// Application state
///
/// Configuration plus the simulated data source. Nothing here is mutable at
/// runtime, so handlers only ever take `&AppState` through an `Arc`.
pub struct AppState {
    pub config: Config,
    pub simulator: Simulator,
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        let simulator =
            Simulator::new(Duration::from_millis(config.simulation.processing_delay_ms));
        Self {
            config: config.clone(),
            simulator,
        }
    }
}
