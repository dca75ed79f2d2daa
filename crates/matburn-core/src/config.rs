use serde::{Deserialize, Serialize};

/// Fixed run parameters of the dashboard.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefaultsConfig {
    /// Square matrix edge length sent to the benchmark endpoint.
    pub matrix_size: u32,
    pub stress_duration_secs: u32,
    pub monitor_interval_ms: u32,
    pub countdown_tick_ms: u32,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            matrix_size: 8000,
            stress_duration_secs: 15,
            monitor_interval_ms: 2000,
            countdown_tick_ms: 1000,
        }
    }
}
