//! Sampler configuration
//!
//! Built once from the command line and handed to the sampler by reference.

use std::path::PathBuf;
use std::time::Duration;

/// Label used when none is given on the command line
pub const DEFAULT_LABEL: &str = "cpulog";

/// Thermal zone exposing the CPU temperature in millidegrees Celsius
pub const DEFAULT_TEMPERATURE_PATH: &str = "/sys/class/thermal/thermal_zone0/temp";

/// Wait before each sample
pub const SAMPLE_INTERVAL: Duration = Duration::from_secs(1);

/// Immutable settings for one sampling run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SamplerConfig {
    /// Tag written as the first field of every data line
    pub label: String,
    /// Number of samples to take; zero or negative means none
    pub seconds: i64,
    /// Pause before each sample
    pub interval: Duration,
    /// Sensor file read for the temperature field
    pub temperature_path: PathBuf,
}

impl SamplerConfig {
    pub fn new(seconds: i64, label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            seconds,
            interval: SAMPLE_INTERVAL,
            temperature_path: PathBuf::from(DEFAULT_TEMPERATURE_PATH),
        }
    }

    /// Point the temperature source at a different sensor file
    pub fn with_temperature_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.temperature_path = path.into();
        self
    }
}

impl Default for SamplerConfig {
    fn default() -> Self {
        Self::new(0, DEFAULT_LABEL)
    }
}
