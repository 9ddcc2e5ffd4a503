//! Temperature from a sysfs thermal zone

use std::fs;
use std::path::PathBuf;

use super::TemperatureSource;
use crate::error::{SampleError, SampleResult};

/// Reads a millidegree Celsius value from a sensor file
///
/// The file is opened, read and closed on every call.
#[derive(Debug, Clone)]
pub struct ThermalZone {
    path: PathBuf,
}

impl ThermalZone {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl TemperatureSource for ThermalZone {
    fn temperature_celsius(&mut self) -> SampleResult<f64> {
        let raw = fs::read_to_string(&self.path)
            .map_err(|e| SampleError::from_io(&self.path, e))?;
        let celsius = parse_millidegrees(&raw)?;
        tracing::trace!(path = %self.path.display(), celsius, "Read temperature");
        Ok(celsius)
    }
}

/// Convert a raw millidegree reading to degrees Celsius
pub fn parse_millidegrees(raw: &str) -> SampleResult<f64> {
    let millidegrees: f64 = raw
        .trim()
        .parse()
        .map_err(|source| SampleError::SensorParse {
            raw: raw.to_string(),
            source,
        })?;
    Ok(millidegrees / 1000.0)
}
