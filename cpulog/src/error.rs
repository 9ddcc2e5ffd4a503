//! Error types for sampling runs
//!
//! Failures are classified here for diagnostics. The user-visible output for
//! any collection failure stays a single generic line.

use std::io;
use std::num::ParseFloatError;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while collecting one sample
#[derive(Error, Debug)]
pub enum SampleError {
    /// Sensor file does not exist
    #[error("temperature sensor not found: {}", path.display())]
    SensorNotFound { path: PathBuf },

    /// Sensor file exists but cannot be opened
    #[error("permission denied reading temperature sensor: {}", path.display())]
    SensorPermissionDenied { path: PathBuf },

    /// Any other failure opening or reading the sensor file
    #[error("failed to read temperature sensor {}: {source}", path.display())]
    SensorIo {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Sensor contents are not a number
    #[error("invalid temperature reading {raw:?}: {source}")]
    SensorParse {
        raw: String,
        #[source]
        source: ParseFloatError,
    },

    /// The platform reported no CPUs to measure
    #[error("CPU utilization is unavailable on this system")]
    CpuUnavailable,
}

impl SampleError {
    /// Classify an I/O failure on the sensor file
    pub fn from_io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        let path = path.into();
        match source.kind() {
            io::ErrorKind::NotFound => Self::SensorNotFound { path },
            io::ErrorKind::PermissionDenied => Self::SensorPermissionDenied { path },
            _ => Self::SensorIo { path, source },
        }
    }
}

/// Errors that end a sampling run early
#[derive(Error, Debug)]
pub enum RunError {
    /// A sample could not be collected; remaining samples are abandoned
    #[error("sample collection failed: {0}")]
    Collection(#[from] SampleError),

    /// Writing to the output failed
    #[error("failed to write output: {0}")]
    Output(#[from] io::Error),
}

/// Result type alias for a single collection step
pub type SampleResult<T> = Result<T, SampleError>;
