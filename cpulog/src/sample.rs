//! Sample type and its line format

use std::fmt;

use chrono::{DateTime, Utc};

/// Header naming the four fields of every data line
pub const HEADER: &str = "label;ts;cpu;temp";

/// Field separator
pub const DELIMITER: char = ';';

/// UTC timestamp layout, microsecond precision, no zone suffix
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.6f";

/// One CPU utilization and temperature reading
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    pub label: String,
    pub timestamp: DateTime<Utc>,
    /// Global CPU utilization in percent
    pub cpu_percent: f64,
    /// Sensor temperature in degrees Celsius
    pub temperature_celsius: f64,
}

impl Sample {
    /// Format the timestamp field
    pub fn timestamp_field(&self) -> String {
        self.timestamp.format(TIMESTAMP_FORMAT).to_string()
    }
}

impl fmt::Display for Sample {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{DELIMITER}{}{DELIMITER}", self.label, self.timestamp_field())?;
        write_float(f, self.cpu_percent)?;
        write!(f, "{DELIMITER}")?;
        write_float(f, self.temperature_celsius)
    }
}

/// Shortest round-trip form that keeps a fractional part (40.0, not 40).
/// Non-finite values print as `nan`, `inf` and `-inf`.
fn write_float(f: &mut fmt::Formatter<'_>, value: f64) -> fmt::Result {
    if value.is_nan() {
        f.write_str("nan")
    } else if value.is_infinite() {
        f.write_str(if value > 0.0 { "inf" } else { "-inf" })
    } else {
        write!(f, "{value:?}")
    }
}
