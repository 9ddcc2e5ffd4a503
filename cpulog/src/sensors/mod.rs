//! Sample sources
//!
//! The sampler reads through these traits so tests can substitute stubs for
//! the operating system facilities.

pub mod cpu;
pub mod thermal;

pub use cpu::SysinfoCpu;
pub use thermal::ThermalZone;

use crate::error::SampleResult;

/// Reports global CPU utilization
pub trait CpuSource {
    /// Utilization in percent since the previous call (or since the source
    /// was created, for the first call)
    fn cpu_percent(&mut self) -> SampleResult<f64>;
}

/// Reports a temperature reading
pub trait TemperatureSource {
    /// Current temperature in degrees Celsius
    fn temperature_celsius(&mut self) -> SampleResult<f64>;
}
