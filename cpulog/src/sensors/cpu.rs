//! CPU utilization via sysinfo

use sysinfo::System;

use super::CpuSource;
use crate::error::{SampleError, SampleResult};

/// Global CPU utilization from `sysinfo`
///
/// Keeps one `System` alive so every reading covers the window since the
/// previous one. The first reading has no baseline and usually reports 0.0.
pub struct SysinfoCpu {
    system: System,
}

impl SysinfoCpu {
    pub fn new() -> Self {
        Self {
            system: System::new(),
        }
    }
}

impl Default for SysinfoCpu {
    fn default() -> Self {
        Self::new()
    }
}

impl CpuSource for SysinfoCpu {
    fn cpu_percent(&mut self) -> SampleResult<f64> {
        self.system.refresh_cpu_usage();
        if self.system.cpus().is_empty() {
            return Err(SampleError::CpuUnavailable);
        }
        let usage = round_tenths(self.system.global_cpu_usage());
        tracing::trace!(usage, "Refreshed CPU usage");
        Ok(usage)
    }
}

/// Round to one decimal place
fn round_tenths(percent: f32) -> f64 {
    (f64::from(percent) * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_tenths() {
        assert_eq!(round_tenths(12.34), 12.3);
        assert_eq!(round_tenths(12.36), 12.4);
        assert_eq!(round_tenths(0.0), 0.0);
        assert_eq!(round_tenths(100.0), 100.0);
    }

    #[test]
    fn test_sysinfo_cpu_reports_percentage() {
        let mut cpu = SysinfoCpu::new();
        let first = cpu.cpu_percent().unwrap();
        std::thread::sleep(sysinfo::MINIMUM_CPU_UPDATE_INTERVAL);
        let second = cpu.cpu_percent().unwrap();

        assert!(first >= 0.0);
        assert!((0.0..=100.0).contains(&second));
    }
}
