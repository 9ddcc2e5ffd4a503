//! cpulog
//!
//! Prints CPU usage in % and CPU temperature in C to stdout once per second.
//!
//! Usage:
//!   cpulog 60
//!   cpulog 3600 nightly-build

use std::io::Write;
use std::process::ExitCode;

use anyhow::Result;

use cpulog::{logging, parse_args, Sampler, SysinfoCpu, ThermalZone, USAGE};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<ExitCode> {
    logging::init_tracing()?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    let config = match parse_args(std::env::args_os()) {
        Ok(config) => config,
        Err(e) => {
            tracing::debug!(error = %e, "Rejected arguments");
            writeln!(out, "{USAGE}")?;
            return Ok(ExitCode::SUCCESS);
        }
    };

    let mut sampler = Sampler::new(
        &config,
        SysinfoCpu::new(),
        ThermalZone::new(&config.temperature_path),
    );

    match sampler.run_reporting(&mut out).await {
        // A collection failure has already been reported on stdout
        Ok(_) => Ok(ExitCode::SUCCESS),
        Err(e) => {
            tracing::debug!(error = %e, "Failed to write to stdout");
            Ok(ExitCode::FAILURE)
        }
    }
}
