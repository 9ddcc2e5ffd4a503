//! cpulog Library
//!
//! Samples global CPU utilization and a thermal sensor once per second and
//! writes each sample as a `;`-delimited line.
//!
//! # Usage as Library
//!
//! ```rust,ignore
//! use cpulog::{Sampler, SamplerConfig, SysinfoCpu, ThermalZone};
//!
//! let config = SamplerConfig::new(10, "bench");
//! let mut sampler = Sampler::new(
//!     &config,
//!     SysinfoCpu::new(),
//!     ThermalZone::new(&config.temperature_path),
//! );
//! sampler.run(&mut std::io::stdout().lock()).await?;
//! ```
//!
//! # Usage as Binary
//!
//! Run directly: `cpulog <seconds> [label]`

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod sample;
pub mod sampler;
pub mod sensors;

pub use cli::{parse_args, UsageError, USAGE};
pub use config::SamplerConfig;
pub use error::{RunError, SampleError};
pub use sample::{Sample, HEADER};
pub use sampler::{Outcome, RunSummary, Sampler, FAILURE_MESSAGE};
pub use sensors::{CpuSource, SysinfoCpu, TemperatureSource, ThermalZone};
