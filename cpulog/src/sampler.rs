//! The sampling loop
//!
//! Prints the header, then waits one interval, collects a sample and prints
//! it, once per requested second. The first collection failure ends the run.

use std::io::{self, Write};

use chrono::Utc;

use crate::config::SamplerConfig;
use crate::error::{RunError, SampleError, SampleResult};
use crate::sample::{Sample, HEADER};
use crate::sensors::{CpuSource, TemperatureSource};

/// Line printed in place of the next sample when collection fails
pub const FAILURE_MESSAGE: &str = "Something went wrong.";

/// Totals for a run that finished every requested sample
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub samples: u64,
}

/// How a reported run ended
#[derive(Debug)]
pub enum Outcome {
    /// Every requested sample was written
    Completed(RunSummary),
    /// Collection failed and the failure line was written
    Aborted {
        collected: u64,
        error: SampleError,
    },
}

/// Drives one sampling run over a pair of sources
pub struct Sampler<'a, C, T> {
    config: &'a SamplerConfig,
    cpu: C,
    temperature: T,
    collected: u64,
}

impl<'a, C: CpuSource, T: TemperatureSource> Sampler<'a, C, T> {
    pub fn new(config: &'a SamplerConfig, cpu: C, temperature: T) -> Self {
        Self {
            config,
            cpu,
            temperature,
            collected: 0,
        }
    }

    /// Samples written so far
    pub fn collected(&self) -> u64 {
        self.collected
    }

    /// Take one sample now
    pub fn collect(&mut self) -> SampleResult<Sample> {
        let timestamp = Utc::now();
        let cpu_percent = self.cpu.cpu_percent()?;
        let temperature_celsius = self.temperature.temperature_celsius()?;

        Ok(Sample {
            label: self.config.label.clone(),
            timestamp,
            cpu_percent,
            temperature_celsius,
        })
    }

    /// Write the header and every sample, stopping at the first failure
    pub async fn run<W: Write>(&mut self, out: &mut W) -> Result<RunSummary, RunError> {
        tracing::debug!(
            label = %self.config.label,
            seconds = self.config.seconds,
            "Starting sampler"
        );

        self.collected = 0;
        writeln!(out, "{HEADER}")?;
        out.flush()?;

        let mut remaining = self.config.seconds;
        while remaining > 0 {
            tokio::time::sleep(self.config.interval).await;

            let sample = self.collect()?;
            tracing::trace!(%sample, "Collected sample");
            writeln!(out, "{sample}")?;
            out.flush()?;

            self.collected += 1;
            remaining -= 1;
        }

        let summary = RunSummary {
            samples: self.collected,
        };
        tracing::debug!(samples = summary.samples, "Sampler finished");
        Ok(summary)
    }

    /// Like [`run`](Self::run), but a collection failure is answered with
    /// [`FAILURE_MESSAGE`] on `out`. Only write failures are returned as
    /// errors.
    ///
    /// The classified cause is logged at debug level so it stays off stderr
    /// unless `RUST_LOG` asks for it.
    pub async fn run_reporting<W: Write>(&mut self, out: &mut W) -> io::Result<Outcome> {
        match self.run(out).await {
            Ok(summary) => Ok(Outcome::Completed(summary)),
            Err(RunError::Collection(error)) => {
                tracing::debug!(
                    error = %error,
                    collected = self.collected,
                    "Sample collection failed, abandoning run"
                );
                writeln!(out, "{FAILURE_MESSAGE}")?;
                out.flush()?;
                Ok(Outcome::Aborted {
                    collected: self.collected,
                    error,
                })
            }
            Err(RunError::Output(e)) => Err(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedCpu(f64);

    impl CpuSource for FixedCpu {
        fn cpu_percent(&mut self) -> SampleResult<f64> {
            Ok(self.0)
        }
    }

    struct FixedTemp(f64);

    impl TemperatureSource for FixedTemp {
        fn temperature_celsius(&mut self) -> SampleResult<f64> {
            Ok(self.0)
        }
    }

    struct NoCpu;

    impl CpuSource for NoCpu {
        fn cpu_percent(&mut self) -> SampleResult<f64> {
            Err(SampleError::CpuUnavailable)
        }
    }

    #[test]
    fn test_collect_uses_config_label() {
        let config = SamplerConfig::new(1, "unit");
        let mut sampler = Sampler::new(&config, FixedCpu(3.5), FixedTemp(41.0));

        let sample = sampler.collect().unwrap();
        assert_eq!(sample.label, "unit");
        assert_eq!(sample.cpu_percent, 3.5);
        assert_eq!(sample.temperature_celsius, 41.0);
    }

    #[test]
    fn test_collect_propagates_cpu_failure() {
        let config = SamplerConfig::new(1, "unit");
        let mut sampler = Sampler::new(&config, NoCpu, FixedTemp(41.0));

        assert!(matches!(
            sampler.collect(),
            Err(SampleError::CpuUnavailable)
        ));
    }

    #[tokio::test(start_paused = true)]
    async fn test_run_counts_samples() {
        let config = SamplerConfig::new(4, "unit");
        let mut sampler = Sampler::new(&config, FixedCpu(1.0), FixedTemp(2.0));
        let mut out = Vec::new();

        let summary = sampler.run(&mut out).await.unwrap();
        assert_eq!(summary.samples, 4);
        assert_eq!(sampler.collected(), 4);
        assert_eq!(String::from_utf8(out).unwrap().lines().count(), 5);
    }

    #[tokio::test(start_paused = true)]
    async fn test_repeated_runs_count_from_zero() {
        let config = SamplerConfig::new(2, "unit");
        let mut sampler = Sampler::new(&config, FixedCpu(1.0), FixedTemp(2.0));

        let first = sampler.run(&mut Vec::new()).await.unwrap();
        let second = sampler.run(&mut Vec::new()).await.unwrap();
        assert_eq!(first.samples, 2);
        assert_eq!(second.samples, 2);
        assert_eq!(sampler.collected(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_run_reporting_writes_failure_line() {
        let config = SamplerConfig::new(2, "unit");
        let mut sampler = Sampler::new(&config, NoCpu, FixedTemp(2.0));
        let mut out = Vec::new();

        let outcome = sampler.run_reporting(&mut out).await.unwrap();
        assert!(matches!(outcome, Outcome::Aborted { collected: 0, .. }));
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "label;ts;cpu;temp\nSomething went wrong.\n"
        );
    }
}
