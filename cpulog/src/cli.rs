//! Command line parsing
//!
//! `cpulog <seconds> [label]`. Any parse failure is reported as a
//! [`UsageError`]; the binary answers it with [`USAGE`] on stdout.

use clap::Parser;
use thiserror::Error;

use crate::config::{SamplerConfig, DEFAULT_LABEL};

/// Usage text printed for missing or invalid arguments
pub const USAGE: &str = "cpulog: print cpu usage in % and cpu temp in C to stdout.\n  Usage: cpulog seconds [label]\n";

#[derive(Parser, Debug)]
#[command(name = "cpulog")]
#[command(about = "Print CPU usage in % and CPU temperature in C to stdout")]
#[command(disable_help_flag = true, disable_version_flag = true)]
struct Cli {
    /// Number of one-second samples to take, a signed 64-bit integer.
    /// Values outside the i64 range and `_` digit separators are rejected.
    #[arg(allow_hyphen_values = true, value_parser = parse_seconds)]
    seconds: i64,

    /// Tag written at the start of every line
    #[arg(allow_hyphen_values = true)]
    label: Option<String>,

    /// Ignored
    #[arg(hide = true, allow_hyphen_values = true)]
    rest: Vec<String>,
}

/// Arguments could not be turned into a configuration
#[derive(Error, Debug)]
#[error("invalid arguments: {0}")]
pub struct UsageError(#[from] clap::Error);

fn parse_seconds(s: &str) -> Result<i64, std::num::ParseIntError> {
    s.trim().parse()
}

/// Parse process arguments (including the program name) into a configuration
pub fn parse_args<I, T>(args: I) -> Result<SamplerConfig, UsageError>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let cli = Cli::try_parse_from(args)?;
    if !cli.rest.is_empty() {
        tracing::debug!(ignored = ?cli.rest, "Ignoring extra arguments");
    }
    let label = cli.label.unwrap_or_else(|| DEFAULT_LABEL.to_string());
    Ok(SamplerConfig::new(cli.seconds, label))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<SamplerConfig, UsageError> {
        parse_args(std::iter::once("cpulog").chain(args.iter().copied()))
    }

    #[test]
    fn test_seconds_only_uses_default_label() {
        let config = parse(&["2"]).unwrap();
        assert_eq!(config.seconds, 2);
        assert_eq!(config.label, "cpulog");
    }

    #[test]
    fn test_seconds_and_label() {
        let config = parse(&["3", "test"]).unwrap();
        assert_eq!(config.seconds, 3);
        assert_eq!(config.label, "test");
    }

    #[test]
    fn test_negative_and_zero_seconds_parse() {
        assert_eq!(parse(&["0"]).unwrap().seconds, 0);
        assert_eq!(parse(&["-4"]).unwrap().seconds, -4);
        assert_eq!(parse(&["+4"]).unwrap().seconds, 4);
    }

    #[test]
    fn test_surrounding_whitespace_is_trimmed() {
        assert_eq!(parse(&[" 5 "]).unwrap().seconds, 5);
    }

    #[test]
    fn test_missing_seconds_is_usage_error() {
        assert!(parse(&[]).is_err());
    }

    #[test]
    fn test_non_integer_seconds_is_usage_error() {
        assert!(parse(&["abc"]).is_err());
        assert!(parse(&["1.5"]).is_err());
        assert!(parse(&["-h"]).is_err());
        assert!(parse(&["--help"]).is_err());
    }

    #[test]
    fn test_seconds_outside_i64_is_usage_error() {
        assert_eq!(parse(&["9223372036854775807"]).unwrap().seconds, i64::MAX);
        assert!(parse(&["9223372036854775808"]).is_err());
        assert!(parse(&["1_000"]).is_err());
    }

    #[test]
    fn test_hyphen_label_accepted() {
        assert_eq!(parse(&["1", "-x"]).unwrap().label, "-x");
    }

    #[test]
    fn test_extra_arguments_ignored() {
        let config = parse(&["1", "lbl", "extra", "more"]).unwrap();
        assert_eq!(config.seconds, 1);
        assert_eq!(config.label, "lbl");
    }

    #[test]
    fn test_usage_text() {
        assert!(USAGE.starts_with("cpulog:"));
        assert!(USAGE.contains("Usage: cpulog seconds [label]"));
    }
}
