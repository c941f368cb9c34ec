//! Application configuration from CLI flags and environment.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use strassen_core::{Fill, DEFAULT_TOLERANCE};

/// How products are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Aligned text rows.
    Text,
    /// JSON report.
    Json,
}

/// Strassen-rs: multiply square matrices with Strassen's algorithm.
#[derive(Parser, Debug)]
#[command(name = "strassen", version, about)]
pub struct AppConfig {
    /// Matrix dimension n (both operands are n x n).
    #[arg(short, long, default_value = "64", env = "STRASSEN_N")]
    pub n: usize,

    /// Algorithm to use: naive, strassen, or all.
    #[arg(long, default_value = "strassen")]
    pub algo: String,

    /// Fill pattern for A: zero, one, one-ring, checker, incr, row-ramp, random[:seed].
    #[arg(long, default_value = "incr")]
    pub fill_a: Fill,

    /// Fill pattern for B.
    #[arg(long, default_value = "one-ring")]
    pub fill_b: Fill,

    /// Base-case dimension for Strassen (0 = default).
    #[arg(long, default_value = "0")]
    pub threshold: usize,

    /// Relative tolerance when comparing products of several algorithms.
    #[arg(long, default_value_t = DEFAULT_TOLERANCE)]
    pub tolerance: f64,

    /// Print the product matrix.
    #[arg(short, long)]
    pub print: bool,

    /// Output format.
    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Write the product to this file.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Quiet mode (only output the product).
    #[arg(short, long)]
    pub quiet: bool,

    /// Verbose output.
    #[arg(short, long)]
    pub verbose: bool,
}

impl AppConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = AppConfig::try_parse_from(["strassen"]).unwrap();
        assert_eq!(config.algo, "strassen");
        assert_eq!(config.fill_a, Fill::Incr);
        assert_eq!(config.fill_b, Fill::OneRing);
        assert_eq!(config.threshold, 0);
        assert_eq!(config.format, OutputFormat::Text);
        assert!(config.output.is_none());
    }

    #[test]
    fn parses_fills_and_format() {
        let config = AppConfig::try_parse_from([
            "strassen",
            "-n",
            "7",
            "--fill-a",
            "random:9",
            "--fill-b",
            "checker",
            "--format",
            "json",
            "-p",
        ])
        .unwrap();
        assert_eq!(config.n, 7);
        assert_eq!(config.fill_a, Fill::Random { seed: 9 });
        assert_eq!(config.fill_b, Fill::Checker);
        assert_eq!(config.format, OutputFormat::Json);
        assert!(config.print);
    }

    #[test]
    fn rejects_unknown_fill() {
        assert!(AppConfig::try_parse_from(["strassen", "--fill-a", "spiral"]).is_err());
    }
}
