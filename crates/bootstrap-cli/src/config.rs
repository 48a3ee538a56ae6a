//! Command-line arguments and the run configuration built from them

use crate::loader::ColumnSelector;
use bootstrap_confidence::{DEFAULT_ALPHA, DEFAULT_RESAMPLES};
use bootstrap_core::Result;
use bootstrap_trials::{ExecutionStrategy, TrialConfig, DEFAULT_TRIALS};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// How results are written
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// One interval line per trial followed by the runtime totals
    #[default]
    Text,
    /// The full trial report as JSON
    Json,
}

/// Repeated bootstrap confidence intervals for one CSV column
#[derive(Parser, Debug, Clone)]
#[command(name = "bootstrap-ci")]
#[command(version, about, long_about = None)]
pub struct Args {
    /// CSV file with a header row
    #[arg(short, long, default_value = "insurance.csv")]
    pub input: PathBuf,

    /// Column to analyse, by header name or zero-based index
    #[arg(short, long, default_value = "charges")]
    pub column: ColumnSelector,

    /// Number of timed trials
    #[arg(short, long, default_value_t = DEFAULT_TRIALS)]
    pub trials: usize,

    /// Bootstrap resamples per trial
    #[arg(short, long, default_value_t = DEFAULT_RESAMPLES)]
    pub resamples: usize,

    /// Two-sided significance level
    #[arg(short, long, default_value_t = DEFAULT_ALPHA)]
    pub alpha: f64,

    /// Seed for reproducible runs; OS entropy when omitted
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Where results are written
    #[arg(short, long, default_value = "bootstrap_output.txt")]
    pub output: PathBuf,

    /// Result format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Also append log lines to this file
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Run trials on the rayon thread pool
    #[arg(long)]
    pub parallel: bool,

    /// Verify the resample count on a fixed sample before exiting
    #[arg(long)]
    pub self_check: bool,
}

/// Validated settings for one invocation
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub input: PathBuf,
    pub column: ColumnSelector,
    pub trials: TrialConfig,
    pub seed: Option<u64>,
    pub output: PathBuf,
    pub format: OutputFormat,
    pub self_check: bool,
}

impl TryFrom<Args> for RunConfig {
    type Error = bootstrap_core::Error;

    fn try_from(args: Args) -> Result<Self> {
        let strategy = if args.parallel {
            ExecutionStrategy::Parallel
        } else {
            ExecutionStrategy::Sequential
        };
        let trials =
            TrialConfig::new(args.trials, args.resamples, args.alpha)?.with_strategy(strategy);
        trials.validate()?;

        Ok(Self {
            input: args.input,
            column: args.column,
            trials,
            seed: args.seed,
            output: args.output,
            format: args.format,
            self_check: args.self_check,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bootstrap_core::Error;

    #[test]
    fn test_defaults() {
        let args = Args::parse_from(["bootstrap-ci"]);
        assert_eq!(args.input, PathBuf::from("insurance.csv"));
        assert_eq!(args.column, ColumnSelector::Name("charges".to_string()));
        assert_eq!(args.trials, 100);
        assert_eq!(args.resamples, 1000);
        assert_eq!(args.alpha, 0.05);
        assert_eq!(args.format, OutputFormat::Text);
        assert!(args.seed.is_none());
        assert!(!args.parallel);

        let config = RunConfig::try_from(args).unwrap();
        assert_eq!(config.trials.num_trials, 100);
        assert_eq!(config.trials.strategy, ExecutionStrategy::Sequential);
    }

    #[test]
    fn test_overrides() {
        let args = Args::parse_from([
            "bootstrap-ci",
            "--input",
            "data.csv",
            "--column",
            "6",
            "--trials",
            "5",
            "--resamples",
            "200",
            "--alpha",
            "0.1",
            "--seed",
            "42",
            "--format",
            "json",
        ]);
        let config = RunConfig::try_from(args).unwrap();
        assert_eq!(config.column, ColumnSelector::Index(6));
        assert_eq!(config.trials.n_bootstraps, 200);
        assert_eq!(config.trials.alpha.value(), 0.1);
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.format, OutputFormat::Json);
    }

    #[test]
    fn test_invalid_values_rejected() {
        let args = Args::parse_from(["bootstrap-ci", "--trials", "0"]);
        assert!(matches!(
            RunConfig::try_from(args),
            Err(Error::InvalidParameter(_))
        ));

        let args = Args::parse_from(["bootstrap-ci", "--alpha", "1.5"]);
        assert!(matches!(
            RunConfig::try_from(args),
            Err(Error::InvalidParameter(_))
        ));
    }

    #[cfg(not(feature = "parallel"))]
    #[test]
    fn test_parallel_flag_needs_feature() {
        let args = Args::parse_from(["bootstrap-ci", "--parallel"]);
        assert!(matches!(
            RunConfig::try_from(args),
            Err(Error::FeatureNotAvailable(_))
        ));
    }
}
