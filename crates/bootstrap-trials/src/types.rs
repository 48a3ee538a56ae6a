//! Configuration and result types for trial runs

use crate::execution::ExecutionStrategy;
use bootstrap_confidence::{ConfidenceInterval, SignificanceLevel, DEFAULT_ALPHA, DEFAULT_RESAMPLES};
use bootstrap_core::{Error, Result};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use uuid::Uuid;

/// Default number of harness repetitions
pub const DEFAULT_TRIALS: usize = 100;

/// Parameters for a trial run
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrialConfig {
    /// Number of end-to-end repetitions
    pub num_trials: usize,
    /// Resamples drawn per trial
    pub n_bootstraps: usize,
    /// Two-sided significance level of each interval
    pub alpha: SignificanceLevel,
    /// How trials are scheduled
    #[serde(default)]
    pub strategy: ExecutionStrategy,
}

impl TrialConfig {
    /// Create a validated sequential configuration
    ///
    /// # Errors
    /// Returns [`Error::InvalidParameter`] if either count is zero or
    /// `alpha` is outside (0, 1).
    pub fn new(num_trials: usize, n_bootstraps: usize, alpha: f64) -> Result<Self> {
        let config = Self {
            num_trials,
            n_bootstraps,
            alpha: SignificanceLevel::new(alpha)?,
            strategy: ExecutionStrategy::Sequential,
        };
        config.validate()?;
        Ok(config)
    }

    /// Select the execution strategy
    pub fn with_strategy(mut self, strategy: ExecutionStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Check every parameter, including ones set through public fields
    pub fn validate(&self) -> Result<()> {
        if self.num_trials == 0 {
            return Err(Error::non_positive("num_trials"));
        }
        if self.n_bootstraps == 0 {
            return Err(Error::non_positive("n_bootstraps"));
        }
        if !self.strategy.is_available() {
            return Err(Error::FeatureNotAvailable(format!(
                "{} execution requires the `parallel` feature",
                self.strategy.name()
            )));
        }
        Ok(())
    }
}

impl Default for TrialConfig {
    fn default() -> Self {
        Self {
            num_trials: DEFAULT_TRIALS,
            n_bootstraps: DEFAULT_RESAMPLES,
            alpha: SignificanceLevel::new(DEFAULT_ALPHA).unwrap_or_default(),
            strategy: ExecutionStrategy::Sequential,
        }
    }
}

/// Wall-clock duration of one trial
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrialRecord {
    /// Zero-based trial index
    pub index: usize,
    /// Time spent bootstrapping and estimating the interval
    pub elapsed: Duration,
}

impl TrialRecord {
    /// Elapsed time in whole microseconds
    pub fn micros(&self) -> u64 {
        u64::try_from(self.elapsed.as_micros()).unwrap_or(u64::MAX)
    }
}

/// Aggregate timing over all trials of a run
///
/// `average_micros` uses real division so sub-microsecond precision is kept;
/// [`RunSummary::average_micros_truncated`] gives the integer figure.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RunSummary {
    /// Number of trials aggregated
    pub trials: usize,
    /// Sum of every trial's whole-microsecond duration
    pub total_micros: u64,
    /// `total_micros / trials` as a real number
    pub average_micros: f64,
}

impl RunSummary {
    /// Aggregate a set of trial records
    ///
    /// # Errors
    /// Returns [`Error::EmptySequence`] if `records` is empty.
    pub fn from_records(records: &[TrialRecord]) -> Result<Self> {
        if records.is_empty() {
            return Err(Error::empty("trial records"));
        }
        let total_micros = records
            .iter()
            .fold(0u64, |acc, r| acc.saturating_add(r.micros()));
        Ok(Self {
            trials: records.len(),
            total_micros,
            average_micros: total_micros as f64 / records.len() as f64,
        })
    }

    /// Average with the remainder discarded
    pub fn average_micros_truncated(&self) -> u64 {
        self.total_micros / self.trials as u64
    }

    /// Total as a [`Duration`]
    pub fn total(&self) -> Duration {
        Duration::from_micros(self.total_micros)
    }
}

/// Everything a trial run produces
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrialReport {
    /// Identifier shared by every event of this run
    pub run_id: Uuid,
    /// Configuration the run was executed with
    pub config: TrialConfig,
    /// One interval per trial, in trial order
    pub intervals: Vec<ConfidenceInterval>,
    /// One timing record per trial, in trial order
    pub records: Vec<TrialRecord>,
    /// Aggregate timing
    pub summary: RunSummary,
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn record(index: usize, micros: u64) -> TrialRecord {
        TrialRecord {
            index,
            elapsed: Duration::from_micros(micros),
        }
    }

    #[test]
    fn test_config_validation() {
        let config = TrialConfig::new(100, 1000, 0.05).unwrap();
        assert_eq!(config.num_trials, 100);
        assert_eq!(config.strategy, ExecutionStrategy::Sequential);

        assert!(matches!(
            TrialConfig::new(0, 1000, 0.05),
            Err(Error::InvalidParameter(_))
        ));
        assert!(matches!(
            TrialConfig::new(10, 0, 0.05),
            Err(Error::InvalidParameter(_))
        ));
        assert!(matches!(
            TrialConfig::new(10, 10, 1.0),
            Err(Error::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_config_default() {
        let config = TrialConfig::default();
        assert_eq!(config.num_trials, DEFAULT_TRIALS);
        assert_eq!(config.n_bootstraps, DEFAULT_RESAMPLES);
        assert_eq!(config.alpha.value(), DEFAULT_ALPHA);
        assert!(config.validate().is_ok());
    }

    #[cfg(not(feature = "parallel"))]
    #[test]
    fn test_parallel_without_feature() {
        let config = TrialConfig::new(2, 2, 0.05)
            .unwrap()
            .with_strategy(ExecutionStrategy::Parallel);
        assert!(matches!(
            config.validate(),
            Err(Error::FeatureNotAvailable(_))
        ));
    }

    #[test]
    fn test_record_micros_truncates() {
        let r = TrialRecord {
            index: 0,
            elapsed: Duration::from_nanos(1_999),
        };
        assert_eq!(r.micros(), 1);
    }

    #[test]
    fn test_summary_real_division() {
        let records = vec![record(0, 10), record(1, 11), record(2, 12), record(3, 12)];
        let summary = RunSummary::from_records(&records).unwrap();

        assert_eq!(summary.trials, 4);
        assert_eq!(summary.total_micros, 45);
        assert_relative_eq!(summary.average_micros, 11.25);
        assert_eq!(summary.average_micros_truncated(), 11);
        assert_eq!(summary.total(), Duration::from_micros(45));
    }

    #[test]
    fn test_summary_empty() {
        assert!(matches!(
            RunSummary::from_records(&[]),
            Err(Error::EmptySequence { .. })
        ));
    }

    #[test]
    fn test_config_serde() {
        let config = TrialConfig::new(3, 50, 0.1).unwrap();
        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains("\"strategy\":\"sequential\""));
        let back: TrialConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }
}
