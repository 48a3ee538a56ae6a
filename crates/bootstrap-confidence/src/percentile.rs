//! Percentile confidence intervals from a bootstrap distribution
//!
//! The interval bounds are order statistics of the sorted distribution, never
//! interpolated values.

use crate::{distribution::BootstrapDistribution, ConfidenceInterval, SignificanceLevel};
use bootstrap_core::{Error, Result};
use tracing::{debug, instrument};

/// Rule for turning a bootstrap distribution into a confidence interval
pub trait IntervalMethod: Clone + Send + Sync {
    /// Calculate the confidence interval from the bootstrap distribution
    fn interval(
        &self,
        distribution: &BootstrapDistribution,
        alpha: SignificanceLevel,
    ) -> Result<ConfidenceInterval>;

    /// Method name for documentation
    fn name(&self) -> &'static str;
}

/// Percentile bootstrap method
///
/// Sorts the distribution and takes the order statistics at
///
/// - `lower_index = floor(n * alpha / 2)`
/// - `upper_index = min(n - lower_index, n - 1)`
///
/// The upper index is clamped to the last position. Whenever
/// `lower_index >= 1` this is exactly `n - lower_index`; when `lower_index`
/// is zero (small `n` or small `alpha`) the upper bound is the maximum of the
/// distribution.
#[derive(Debug, Clone, Copy, Default)]
pub struct PercentileInterval;

impl IntervalMethod for PercentileInterval {
    #[instrument(skip(self, distribution), fields(n = distribution.len(), alpha = alpha.value()))]
    fn interval(
        &self,
        distribution: &BootstrapDistribution,
        alpha: SignificanceLevel,
    ) -> Result<ConfidenceInterval> {
        if distribution.is_empty() {
            return Err(Error::empty("bootstrap distribution"));
        }

        let sorted = distribution.sorted();
        let (lower_idx, upper_idx) = percentile_indices(sorted.len(), alpha);

        debug!("Percentile indices: lower={}, upper={}", lower_idx, upper_idx);

        Ok(ConfidenceInterval::new(
            sorted[lower_idx],
            sorted[upper_idx],
            alpha.value(),
        ))
    }

    fn name(&self) -> &'static str {
        "Percentile Bootstrap"
    }
}

/// Zero-based positions of the lower and upper order statistics
///
/// `n` must be positive. Both indices are always `< n` and
/// `lower <= upper`.
pub fn percentile_indices(n: usize, alpha: SignificanceLevel) -> (usize, usize) {
    debug_assert!(n > 0, "percentile indices need a non-empty distribution");
    let lower_idx = ((n as f64) * alpha.value() / 2.0).floor() as usize;
    let lower_idx = lower_idx.min(n - 1);
    let upper_idx = (n - lower_idx).min(n - 1);
    (lower_idx, upper_idx)
}

/// Percentile interval of a raw slice of estimates
///
/// Convenience for callers that hold a slice rather than a
/// [`BootstrapDistribution`].
pub fn percentile_interval(estimates: &[f64], alpha: f64) -> Result<ConfidenceInterval> {
    let alpha = SignificanceLevel::new(alpha)?;
    PercentileInterval.interval(&BootstrapDistribution::from(estimates.to_vec()), alpha)
}
