//! High-level API for bootstrap confidence intervals
//!
//! This module provides plain functions for the common case: the percentile
//! interval of the mean.

use crate::{
    distribution::BootstrapDistribution,
    percentile::{IntervalMethod, PercentileInterval},
    pipeline::IntervalPipeline,
    sampler::BootstrapSampler,
    ConfidenceInterval, SignificanceLevel,
};
use bootstrap_core::Result;
use rand::Rng;

/// Default number of bootstrap resamples
pub const DEFAULT_RESAMPLES: usize = 1000;

/// Default two-sided significance level (95% interval)
pub const DEFAULT_ALPHA: f64 = 0.05;

/// Bootstrap distribution of the mean of `sample`
///
/// # Example
/// ```rust
/// use bootstrap_confidence::api::bootstrap;
/// use bootstrap_core::RandomSource;
///
/// let mut rng = RandomSource::seeded(42);
/// let means = bootstrap(&[1.0, 2.0, 3.0, 4.0, 5.0], 1000, &mut rng).unwrap();
/// assert_eq!(means.len(), 1000);
/// ```
pub fn bootstrap<R: Rng + ?Sized>(
    sample: &[f64],
    n_bootstraps: usize,
    rng: &mut R,
) -> Result<BootstrapDistribution> {
    BootstrapSampler::new(n_bootstraps)?.bootstrap(sample, rng)
}

/// Percentile confidence interval of a bootstrap distribution
///
/// # Example
/// ```rust
/// use bootstrap_confidence::{api::confidence_interval, BootstrapDistribution};
///
/// let dist = BootstrapDistribution::new(vec![42.0; 10]);
/// let ci = confidence_interval(&dist, 0.05).unwrap();
/// assert_eq!((ci.lower, ci.upper), (42.0, 42.0));
/// ```
pub fn confidence_interval(
    distribution: &BootstrapDistribution,
    alpha: f64,
) -> Result<ConfidenceInterval> {
    PercentileInterval.interval(distribution, SignificanceLevel::new(alpha)?)
}

/// Bootstrap the mean and return its percentile interval in one call
///
/// # Example
/// ```rust
/// use bootstrap_confidence::api::{mean_confidence_interval, DEFAULT_ALPHA, DEFAULT_RESAMPLES};
/// use bootstrap_core::RandomSource;
///
/// let mut rng = RandomSource::seeded(7);
/// let ci = mean_confidence_interval(
///     &[1.0, 2.0, 3.0, 4.0, 5.0],
///     DEFAULT_RESAMPLES,
///     DEFAULT_ALPHA,
///     &mut rng,
/// ).unwrap();
/// assert!(ci.contains(3.0));
/// ```
pub fn mean_confidence_interval<R: Rng + ?Sized>(
    sample: &[f64],
    n_bootstraps: usize,
    alpha: f64,
    rng: &mut R,
) -> Result<ConfidenceInterval> {
    IntervalPipeline::percentile(n_bootstraps, alpha)?.estimate(sample, rng)
}
