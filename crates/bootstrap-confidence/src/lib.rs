//! Bootstrap confidence interval estimation
//!
//! This crate builds percentile confidence intervals for the mean of a
//! sample:
//!
//! - **Sampling**: [`BootstrapSampler`] draws resamples with replacement and
//!   records the mean of each one
//! - **Intervals**: [`PercentileInterval`] reads two order statistics from the
//!   sorted [`BootstrapDistribution`]
//! - **Pipeline**: [`IntervalPipeline`] composes the two
//!
//! # Overview
//!
//! The percentile bootstrap makes no assumption about the shape of the
//! sampling distribution. It approximates it empirically by recomputing the
//! statistic on many resamples of the observed data, then takes the central
//! `1 - alpha` mass of those values as the interval.
//!
//! # Examples
//!
//! ```rust
//! use bootstrap_confidence::{
//!     BootstrapSampler, IntervalMethod, PercentileInterval, SignificanceLevel,
//! };
//! use bootstrap_core::RandomSource;
//!
//! let sample = vec![1.0, 2.0, 3.0, 4.0, 5.0];
//! let mut rng = RandomSource::seeded(42);
//!
//! let sampler = BootstrapSampler::new(1000).unwrap();
//! let distribution = sampler.bootstrap(&sample, &mut rng).unwrap();
//!
//! let ci = PercentileInterval
//!     .interval(&distribution, SignificanceLevel::FIVE_PERCENT)
//!     .unwrap();
//! println!("{ci}");
//! assert!(ci.lower <= ci.upper);
//! ```

pub mod api;
mod distribution;
mod percentile;
mod pipeline;
mod sampler;
mod types;

// Re-exports
pub use api::{
    bootstrap, confidence_interval, mean_confidence_interval, DEFAULT_ALPHA, DEFAULT_RESAMPLES,
};
pub use distribution::BootstrapDistribution;
pub use percentile::{percentile_indices, percentile_interval, IntervalMethod, PercentileInterval};
pub use pipeline::{IntervalPipeline, PipelineOutput};
pub use sampler::{BootstrapSampler, Resampler};
pub use types::{format_percent, ConfidenceInterval, SignificanceLevel};
