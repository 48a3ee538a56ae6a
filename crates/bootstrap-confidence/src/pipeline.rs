//! Sample → bootstrap distribution → confidence interval
//!
//! The pipeline composes a [`BootstrapSampler`] with an [`IntervalMethod`].
//! It holds no timing or I/O concerns; the trial harness wraps it for that.

use crate::{
    distribution::BootstrapDistribution,
    percentile::{IntervalMethod, PercentileInterval},
    sampler::BootstrapSampler,
    ConfidenceInterval, SignificanceLevel,
};
use bootstrap_core::{Mean, Result, Statistic};
use rand::Rng;

/// Output of one pipeline run when the distribution is kept
#[derive(Debug, Clone)]
pub struct PipelineOutput {
    /// The bootstrap distribution the interval was computed from
    pub distribution: BootstrapDistribution,
    /// The resulting interval
    pub interval: ConfidenceInterval,
}

/// One end-to-end bootstrap interval estimation
#[derive(Debug, Clone)]
pub struct IntervalPipeline<M = PercentileInterval, S = Mean> {
    sampler: BootstrapSampler<S>,
    method: M,
    alpha: SignificanceLevel,
}

impl IntervalPipeline<PercentileInterval, Mean> {
    /// Percentile interval for the mean
    pub fn percentile(n_bootstraps: usize, alpha: f64) -> Result<Self> {
        Ok(Self::new(
            BootstrapSampler::new(n_bootstraps)?,
            PercentileInterval,
            SignificanceLevel::new(alpha)?,
        ))
    }
}

impl<M: IntervalMethod, S: Statistic> IntervalPipeline<M, S> {
    /// Compose a sampler and an interval method
    pub fn new(sampler: BootstrapSampler<S>, method: M, alpha: SignificanceLevel) -> Self {
        Self {
            sampler,
            method,
            alpha,
        }
    }

    /// The sampler used by this pipeline
    pub fn sampler(&self) -> &BootstrapSampler<S> {
        &self.sampler
    }

    /// The interval method used by this pipeline
    pub fn method(&self) -> &M {
        &self.method
    }

    /// Significance level of the produced intervals
    pub fn alpha(&self) -> SignificanceLevel {
        self.alpha
    }

    /// Run the pipeline and return only the interval
    pub fn estimate<R: Rng + ?Sized>(
        &self,
        sample: &[f64],
        rng: &mut R,
    ) -> Result<ConfidenceInterval> {
        let distribution = self.sampler.bootstrap(sample, rng)?;
        self.method.interval(&distribution, self.alpha)
    }

    /// Run the pipeline and keep the bootstrap distribution alongside the interval
    pub fn estimate_with_distribution<R: Rng + ?Sized>(
        &self,
        sample: &[f64],
        rng: &mut R,
    ) -> Result<PipelineOutput> {
        let distribution = self.sampler.bootstrap(sample, rng)?;
        let interval = self.method.interval(&distribution, self.alpha)?;
        Ok(PipelineOutput {
            distribution,
            interval,
        })
    }
}
