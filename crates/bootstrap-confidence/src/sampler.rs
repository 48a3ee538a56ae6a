//! Bootstrap sampler
//!
//! Builds the bootstrap distribution of a statistic by repeatedly drawing
//! resamples with replacement from the observed sample. The random source is
//! owned by the caller and passed in on every call, so a seeded source gives a
//! reproducible distribution and back-to-back calls never share a stream.

use crate::distribution::BootstrapDistribution;
use bootstrap_core::{Error, Mean, ResampleWorkspace, Result, Statistic};
use rand::Rng;
use tracing::{debug, instrument};

/// Draws resamples of a borrowed sample, one at a time
///
/// Each call to [`Resampler::next`] overwrites the previous resample, so the
/// underlying buffers are allocated once per resampler.
pub struct Resampler<'a> {
    sample: &'a [f64],
    workspace: ResampleWorkspace,
}

impl<'a> Resampler<'a> {
    /// Create a resampler over a non-empty sample of finite values
    ///
    /// # Errors
    /// Returns [`Error::EmptySequence`] for an empty sample and
    /// [`Error::InvalidParameter`] if any value is NaN or infinite.
    pub fn new(sample: &'a [f64]) -> Result<Self> {
        if sample.is_empty() {
            return Err(Error::empty("sample"));
        }
        if let Some((index, &value)) = sample.iter().enumerate().find(|(_, v)| !v.is_finite()) {
            return Err(Error::non_finite("sample", index, value));
        }
        Ok(Self {
            sample,
            workspace: ResampleWorkspace::with_capacity(sample.len()),
        })
    }

    /// Draw the next resample: `n` values picked uniformly with replacement
    #[allow(clippy::should_implement_trait)]
    pub fn next<R: Rng + ?Sized>(&mut self, rng: &mut R) -> &[f64] {
        self.workspace.resample(self.sample, rng)
    }

    /// The sample being resampled
    pub fn sample(&self) -> &[f64] {
        self.sample
    }
}

/// Produces bootstrap distributions of a statistic
#[derive(Debug, Clone)]
pub struct BootstrapSampler<S = Mean> {
    n_bootstraps: usize,
    statistic: S,
}

impl BootstrapSampler<Mean> {
    /// Create a sampler for the mean with `n_bootstraps` resamples per run
    ///
    /// # Errors
    /// Returns [`Error::InvalidParameter`] if `n_bootstraps` is zero.
    pub fn new(n_bootstraps: usize) -> Result<Self> {
        Self::with_statistic(n_bootstraps, Mean)
    }
}

impl<S: Statistic> BootstrapSampler<S> {
    /// Create a sampler for an arbitrary statistic
    pub fn with_statistic(n_bootstraps: usize, statistic: S) -> Result<Self> {
        if n_bootstraps == 0 {
            return Err(Error::non_positive("n_bootstraps"));
        }
        Ok(Self {
            n_bootstraps,
            statistic,
        })
    }

    /// Number of resamples drawn per call
    pub fn n_bootstraps(&self) -> usize {
        self.n_bootstraps
    }

    /// The statistic computed on each resample
    pub fn statistic(&self) -> &S {
        &self.statistic
    }

    /// Build the bootstrap distribution for `sample`
    ///
    /// Element `i` of the result is the statistic of the `i`-th resample.
    ///
    /// # Errors
    /// Returns [`Error::EmptySequence`] if `sample` is empty and
    /// [`Error::InvalidParameter`] if it holds a NaN or infinite value.
    #[instrument(
        skip(self, sample, rng),
        fields(n = sample.len(), n_bootstraps = self.n_bootstraps)
    )]
    pub fn bootstrap<R: Rng + ?Sized>(
        &self,
        sample: &[f64],
        rng: &mut R,
    ) -> Result<BootstrapDistribution> {
        let mut resampler = Resampler::new(sample)?;
        let mut estimates = Vec::with_capacity(self.n_bootstraps);

        for _ in 0..self.n_bootstraps {
            let resample = resampler.next(rng);
            estimates.push(self.statistic.compute(resample)?);
        }

        debug!(
            "Generated {} bootstrap {} estimates",
            estimates.len(),
            self.statistic.name()
        );

        Ok(BootstrapDistribution::new(estimates))
    }
}
