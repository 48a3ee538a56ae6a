//! Bootstrap distribution of a statistic

use bootstrap_core::utils;
use serde::{Deserialize, Serialize};
use std::ops::Deref;

/// Values of a statistic across bootstrap resamples, in generation order
///
/// Element `i` is the statistic of the `i`-th resample. The distribution is
/// read-only once the sampler has produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BootstrapDistribution {
    estimates: Vec<f64>,
}

impl BootstrapDistribution {
    /// Wrap a vector of estimates
    pub fn new(estimates: Vec<f64>) -> Self {
        Self { estimates }
    }

    /// Estimates in generation order
    pub fn estimates(&self) -> &[f64] {
        &self.estimates
    }

    /// Estimates sorted ascending
    pub fn sorted(&self) -> Vec<f64> {
        utils::sorted(&self.estimates)
    }

    /// Consume the distribution and return the raw estimates
    pub fn into_inner(self) -> Vec<f64> {
        self.estimates
    }
}

impl Deref for BootstrapDistribution {
    type Target = [f64];

    fn deref(&self) -> &[f64] {
        &self.estimates
    }
}

impl AsRef<[f64]> for BootstrapDistribution {
    fn as_ref(&self) -> &[f64] {
        &self.estimates
    }
}

impl From<Vec<f64>> for BootstrapDistribution {
    fn from(estimates: Vec<f64>) -> Self {
        Self::new(estimates)
    }
}
