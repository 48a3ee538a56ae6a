//! Statistics computed on each bootstrap resample
//!
//! The bootstrap is generic over the statistic it resamples. The arithmetic
//! mean is the statistic used throughout this workspace.

use crate::{Error, Result};

/// A statistic computed from a slice of observations
pub trait Statistic: Clone + Send + Sync {
    /// Compute the statistic for the given data
    fn compute(&self, data: &[f64]) -> Result<f64>;

    /// Name of the statistic for logging
    fn name(&self) -> &'static str;
}

/// Arithmetic mean
///
/// Plain summation followed by floating-point division by `n`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Mean;

impl Statistic for Mean {
    fn compute(&self, data: &[f64]) -> Result<f64> {
        mean(data)
    }

    fn name(&self) -> &'static str {
        "mean"
    }
}

/// Calculate the arithmetic mean of a slice
///
/// # Errors
/// Returns [`Error::EmptySequence`] for an empty slice.
///
/// # Examples
///
/// ```rust
/// use bootstrap_core::statistic::mean;
///
/// assert_eq!(mean(&[1.0, 2.0, 3.0]).unwrap(), 2.0);
/// assert!(mean(&[]).is_err());
/// ```
pub fn mean(data: &[f64]) -> Result<f64> {
    if data.is_empty() {
        return Err(Error::empty("mean input"));
    }
    let sum: f64 = data.iter().sum();
    Ok(sum / data.len() as f64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_mean_basic() {
        assert_eq!(mean(&[1.0, 2.0, 3.0, 4.0, 5.0]).unwrap(), 3.0);
    }

    #[test]
    fn test_mean_uses_float_division() {
        // 7 / 2 must not truncate
        assert_eq!(mean(&[3.0, 4.0]).unwrap(), 3.5);
    }

    #[test]
    fn test_mean_single_element() {
        assert_eq!(mean(&[42.0]).unwrap(), 42.0);
    }

    #[test]
    fn test_mean_negative_values() {
        assert_relative_eq!(mean(&[-1.5, 0.5, 4.0]).unwrap(), 1.0);
    }

    #[test]
    fn test_mean_empty() {
        assert!(matches!(mean(&[]), Err(Error::EmptySequence { .. })));
    }

    #[test]
    fn test_statistic_trait() {
        let stat = Mean;
        assert_eq!(stat.name(), "mean");
        assert_relative_eq!(
            stat.compute(&[16884.924, 1725.5523, 4449.462]).unwrap(),
            7686.646_1,
            epsilon = 1e-6
        );
        assert!(stat.compute(&[]).is_err());
    }
}
