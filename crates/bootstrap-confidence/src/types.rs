//! Common types for confidence intervals

use bootstrap_core::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A two-sided confidence interval with lower and upper bounds
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConfidenceInterval {
    /// Lower bound of the interval
    pub lower: f64,
    /// Upper bound of the interval
    pub upper: f64,
    /// Significance level the interval was computed for (e.g., 0.05 for 95% CI)
    pub alpha: f64,
}

impl ConfidenceInterval {
    /// Create a new confidence interval
    pub fn new(lower: f64, upper: f64, alpha: f64) -> Self {
        Self {
            lower,
            upper,
            alpha,
        }
    }

    /// Width of the confidence interval
    pub fn width(&self) -> f64 {
        self.upper - self.lower
    }

    /// Confidence level (1 - alpha)
    pub fn confidence_level(&self) -> f64 {
        1.0 - self.alpha
    }

    /// Check if a value is contained in the interval
    pub fn contains(&self, value: f64) -> bool {
        value >= self.lower && value <= self.upper
    }
}

impl fmt::Display for ConfidenceInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}% CI: [{:.2}, {:.2}]",
            format_percent(self.confidence_level()),
            self.lower,
            self.upper
        )
    }
}

/// Two-sided significance level, validated to lie strictly inside (0, 1)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct SignificanceLevel(f64);

impl SignificanceLevel {
    /// Create a new significance level
    ///
    /// # Errors
    /// Returns [`Error::InvalidParameter`] unless `0 < alpha < 1`.
    pub fn new(alpha: f64) -> Result<Self> {
        if !(alpha > 0.0 && alpha < 1.0) {
            return Err(Error::invalid_alpha(alpha));
        }
        Ok(Self(alpha))
    }

    /// Get the alpha value
    pub fn value(&self) -> f64 {
        self.0
    }

    /// Confidence level (1 - alpha)
    pub fn confidence_level(&self) -> f64 {
        1.0 - self.0
    }

    /// Tail probability (alpha/2 for two-tailed)
    pub fn tail_probability(&self) -> f64 {
        self.0 / 2.0
    }

    /// Common significance levels
    pub const TEN_PERCENT: Self = Self(0.10);
    pub const FIVE_PERCENT: Self = Self(0.05);
    pub const ONE_PERCENT: Self = Self(0.01);
}

impl Default for SignificanceLevel {
    fn default() -> Self {
        Self::FIVE_PERCENT
    }
}

impl TryFrom<f64> for SignificanceLevel {
    type Error = Error;

    fn try_from(alpha: f64) -> Result<Self> {
        Self::new(alpha)
    }
}

impl From<SignificanceLevel> for f64 {
    fn from(level: SignificanceLevel) -> Self {
        level.0
    }
}

impl fmt::Display for SignificanceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", format_percent(self.confidence_level()))
    }
}

/// Render a proportion as a percentage without trailing zeros (0.95 -> "95", 0.995 -> "99.5")
pub fn format_percent(proportion: f64) -> String {
    let formatted = format!("{:.2}", proportion * 100.0);
    formatted
        .trim_end_matches('0')
        .trim_end_matches('.')
        .to_string()
}
