//! Error types for bootstrap resampling
//!
//! Provides a unified error type for all bootstrap-stats crates.

use thiserror::Error;

/// Core error type for bootstrap operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// An operation that needs at least one value received none
    #[error("Empty sequence: {context} must contain at least one value")]
    EmptySequence { context: String },

    /// Invalid parameter provided to a function
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Threading or event dispatch error
    #[error("Execution error: {0}")]
    Execution(String),

    /// Feature not available
    #[error("Feature not available: {0}")]
    FeatureNotAvailable(String),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

// Helper functions for common error patterns

impl Error {
    /// Create an error for an empty sample or distribution
    pub fn empty(context: &str) -> Self {
        Self::EmptySequence {
            context: context.to_string(),
        }
    }

    /// Create an error for a count that must be positive
    pub fn non_positive(name: &str) -> Self {
        Self::InvalidParameter(format!("{name} must be greater than zero"))
    }

    /// Create an error for a significance level outside (0, 1)
    pub fn invalid_alpha(alpha: f64) -> Self {
        Self::InvalidParameter(format!("alpha {alpha} must be in (0, 1)"))
    }

    /// Create an error for a NaN or infinite value at `index`
    pub fn non_finite(context: &str, index: usize, value: f64) -> Self {
        Self::InvalidParameter(format!("{context} value {value} at index {index} is not finite"))
    }
}
