//! Core types for bootstrap resampling
//!
//! This crate provides the pieces shared by every other crate in the
//! workspace:
//!
//! - **Errors**: one [`Error`] taxonomy and [`Result`] alias
//! - **Statistics**: the [`Statistic`] seam and the [`Mean`] statistic
//! - **Randomness**: an explicitly owned, seedable [`RandomSource`]
//! - **Workspaces**: reusable resample buffers
//!
//! # Example
//!
//! ```rust
//! use bootstrap_core::{Mean, RandomSource, ResampleWorkspace, Statistic};
//!
//! let data = vec![1.0, 2.0, 3.0, 4.0, 5.0];
//! let mut rng = RandomSource::seeded(42);
//! let mut workspace = ResampleWorkspace::new();
//!
//! let resample = workspace.resample(&data, &mut rng);
//! let mean = Mean.compute(resample).unwrap();
//! assert!((1.0..=5.0).contains(&mean));
//! ```

pub mod error;
pub mod rng;
pub mod statistic;
pub mod utils;
pub mod workspace;

// Re-export core types
pub use error::{Error, Result};
pub use rng::RandomSource;
pub use statistic::{mean, Mean, Statistic};
pub use workspace::ResampleWorkspace;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{Error, Mean, RandomSource, ResampleWorkspace, Result, Statistic};
}
