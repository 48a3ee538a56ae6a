//! Percentile bootstrap confidence intervals with a repeated-trial harness
//!
//! Umbrella crate re-exporting the workspace members:
//!
//! - [`bootstrap_core`]: errors, the owned random source and resampling primitives
//! - [`bootstrap_confidence`]: bootstrap distributions and percentile intervals
//! - [`bootstrap_trials`]: the timed repeated-trial harness and its events
//!
//! ```rust
//! use bootstrap_stats::prelude::*;
//!
//! let harness = TrialHarness::new(TrialConfig::new(5, 500, 0.05).unwrap()).unwrap();
//! let report = harness
//!     .run(&[1.0, 2.0, 3.0, 4.0, 5.0], &mut RandomSource::seeded(42))
//!     .unwrap();
//! assert_eq!(report.intervals.len(), 5);
//! ```

pub use bootstrap_confidence;
pub use bootstrap_core;
pub use bootstrap_trials;

pub mod prelude {
    pub use bootstrap_confidence::{
        bootstrap, confidence_interval, mean_confidence_interval, BootstrapDistribution,
        BootstrapSampler, ConfidenceInterval, IntervalMethod, IntervalPipeline,
        PercentileInterval, SignificanceLevel,
    };
    pub use bootstrap_core::prelude::*;
    pub use bootstrap_trials::{
        EventBus, EventHandler, ExecutionStrategy, TrialConfig, TrialEvent, TrialHarness,
        TrialReport,
    };
}
