//! Repeated-trial harness for bootstrap confidence intervals
//!
//! The harness runs the sample → bootstrap distribution → interval pipeline
//! many times, brackets each run with its own wall-clock timer and
//! aggregates the timings. Start and end of every trial are published as
//! [`TrialEvent`]s so instrumentation can be attached from outside.
//!
//! # Example
//!
//! ```rust
//! use bootstrap_core::RandomSource;
//! use bootstrap_trials::{TrialConfig, TrialHarness};
//!
//! let config = TrialConfig::new(10, 500, 0.05).unwrap();
//! let harness = TrialHarness::new(config).unwrap();
//!
//! let mut rng = RandomSource::seeded(42);
//! let report = harness.run(&[1.0, 2.0, 3.0, 4.0, 5.0], &mut rng).unwrap();
//!
//! assert_eq!(report.intervals.len(), 10);
//! println!("average trial time: {:.1} µs", report.summary.average_micros);
//! ```

pub mod events;
pub mod execution;
mod harness;
mod types;

pub use events::{EventBus, EventHandler, LoggingHandler, TimingCollector, TrialEvent};
pub use execution::ExecutionStrategy;
pub use harness::TrialHarness;
pub use types::{RunSummary, TrialConfig, TrialRecord, TrialReport, DEFAULT_TRIALS};
