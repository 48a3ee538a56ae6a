//! Command-line runner for repeated bootstrap confidence intervals
//!
//! Loads one numeric column from a CSV file, runs the trial harness over it
//! and writes one interval per trial plus the runtime totals.

pub mod config;
pub mod error;
pub mod loader;
pub mod logging;
pub mod runner;
pub mod sink;

pub use config::{Args, OutputFormat, RunConfig};
pub use error::{Error, Result};
pub use loader::{load_column, load_column_from_path, ColumnSelector, LoadedColumn};
pub use runner::{execute, run_trials, self_check};
pub use sink::{write_report, write_report_to_path};
