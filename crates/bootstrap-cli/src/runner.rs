//! End-to-end run: load, time the trials, write the results

use crate::config::RunConfig;
use crate::error::{Error, Result};
use crate::loader::{load_column_from_path, LoadedColumn};
use crate::sink::write_report_to_path;
use bootstrap_confidence::bootstrap;
use bootstrap_core::RandomSource;
use bootstrap_trials::{LoggingHandler, TrialHarness, TrialReport};
use tracing::{info, instrument};

/// Sample used by [`self_check`]
pub const SELF_CHECK_SAMPLE: [f64; 5] = [1.0, 2.0, 3.0, 4.0, 5.0];

/// Resample count used by [`self_check`]
pub const SELF_CHECK_RESAMPLES: usize = 1000;

/// Run the harness on an already loaded column
pub fn run_trials(config: &RunConfig, column: &LoadedColumn) -> Result<TrialReport> {
    let harness = TrialHarness::new(config.trials)?;
    harness
        .events()
        .register(LoggingHandler::new(log::Level::Debug))?;

    let mut rng = match config.seed {
        Some(seed) => RandomSource::seeded(seed),
        None => RandomSource::from_entropy(),
    };

    Ok(harness.run(&column.values, &mut rng)?)
}

/// Load the input, run every trial and write the result file
#[instrument(skip(config), fields(input = %config.input.display()))]
pub fn execute(config: &RunConfig) -> Result<TrialReport> {
    let column = load_column_from_path(&config.input, &config.column)?;
    info!(
        "Loaded {} values from column '{}'",
        column.values.len(),
        column.name
    );

    let report = run_trials(config, &column)?;
    write_report_to_path(&config.output, &report, &column.name, config.format)?;
    info!("Results written to {}", config.output.display());

    Ok(report)
}

/// Bootstrap a fixed sample and confirm the distribution has one estimate
/// per resample
pub fn self_check(seed: Option<u64>) -> Result<()> {
    let mut rng = match seed {
        Some(seed) => RandomSource::seeded(seed),
        None => RandomSource::from_entropy(),
    };
    let distribution = bootstrap(&SELF_CHECK_SAMPLE, SELF_CHECK_RESAMPLES, &mut rng)?;

    if distribution.len() != SELF_CHECK_RESAMPLES {
        return Err(Error::SelfCheck(format!(
            "expected {} bootstrap estimates, got {}",
            SELF_CHECK_RESAMPLES,
            distribution.len()
        )));
    }
    info!(
        "Self-check passed: {} estimates from {} values",
        distribution.len(),
        SELF_CHECK_SAMPLE.len()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_self_check_passes() {
        assert!(self_check(Some(1)).is_ok());
    }
}
