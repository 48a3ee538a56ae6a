use anyhow::{Context, Result};
use bootstrap_cli::{execute, logging, self_check, Args, RunConfig};
use clap::Parser;
use tracing::info;

fn main() -> Result<()> {
    let args = Args::parse();
    logging::init(args.log_file.as_deref()).context("Failed to initialise logging")?;

    let config = RunConfig::try_from(args).context("Invalid run configuration")?;
    info!("Starting bootstrap run");

    let report = execute(&config)
        .with_context(|| format!("Bootstrap run on {} failed", config.input.display()))?;
    info!(
        "Run finished: {} trials, total {} µs, average {:.3} µs",
        report.summary.trials, report.summary.total_micros, report.summary.average_micros
    );

    if config.self_check {
        self_check(config.seed).context("Self-check failed")?;
    }

    Ok(())
}
