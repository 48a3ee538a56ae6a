//! Subscriber setup for the binary
//!
//! Log lines go to stdout and, when a log file is given, are appended to
//! that file as well. `RUST_LOG` overrides the default `info` filter.
//! Records emitted through the `log` facade are forwarded to the same
//! subscriber.

use crate::error::{Error, Result};
use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install the global subscriber
///
/// # Errors
/// Fails if the log file cannot be opened or a subscriber is already set.
pub fn init(log_file: Option<&Path>) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let file_layer = match log_file {
        Some(path) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            Some(
                fmt::layer()
                    .with_ansi(false)
                    .with_target(false)
                    .with_writer(Mutex::new(file)),
            )
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).with_writer(std::io::stdout))
        .with(file_layer)
        .try_init()
        .map_err(|e| Error::Logging(e.to_string()))
}
