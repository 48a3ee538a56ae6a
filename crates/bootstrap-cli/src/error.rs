//! Error types for the command-line runner

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Bootstrap error: {0}")]
    Core(#[from] bootstrap_core::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Parse error on line {line}, column '{column}': cannot convert {value:?} to a number")]
    Parse {
        line: u64,
        column: String,
        value: String,
    },

    #[error("Missing column: {0}")]
    MissingColumn(String),

    #[error("Logging setup failed: {0}")]
    Logging(String),

    #[error("Self-check failed: {0}")]
    SelfCheck(String),
}

pub type Result<T> = std::result::Result<T, Error>;
