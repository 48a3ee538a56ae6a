//! Execution strategy for running trials

use serde::{Deserialize, Serialize};

/// How the harness schedules its trials
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExecutionStrategy {
    /// One trial after another on the calling thread, sharing one random source
    #[default]
    Sequential,
    /// Trials on the rayon pool, each with its own random source derived up front
    Parallel,
}

impl ExecutionStrategy {
    /// Whether this build can run the strategy
    pub fn is_available(&self) -> bool {
        match self {
            Self::Sequential => true,
            Self::Parallel => cfg!(feature = "parallel"),
        }
    }

    /// Get the name of this strategy
    pub fn name(&self) -> &'static str {
        match self {
            Self::Sequential => "sequential",
            Self::Parallel => "parallel",
        }
    }
}
