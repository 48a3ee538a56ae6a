//! Repeated-trial harness
//!
//! Runs the bootstrap interval pipeline `num_trials` times, timing each run
//! on its own, and aggregates the timings into a [`RunSummary`]. The harness
//! only wraps the pipeline; it never changes what the pipeline computes.

use crate::{
    events::{EventBus, TrialEvent},
    execution::ExecutionStrategy,
    types::{RunSummary, TrialConfig, TrialRecord, TrialReport},
};
use bootstrap_confidence::{
    BootstrapSampler, ConfidenceInterval, IntervalMethod, IntervalPipeline, PercentileInterval,
};
use bootstrap_core::{Error, RandomSource, Result};
use rand::Rng;
use std::time::Instant;
use tracing::{debug, info, instrument};
use uuid::Uuid;

/// Drives the bootstrap pipeline through a configured number of timed trials
#[derive(Clone)]
pub struct TrialHarness<M = PercentileInterval> {
    config: TrialConfig,
    pipeline: IntervalPipeline<M>,
    events: EventBus,
}

impl TrialHarness<PercentileInterval> {
    /// Create a harness for percentile intervals of the mean
    ///
    /// # Errors
    /// Returns [`Error::InvalidParameter`] for a zero trial or resample count,
    /// and [`Error::FeatureNotAvailable`] for an unavailable strategy.
    pub fn new(config: TrialConfig) -> Result<Self> {
        Self::with_method(config, PercentileInterval)
    }
}

impl<M: IntervalMethod> TrialHarness<M> {
    /// Create a harness with a custom interval method
    pub fn with_method(config: TrialConfig, method: M) -> Result<Self> {
        config.validate()?;
        let sampler = BootstrapSampler::new(config.n_bootstraps)?;
        Ok(Self {
            config,
            pipeline: IntervalPipeline::new(sampler, method, config.alpha),
            events: EventBus::new(),
        })
    }

    /// Publish events to an existing bus
    pub fn with_event_bus(mut self, events: EventBus) -> Self {
        self.events = events;
        self
    }

    /// Configuration of this harness
    pub fn config(&self) -> &TrialConfig {
        &self.config
    }

    /// Event bus that receives this harness's events
    pub fn events(&self) -> &EventBus {
        &self.events
    }

    /// Run every trial against `sample`
    ///
    /// Sequential runs advance `rng` through every resample of every trial.
    /// Parallel runs first split `rng` into one child source per trial, so a
    /// seeded source still gives the same intervals.
    ///
    /// # Errors
    /// Fails without a partial report if the sample is empty or any trial
    /// fails.
    #[instrument(skip(self, sample, rng), fields(
        n = sample.len(),
        num_trials = self.config.num_trials,
        n_bootstraps = self.config.n_bootstraps,
        strategy = self.config.strategy.name(),
    ))]
    pub fn run(&self, sample: &[f64], rng: &mut RandomSource) -> Result<TrialReport> {
        if sample.is_empty() {
            return Err(Error::empty("sample"));
        }

        let run_id = Uuid::new_v4();
        self.events.emit(&TrialEvent::RunStarted {
            run_id,
            num_trials: self.config.num_trials,
            n_bootstraps: self.config.n_bootstraps,
            sample_len: sample.len(),
        })?;

        let outcomes = match self.config.strategy {
            ExecutionStrategy::Sequential => self.run_sequential(run_id, sample, rng)?,
            ExecutionStrategy::Parallel => self.run_parallel(run_id, sample, rng)?,
        };

        let (records, intervals): (Vec<TrialRecord>, Vec<ConfidenceInterval>) =
            outcomes.into_iter().unzip();
        let summary = RunSummary::from_records(&records)?;

        info!(
            "Completed {} trials: total {} µs, average {:.3} µs",
            summary.trials, summary.total_micros, summary.average_micros
        );
        self.events.emit(&TrialEvent::RunCompleted { run_id, summary })?;

        Ok(TrialReport {
            run_id,
            config: self.config,
            intervals,
            records,
            summary,
        })
    }

    fn run_sequential(
        &self,
        run_id: Uuid,
        sample: &[f64],
        rng: &mut RandomSource,
    ) -> Result<Vec<(TrialRecord, ConfidenceInterval)>> {
        let mut outcomes = Vec::with_capacity(self.config.num_trials);
        for index in 0..self.config.num_trials {
            outcomes.push(self.run_trial(run_id, index, sample, rng)?);
        }
        Ok(outcomes)
    }

    #[cfg(feature = "parallel")]
    fn run_parallel(
        &self,
        run_id: Uuid,
        sample: &[f64],
        rng: &mut RandomSource,
    ) -> Result<Vec<(TrialRecord, ConfidenceInterval)>> {
        use rayon::prelude::*;

        let sources = rng.split(self.config.num_trials);
        debug!("Derived {} per-trial random sources", sources.len());

        sources
            .into_par_iter()
            .enumerate()
            .map(|(index, mut source)| self.run_trial(run_id, index, sample, &mut source))
            .collect()
    }

    #[cfg(not(feature = "parallel"))]
    fn run_parallel(
        &self,
        _run_id: Uuid,
        _sample: &[f64],
        _rng: &mut RandomSource,
    ) -> Result<Vec<(TrialRecord, ConfidenceInterval)>> {
        Err(Error::FeatureNotAvailable(
            "parallel execution requires the `parallel` feature".to_string(),
        ))
    }

    /// One timed pipeline run; the clock brackets exactly this trial's work
    fn run_trial<R: Rng + ?Sized>(
        &self,
        run_id: Uuid,
        index: usize,
        sample: &[f64],
        rng: &mut R,
    ) -> Result<(TrialRecord, ConfidenceInterval)> {
        self.events.emit(&TrialEvent::TrialStarted { run_id, index })?;

        let start = Instant::now();
        let outcome = self.pipeline.estimate(sample, rng);
        let elapsed = start.elapsed();

        let interval = match outcome {
            Ok(interval) => interval,
            Err(err) => {
                self.events.emit(&TrialEvent::TrialFailed {
                    run_id,
                    index,
                    error: err.to_string(),
                })?;
                return Err(err);
            }
        };

        debug!("Trial {} finished in {:?}: {}", index, elapsed, interval);
        self.events.emit(&TrialEvent::TrialCompleted {
            run_id,
            index,
            elapsed,
            interval,
        })?;

        Ok((TrialRecord { index, elapsed }, interval))
    }
}
