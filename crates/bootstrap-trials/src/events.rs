//! Event-based trial notification system
//!
//! The harness emits an event at the start and end of every trial and of the
//! run as a whole. Handlers (logging, timing collection, external profilers)
//! attach to an [`EventBus`] without touching the bootstrap pipeline.

use crate::types::RunSummary;
use bootstrap_confidence::ConfidenceInterval;
use bootstrap_core::{Error, Result};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use uuid::Uuid;

/// Event emitted by the trial harness
#[derive(Debug, Clone)]
pub enum TrialEvent {
    /// Run accepted its configuration and is about to start trial 0
    RunStarted {
        run_id: Uuid,
        num_trials: usize,
        n_bootstraps: usize,
        sample_len: usize,
    },

    /// A trial is about to start its timed section
    TrialStarted { run_id: Uuid, index: usize },

    /// A trial finished its timed section
    TrialCompleted {
        run_id: Uuid,
        index: usize,
        elapsed: Duration,
        interval: ConfidenceInterval,
    },

    /// A trial failed; the run aborts after this event
    TrialFailed {
        run_id: Uuid,
        index: usize,
        error: String,
    },

    /// Every trial completed
    RunCompleted { run_id: Uuid, summary: RunSummary },
}

impl TrialEvent {
    /// Run this event belongs to
    pub fn run_id(&self) -> Uuid {
        match self {
            Self::RunStarted { run_id, .. }
            | Self::TrialStarted { run_id, .. }
            | Self::TrialCompleted { run_id, .. }
            | Self::TrialFailed { run_id, .. }
            | Self::RunCompleted { run_id, .. } => *run_id,
        }
    }
}

/// Trait for handling trial events
pub trait EventHandler: Send + Sync {
    /// Handle a trial event
    fn handle_event(&self, event: &TrialEvent);

    /// Check if this handler is interested in a particular event type
    fn is_interested(&self, event: &TrialEvent) -> bool {
        // By default, handlers are interested in all events
        let _ = event;
        true
    }

    /// Get the name of this handler for debugging
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }
}

/// Event bus for distributing events to multiple handlers
pub struct EventBus {
    handlers: Arc<Mutex<Vec<Box<dyn EventHandler>>>>,
}

impl EventBus {
    /// Create a new event bus
    pub fn new() -> Self {
        Self {
            handlers: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Register an event handler
    pub fn register<H>(&self, handler: H) -> Result<()>
    where
        H: EventHandler + 'static,
    {
        let mut handlers = self
            .handlers
            .lock()
            .map_err(|e| Error::Execution(format!("Failed to lock handlers: {e}")))?;
        handlers.push(Box::new(handler));
        Ok(())
    }

    /// Emit an event to all registered handlers
    pub fn emit(&self, event: &TrialEvent) -> Result<()> {
        let handlers = self
            .handlers
            .lock()
            .map_err(|e| Error::Execution(format!("Failed to lock handlers: {e}")))?;

        for handler in handlers.iter() {
            if handler.is_interested(event) {
                handler.handle_event(event);
            }
        }

        Ok(())
    }

    /// Get the number of registered handlers
    pub fn handler_count(&self) -> Result<usize> {
        let handlers = self
            .handlers
            .lock()
            .map_err(|e| Error::Execution(format!("Failed to lock handlers: {e}")))?;
        Ok(handlers.len())
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for EventBus {
    fn clone(&self) -> Self {
        Self {
            handlers: Arc::clone(&self.handlers),
        }
    }
}

/// Simple logging event handler
pub struct LoggingHandler {
    level: log::Level,
}

impl LoggingHandler {
    /// Create a new logging handler
    pub fn new(level: log::Level) -> Self {
        Self { level }
    }
}

impl EventHandler for LoggingHandler {
    fn handle_event(&self, event: &TrialEvent) {
        match event {
            TrialEvent::RunStarted {
                run_id,
                num_trials,
                n_bootstraps,
                sample_len,
            } => {
                log::log!(
                    self.level,
                    "Run {} started: {} trials x {} resamples, n={}",
                    run_id,
                    num_trials,
                    n_bootstraps,
                    sample_len
                );
            }
            TrialEvent::TrialCompleted {
                index,
                elapsed,
                interval,
                ..
            } => {
                log::log!(self.level, "Trial {index} finished in {elapsed:?}: {interval}");
            }
            TrialEvent::TrialFailed { run_id, index, error } => {
                log::error!("Trial {index} failed: {error} (run: {run_id})");
            }
            TrialEvent::RunCompleted { run_id, summary } => {
                log::log!(
                    self.level,
                    "Run {run_id} completed: {} trials, total {} µs, average {:.3} µs",
                    summary.trials,
                    summary.total_micros,
                    summary.average_micros
                );
            }
            _ => {
                log::trace!("Trial event: {event:?}");
            }
        }
    }
}

/// Collects per-trial durations as they complete
#[derive(Default, Clone)]
pub struct TimingCollector {
    timings: Arc<Mutex<Vec<(usize, Duration)>>>,
}

impl TimingCollector {
    /// Create a new collector
    pub fn new() -> Self {
        Self::default()
    }

    /// Durations seen so far, sorted by trial index
    pub fn snapshot(&self) -> Result<Vec<(usize, Duration)>> {
        let timings = self
            .timings
            .lock()
            .map_err(|e| Error::Execution(format!("Failed to lock timings: {e}")))?;
        let mut out = timings.clone();
        out.sort_by_key(|&(index, _)| index);
        Ok(out)
    }
}

impl EventHandler for TimingCollector {
    fn handle_event(&self, event: &TrialEvent) {
        let TrialEvent::TrialCompleted { index, elapsed, .. } = event else {
            return;
        };
        let Ok(mut timings) = self.timings.lock() else {
            log::error!("Failed to lock timings");
            return;
        };
        timings.push((*index, *elapsed));
    }

    fn is_interested(&self, event: &TrialEvent) -> bool {
        matches!(event, TrialEvent::TrialCompleted { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_bus() {
        let bus = EventBus::new();
        bus.register(LoggingHandler::new(log::Level::Debug)).unwrap();
        bus.register(TimingCollector::new()).unwrap();
        assert_eq!(bus.handler_count().unwrap(), 2);

        let event = TrialEvent::TrialStarted {
            run_id: Uuid::new_v4(),
            index: 0,
        };
        bus.emit(&event).unwrap();
    }

    #[test]
    fn test_cloned_bus_shares_handlers() {
        let bus = EventBus::new();
        let clone = bus.clone();
        clone.register(TimingCollector::new()).unwrap();
        assert_eq!(bus.handler_count().unwrap(), 1);
    }

    #[test]
    fn test_timing_collector() {
        let collector = TimingCollector::new();
        let bus = EventBus::new();
        bus.register(collector.clone()).unwrap();

        let run_id = Uuid::new_v4();
        for index in [1usize, 0] {
            bus.emit(&TrialEvent::TrialCompleted {
                run_id,
                index,
                elapsed: Duration::from_micros(10 + index as u64),
                interval: ConfidenceInterval::new(1.0, 2.0, 0.05),
            })
            .unwrap();
        }
        bus.emit(&TrialEvent::TrialStarted { run_id, index: 2 }).unwrap();

        let timings = collector.snapshot().unwrap();
        assert_eq!(
            timings,
            vec![(0, Duration::from_micros(10)), (1, Duration::from_micros(11))]
        );
    }

    #[test]
    fn test_event_run_id() {
        let run_id = Uuid::new_v4();
        let event = TrialEvent::TrialFailed {
            run_id,
            index: 3,
            error: "boom".to_string(),
        };
        assert_eq!(event.run_id(), run_id);
    }
}
