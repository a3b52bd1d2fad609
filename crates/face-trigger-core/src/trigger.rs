//! Frame driving loop.
//!
//! `FaceTrigger` owns a set of evaluators and feeds every snapshot through
//! them in registration order. It mirrors a capture session lifecycle:
//! frames are only evaluated between `start` and `pause`, or after `resume`.

use tracing::{debug, info, warn};

use crate::domain::{Evaluator, SignalSnapshot};
use crate::evaluators::TriggerConfig;
use crate::ports::{FaceTriggerObserver, SnapshotSource};

/// Lifecycle state of a [`FaceTrigger`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Created, not started yet.
    Idle,
    /// Evaluating frames.
    Running,
    /// Dropping frames until resumed.
    Paused,
}

/// Counters returned by [`FaceTrigger::run`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunStats {
    /// Frames passed to the evaluators.
    pub processed: u64,
    /// Frames the source failed to produce.
    pub skipped: u64,
    /// Frames dropped because the session was not running.
    pub dropped: u64,
}

/// Drives a set of evaluators with per-frame snapshots.
pub struct FaceTrigger {
    evaluators: Vec<Box<dyn Evaluator>>,
    state: SessionState,
}

impl FaceTrigger {
    /// Creates an idle trigger over the given evaluators.
    #[must_use]
    pub fn new(evaluators: Vec<Box<dyn Evaluator>>) -> Self {
        Self {
            evaluators,
            state: SessionState::Idle,
        }
    }

    /// Creates an idle trigger with the evaluators enabled in `config`.
    #[must_use]
    pub fn from_config(config: &TriggerConfig) -> Self {
        Self::new(config.build_evaluators())
    }

    /// Appends an evaluator; it runs after those already registered.
    pub fn register(&mut self, evaluator: Box<dyn Evaluator>) {
        debug!("Registered {} evaluator", evaluator.name());
        self.evaluators.push(evaluator);
    }

    /// Returns the registered evaluator names, in evaluation order.
    #[must_use]
    pub fn evaluator_names(&self) -> Vec<&'static str> {
        self.evaluators.iter().map(|e| e.name()).collect()
    }

    /// Returns the current lifecycle state.
    #[must_use]
    pub const fn state(&self) -> SessionState {
        self.state
    }

    /// Starts evaluating frames.
    pub fn start(&mut self) {
        info!("Starting with {} evaluators", self.evaluators.len());
        self.state = SessionState::Running;
    }

    /// Stops evaluating frames until [`resume`](Self::resume).
    pub fn pause(&mut self) {
        if self.state == SessionState::Running {
            debug!("Paused");
            self.state = SessionState::Paused;
        }
    }

    /// Resumes a paused session. Has no effect on an idle one.
    pub fn resume(&mut self) {
        if self.state == SessionState::Paused {
            debug!("Resumed");
            self.state = SessionState::Running;
        }
    }

    /// Evaluates one frame with every evaluator if running.
    ///
    /// Returns false if the frame was dropped.
    pub fn process(
        &mut self,
        snapshot: &SignalSnapshot,
        observer: &mut dyn FaceTriggerObserver,
    ) -> bool {
        if self.state != SessionState::Running {
            return false;
        }
        for evaluator in &mut self.evaluators {
            evaluator.evaluate(snapshot, observer);
        }
        true
    }

    /// Drains `source`, evaluating every readable frame.
    ///
    /// Unreadable frames are logged and counted, not fatal.
    pub fn run(
        &mut self,
        source: &mut dyn SnapshotSource,
        observer: &mut dyn FaceTriggerObserver,
    ) -> RunStats {
        let mut stats = RunStats::default();

        for (index, snapshot) in source.snapshots().enumerate() {
            match snapshot {
                Ok(snapshot) => {
                    if self.process(&snapshot, observer) {
                        stats.processed += 1;
                    } else {
                        stats.dropped += 1;
                    }
                }
                Err(e) => {
                    warn!("Skipping frame {index}: {e:#}");
                    stats.skipped += 1;
                }
            }
        }

        debug!(
            "Run finished: {} processed, {} skipped, {} dropped",
            stats.processed, stats.skipped, stats.dropped
        );
        stats
    }
}

impl Default for FaceTrigger {
    fn default() -> Self {
        Self::from_config(&TriggerConfig::default())
    }
}
