//! Single-condition threshold evaluators.
//!
//! Covers smile (mean of both mouth corners), brow-up, mouth-pucker and the
//! jaw conditions. A frame that lacks the tracked signal is skipped: no
//! callback fires and the stored level is kept.

use tracing::trace;

use super::EdgeDetector;
use crate::domain::{Condition, Evaluator, MissingSignal, SignalId, SignalSnapshot};
use crate::ports::{notify, FaceTriggerObserver};

/// Where a single-threshold evaluator reads its intensity from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignalSource {
    /// One signal, used as is.
    Single(SignalId),
    /// Arithmetic mean of two signals; both must be present.
    Mean(SignalId, SignalId),
}

impl SignalSource {
    /// Tests the source against `threshold`, or `None` if a signal is absent.
    #[must_use]
    pub fn reaches(self, snapshot: &SignalSnapshot, threshold: f32) -> Option<bool> {
        match self {
            Self::Single(id) => snapshot.reaches(id, threshold, MissingSignal::Skip),
            Self::Mean(a, b) => {
                let mean = (snapshot.get(a)? + snapshot.get(b)?) / 2.0;
                Some(mean >= threshold)
            }
        }
    }
}

/// Evaluator tracking one condition against one threshold.
#[derive(Debug, Clone)]
pub struct SingleThresholdEvaluator {
    name: &'static str,
    condition: Condition,
    source: SignalSource,
    threshold: f32,
    state: EdgeDetector,
}

impl SingleThresholdEvaluator {
    /// Creates an evaluator reporting `condition` when `source >= threshold`.
    #[must_use]
    pub const fn new(
        name: &'static str,
        condition: Condition,
        source: SignalSource,
        threshold: f32,
    ) -> Self {
        Self {
            name,
            condition,
            source,
            threshold,
            state: EdgeDetector::new(),
        }
    }

    /// Smile: mean of both mouth corners.
    #[must_use]
    pub const fn smile(threshold: f32) -> Self {
        Self::new(
            "smile",
            Condition::Smile,
            SignalSource::Mean(SignalId::MouthSmileLeft, SignalId::MouthSmileRight),
            threshold,
        )
    }

    /// Brow-up: inner brow raise.
    #[must_use]
    pub const fn brow_up(threshold: f32) -> Self {
        Self::new(
            "brow_up",
            Condition::BrowUp,
            SignalSource::Single(SignalId::BrowInnerUp),
            threshold,
        )
    }

    /// Mouth pucker.
    #[must_use]
    pub const fn mouth_pucker(threshold: f32) -> Self {
        Self::new(
            "mouth_pucker",
            Condition::MouthPucker,
            SignalSource::Single(SignalId::MouthPucker),
            threshold,
        )
    }

    /// Jaw open.
    #[must_use]
    pub const fn jaw_open(threshold: f32) -> Self {
        Self::new(
            "jaw_open",
            Condition::JawOpen,
            SignalSource::Single(SignalId::JawOpen),
            threshold,
        )
    }

    /// Jaw shifted left.
    #[must_use]
    pub const fn jaw_left(threshold: f32) -> Self {
        Self::new(
            "jaw_left",
            Condition::JawLeft,
            SignalSource::Single(SignalId::JawLeft),
            threshold,
        )
    }

    /// Jaw shifted right.
    #[must_use]
    pub const fn jaw_right(threshold: f32) -> Self {
        Self::new(
            "jaw_right",
            Condition::JawRight,
            SignalSource::Single(SignalId::JawRight),
            threshold,
        )
    }

    /// Returns the configured threshold.
    #[must_use]
    pub const fn threshold(&self) -> f32 {
        self.threshold
    }

    /// Returns the level stored after the last classified frame.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.state.is_active()
    }
}

impl Evaluator for SingleThresholdEvaluator {
    fn name(&self) -> &'static str {
        self.name
    }

    fn evaluate(&mut self, snapshot: &SignalSnapshot, observer: &mut dyn FaceTriggerObserver) {
        let Some(active) = self.source.reaches(snapshot, self.threshold) else {
            return;
        };

        let transition = self.state.classify(active);
        if transition.changed() {
            trace!(
                "{}: {:?} (threshold {:.3})",
                self.condition,
                transition,
                self.threshold
            );
        }
        notify(observer, self.condition, transition);
    }
}
