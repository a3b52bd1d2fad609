//! Evaluator trait for pluggable expression classifiers.

use super::SignalSnapshot;
use crate::ports::FaceTriggerObserver;

/// Trait for implementing stateful expression evaluators.
///
/// Each evaluator owns the previous-frame state for the conditions it
/// tracks and reports level changes and rising edges to the observer.
/// Instances are driven from one thread at a time; `&mut self` makes that
/// exclusive access explicit.
pub trait Evaluator: Send {
    /// Returns the name of this evaluator.
    fn name(&self) -> &'static str;

    /// Classifies one frame and notifies `observer` of any transitions.
    ///
    /// Callbacks run inline, before this method returns.
    fn evaluate(&mut self, snapshot: &SignalSnapshot, observer: &mut dyn FaceTriggerObserver);
}
