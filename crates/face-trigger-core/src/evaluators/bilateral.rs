//! Left/right paired threshold evaluators.
//!
//! Both sides are classified independently, with an absent signal read as
//! inactive rather than skipping the frame. Exactly one hook is driven per
//! frame, in priority order both, left, right. A simultaneous double blink
//! therefore reports one `blink`, never `blink_left` plus `blink_right`, even
//! on the frame where one eye closed a frame before the other.
//!
//! Hooks are only ever driven with an active level. The detectors of the
//! hooks that were not selected are re-armed silently, so the next time
//! their condition is selected it reports a fresh rising edge.

use tracing::trace;

use super::EdgeDetector;
use crate::domain::{Condition, Evaluator, MissingSignal, SignalId, SignalSnapshot};
use crate::ports::{notify, FaceTriggerObserver};

/// Which hook a frame selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Side {
    Both,
    Left,
    Right,
}

/// Conditions reported by each hook; `None` leaves the hook a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BilateralHooks {
    /// Reported when both sides are active.
    pub both: Option<Condition>,
    /// Reported when only the left side is active.
    pub left: Option<Condition>,
    /// Reported when only the right side is active.
    pub right: Option<Condition>,
}

impl BilateralHooks {
    /// Hooks reporting only the combined condition.
    #[must_use]
    pub const fn both_only(condition: Condition) -> Self {
        Self {
            both: Some(condition),
            left: None,
            right: None,
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
struct HookState {
    both: EdgeDetector,
    left: EdgeDetector,
    right: EdgeDetector,
}

/// Evaluator combining a left and a right signal under one threshold.
///
/// `left` and `right` must name different signals.
#[derive(Debug, Clone)]
pub struct BilateralThresholdEvaluator {
    name: &'static str,
    left: SignalId,
    right: SignalId,
    threshold: f32,
    hooks: BilateralHooks,
    state: HookState,
}

impl BilateralThresholdEvaluator {
    /// Creates a bilateral evaluator over `left` and `right`.
    #[must_use]
    pub fn new(
        name: &'static str,
        left: SignalId,
        right: SignalId,
        threshold: f32,
        hooks: BilateralHooks,
    ) -> Self {
        Self {
            name,
            left,
            right,
            threshold,
            hooks,
            state: HookState::default(),
        }
    }

    /// Blink: reports both eyes, left only and right only.
    #[must_use]
    pub fn blink(threshold: f32) -> Self {
        Self::new(
            "blink",
            SignalId::EyeBlinkLeft,
            SignalId::EyeBlinkRight,
            threshold,
            BilateralHooks {
                both: Some(Condition::Blink),
                left: Some(Condition::BlinkLeft),
                right: Some(Condition::BlinkRight),
            },
        )
    }

    /// Brow-down: reports both brows lowered only.
    #[must_use]
    pub fn brow_down(threshold: f32) -> Self {
        Self::new(
            "brow_down",
            SignalId::BrowDownLeft,
            SignalId::BrowDownRight,
            threshold,
            BilateralHooks::both_only(Condition::BrowDown),
        )
    }

    /// Squint: reports both eyes squinting only.
    #[must_use]
    pub fn squint(threshold: f32) -> Self {
        Self::new(
            "squint",
            SignalId::EyeSquintLeft,
            SignalId::EyeSquintRight,
            threshold,
            BilateralHooks::both_only(Condition::Squint),
        )
    }

    /// Returns the configured threshold.
    #[must_use]
    pub const fn threshold(&self) -> f32 {
        self.threshold
    }

    fn side_active(&self, id: SignalId, snapshot: &SignalSnapshot) -> bool {
        snapshot
            .reaches(id, self.threshold, MissingSignal::Inactive)
            .unwrap_or(false)
    }

    /// Drives the selected hook and re-arms the other two.
    fn fire(&mut self, side: Side, observer: &mut dyn FaceTriggerObserver) {
        let (selected, condition) = match side {
            Side::Both => {
                self.state.left.rearm();
                self.state.right.rearm();
                (&mut self.state.both, self.hooks.both)
            }
            Side::Left => {
                self.state.both.rearm();
                self.state.right.rearm();
                (&mut self.state.left, self.hooks.left)
            }
            Side::Right => {
                self.state.both.rearm();
                self.state.left.rearm();
                (&mut self.state.right, self.hooks.right)
            }
        };

        let Some(condition) = condition else {
            return;
        };

        let transition = selected.classify(true);
        if transition.changed() {
            trace!("{}: {:?} via {:?} hook", condition, transition, side);
        }
        notify(observer, condition, transition);
    }
}

impl Evaluator for BilateralThresholdEvaluator {
    fn name(&self) -> &'static str {
        self.name
    }

    fn evaluate(&mut self, snapshot: &SignalSnapshot, observer: &mut dyn FaceTriggerObserver) {
        let new_left = self.side_active(self.left, snapshot);
        let new_right = self.side_active(self.right, snapshot);

        if new_left && new_right {
            self.fire(Side::Both, observer);
        } else if new_left {
            self.fire(Side::Left, observer);
        } else if new_right {
            self.fire(Side::Right, observer);
        } else {
            self.state = HookState::default();
        }
    }
}
