//! Observer port receiving expression events.

use crate::domain::{Condition, Transition};

/// Port for receiving expression events from evaluators.
///
/// Every condition has a pair of callbacks: `on_*_did_change` fires whenever
/// the level flips and carries the new level, and the bare `on_*` fires only
/// on the inactive to active edge, right after its `did_change(true)`.
///
/// All methods default to no-ops, so implementers override only the events
/// they care about. One observer is shared by every evaluator of a frame and
/// is called in evaluator order.
#[allow(unused_variables)]
pub trait FaceTriggerObserver {
    /// Smile level changed.
    fn on_smile_did_change(&mut self, smiling: bool) {}
    /// Smile started.
    fn on_smile(&mut self) {}

    /// Two-eyed blink level changed.
    fn on_blink_did_change(&mut self, blinking: bool) {}
    /// Two-eyed blink started.
    fn on_blink(&mut self) {}

    /// Left-only blink level changed.
    fn on_blink_left_did_change(&mut self, blinking_left: bool) {}
    /// Left-only blink started.
    fn on_blink_left(&mut self) {}

    /// Right-only blink level changed.
    fn on_blink_right_did_change(&mut self, blinking_right: bool) {}
    /// Right-only blink started.
    fn on_blink_right(&mut self) {}

    /// Lowered brows level changed.
    fn on_brow_down_did_change(&mut self, brow_down: bool) {}
    /// Brows lowered.
    fn on_brow_down(&mut self) {}

    /// Raised brows level changed.
    fn on_brow_up_did_change(&mut self, brow_up: bool) {}
    /// Brows raised.
    fn on_brow_up(&mut self) {}

    /// Squint level changed.
    fn on_squint_did_change(&mut self, squinting: bool) {}
    /// Squint started.
    fn on_squint(&mut self) {}

    /// Pucker level changed.
    fn on_mouth_pucker_did_change(&mut self, puckering: bool) {}
    /// Pucker started.
    fn on_mouth_pucker(&mut self) {}

    /// Open jaw level changed.
    fn on_jaw_open_did_change(&mut self, jaw_open: bool) {}
    /// Jaw opened.
    fn on_jaw_open(&mut self) {}

    /// Jaw-left level changed.
    fn on_jaw_left_did_change(&mut self, jaw_left: bool) {}
    /// Jaw moved left.
    fn on_jaw_left(&mut self) {}

    /// Jaw-right level changed.
    fn on_jaw_right_did_change(&mut self, jaw_right: bool) {}
    /// Jaw moved right.
    fn on_jaw_right(&mut self) {}
}

/// Routes a level change to the callback pair of `condition`.
///
/// Nothing is called for [`Transition::Unchanged`]. A rising edge calls the
/// `did_change(true)` callback followed by the edge callback; a falling edge
/// calls `did_change(false)` only.
pub fn notify(observer: &mut dyn FaceTriggerObserver, condition: Condition, transition: Transition) {
    if !transition.changed() {
        return;
    }
    let active = transition.is_rising();

    match condition {
        Condition::Smile => {
            observer.on_smile_did_change(active);
            if active {
                observer.on_smile();
            }
        }
        Condition::Blink => {
            observer.on_blink_did_change(active);
            if active {
                observer.on_blink();
            }
        }
        Condition::BlinkLeft => {
            observer.on_blink_left_did_change(active);
            if active {
                observer.on_blink_left();
            }
        }
        Condition::BlinkRight => {
            observer.on_blink_right_did_change(active);
            if active {
                observer.on_blink_right();
            }
        }
        Condition::BrowDown => {
            observer.on_brow_down_did_change(active);
            if active {
                observer.on_brow_down();
            }
        }
        Condition::BrowUp => {
            observer.on_brow_up_did_change(active);
            if active {
                observer.on_brow_up();
            }
        }
        Condition::Squint => {
            observer.on_squint_did_change(active);
            if active {
                observer.on_squint();
            }
        }
        Condition::MouthPucker => {
            observer.on_mouth_pucker_did_change(active);
            if active {
                observer.on_mouth_pucker();
            }
        }
        Condition::JawOpen => {
            observer.on_jaw_open_did_change(active);
            if active {
                observer.on_jaw_open();
            }
        }
        Condition::JawLeft => {
            observer.on_jaw_left_did_change(active);
            if active {
                observer.on_jaw_left();
            }
        }
        Condition::JawRight => {
            observer.on_jaw_right_did_change(active);
            if active {
                observer.on_jaw_right();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct SmileOnly {
        calls: Vec<String>,
    }

    impl FaceTriggerObserver for SmileOnly {
        fn on_smile_did_change(&mut self, smiling: bool) {
            self.calls.push(format!("smile_did_change({smiling})"));
        }

        fn on_smile(&mut self) {
            self.calls.push("smile".into());
        }
    }

    #[test]
    fn test_rising_calls_level_then_edge() {
        let mut observer = SmileOnly::default();
        notify(&mut observer, Condition::Smile, Transition::Rising);
        assert_eq!(observer.calls, ["smile_did_change(true)", "smile"]);
    }

    #[test]
    fn test_falling_calls_level_only() {
        let mut observer = SmileOnly::default();
        notify(&mut observer, Condition::Smile, Transition::Falling);
        assert_eq!(observer.calls, ["smile_did_change(false)"]);
    }

    #[test]
    fn test_unchanged_calls_nothing() {
        let mut observer = SmileOnly::default();
        notify(&mut observer, Condition::Smile, Transition::Unchanged);
        assert!(observer.calls.is_empty());
    }

    #[test]
    fn test_unimplemented_callbacks_are_no_ops() {
        let mut observer = SmileOnly::default();
        notify(&mut observer, Condition::Blink, Transition::Rising);
        notify(&mut observer, Condition::JawRight, Transition::Falling);
        assert!(observer.calls.is_empty());
    }
}
