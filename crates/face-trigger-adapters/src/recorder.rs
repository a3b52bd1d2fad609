//! Observer adapter that turns callbacks into event records.

use face_trigger_core::{Condition, FaceTriggerObserver, TriggerEvent};

/// Records every observer callback as a [`TriggerEvent`].
///
/// The driving loop calls [`begin_frame`](Self::begin_frame) before each
/// frame so records carry the index of the frame that produced them.
#[derive(Debug, Default)]
pub struct EventRecorder {
    frame: u64,
    events: Vec<TriggerEvent>,
}

impl EventRecorder {
    /// Creates an empty recorder positioned at frame 0.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the frame index stamped on subsequent records.
    pub fn begin_frame(&mut self, frame: u64) {
        self.frame = frame;
    }

    /// Returns the recorded events.
    #[must_use]
    pub fn events(&self) -> &[TriggerEvent] {
        &self.events
    }

    /// Removes and returns the recorded events.
    pub fn drain(&mut self) -> Vec<TriggerEvent> {
        std::mem::take(&mut self.events)
    }

    fn level(&mut self, condition: Condition, active: bool) {
        self.events
            .push(TriggerEvent::did_change(self.frame, condition, active));
    }

    fn edge(&mut self, condition: Condition) {
        self.events.push(TriggerEvent::triggered(self.frame, condition));
    }
}

impl FaceTriggerObserver for EventRecorder {
    fn on_smile_did_change(&mut self, smiling: bool) {
        self.level(Condition::Smile, smiling);
    }
    fn on_smile(&mut self) {
        self.edge(Condition::Smile);
    }
    fn on_blink_did_change(&mut self, blinking: bool) {
        self.level(Condition::Blink, blinking);
    }
    fn on_blink(&mut self) {
        self.edge(Condition::Blink);
    }
    fn on_blink_left_did_change(&mut self, blinking_left: bool) {
        self.level(Condition::BlinkLeft, blinking_left);
    }
    fn on_blink_left(&mut self) {
        self.edge(Condition::BlinkLeft);
    }
    fn on_blink_right_did_change(&mut self, blinking_right: bool) {
        self.level(Condition::BlinkRight, blinking_right);
    }
    fn on_blink_right(&mut self) {
        self.edge(Condition::BlinkRight);
    }
    fn on_brow_down_did_change(&mut self, brow_down: bool) {
        self.level(Condition::BrowDown, brow_down);
    }
    fn on_brow_down(&mut self) {
        self.edge(Condition::BrowDown);
    }
    fn on_brow_up_did_change(&mut self, brow_up: bool) {
        self.level(Condition::BrowUp, brow_up);
    }
    fn on_brow_up(&mut self) {
        self.edge(Condition::BrowUp);
    }
    fn on_squint_did_change(&mut self, squinting: bool) {
        self.level(Condition::Squint, squinting);
    }
    fn on_squint(&mut self) {
        self.edge(Condition::Squint);
    }
    fn on_mouth_pucker_did_change(&mut self, puckering: bool) {
        self.level(Condition::MouthPucker, puckering);
    }
    fn on_mouth_pucker(&mut self) {
        self.edge(Condition::MouthPucker);
    }
    fn on_jaw_open_did_change(&mut self, jaw_open: bool) {
        self.level(Condition::JawOpen, jaw_open);
    }
    fn on_jaw_open(&mut self) {
        self.edge(Condition::JawOpen);
    }
    fn on_jaw_left_did_change(&mut self, jaw_left: bool) {
        self.level(Condition::JawLeft, jaw_left);
    }
    fn on_jaw_left(&mut self) {
        self.edge(Condition::JawLeft);
    }
    fn on_jaw_right_did_change(&mut self, jaw_right: bool) {
        self.level(Condition::JawRight, jaw_right);
    }
    fn on_jaw_right(&mut self) {
        self.edge(Condition::JawRight);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use face_trigger_core::{notify, Transition};

    #[test]
    fn test_records_carry_frame() {
        let mut recorder = EventRecorder::new();
        recorder.begin_frame(4);
        notify(&mut recorder, Condition::JawLeft, Transition::Rising);

        assert_eq!(
            recorder.events(),
            [
                TriggerEvent::did_change(4, Condition::JawLeft, true),
                TriggerEvent::triggered(4, Condition::JawLeft),
            ]
        );
    }

    #[test]
    fn test_drain_empties() {
        let mut recorder = EventRecorder::new();
        notify(&mut recorder, Condition::Smile, Transition::Falling);

        assert_eq!(recorder.drain().len(), 1);
        assert!(recorder.events().is_empty());
    }
}
