//! Mock implementations of core port traits.

use face_trigger_core::{FaceTriggerObserver, SignalSnapshot, SnapshotSource};

/// Mock observer implementing every callback.
///
/// Captures each call as a short string (`"blink_did_change(true)"`,
/// `"blink"`) for later assertions.
#[derive(Debug, Default)]
pub struct MockObserver {
    calls: Vec<String>,
}

impl MockObserver {
    /// Creates a new mock observer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns all captured calls.
    #[must_use]
    pub fn calls(&self) -> &[String] {
        &self.calls
    }

    /// Returns and clears the captured calls.
    pub fn take(&mut self) -> Vec<String> {
        std::mem::take(&mut self.calls)
    }

    /// Returns the number of captured calls.
    #[must_use]
    pub fn len(&self) -> usize {
        self.calls.len()
    }

    /// Returns true if nothing was captured.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.calls.is_empty()
    }

    /// Returns how many times a call was captured.
    #[must_use]
    pub fn count(&self, call: &str) -> usize {
        self.calls.iter().filter(|c| *c == call).count()
    }

    fn level(&mut self, name: &str, active: bool) {
        self.calls.push(format!("{name}_did_change({active})"));
    }

    fn edge(&mut self, name: &str) {
        self.calls.push(name.to_string());
    }
}

impl FaceTriggerObserver for MockObserver {
    fn on_smile_did_change(&mut self, smiling: bool) {
        self.level("smile", smiling);
    }
    fn on_smile(&mut self) {
        self.edge("smile");
    }
    fn on_blink_did_change(&mut self, blinking: bool) {
        self.level("blink", blinking);
    }
    fn on_blink(&mut self) {
        self.edge("blink");
    }
    fn on_blink_left_did_change(&mut self, blinking_left: bool) {
        self.level("blink_left", blinking_left);
    }
    fn on_blink_left(&mut self) {
        self.edge("blink_left");
    }
    fn on_blink_right_did_change(&mut self, blinking_right: bool) {
        self.level("blink_right", blinking_right);
    }
    fn on_blink_right(&mut self) {
        self.edge("blink_right");
    }
    fn on_brow_down_did_change(&mut self, brow_down: bool) {
        self.level("brow_down", brow_down);
    }
    fn on_brow_down(&mut self) {
        self.edge("brow_down");
    }
    fn on_brow_up_did_change(&mut self, brow_up: bool) {
        self.level("brow_up", brow_up);
    }
    fn on_brow_up(&mut self) {
        self.edge("brow_up");
    }
    fn on_squint_did_change(&mut self, squinting: bool) {
        self.level("squint", squinting);
    }
    fn on_squint(&mut self) {
        self.edge("squint");
    }
    fn on_mouth_pucker_did_change(&mut self, puckering: bool) {
        self.level("mouth_pucker", puckering);
    }
    fn on_mouth_pucker(&mut self) {
        self.edge("mouth_pucker");
    }
    fn on_jaw_open_did_change(&mut self, jaw_open: bool) {
        self.level("jaw_open", jaw_open);
    }
    fn on_jaw_open(&mut self) {
        self.edge("jaw_open");
    }
    fn on_jaw_left_did_change(&mut self, jaw_left: bool) {
        self.level("jaw_left", jaw_left);
    }
    fn on_jaw_left(&mut self) {
        self.edge("jaw_left");
    }
    fn on_jaw_right_did_change(&mut self, jaw_right: bool) {
        self.level("jaw_right", jaw_right);
    }
    fn on_jaw_right(&mut self) {
        self.edge("jaw_right");
    }
}

/// Mock observer implementing only the brow-down pair.
///
/// Useful for checking that unimplemented callbacks are silently skipped.
#[derive(Debug, Default)]
pub struct BrowDownOnlyObserver {
    /// Values passed to `on_brow_down_did_change`.
    pub changes: Vec<bool>,
    /// Number of `on_brow_down` calls.
    pub edges: usize,
}

impl BrowDownOnlyObserver {
    /// Returns the total number of callbacks received.
    #[must_use]
    pub fn total_calls(&self) -> usize {
        self.changes.len() + self.edges
    }
}

impl FaceTriggerObserver for BrowDownOnlyObserver {
    fn on_brow_down_did_change(&mut self, brow_down: bool) {
        self.changes.push(brow_down);
    }

    fn on_brow_down(&mut self) {
        self.edges += 1;
    }
}

/// Mock implementation of `SnapshotSource` for testing.
///
/// Yields pre-built frames, with optional failures, and tracks iteration.
pub struct MockSnapshotSource {
    frames: Vec<Result<SignalSnapshot, String>>,
    iteration_count: usize,
}

impl MockSnapshotSource {
    /// Creates a new mock source with the given frames.
    #[must_use]
    pub fn new(frames: Vec<SignalSnapshot>) -> Self {
        Self {
            frames: frames.into_iter().map(Ok).collect(),
            iteration_count: 0,
        }
    }

    /// Creates an empty mock source.
    #[must_use]
    pub fn empty() -> Self {
        Self::new(vec![])
    }

    /// Appends a frame that fails to read with `reason`.
    #[must_use]
    pub fn with_failure(mut self, reason: impl Into<String>) -> Self {
        self.frames.push(Err(reason.into()));
        self
    }

    /// Returns the number of times the source has been iterated.
    #[must_use]
    pub const fn iteration_count(&self) -> usize {
        self.iteration_count
    }
}

impl SnapshotSource for MockSnapshotSource {
    fn snapshots(&mut self) -> Box<dyn Iterator<Item = anyhow::Result<SignalSnapshot>> + '_> {
        self.iteration_count += 1;
        Box::new(
            self.frames
                .iter()
                .map(|f| f.clone().map_err(|reason| anyhow::anyhow!(reason))),
        )
    }
}
