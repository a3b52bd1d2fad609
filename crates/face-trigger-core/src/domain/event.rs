//! Serializable records of observer callbacks.

use serde::{Deserialize, Serialize};

use super::Condition;

/// One observer callback, captured for output or assertions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TriggerEvent {
    /// Zero-based index of the frame that produced the event.
    pub frame: u64,
    /// Condition the callback belongs to.
    pub condition: Condition,
    /// Which callback of the pair fired.
    #[serde(flatten)]
    pub kind: EventKind,
}

/// The two callbacks tracked per condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum EventKind {
    /// Level change carrying the new state.
    DidChange {
        /// New level of the condition.
        active: bool,
    },
    /// Rising edge.
    Triggered,
}

impl TriggerEvent {
    /// Creates a level change record.
    #[must_use]
    pub const fn did_change(frame: u64, condition: Condition, active: bool) -> Self {
        Self {
            frame,
            condition,
            kind: EventKind::DidChange { active },
        }
    }

    /// Creates a rising edge record.
    #[must_use]
    pub const fn triggered(frame: u64, condition: Condition) -> Self {
        Self {
            frame,
            condition,
            kind: EventKind::Triggered,
        }
    }
}
