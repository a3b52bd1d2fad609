//! Tracked conditions and their level transitions.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A semantic facial condition reported to observers.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Condition {
    /// Both mouth corners raised.
    Smile,
    /// Both eyes closed.
    Blink,
    /// Left eye closed alone.
    BlinkLeft,
    /// Right eye closed alone.
    BlinkRight,
    /// Both brows lowered.
    BrowDown,
    /// Inner brows raised.
    BrowUp,
    /// Both eyes squinting.
    Squint,
    /// Lips puckered.
    MouthPucker,
    /// Jaw opened.
    JawOpen,
    /// Jaw shifted left.
    JawLeft,
    /// Jaw shifted right.
    JawRight,
}

impl Condition {
    /// Returns the snake case name used in event records.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Smile => "smile",
            Self::Blink => "blink",
            Self::BlinkLeft => "blink_left",
            Self::BlinkRight => "blink_right",
            Self::BrowDown => "brow_down",
            Self::BrowUp => "brow_up",
            Self::Squint => "squint",
            Self::MouthPucker => "mouth_pucker",
            Self::JawOpen => "jaw_open",
            Self::JawLeft => "jaw_left",
            Self::JawRight => "jaw_right",
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of classifying a new boolean level against the previous one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Inactive to active.
    Rising,
    /// Active to inactive.
    Falling,
    /// Same level as before.
    Unchanged,
}

impl Transition {
    /// Derives the transition between two levels.
    #[must_use]
    pub const fn between(previous: bool, current: bool) -> Self {
        match (previous, current) {
            (false, true) => Self::Rising,
            (true, false) => Self::Falling,
            _ => Self::Unchanged,
        }
    }

    /// Returns true if the level changed in either direction.
    #[must_use]
    pub const fn changed(self) -> bool {
        !matches!(self, Self::Unchanged)
    }

    /// Returns true on an inactive to active edge.
    #[must_use]
    pub const fn is_rising(self) -> bool {
        matches!(self, Self::Rising)
    }

    /// Returns true on an active to inactive edge.
    #[must_use]
    pub const fn is_falling(self) -> bool {
        matches!(self, Self::Falling)
    }
}
