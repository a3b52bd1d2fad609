//! Facial signal identifiers and per-frame snapshots.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// A named facial-muscle intensity signal.
///
/// The set is closed: producers map their blend shape coefficients onto
/// these identifiers before handing a frame to the evaluators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SignalId {
    /// Left corner of the mouth pulled up.
    MouthSmileLeft,
    /// Right corner of the mouth pulled up.
    MouthSmileRight,
    /// Closure of the left eyelid.
    EyeBlinkLeft,
    /// Closure of the right eyelid.
    EyeBlinkRight,
    /// Downward movement of the outer left brow.
    BrowDownLeft,
    /// Downward movement of the outer right brow.
    BrowDownRight,
    /// Upward movement of the inner brows.
    BrowInnerUp,
    /// Contraction of both lips into an open shape.
    MouthPucker,
    /// Contraction of the face around the left eye.
    EyeSquintLeft,
    /// Contraction of the face around the right eye.
    EyeSquintRight,
    /// Opening of the lower jaw.
    JawOpen,
    /// Leftward movement of the lower jaw.
    JawLeft,
    /// Rightward movement of the lower jaw.
    JawRight,
}

impl SignalId {
    /// Every identifier, in declaration order.
    pub const ALL: [Self; 13] = [
        Self::MouthSmileLeft,
        Self::MouthSmileRight,
        Self::EyeBlinkLeft,
        Self::EyeBlinkRight,
        Self::BrowDownLeft,
        Self::BrowDownRight,
        Self::BrowInnerUp,
        Self::MouthPucker,
        Self::EyeSquintLeft,
        Self::EyeSquintRight,
        Self::JawOpen,
        Self::JawLeft,
        Self::JawRight,
    ];

    /// Returns the wire name of this signal (`eyeBlinkLeft`, ...).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::MouthSmileLeft => "mouthSmileLeft",
            Self::MouthSmileRight => "mouthSmileRight",
            Self::EyeBlinkLeft => "eyeBlinkLeft",
            Self::EyeBlinkRight => "eyeBlinkRight",
            Self::BrowDownLeft => "browDownLeft",
            Self::BrowDownRight => "browDownRight",
            Self::BrowInnerUp => "browInnerUp",
            Self::MouthPucker => "mouthPucker",
            Self::EyeSquintLeft => "eyeSquintLeft",
            Self::EyeSquintRight => "eyeSquintRight",
            Self::JawOpen => "jawOpen",
            Self::JawLeft => "jawLeft",
            Self::JawRight => "jawRight",
        }
    }
}

impl fmt::Display for SignalId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How a threshold test treats a signal that is absent from the snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissingSignal {
    /// Make no classification; the caller skips the frame.
    Skip,
    /// Classify the signal as inactive, whatever the threshold.
    Inactive,
}

/// Signal intensities observed in one frame.
///
/// A snapshot need not carry every [`SignalId`]. Intensities are expected in
/// `0.0..=1.0` but are stored as given.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SignalSnapshot {
    values: HashMap<SignalId, f32>,
}

impl SignalSnapshot {
    /// Creates an empty snapshot.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the intensity of a signal, returning the snapshot for chaining.
    #[must_use]
    pub fn with(mut self, id: SignalId, intensity: f32) -> Self {
        self.values.insert(id, intensity);
        self
    }

    /// Returns the raw intensity of a signal, if observed this frame.
    #[must_use]
    pub fn get(&self, id: SignalId) -> Option<f32> {
        self.values.get(&id).copied()
    }

    /// Tests `intensity >= threshold`, applying `policy` when the signal is
    /// absent. NaN intensities test false.
    #[must_use]
    pub fn reaches(&self, id: SignalId, threshold: f32, policy: MissingSignal) -> Option<bool> {
        match (self.get(id), policy) {
            (Some(value), _) => Some(value >= threshold),
            (None, MissingSignal::Skip) => None,
            (None, MissingSignal::Inactive) => Some(false),
        }
    }

    /// Returns the number of signals observed this frame.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if no signal was observed this frame.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl FromIterator<(SignalId, f32)> for SignalSnapshot {
    fn from_iter<I: IntoIterator<Item = (SignalId, f32)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}
