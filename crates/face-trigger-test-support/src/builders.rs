//! Synthetic snapshot builders for testing.

use face_trigger_core::{SignalId, SignalSnapshot};

/// Builder for creating synthetic signal snapshots.
///
/// Provides convenience methods for frames with specific expressions
/// (blinks, smiles, lowered brows, ...).
pub struct SnapshotBuilder;

impl SnapshotBuilder {
    // === Eyes ===

    /// Eyelid closure per eye.
    #[must_use]
    pub fn eyes(left: f32, right: f32) -> SignalSnapshot {
        SignalSnapshot::new()
            .with(SignalId::EyeBlinkLeft, left)
            .with(SignalId::EyeBlinkRight, right)
    }

    /// Both eyes fully closed.
    #[must_use]
    pub fn blink() -> SignalSnapshot {
        Self::eyes(1.0, 1.0)
    }

    /// Only the left eye closed.
    #[must_use]
    pub fn wink_left() -> SignalSnapshot {
        Self::eyes(1.0, 0.0)
    }

    /// Only the right eye closed.
    #[must_use]
    pub fn wink_right() -> SignalSnapshot {
        Self::eyes(0.0, 1.0)
    }

    /// Squint per eye.
    #[must_use]
    pub fn squint(left: f32, right: f32) -> SignalSnapshot {
        SignalSnapshot::new()
            .with(SignalId::EyeSquintLeft, left)
            .with(SignalId::EyeSquintRight, right)
    }

    // === Brows ===

    /// Brow lowering per side.
    #[must_use]
    pub fn brows_down(left: f32, right: f32) -> SignalSnapshot {
        SignalSnapshot::new()
            .with(SignalId::BrowDownLeft, left)
            .with(SignalId::BrowDownRight, right)
    }

    /// Inner brow raise.
    #[must_use]
    pub fn brow_up(intensity: f32) -> SignalSnapshot {
        SignalSnapshot::new().with(SignalId::BrowInnerUp, intensity)
    }

    // === Mouth and jaw ===

    /// Mouth corner raise per side.
    #[must_use]
    pub fn smile(left: f32, right: f32) -> SignalSnapshot {
        SignalSnapshot::new()
            .with(SignalId::MouthSmileLeft, left)
            .with(SignalId::MouthSmileRight, right)
    }

    /// Lip pucker.
    #[must_use]
    pub fn pucker(intensity: f32) -> SignalSnapshot {
        SignalSnapshot::new().with(SignalId::MouthPucker, intensity)
    }

    /// Jaw opening.
    #[must_use]
    pub fn jaw_open(intensity: f32) -> SignalSnapshot {
        SignalSnapshot::new().with(SignalId::JawOpen, intensity)
    }

    // === Whole face ===

    /// Every signal present at zero.
    #[must_use]
    pub fn neutral() -> SignalSnapshot {
        Self::uniform(0.0)
    }

    /// Every signal present at the same intensity.
    #[must_use]
    pub fn uniform(intensity: f32) -> SignalSnapshot {
        SignalId::ALL.into_iter().map(|id| (id, intensity)).collect()
    }

    /// Merges the signals of `b` over `a`.
    #[must_use]
    pub fn merge(a: SignalSnapshot, b: &SignalSnapshot) -> SignalSnapshot {
        SignalId::ALL
            .into_iter()
            .filter_map(|id| b.get(id).map(|v| (id, v)))
            .fold(a, |acc, (id, v)| acc.with(id, v))
    }
}
