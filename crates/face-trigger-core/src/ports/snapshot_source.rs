//! Snapshot source port for supplying frames to the driving loop.

use crate::domain::SignalSnapshot;

/// Port for obtaining per-frame signal snapshots.
pub trait SnapshotSource {
    /// Returns an iterator over snapshots in frame order.
    ///
    /// # Errors
    ///
    /// Individual items may be errors if a frame cannot be read.
    fn snapshots(&mut self) -> Box<dyn Iterator<Item = anyhow::Result<SignalSnapshot>> + '_>;
}
