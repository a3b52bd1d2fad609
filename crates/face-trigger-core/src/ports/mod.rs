//! Port definitions for hexagonal architecture.
//!
//! These traits define the boundaries between the evaluator core and the
//! collaborators that feed it frames and consume its events.

mod observer;
mod snapshot_source;

pub use observer::{notify, FaceTriggerObserver};
pub use snapshot_source::SnapshotSource;
