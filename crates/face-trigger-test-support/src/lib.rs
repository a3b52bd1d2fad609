//! Test support utilities for face-trigger.
//!
//! Provides mocks, synthetic snapshot builders, and utilities for testing
//! the evaluator pipeline.
//!
//! # Example
//!
//! ```
//! use face_trigger_test_support::{MockObserver, MockSnapshotSource, SnapshotBuilder};
//!
//! // Create synthetic frames
//! let blink = SnapshotBuilder::blink();
//! let open = SnapshotBuilder::eyes(0.0, 0.0);
//!
//! // Create mock source and observer
//! let source = MockSnapshotSource::new(vec![blink, open]);
//! let observer = MockObserver::new();
//! ```

mod builders;
mod mocks;

pub use builders::SnapshotBuilder;
pub use mocks::{BrowDownOnlyObserver, MockObserver, MockSnapshotSource};
