//! Face Trigger Adapters - External adapters for face-trigger.
//!
//! This crate provides adapters for:
//! - JSON Lines snapshot streams (files or standard input)
//! - Recording observer callbacks as serializable events

pub mod jsonl;
pub mod recorder;

pub use jsonl::JsonlSnapshotSource;
pub use recorder::EventRecorder;
