//! Evaluator implementations.
//!
//! Each evaluator implements the `Evaluator` trait for one family of
//! conditions and tracks its own previous-frame levels.

mod bilateral;
mod config;
mod edge;
mod single;

pub use bilateral::{BilateralHooks, BilateralThresholdEvaluator};
pub use config::{defaults, TriggerConfig};
pub use edge::EdgeDetector;
pub use single::{SignalSource, SingleThresholdEvaluator};
