//! Face Trigger Core - Domain logic and expression evaluators
//!
//! This crate contains the signal and event types, the observer and snapshot
//! source ports, the threshold evaluators for smile, blink, brow, squint,
//! pucker and jaw conditions, and the frame driving loop.

pub mod domain;
pub mod evaluators;
pub mod ports;
mod trigger;

pub use domain::{
    Condition, Evaluator, EventKind, MissingSignal, SignalId, SignalSnapshot, Transition,
    TriggerEvent,
};
pub use evaluators::{
    BilateralHooks, BilateralThresholdEvaluator, EdgeDetector, SignalSource,
    SingleThresholdEvaluator, TriggerConfig,
};
pub use ports::{notify, FaceTriggerObserver, SnapshotSource};
pub use trigger::{FaceTrigger, RunStats, SessionState};
