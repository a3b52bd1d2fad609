//! Core domain types for facial expression triggers.

mod condition;
mod evaluator;
mod event;
mod signal;

pub use condition::{Condition, Transition};
pub use evaluator::Evaluator;
pub use event::{EventKind, TriggerEvent};
pub use signal::{MissingSignal, SignalId, SignalSnapshot};
