//! Threshold configuration for the stock evaluator set.

use tracing::debug;

use super::{BilateralThresholdEvaluator, SingleThresholdEvaluator};
use crate::domain::Evaluator;

/// Default thresholds for each evaluator.
pub mod defaults {
    pub const SMILE: f32 = 0.7;
    pub const BLINK: f32 = 0.8;
    pub const BROW_DOWN: f32 = 0.25;
    pub const BROW_UP: f32 = 0.95;
    pub const SQUINT: f32 = 0.8;
    pub const MOUTH_PUCKER: f32 = 0.7;
    pub const JAW_OPEN: f32 = 0.9;
    pub const JAW_LEFT: f32 = 0.3;
    pub const JAW_RIGHT: f32 = 0.3;
}

/// Thresholds for the stock evaluators. `None` disables an evaluator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TriggerConfig {
    /// Mean mouth-corner intensity for a smile.
    pub smile: Option<f32>,
    /// Per-eye closure intensity for blinks.
    pub blink: Option<f32>,
    /// Per-brow intensity for lowered brows.
    pub brow_down: Option<f32>,
    /// Inner brow raise intensity.
    pub brow_up: Option<f32>,
    /// Per-eye squint intensity.
    pub squint: Option<f32>,
    /// Lip pucker intensity.
    pub mouth_pucker: Option<f32>,
    /// Jaw opening intensity.
    pub jaw_open: Option<f32>,
    /// Leftward jaw shift intensity.
    pub jaw_left: Option<f32>,
    /// Rightward jaw shift intensity.
    pub jaw_right: Option<f32>,
}

impl Default for TriggerConfig {
    fn default() -> Self {
        Self {
            smile: Some(defaults::SMILE),
            blink: Some(defaults::BLINK),
            brow_down: Some(defaults::BROW_DOWN),
            brow_up: Some(defaults::BROW_UP),
            squint: Some(defaults::SQUINT),
            mouth_pucker: Some(defaults::MOUTH_PUCKER),
            jaw_open: Some(defaults::JAW_OPEN),
            jaw_left: Some(defaults::JAW_LEFT),
            jaw_right: Some(defaults::JAW_RIGHT),
        }
    }
}

impl TriggerConfig {
    /// Names of the stock evaluators, in construction order.
    pub const EVALUATOR_NAMES: [&'static str; 9] = [
        "smile",
        "blink",
        "brow_down",
        "brow_up",
        "squint",
        "mouth_pucker",
        "jaw_open",
        "jaw_left",
        "jaw_right",
    ];

    /// A configuration with every evaluator disabled.
    #[must_use]
    pub const fn none() -> Self {
        Self {
            smile: None,
            blink: None,
            brow_down: None,
            brow_up: None,
            squint: None,
            mouth_pucker: None,
            jaw_open: None,
            jaw_left: None,
            jaw_right: None,
        }
    }

    /// Returns the threshold slot for an evaluator name.
    pub fn slot_mut(&mut self, name: &str) -> Option<&mut Option<f32>> {
        match name {
            "smile" => Some(&mut self.smile),
            "blink" => Some(&mut self.blink),
            "brow_down" => Some(&mut self.brow_down),
            "brow_up" => Some(&mut self.brow_up),
            "squint" => Some(&mut self.squint),
            "mouth_pucker" => Some(&mut self.mouth_pucker),
            "jaw_open" => Some(&mut self.jaw_open),
            "jaw_left" => Some(&mut self.jaw_left),
            "jaw_right" => Some(&mut self.jaw_right),
            _ => None,
        }
    }

    /// Returns `(name, threshold)` for every enabled evaluator.
    #[must_use]
    pub fn enabled(&self) -> Vec<(&'static str, f32)> {
        let slots = [
            self.smile,
            self.blink,
            self.brow_down,
            self.brow_up,
            self.squint,
            self.mouth_pucker,
            self.jaw_open,
            self.jaw_left,
            self.jaw_right,
        ];

        Self::EVALUATOR_NAMES
            .into_iter()
            .zip(slots)
            .filter_map(|(name, threshold)| threshold.map(|t| (name, t)))
            .collect()
    }

    /// Builds the enabled evaluators in a fixed order.
    #[must_use]
    pub fn build_evaluators(&self) -> Vec<Box<dyn Evaluator>> {
        let mut evaluators: Vec<Box<dyn Evaluator>> = Vec::new();

        for (name, threshold) in self.enabled() {
            let evaluator: Box<dyn Evaluator> = match name {
                "smile" => Box::new(SingleThresholdEvaluator::smile(threshold)),
                "blink" => Box::new(BilateralThresholdEvaluator::blink(threshold)),
                "brow_down" => Box::new(BilateralThresholdEvaluator::brow_down(threshold)),
                "brow_up" => Box::new(SingleThresholdEvaluator::brow_up(threshold)),
                "squint" => Box::new(BilateralThresholdEvaluator::squint(threshold)),
                "mouth_pucker" => Box::new(SingleThresholdEvaluator::mouth_pucker(threshold)),
                "jaw_open" => Box::new(SingleThresholdEvaluator::jaw_open(threshold)),
                "jaw_left" => Box::new(SingleThresholdEvaluator::jaw_left(threshold)),
                "jaw_right" => Box::new(SingleThresholdEvaluator::jaw_right(threshold)),
                _ => continue,
            };
            debug!("Enabled {} evaluator (threshold {:.2})", name, threshold);
            evaluators.push(evaluator);
        }

        evaluators
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = TriggerConfig::default();
        assert_eq!(config.smile, Some(0.7));
        assert_eq!(config.brow_down, Some(0.25));
        assert_eq!(config.enabled().len(), 9);
    }

    #[test]
    fn test_build_all_evaluators_in_order() {
        let evaluators = TriggerConfig::default().build_evaluators();
        let names: Vec<_> = evaluators.iter().map(|e| e.name()).collect();
        assert_eq!(names, TriggerConfig::EVALUATOR_NAMES);
    }

    #[test]
    fn test_disabled_evaluators_are_skipped() {
        let config = TriggerConfig {
            blink: Some(0.5),
            jaw_open: Some(0.6),
            ..TriggerConfig::none()
        };

        let names: Vec<_> = config.build_evaluators().iter().map(|e| e.name()).collect();
        assert_eq!(names, ["blink", "jaw_open"]);
    }

    #[test]
    fn test_slot_mut() {
        let mut config = TriggerConfig::none();
        if let Some(slot) = config.slot_mut("squint") {
            *slot = Some(0.4);
        }

        assert_eq!(config.squint, Some(0.4));
        assert!(config.slot_mut("cheek_puff").is_none());
    }
}
