//! Previous-level tracking for one boolean condition.

use crate::domain::Transition;

/// Remembers the last level of a condition and classifies the next one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EdgeDetector {
    active: bool,
}

impl EdgeDetector {
    /// Creates a detector in the inactive state.
    #[must_use]
    pub const fn new() -> Self {
        Self { active: false }
    }

    /// Stores `level` and returns how it differs from the previous level.
    pub fn classify(&mut self, level: bool) -> Transition {
        let transition = Transition::between(self.active, level);
        self.active = level;
        transition
    }

    /// Forgets the stored level without reporting a transition.
    pub fn rearm(&mut self) {
        self.active = false;
    }

    /// Returns the stored level.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.active
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_inactive() {
        assert!(!EdgeDetector::new().is_active());
        assert_eq!(EdgeDetector::new(), EdgeDetector::default());
    }

    #[test]
    fn test_classify_sequence() {
        let mut detector = EdgeDetector::new();

        assert_eq!(detector.classify(false), Transition::Unchanged);
        assert_eq!(detector.classify(true), Transition::Rising);
        assert_eq!(detector.classify(true), Transition::Unchanged);
        assert_eq!(detector.classify(false), Transition::Falling);
        assert!(!detector.is_active());
    }

    #[test]
    fn test_rearm_allows_new_rising_edge() {
        let mut detector = EdgeDetector::new();
        detector.classify(true);
        detector.rearm();

        assert!(!detector.is_active());
        assert_eq!(detector.classify(true), Transition::Rising);
    }
}
