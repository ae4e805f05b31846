use crate::core::checks::pillar_score;
use crate::domain::model::{
    FocusIndicators, Interactions, KeyboardSupport, MotorReport, Thresholds, TouchTargets,
};

/// Motor-accessibility checks over the declared interaction capabilities.
pub struct MotorChecks {
    interactions: Interactions,
}

impl MotorChecks {
    pub fn new(interactions: Interactions) -> Self {
        Self { interactions }
    }

    pub fn check_keyboard_support(&self) -> KeyboardSupport {
        KeyboardSupport {
            keyboard: self.interactions.keyboard,
        }
    }

    /// Every declared touch target must meet the minimum size. An empty list
    /// passes.
    pub fn check_touch_targets(&self, min_size: u32) -> TouchTargets {
        let pass = self
            .interactions
            .touch_targets
            .iter()
            .all(|&size| size >= min_size);
        TouchTargets {
            touch_sizes: self.interactions.touch_targets.clone(),
            pass,
        }
    }

    pub fn check_focus_indicators(&self) -> FocusIndicators {
        FocusIndicators {
            focus_indicators: self.interactions.focus_indicators,
        }
    }

    pub fn run_all(&self, thresholds: &Thresholds) -> MotorReport {
        let keyboard_support = self.check_keyboard_support();
        let touch_targets = self.check_touch_targets(thresholds.min_touch_target);
        let focus_indicators = self.check_focus_indicators();

        let passed = usize::from(keyboard_support.keyboard)
            + usize::from(touch_targets.pass)
            + usize::from(focus_indicators.focus_indicators);
        let score = pillar_score(passed, 3);

        MotorReport {
            keyboard_support,
            touch_targets,
            focus_indicators,
            score,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_touch_targets_all_must_meet_minimum() {
        let checks = MotorChecks::new(Interactions {
            touch_targets: vec![50, 45, 43],
            ..Interactions::default()
        });
        assert!(!checks.check_touch_targets(44).pass);

        let checks = MotorChecks::new(Interactions {
            touch_targets: vec![50, 45, 44],
            ..Interactions::default()
        });
        assert!(checks.check_touch_targets(44).pass);
    }

    #[test]
    fn test_empty_touch_targets_pass() {
        let checks = MotorChecks::new(Interactions::default());
        assert!(checks.check_touch_targets(44).pass);
    }

    #[test]
    fn test_run_all_scores_flags_and_targets() {
        let checks = MotorChecks::new(Interactions {
            keyboard: true,
            touch_targets: vec![50, 50],
            focus_indicators: false,
        });
        let report = checks.run_all(&Thresholds::default());
        assert!(report.keyboard_support.keyboard);
        assert!(report.touch_targets.pass);
        assert!(!report.focus_indicators.focus_indicators);
        assert_eq!(report.score, 2);
    }
}
