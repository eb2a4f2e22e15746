//! Meeting quality checklist and score.

use serde::{Deserialize, Serialize};

/// Points awarded for each satisfied checklist item
pub const POINTS_PER_ANSWER: u8 = 20;

/// Answers to the five-question meeting hygiene checklist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct QualityAnswers {
    pub goal_defined: bool,
    pub owner_assigned: bool,
    pub preread_sent: bool,
    pub decision_made: bool,
    pub next_actions_clear: bool,
}

impl QualityAnswers {
    pub fn all_yes() -> Self {
        Self {
            goal_defined: true,
            owner_assigned: true,
            preread_sent: true,
            decision_made: true,
            next_actions_clear: true,
        }
    }

    /// Answers in checklist order.
    pub fn as_array(&self) -> [bool; 5] {
        [
            self.goal_defined,
            self.owner_assigned,
            self.preread_sent,
            self.decision_made,
            self.next_actions_clear,
        ]
    }

    pub fn yes_count(&self) -> u8 {
        self.as_array().iter().filter(|answer| **answer).count() as u8
    }
}

/// 20 points per satisfied item, clamped to [0, 100].
pub fn quality_score(answers: &QualityAnswers) -> u8 {
    answers
        .yes_count()
        .saturating_mul(POINTS_PER_ANSWER)
        .min(100)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_all_and_none() {
        assert_eq!(quality_score(&QualityAnswers::all_yes()), 100);
        assert_eq!(quality_score(&QualityAnswers::default()), 0);
    }

    #[test]
    fn test_single_flag_is_twenty() {
        let singles = [
            QualityAnswers { goal_defined: true, ..Default::default() },
            QualityAnswers { owner_assigned: true, ..Default::default() },
            QualityAnswers { preread_sent: true, ..Default::default() },
            QualityAnswers { decision_made: true, ..Default::default() },
            QualityAnswers { next_actions_clear: true, ..Default::default() },
        ];
        for answers in singles {
            assert_eq!(quality_score(&answers), 20);
        }
    }

    #[test]
    fn test_snake_case_serde() {
        let answers: QualityAnswers = serde_json::from_str(
            r#"{"goal_defined":true,"owner_assigned":false,"preread_sent":true,
                "decision_made":false,"next_actions_clear":true}"#,
        )
        .unwrap();
        assert_eq!(quality_score(&answers), 60);
    }

    proptest! {
        #[test]
        fn score_is_quantized(flags in any::<[bool; 5]>()) {
            let answers = QualityAnswers {
                goal_defined: flags[0],
                owner_assigned: flags[1],
                preread_sent: flags[2],
                decision_made: flags[3],
                next_actions_clear: flags[4],
            };
            let score = quality_score(&answers);
            prop_assert!(score <= 100);
            prop_assert_eq!(score % 20, 0);
            prop_assert_eq!(score, flags.iter().filter(|f| **f).count() as u8 * 20);
        }

        #[test]
        fn order_does_not_matter(flags in any::<[bool; 5]>(), shift in 0usize..5) {
            let mut rotated = flags;
            rotated.rotate_left(shift);
            let build = |f: [bool; 5]| QualityAnswers {
                goal_defined: f[0],
                owner_assigned: f[1],
                preread_sent: f[2],
                decision_made: f[3],
                next_actions_clear: f[4],
            };
            prop_assert_eq!(quality_score(&build(flags)), quality_score(&build(rotated)));
        }
    }
}
