//! Narrative selection for a computed meeting.
//!
//! A priority-ordered decision table over the quality score and the
//! per-meeting waste. First matching rule wins; the table is exhaustive.

use crate::formatting::money::{format_money_with, LocaleFormatter, MoneyFormatter};
use crate::inputs::Currency;
use crate::numeric::{clamp, saturate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Four-way narrative tone. Not the same taxonomy as
/// [`crate::risk::Severity`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageSeverity {
    Good,
    Mid,
    Bad,
    Severe,
}

impl MessageSeverity {
    pub fn as_str(&self) -> &'static str {
        match self {
            MessageSeverity::Good => "good",
            MessageSeverity::Mid => "mid",
            MessageSeverity::Bad => "bad",
            MessageSeverity::Severe => "severe",
        }
    }
}

impl fmt::Display for MessageSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeetingMessage {
    pub headline: String,
    pub body: String,
    pub severity: MessageSeverity,
}

/// Score and money figures a message is built from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MessageParams {
    pub score: f64,
    /// Waste of a single occurrence
    pub waste_dollars: f64,
    pub annualized_waste: f64,
    pub cost: f64,
    pub annualized_cost: f64,
    pub currency: Currency,
}

/// Thresholds of the decision table
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MessagingThresholds {
    /// Scores below this are low quality
    pub low_score_threshold: f64,
    /// Scores at or above this are strong
    pub strong_score_threshold: f64,
    /// Per-meeting waste above which a low score becomes critical
    pub critical_waste_threshold: f64,
}

impl Default for MessagingThresholds {
    fn default() -> Self {
        Self {
            low_score_threshold: 50.0,
            strong_score_threshold: 80.0,
            critical_waste_threshold: 2000.0,
        }
    }
}

pub fn meeting_message(params: &MessageParams) -> MeetingMessage {
    meeting_message_with(params, &MessagingThresholds::default(), &LocaleFormatter)
}

pub fn meeting_message_with(
    params: &MessageParams,
    thresholds: &MessagingThresholds,
    formatter: &dyn MoneyFormatter,
) -> MeetingMessage {
    let money = |amount: f64| format_money_with(formatter, amount, params.currency);
    // NaN score counts as 0, matching the risk tiers
    let score = clamp(params.score, 0.0, 100.0);
    let waste_dollars = saturate(params.waste_dollars);

    if score < thresholds.low_score_threshold && waste_dollars > thresholds.critical_waste_threshold
    {
        return MeetingMessage {
            severity: MessageSeverity::Severe,
            headline: "Critical Efficiency Risk".to_string(),
            body: format!(
                "Quality is low while spend is high. Current meeting cost is {}, with an \
                 annualized burn of {}. You likely burned {} with limited measurable outcome.",
                money(params.cost),
                money(params.annualized_cost),
                money(waste_dollars)
            ),
        };
    }

    if score >= thresholds.strong_score_threshold {
        return MeetingMessage {
            severity: MessageSeverity::Good,
            headline: "Strong Meeting Discipline".to_string(),
            body: format!(
                "Execution quality is high and waste is contained at {} per meeting \
                 ({} annualized). Keep this operating standard.",
                money(waste_dollars),
                money(params.annualized_waste)
            ),
        };
    }

    if score >= thresholds.low_score_threshold {
        return MeetingMessage {
            severity: MessageSeverity::Mid,
            headline: "Moderate Performance, Clear Headroom".to_string(),
            body: format!(
                "The meeting structure is functional but leaves measurable value on the \
                 table. Estimated waste is {} per meeting and {} annually.",
                money(waste_dollars),
                money(params.annualized_waste)
            ),
        };
    }

    MeetingMessage {
        severity: MessageSeverity::Bad,
        headline: "Low Quality Relative to Cost".to_string(),
        body: format!(
            "Core decision hygiene is weak for this spend level. Estimated waste is {} per \
             meeting and {} annualized.",
            money(waste_dollars),
            money(params.annualized_waste)
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formatting::money::FormatError;
    use proptest::prelude::*;

    fn params(score: f64, waste_dollars: f64) -> MessageParams {
        MessageParams {
            score,
            waste_dollars,
            annualized_waste: waste_dollars * 52.0,
            cost: 4_000.0,
            annualized_cost: 208_000.0,
            currency: Currency::Usd,
        }
    }

    #[test]
    fn test_low_score_high_waste_is_critical() {
        let message = meeting_message(&params(30.0, 3000.0));
        assert_eq!(message.severity, MessageSeverity::Severe);
        assert_eq!(message.headline, "Critical Efficiency Risk");
        assert!(message.body.contains("$4,000.00"));
        assert!(message.body.contains("$208,000.00"));
        assert!(message.body.contains("$3,000.00"));
    }

    #[test]
    fn test_low_score_low_waste_is_bad() {
        let message = meeting_message(&params(30.0, 1000.0));
        assert_eq!(message.severity, MessageSeverity::Bad);
        assert_eq!(message.headline, "Low Quality Relative to Cost");
        assert!(message.body.contains("$1,000.00 per meeting"));
        assert!(message.body.contains("$52,000.00 annualized"));
    }

    #[test]
    fn test_nan_score_reads_as_zero() {
        let nan = meeting_message(&params(f64::NAN, 3000.0));
        let zero = meeting_message(&params(0.0, 3000.0));
        assert_eq!(nan, zero);
        assert_eq!(nan.severity, MessageSeverity::Severe);
        assert_eq!(
            crate::risk::compute_risk(f64::NAN, 156_000.0).severity,
            crate::risk::Severity::Severe
        );
        assert_eq!(
            meeting_message(&params(f64::NAN, 100.0)).severity,
            MessageSeverity::Bad
        );
    }

    #[test]
    fn test_waste_gate_is_strict() {
        assert_eq!(
            meeting_message(&params(40.0, 2000.0)).severity,
            MessageSeverity::Bad
        );
    }

    #[test]
    fn test_strong_and_moderate() {
        let strong = meeting_message(&params(80.0, 50_000.0));
        assert_eq!(strong.severity, MessageSeverity::Good);
        assert_eq!(strong.headline, "Strong Meeting Discipline");

        let moderate = meeting_message(&params(50.0, 50_000.0));
        assert_eq!(moderate.severity, MessageSeverity::Mid);
        assert_eq!(moderate.headline, "Moderate Performance, Clear Headroom");
        assert!(moderate.body.ends_with("annually."));
    }

    #[test]
    fn test_body_uses_fallback_formatter() {
        struct Broken;
        impl MoneyFormatter for Broken {
            fn format(&self, _: f64, _: Currency) -> Result<String, FormatError> {
                Err(FormatError::Unavailable("test".into()))
            }
        }
        let mut p = params(90.0, 12.5);
        p.currency = Currency::Eur;
        let message = meeting_message_with(&p, &MessagingThresholds::default(), &Broken);
        assert!(message.body.contains("€12.50 per meeting"));
    }

    proptest! {
        #[test]
        fn every_score_gets_a_message(score in 0.0f64..=100.0, waste in 0.0f64..1e6) {
            let message = meeting_message(&params(score, waste));
            let expected = if score < 50.0 && waste > 2000.0 {
                MessageSeverity::Severe
            } else if score >= 80.0 {
                MessageSeverity::Good
            } else if score >= 50.0 {
                MessageSeverity::Mid
            } else {
                MessageSeverity::Bad
            };
            prop_assert_eq!(message.severity, expected);
            prop_assert!(!message.body.contains("NaN"));
        }
    }
}
