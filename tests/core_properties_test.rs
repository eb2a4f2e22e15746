mod common;

use common::approx_eq;
use meetiq::formatting::money::{FormatError, MoneyFormatter};
use meetiq::{
    annualized_cost, annualized_multiplier, compute_risk, cost_per_person, format_money,
    format_money_with, meeting_cost, meeting_message, quality_score, severity_from_score,
    Currency, MessageParams, MessageSeverity, QualityAnswers, Recurrence, Severity,
};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

struct LocaleMissing;

impl MoneyFormatter for LocaleMissing {
    fn format(&self, _amount: f64, _currency: Currency) -> Result<String, FormatError> {
        Err(FormatError::Unavailable("locale data not installed".into()))
    }
}

#[test]
fn test_multipliers() {
    assert_eq!(annualized_multiplier(Recurrence::OneTime), 1.0);
    assert_eq!(annualized_multiplier(Recurrence::Weekly), 52.0);
    assert_eq!(annualized_multiplier(Recurrence::Monthly), 12.0);
    assert_eq!(
        annualized_multiplier(Recurrence::parse_lenient("biweekly")),
        1.0
    );
}

#[test]
fn test_reference_meeting_costs() {
    let cost = meeting_cost(6, 100_000.0, 60.0);
    assert!((cost - 288.46).abs() < 0.01);
    assert!((annualized_cost(288.46, Recurrence::Weekly) - 14_999.92).abs() < 0.01);
    assert_eq!(cost_per_person(cost, 0), 0.0);
}

#[test]
fn test_quality_extremes() {
    assert_eq!(quality_score(&QualityAnswers::all_yes()), 100);
    assert_eq!(quality_score(&QualityAnswers::default()), 0);
}

#[test]
fn test_risk_extremes() {
    let best = compute_risk(100.0, 123_456.0);
    assert_eq!(best.waste_pct, 0.0);
    assert_eq!(best.annualized_waste, 0.0);
    assert_eq!(best.intensity, 0.0);
    assert!(approx_eq(best.risk, 0.05));

    let worst = compute_risk(0.0, 250_000.0);
    assert_eq!(worst.waste_pct, 1.0);
    assert_eq!(worst.annualized_waste, 250_000.0);
    assert!(approx_eq(worst.intensity, 1.0));
    assert!(approx_eq(worst.risk, 0.98));
}

#[test]
fn test_message_waste_gate_only_applies_to_low_scores() {
    let params = |waste_dollars| MessageParams {
        score: 30.0,
        waste_dollars,
        annualized_waste: waste_dollars * 12.0,
        cost: waste_dollars / 0.7,
        annualized_cost: waste_dollars / 0.7 * 12.0,
        currency: Currency::Usd,
    };

    let critical = meeting_message(&params(3000.0));
    assert_eq!(critical.severity, MessageSeverity::Severe);
    assert_eq!(critical.headline, "Critical Efficiency Risk");

    let weak = meeting_message(&params(1000.0));
    assert_eq!(weak.severity, MessageSeverity::Bad);
    assert_eq!(weak.headline, "Low Quality Relative to Cost");
}

#[test]
fn test_money_tiers() {
    let usd = format_money(1234.5, Currency::Usd);
    assert!(usd.contains("1,234.50") && usd.contains('$'));
    let eur = format_money(1234.5, Currency::Eur);
    assert!(eur.contains("1,234.50") && eur.contains('€'));

    assert_eq!(format_money_with(&LocaleMissing, 1234.5, Currency::Usd), "$1234.50");
    assert_eq!(format_money_with(&LocaleMissing, 1234.5, Currency::Eur), "€1234.50");
}

proptest! {
    #[test]
    fn severity_partitions_scores(score in 0.0f64..=100.0) {
        let expected = if score <= 40.0 {
            Severity::Severe
        } else if score < 70.0 {
            Severity::Mid
        } else {
            Severity::Good
        };
        prop_assert_eq!(severity_from_score(score), expected);
    }

    #[test]
    fn pipeline_outputs_are_bounded(
        attendees in 0u32..200,
        salary in 0.0f64..2_000_000.0,
        duration in 0.0f64..480.0,
        flags in any::<[bool; 5]>(),
    ) {
        let answers = QualityAnswers {
            goal_defined: flags[0],
            owner_assigned: flags[1],
            preread_sent: flags[2],
            decision_made: flags[3],
            next_actions_clear: flags[4],
        };
        let score = f64::from(quality_score(&answers));
        let cost = meeting_cost(attendees, salary, duration);
        let annual = annualized_cost(cost, Recurrence::Weekly);
        let risk = compute_risk(score, annual);

        prop_assert!((0.0..=1.0).contains(&risk.risk));
        prop_assert!((0.0..=1.0).contains(&risk.intensity));
        prop_assert_eq!(risk.annualized_waste, annual * risk.waste_pct);
        prop_assert!(risk.severity.band().contains(risk.risk));
    }

    #[test]
    fn formatted_money_never_leaks_raw_floats(amount in any::<f64>()) {
        let text = format_money(amount, Currency::Usd);
        prop_assert!(!text.contains("NaN"));
        prop_assert!(!text.contains("inf"));
        prop_assert!(text.contains('$'));
    }
}
