//! End-to-end evaluation of one meeting.
//!
//! Inputs -> cost model -> quality score -> risk engine -> messaging, plus
//! the heat map placement. The result is the payload a presentation layer
//! renders and a storage layer persists.

use crate::config::MeetiqConfig;
use crate::cost::CostResult;
use crate::formatting::money::LocaleFormatter;
use crate::heatmap::{self, HeatMapPoint};
use crate::inputs::MeetingInputs;
use crate::messaging::{meeting_message_with, MeetingMessage, MessageParams};
use crate::numeric::{clamp, saturate};
use crate::quality::{quality_score, QualityAnswers};
use crate::risk::{compute_risk_with_cap, waste_pct, RiskResult};
use serde::{Deserialize, Serialize};

/// Where the quality score came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreSource {
    Checklist,
    Override,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeetingEvaluation {
    pub inputs: MeetingInputs,
    pub answers: QualityAnswers,
    pub score: f64,
    pub score_source: ScoreSource,
    pub cost: CostResult,
    /// Waste of a single occurrence
    pub waste_per_meeting: f64,
    pub risk: RiskResult,
    pub message: MeetingMessage,
    pub heatmap: HeatMapPoint,
}

impl MeetingEvaluation {
    pub fn evaluate(inputs: &MeetingInputs, answers: &QualityAnswers, config: &MeetiqConfig) -> Self {
        Self::evaluate_with_score(inputs, answers, None, config)
    }

    /// Evaluate with an optional score that replaces the checklist score.
    /// An override is clamped to [0, 100]; a NaN override is ignored.
    pub fn evaluate_with_score(
        inputs: &MeetingInputs,
        answers: &QualityAnswers,
        score_override: Option<f64>,
        config: &MeetiqConfig,
    ) -> Self {
        let (score, score_source) = match score_override.filter(|s| !s.is_nan()) {
            Some(score) => (clamp(score, 0.0, 100.0), ScoreSource::Override),
            None => (f64::from(quality_score(answers)), ScoreSource::Checklist),
        };

        let cost = CostResult::compute(inputs);
        let waste_per_meeting = saturate(cost.cost_per_meeting * waste_pct(score));
        let risk = compute_risk_with_cap(score, cost.annualized_cost, config.risk.max_annual_waste);

        let message = meeting_message_with(
            &MessageParams {
                score,
                waste_dollars: waste_per_meeting,
                annualized_waste: risk.annualized_waste,
                cost: cost.cost_per_meeting,
                annualized_cost: cost.annualized_cost,
                currency: inputs.currency,
            },
            &config.messaging,
            &LocaleFormatter,
        );

        let heatmap = heatmap::place(score, cost.cost_per_meeting, &config.heatmap);

        log::debug!(
            "evaluated meeting: cost={:.2} annualized={:.2} score={} risk={:.3} severity={}",
            cost.cost_per_meeting,
            cost.annualized_cost,
            score,
            risk.risk,
            risk.severity
        );

        Self {
            inputs: *inputs,
            answers: *answers,
            score,
            score_source,
            cost,
            waste_per_meeting,
            risk,
            message,
            heatmap,
        }
    }
}
