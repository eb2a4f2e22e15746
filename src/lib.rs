//! Meeting cost, waste and risk estimation.
//!
//! The computation core ([`cost`], [`quality`], [`risk`], [`messaging`],
//! [`formatting::money`]) is pure and total: every function accepts any
//! numeric input and returns an in-range result. The remaining modules wire
//! that core into an evaluation pipeline, configuration and a CLI.

pub mod cli;
pub mod commands;
pub mod config;
pub mod cost;
pub mod errors;
pub mod evaluation;
pub mod formatting;
pub mod heatmap;
pub mod inputs;
pub mod io;
pub mod messaging;
pub mod numeric;
pub mod portfolio;
pub mod quality;
pub mod risk;

// Re-export commonly used types
pub use crate::config::MeetiqConfig;
pub use crate::cost::{
    annualized_cost, annualized_multiplier, cost_per_person, hourly_rate, meeting_cost, CostResult,
};
pub use crate::errors::{Error, Result};
pub use crate::evaluation::MeetingEvaluation;
pub use crate::formatting::money::{format_money, format_money_with, MoneyFormatter};
pub use crate::heatmap::{HeatMapConfig, HeatMapPoint, Quadrant};
pub use crate::inputs::{Currency, InputLimits, MeetingInputs, Recurrence};
pub use crate::messaging::{meeting_message, MeetingMessage, MessageParams, MessageSeverity};
pub use crate::portfolio::{PortfolioSummary, SavedMeeting};
pub use crate::quality::{quality_score, QualityAnswers};
pub use crate::risk::{
    compute_risk, compute_risk_with_cap, intensity_from_annual_waste, severity_from_score,
    RiskResult, Severity,
};
