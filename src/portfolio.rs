//! Tracked recurring meetings.
//!
//! `SavedMeeting` is the record shape handed to whatever stores meetings;
//! identity, ownership and timestamps belong to that store. Only weekly and
//! monthly meetings are tracked.

use crate::errors::{Error, Result, ResultExt};
use crate::evaluation::MeetingEvaluation;
use crate::inputs::{Currency, Recurrence};
use crate::risk::Severity;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Recurrence of a tracked meeting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PersistedRecurrence {
    Weekly,
    Monthly,
}

impl TryFrom<Recurrence> for PersistedRecurrence {
    type Error = Error;

    fn try_from(recurrence: Recurrence) -> Result<Self> {
        match recurrence {
            Recurrence::Weekly => Ok(PersistedRecurrence::Weekly),
            Recurrence::Monthly => Ok(PersistedRecurrence::Monthly),
            Recurrence::OneTime => Err(Error::NotPersistable {
                recurrence: recurrence.to_string(),
            }),
        }
    }
}

impl From<PersistedRecurrence> for Recurrence {
    fn from(recurrence: PersistedRecurrence) -> Self {
        match recurrence {
            PersistedRecurrence::Weekly => Recurrence::Weekly,
            PersistedRecurrence::Monthly => Recurrence::Monthly,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedMeeting {
    pub name: String,
    pub attendees: u32,
    pub avg_salary: f64,
    pub duration_minutes: f64,
    pub recurrence: PersistedRecurrence,
    pub currency: Currency,
    pub score: f64,
    pub annualized_cost: f64,
    pub annualized_waste: f64,
    pub risk: f64,
    pub severity: Severity,
}

impl SavedMeeting {
    pub fn from_evaluation(name: &str, evaluation: &MeetingEvaluation) -> Result<Self> {
        let name = name.trim();
        if name.is_empty() {
            return Err(Error::validation("meeting name must not be empty"));
        }

        let inputs = &evaluation.inputs;
        Ok(Self {
            name: name.to_string(),
            attendees: inputs.attendees,
            avg_salary: inputs.avg_salary,
            duration_minutes: inputs.duration_minutes,
            recurrence: PersistedRecurrence::try_from(inputs.recurrence)?,
            currency: inputs.currency,
            score: evaluation.score,
            annualized_cost: evaluation.cost.annualized_cost,
            annualized_waste: evaluation.risk.annualized_waste,
            risk: evaluation.risk.risk,
            severity: evaluation.risk.severity,
        })
    }
}

/// Aggregate view over tracked meetings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioSummary {
    /// Meetings ordered by annualized cost, most expensive first
    pub meetings: Vec<SavedMeeting>,
    pub total_annual_cost: f64,
    pub total_annual_waste: f64,
    pub meeting_count: usize,
    pub display_currency: Currency,
}

impl PortfolioSummary {
    pub fn from_meetings(meetings: &[SavedMeeting]) -> Self {
        let mut sorted = meetings.to_vec();
        sorted.sort_by(|a, b| {
            b.annualized_cost
                .partial_cmp(&a.annualized_cost)
                .unwrap_or(Ordering::Equal)
        });

        let total_annual_cost = sorted.iter().map(|m| m.annualized_cost).sum();
        let total_annual_waste = sorted.iter().map(|m| m.annualized_waste).sum();
        let display_currency = sorted.first().map(|m| m.currency).unwrap_or_default();

        Self {
            meeting_count: sorted.len(),
            meetings: sorted,
            total_annual_cost,
            total_annual_waste,
            display_currency,
        }
    }

    pub fn highest_cost(&self) -> Option<&SavedMeeting> {
        self.meetings.first()
    }

    pub fn is_empty(&self) -> bool {
        self.meetings.is_empty()
    }
}

/// Parse a JSON array of tracked meetings
pub fn parse_saved_meetings(json: &str) -> Result<Vec<SavedMeeting>> {
    serde_json::from_str(json)
        .map_err(Error::from)
        .context("invalid tracked meetings")
}
