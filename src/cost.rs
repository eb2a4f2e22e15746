//! Meeting cost model.
//!
//! Cost of one meeting is attendee-hours times an hourly rate derived from
//! an annual salary over a fixed 2080-hour work year. Annualization
//! multiplies by the number of occurrences a recurrence implies.

use crate::inputs::{MeetingInputs, Recurrence};
use crate::numeric::saturate;
use serde::{Deserialize, Serialize};

/// Paid hours in a working year (40h x 52 weeks)
pub const ANNUAL_WORK_HOURS: f64 = 2080.0;

pub fn hourly_rate(salary: f64) -> f64 {
    saturate(saturate(salary) / ANNUAL_WORK_HOURS)
}

/// Fully-loaded cost of one meeting instance.
///
/// Attendees are clamped to at least 1 and duration to at least 0.
pub fn meeting_cost(attendees: u32, salary: f64, duration_minutes: f64) -> f64 {
    let attendees = f64::from(attendees.max(1));
    let hours = saturate(duration_minutes).max(0.0) / 60.0;
    saturate(attendees * hourly_rate(salary) * hours)
}

/// Occurrences per year for a recurrence.
pub fn annualized_multiplier(recurrence: Recurrence) -> f64 {
    match recurrence {
        Recurrence::Weekly => 52.0,
        Recurrence::Monthly => 12.0,
        Recurrence::OneTime => 1.0,
    }
}

pub fn annualized_cost(cost: f64, recurrence: Recurrence) -> f64 {
    saturate(saturate(cost) * annualized_multiplier(recurrence))
}

/// Per-attendee share of a meeting's cost; zero when there are no attendees.
pub fn cost_per_person(cost: f64, attendees: u32) -> f64 {
    if attendees > 0 {
        saturate(saturate(cost) / f64::from(attendees))
    } else {
        0.0
    }
}

/// Derived costs for one set of inputs. Recomputed on demand, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CostResult {
    pub cost_per_meeting: f64,
    pub annualized_cost: f64,
    pub cost_per_person: f64,
}

impl CostResult {
    pub fn compute(inputs: &MeetingInputs) -> Self {
        let cost_per_meeting =
            meeting_cost(inputs.attendees, inputs.avg_salary, inputs.duration_minutes);
        Self {
            cost_per_meeting,
            annualized_cost: annualized_cost(cost_per_meeting, inputs.recurrence),
            cost_per_person: cost_per_person(cost_per_meeting, inputs.attendees),
        }
    }
}
