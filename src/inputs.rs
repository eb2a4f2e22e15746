//! Meeting inputs as entered in the calculator.
//!
//! `Recurrence` and `Currency` are closed enums. String input is parsed
//! strictly through `FromStr`, or leniently through
//! [`Recurrence::parse_lenient`] which maps anything unknown to one-time.

use crate::numeric::saturate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How often a meeting happens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Recurrence {
    #[default]
    OneTime,
    Weekly,
    Monthly,
}

impl Recurrence {
    pub fn as_str(&self) -> &'static str {
        match self {
            Recurrence::OneTime => "one-time",
            Recurrence::Weekly => "weekly",
            Recurrence::Monthly => "monthly",
        }
    }

    /// Parse a recurrence, treating any unrecognized value as one-time.
    pub fn parse_lenient(s: &str) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "weekly" => Recurrence::Weekly,
            "monthly" => Recurrence::Monthly,
            "one-time" => Recurrence::OneTime,
            _ => Recurrence::OneTime,
        }
    }
}

impl fmt::Display for Recurrence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Recurrence {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "one-time" | "onetime" | "once" => Ok(Recurrence::OneTime),
            "weekly" => Ok(Recurrence::Weekly),
            "monthly" => Ok(Recurrence::Monthly),
            other => Err(format!(
                "unknown recurrence '{other}' (expected one-time, weekly or monthly)"
            )),
        }
    }
}

/// Display currency for monetary values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Currency {
    #[default]
    #[serde(rename = "USD")]
    Usd,
    #[serde(rename = "EUR")]
    Eur,
}

impl Currency {
    /// ISO 4217 code
    pub fn code(&self) -> &'static str {
        match self {
            Currency::Usd => "USD",
            Currency::Eur => "EUR",
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::Usd => "$",
            Currency::Eur => "€",
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Currency {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "USD" => Ok(Currency::Usd),
            "EUR" => Ok(Currency::Eur),
            other => Err(format!("unsupported currency '{other}' (expected USD or EUR)")),
        }
    }
}

/// Raw calculator inputs for a single meeting.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MeetingInputs {
    pub attendees: u32,
    pub avg_salary: f64,
    pub duration_minutes: f64,
    pub recurrence: Recurrence,
    pub currency: Currency,
}

impl Default for MeetingInputs {
    fn default() -> Self {
        Self {
            attendees: 6,
            avg_salary: 100_000.0,
            duration_minutes: 60.0,
            recurrence: Recurrence::OneTime,
            currency: Currency::Usd,
        }
    }
}

/// A single out-of-range input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputIssue {
    Attendees(String),
    Salary(String),
    Duration(String),
}

impl InputIssue {
    pub fn message(&self) -> &str {
        match self {
            InputIssue::Attendees(m) | InputIssue::Salary(m) | InputIssue::Duration(m) => m,
        }
    }
}

impl fmt::Display for InputIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Accepted ranges for calculator inputs
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputLimits {
    pub min_attendees: u32,
    pub min_salary: f64,
    pub max_salary: f64,
    pub min_duration: f64,
    pub max_duration: f64,
}

impl Default for InputLimits {
    fn default() -> Self {
        Self {
            min_attendees: 1,
            min_salary: 30_000.0,
            max_salary: 500_000.0,
            min_duration: 5.0,
            max_duration: 240.0,
        }
    }
}

impl InputLimits {
    /// Report every input that falls outside the limits.
    pub fn validate(&self, inputs: &MeetingInputs) -> Vec<InputIssue> {
        let mut issues = Vec::new();

        if inputs.attendees < self.min_attendees {
            issues.push(InputIssue::Attendees(format!(
                "Attendees must be at least {}.",
                self.min_attendees
            )));
        }

        if !in_range(inputs.avg_salary, self.min_salary, self.max_salary) {
            issues.push(InputIssue::Salary(format!(
                "Salary must be between {} and {}.",
                group_thousands(self.min_salary),
                group_thousands(self.max_salary)
            )));
        }

        if !in_range(inputs.duration_minutes, self.min_duration, self.max_duration) {
            issues.push(InputIssue::Duration(format!(
                "Duration must be between {} and {} minutes.",
                self.min_duration, self.max_duration
            )));
        }

        issues
    }

    /// Pull every input into the accepted range.
    pub fn clamp(&self, inputs: &MeetingInputs) -> MeetingInputs {
        MeetingInputs {
            attendees: inputs.attendees.max(self.min_attendees),
            avg_salary: crate::numeric::clamp(
                saturate(inputs.avg_salary),
                self.min_salary,
                self.max_salary,
            ),
            duration_minutes: crate::numeric::clamp(
                saturate(inputs.duration_minutes),
                self.min_duration,
                self.max_duration,
            ),
            ..*inputs
        }
    }
}

fn in_range(value: f64, min: f64, max: f64) -> bool {
    value.is_finite() && value >= min && value <= max
}

fn group_thousands(value: f64) -> String {
    crate::formatting::money::group_digits(&format!("{:.0}", value))
}
