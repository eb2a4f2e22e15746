//! Coarse risk tier derived from the quality score.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Scores at or below this are severe
pub const SEVERE_MAX_SCORE: f64 = 40.0;
/// Scores at or above this are good
pub const GOOD_MIN_SCORE: f64 = 70.0;

/// Risk tier. Distinct from the four-way message severity in
/// [`crate::messaging::MessageSeverity`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Good,
    Mid,
    Severe,
}

/// Closed risk interval a severity interpolates within.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RiskBand {
    pub lo: f64,
    pub hi: f64,
}

impl RiskBand {
    pub const fn new(lo: f64, hi: f64) -> Self {
        Self { lo, hi }
    }

    /// Inclusive membership, tolerant of interpolation rounding at the ends.
    pub fn contains(&self, risk: f64) -> bool {
        const TOLERANCE: f64 = 1e-12;
        risk >= self.lo - TOLERANCE && risk <= self.hi + TOLERANCE
    }
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Good => "good",
            Severity::Mid => "mid",
            Severity::Severe => "severe",
        }
    }

    /// Badge text shown next to the risk bar
    pub fn label(&self) -> &'static str {
        match self {
            Severity::Good => "Low risk",
            Severity::Mid => "Medium risk",
            Severity::Severe => "High risk",
        }
    }

    pub fn band(&self) -> RiskBand {
        match self {
            Severity::Good => RiskBand::new(0.05, 0.30),
            Severity::Mid => RiskBand::new(0.36, 0.63),
            Severity::Severe => RiskBand::new(0.70, 0.98),
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// severe = [0, 40], mid = (40, 70), good = [70, 100].
///
/// NaN is treated as a zero score.
pub fn severity_from_score(score: f64) -> Severity {
    let score = if score.is_nan() { 0.0 } else { score };
    if score <= SEVERE_MAX_SCORE {
        Severity::Severe
    } else if score < GOOD_MIN_SCORE {
        Severity::Mid
    } else {
        Severity::Good
    }
}
