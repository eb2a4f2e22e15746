//! Risk engine.
//!
//! Maps a quality score and an annualized cost to a severity tier, a waste
//! fraction and amount, a log-scaled intensity, and a final risk value.
//! Severity picks the band; intensity orders meetings within it.

pub mod intensity;
pub mod severity;

pub use intensity::{intensity_from_annual_waste, DEFAULT_MAX_ANNUAL_WASTE};
pub use severity::{severity_from_score, RiskBand, Severity};

use crate::numeric::{clamp, clamp_unit, lerp, saturate};
use serde::{Deserialize, Serialize};

/// Output of [`compute_risk`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RiskResult {
    pub risk: f64,
    pub severity: Severity,
    pub waste_pct: f64,
    pub annualized_waste: f64,
    pub intensity: f64,
}

impl RiskResult {
    /// Horizontal centre of the risk marker on a bar `width` wide, keeping a
    /// marker of `radius` fully inside the bar.
    pub fn marker_position(&self, width: f64, radius: f64) -> f64 {
        let usable = (width - 2.0 * radius).max(0.0);
        radius + clamp_unit(self.risk) * usable
    }
}

/// Fraction of spend attributed to poor quality.
pub fn waste_pct(score: f64) -> f64 {
    clamp_unit(1.0 - score / 100.0)
}

/// Risk with the default waste cap of 250,000.
pub fn compute_risk(score: f64, annualized_cost: f64) -> RiskResult {
    compute_risk_with_cap(score, annualized_cost, DEFAULT_MAX_ANNUAL_WASTE)
}

pub fn compute_risk_with_cap(score: f64, annualized_cost: f64, max_annual_waste: f64) -> RiskResult {
    let score = clamp(score, 0.0, 100.0);
    let waste_pct = waste_pct(score);
    let annualized_waste = saturate(annualized_cost) * waste_pct;
    let severity = severity_from_score(score);
    let intensity = intensity_from_annual_waste(annualized_waste, max_annual_waste);

    let band = severity.band();
    let risk = clamp_unit(lerp(band.lo, band.hi, intensity));

    RiskResult {
        risk,
        severity,
        waste_pct,
        annualized_waste,
        intensity,
    }
}
