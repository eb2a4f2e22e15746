//! Impact heat map: places a meeting on a quality x cost grid.
//!
//! The cost axis is scaled relative to the meeting itself, so the divider
//! sits at 1.25x the cost (bounded by the configured thresholds) and the
//! axis spans twice that.

use crate::numeric::{clamp, clamp_unit};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeatMapConfig {
    pub quality_threshold: f64,
    pub min_cost_threshold: f64,
    pub max_cost_threshold: f64,
}

impl Default for HeatMapConfig {
    fn default() -> Self {
        Self {
            quality_threshold: 70.0,
            min_cost_threshold: 1000.0,
            max_cost_threshold: 5000.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Quadrant {
    HighCostLowQuality,
    HighCostHighQuality,
    LowCostLowQuality,
    LowCostHighQuality,
}

impl Quadrant {
    pub fn label(&self) -> &'static str {
        match self {
            Quadrant::HighCostLowQuality => "High cost, low quality",
            Quadrant::HighCostHighQuality => "High cost, high quality",
            Quadrant::LowCostLowQuality => "Low cost, low quality",
            Quadrant::LowCostHighQuality => "Low cost, high quality",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HeatMapPoint {
    /// Quality position in [0, 1], left to right
    pub x: f64,
    /// Cost position in [0, 1], bottom to top
    pub y: f64,
    pub cost_threshold: f64,
    pub cost_cap: f64,
    pub quadrant: Quadrant,
}

/// Divider on the cost axis for a meeting of `cost`.
pub fn cost_threshold(cost: f64, config: &HeatMapConfig) -> f64 {
    clamp(
        cost * 1.25,
        config.min_cost_threshold,
        config.max_cost_threshold.max(config.min_cost_threshold),
    )
}

pub fn place(score: f64, cost: f64, config: &HeatMapConfig) -> HeatMapPoint {
    let threshold = cost_threshold(cost, config);
    let cost_cap = threshold * 2.0;
    let y = if cost_cap > 0.0 {
        clamp_unit(cost / cost_cap)
    } else {
        0.0
    };

    let high_cost = cost >= threshold;
    let high_quality = score >= config.quality_threshold;
    let quadrant = match (high_cost, high_quality) {
        (true, false) => Quadrant::HighCostLowQuality,
        (true, true) => Quadrant::HighCostHighQuality,
        (false, false) => Quadrant::LowCostLowQuality,
        (false, true) => Quadrant::LowCostHighQuality,
    };

    HeatMapPoint {
        x: clamp_unit(score / 100.0),
        y,
        cost_threshold: threshold,
        cost_cap,
        quadrant,
    }
}
