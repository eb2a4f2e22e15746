use serde::{Deserialize, Serialize};

use crate::heatmap::HeatMapConfig;
use crate::inputs::{Currency, InputLimits, Recurrence};
use crate::messaging::MessagingThresholds;
use crate::risk::DEFAULT_MAX_ANNUAL_WASTE;

/// Root configuration structure for meetiq
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct MeetiqConfig {
    /// Risk engine settings
    #[serde(default)]
    pub risk: RiskConfig,

    /// Message decision table thresholds
    #[serde(default)]
    pub messaging: MessagingThresholds,

    /// Impact heat map thresholds
    #[serde(default)]
    pub heatmap: HeatMapConfig,

    /// Accepted input ranges
    #[serde(default)]
    pub limits: InputLimits,

    /// Values used when the command line leaves them out
    #[serde(default)]
    pub defaults: DefaultsConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RiskConfig {
    /// Annual waste at which intensity saturates
    #[serde(default = "default_max_annual_waste")]
    pub max_annual_waste: f64,
}

impl Default for RiskConfig {
    fn default() -> Self {
        Self {
            max_annual_waste: default_max_annual_waste(),
        }
    }
}

impl RiskConfig {
    pub fn validate(&self) -> Result<(), String> {
        if self.max_annual_waste.is_finite() && self.max_annual_waste > 0.0 {
            Ok(())
        } else {
            Err(format!(
                "max_annual_waste must be a positive number, got {}",
                self.max_annual_waste
            ))
        }
    }
}

pub fn default_max_annual_waste() -> f64 {
    DEFAULT_MAX_ANNUAL_WASTE
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct DefaultsConfig {
    pub currency: Currency,
    pub recurrence: Recurrence,
}
