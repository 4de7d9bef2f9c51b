//! Thresholds and fixed status messages for the insight rules

use serde::{Deserialize, Serialize};

/// Status when a row meets its targets (or nothing is flagged)
pub const ON_TRACK: &str = "On track";
/// Municipal fallback when renewables are too low
pub const NEEDS_IMPROVEMENT: &str = "Needs improvement";
/// Municipal fallback when neither on track nor clearly behind
pub const MODERATE_PROGRESS: &str = "Moderate progress";

pub const HIGH_EMISSIONS_LOW_RENEWABLES: &str =
    "High emissions and low renewables: invest in clean energy.";
pub const DEBT_RATIO_HIGH: &str = "Debt ratio above safe threshold — consider fiscal reform.";
pub const SLOW_GDP_GROWTH: &str = "Slow GDP growth — review economic stimulus options.";

/// Joins accumulated outlook messages
pub const MESSAGE_SEPARATOR: &str = " | ";

/// Thresholds for the municipal sustainability table
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SustainabilityThresholds {
    /// Inclusive lower bound on renewable % for "On track"
    pub on_track_min_renewable_pct: f64,
    /// Exclusive upper bound on emissions for "On track"
    pub on_track_max_emissions_tons: f64,
    /// Renewable % strictly below this is "Needs improvement"
    pub needs_improvement_below_renewable_pct: f64,
}

impl Default for SustainabilityThresholds {
    fn default() -> Self {
        Self {
            on_track_min_renewable_pct: 40.0,
            on_track_max_emissions_tons: 115000.0,
            needs_improvement_below_renewable_pct: 30.0,
        }
    }
}

/// Thresholds for the outlook table; every bound is exclusive
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutlookThresholds {
    pub high_emissions_above_tons: f64,
    pub low_renewables_below_pct: f64,
    pub debt_ratio_above_pct: f64,
    pub gdp_growth_below_pct: f64,
}

impl Default for OutlookThresholds {
    fn default() -> Self {
        Self {
            high_emissions_above_tons: 116000.0,
            low_renewables_below_pct: 35.0,
            debt_ratio_above_pct: 70.0,
            gdp_growth_below_pct: 2.5,
        }
    }
}

/// All thresholds used by the insight engine
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct InsightThresholds {
    pub sustainability: SustainabilityThresholds,
    pub outlook: OutlookThresholds,
}
