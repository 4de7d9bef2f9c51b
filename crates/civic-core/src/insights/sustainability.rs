//! Municipal sustainability classifier (first match wins)
//!
//! 1. renewables >= on-track minimum AND emissions < on-track maximum → "On track"
//! 2. renewables < needs-improvement bound → "Needs improvement"
//! 3. otherwise → "Moderate progress"
//!
//! High renewables with high emissions lands in "Moderate progress"; the
//! rule order is kept literally.

use crate::models::SustainabilityRecord;

use super::rules::{FirstMatch, Rule};
use super::types::{SustainabilityThresholds, MODERATE_PROGRESS, NEEDS_IMPROVEMENT, ON_TRACK};

/// Build the sustainability classifier for a threshold set
pub fn sustainability_classifier(
    thresholds: &SustainabilityThresholds,
) -> FirstMatch<SustainabilityRecord> {
    let min_renewable = thresholds.on_track_min_renewable_pct;
    let max_emissions = thresholds.on_track_max_emissions_tons;
    let low_renewable = thresholds.needs_improvement_below_renewable_pct;

    FirstMatch::new(
        vec![
            Rule::new("on_track", ON_TRACK, move |row: &SustainabilityRecord| {
                row.renewable_energy_pct >= min_renewable
                    && row.carbon_emissions_tons < max_emissions
            }),
            Rule::new(
                "needs_improvement",
                NEEDS_IMPROVEMENT,
                move |row: &SustainabilityRecord| row.renewable_energy_pct < low_renewable,
            ),
        ],
        MODERATE_PROGRESS,
    )
}
