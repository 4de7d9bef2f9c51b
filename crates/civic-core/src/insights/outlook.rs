//! Outlook classifier (every matching rule contributes)
//!
//! Rules, in output order:
//! 1. emissions > high-emissions bound AND renewables < low-renewables bound
//! 2. debt ratio > debt bound
//! 3. GDP growth < growth bound
//!
//! No rule fired → "On track"; otherwise the messages joined with " | ".

use crate::models::OutlookRecord;

use super::rules::{Accumulate, Rule};
use super::types::{
    OutlookThresholds, DEBT_RATIO_HIGH, HIGH_EMISSIONS_LOW_RENEWABLES, MESSAGE_SEPARATOR,
    ON_TRACK, SLOW_GDP_GROWTH,
};

/// Build the outlook classifier for a threshold set
pub fn outlook_classifier(thresholds: &OutlookThresholds) -> Accumulate<OutlookRecord> {
    let OutlookThresholds {
        high_emissions_above_tons,
        low_renewables_below_pct,
        debt_ratio_above_pct,
        gdp_growth_below_pct,
    } = *thresholds;

    Accumulate::new(
        vec![
            Rule::new(
                "high_emissions_low_renewables",
                HIGH_EMISSIONS_LOW_RENEWABLES,
                move |row: &OutlookRecord| {
                    row.carbon_emissions_tons > high_emissions_above_tons
                        && row.renewable_energy_pct < low_renewables_below_pct
                },
            ),
            Rule::new(
                "debt_ratio_high",
                DEBT_RATIO_HIGH,
                move |row: &OutlookRecord| row.debt_ratio_pct > debt_ratio_above_pct,
            ),
            Rule::new(
                "slow_gdp_growth",
                SLOW_GDP_GROWTH,
                move |row: &OutlookRecord| row.gdp_growth_pct < gdp_growth_below_pct,
            ),
        ],
        ON_TRACK,
        MESSAGE_SEPARATOR,
    )
}
