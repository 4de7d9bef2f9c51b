//! One-off classification from command-line values

use std::path::Path;

use anyhow::{Context, Result};

use civic_core::models::MetricRow;
use civic_core::{InsightEngine, InsightResult, OutlookRecord, SustainabilityRecord};

use super::load_config;
use crate::cli::ClassifyTarget;

pub fn cmd_classify(config_path: Option<&Path>, target: ClassifyTarget) -> Result<()> {
    let (config, _) = load_config(config_path)?;
    let result = classify_target(&config.engine(), &target)?;

    println!("{}", result.status);
    if !result.triggered.is_empty() {
        tracing::debug!(rules = ?result.triggered, "Matched rules");
    }
    Ok(())
}

/// Validate the flag values and evaluate them against the rules
pub fn classify_target(engine: &InsightEngine, target: &ClassifyTarget) -> Result<InsightResult> {
    match *target {
        ClassifyTarget::Sustainability {
            renewable,
            emissions,
            recycled,
            year,
        } => {
            let row = SustainabilityRecord::new(year, emissions, renewable, recycled);
            row.validate().context("Invalid sustainability values")?;
            Ok(engine.evaluate_sustainability(&row))
        }
        ClassifyTarget::Outlook {
            emissions,
            renewable,
            gdp,
            debt,
            year,
        } => {
            let row = OutlookRecord::new(year, emissions, renewable, gdp, debt);
            row.validate().context("Invalid outlook values")?;
            Ok(engine.evaluate_outlook(&row))
        }
    }
}
