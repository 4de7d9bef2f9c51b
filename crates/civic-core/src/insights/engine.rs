//! Insight Engine - owns the classifiers for one threshold set

use crate::models::{Annotated, InsightResult, OutlookRecord, SustainabilityRecord};

use super::outlook::outlook_classifier;
use super::rules::{Accumulate, Classifier, FirstMatch};
use super::sustainability::sustainability_classifier;
use super::types::{InsightThresholds, ON_TRACK};

/// Annotates dashboard tables with insight text
///
/// Holds no mutable state, so one engine can be shared across requests.
pub struct InsightEngine {
    thresholds: InsightThresholds,
    sustainability: FirstMatch<SustainabilityRecord>,
    outlook: Accumulate<OutlookRecord>,
}

impl Default for InsightEngine {
    fn default() -> Self {
        Self::new(InsightThresholds::default())
    }
}

impl InsightEngine {
    /// Create an engine with the given thresholds
    pub fn new(thresholds: InsightThresholds) -> Self {
        Self {
            sustainability: sustainability_classifier(&thresholds.sustainability),
            outlook: outlook_classifier(&thresholds.outlook),
            thresholds,
        }
    }

    pub fn thresholds(&self) -> &InsightThresholds {
        &self.thresholds
    }

    pub fn sustainability(&self) -> &FirstMatch<SustainabilityRecord> {
        &self.sustainability
    }

    pub fn outlook(&self) -> &Accumulate<OutlookRecord> {
        &self.outlook
    }

    pub fn classify_sustainability(&self, row: &SustainabilityRecord) -> String {
        self.sustainability.classify(row)
    }

    pub fn evaluate_sustainability(&self, row: &SustainabilityRecord) -> InsightResult {
        self.sustainability.evaluate(row)
    }

    pub fn classify_outlook(&self, row: &OutlookRecord) -> String {
        self.outlook.classify(row)
    }

    pub fn evaluate_outlook(&self, row: &OutlookRecord) -> InsightResult {
        self.outlook.evaluate(row)
    }

    /// Annotate the sustainability table
    pub fn annotate_sustainability(
        &self,
        rows: &[SustainabilityRecord],
    ) -> Vec<Annotated<SustainabilityRecord>> {
        let annotated = self.sustainability.annotate(rows);
        log_pass("sustainability", &annotated);
        annotated
    }

    /// Annotate the outlook table
    pub fn annotate_outlook(&self, rows: &[OutlookRecord]) -> Vec<Annotated<OutlookRecord>> {
        let annotated = self.outlook.annotate(rows);
        log_pass("outlook", &annotated);
        annotated
    }
}

fn log_pass<R>(table: &'static str, annotated: &[Annotated<R>]) {
    let off_track = annotated.iter().filter(|a| a.insight != ON_TRACK).count();
    tracing::debug!(
        table,
        rows = annotated.len(),
        off_track,
        "Insight annotation complete"
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::datasets::{outlook_sample, sustainability_sample};
    use crate::insights::types::{DEBT_RATIO_HIGH, SLOW_GDP_GROWTH};
    use crate::insights::OutlookThresholds;

    #[test]
    fn test_engine_annotates_sustainability_sample() {
        let engine = InsightEngine::default();
        let annotated = engine.annotate_sustainability(&sustainability_sample());

        let insights: Vec<&str> = annotated.iter().map(|a| a.insight.as_str()).collect();
        assert_eq!(
            insights,
            vec!["Moderate progress", "Moderate progress", "On track"]
        );
        let years: Vec<i32> = annotated.iter().map(|a| a.row.year).collect();
        assert_eq!(years, vec![2021, 2022, 2023]);
    }

    #[test]
    fn test_engine_annotates_outlook_sample() {
        let engine = InsightEngine::default();
        let annotated = engine.annotate_outlook(&outlook_sample().records);

        assert_eq!(annotated.len(), 3);
        assert_eq!(annotated[0].insight.matches(" | ").count(), 2);
        assert_eq!(annotated[1].insight, SLOW_GDP_GROWTH);
        assert_eq!(annotated[2].insight, "On track");
    }

    #[test]
    fn test_engine_uses_configured_thresholds() {
        let thresholds = InsightThresholds {
            outlook: OutlookThresholds {
                debt_ratio_above_pct: 60.0,
                gdp_growth_below_pct: 0.0,
                ..Default::default()
            },
            ..Default::default()
        };
        let engine = InsightEngine::new(thresholds);
        let row = OutlookRecord::new(2023, 113000.0, 41.0, 2.9, 64.0);

        assert_eq!(engine.classify_outlook(&row), DEBT_RATIO_HIGH);
        assert_eq!(engine.thresholds().outlook.debt_ratio_above_pct, 60.0);
    }

    #[test]
    fn test_evaluate_reports_triggered_rules() {
        let engine = InsightEngine::default();
        let row = SustainabilityRecord::new(2024, 200000.0, 20.0, 10.0);
        let result = engine.evaluate_sustainability(&row);
        assert_eq!(result.status, "Needs improvement");
        assert_eq!(result.triggered, vec!["needs_improvement"]);

        let outlook = engine.evaluate_outlook(&OutlookRecord::new(2024, 0.0, 0.0, 5.0, 0.0));
        assert_eq!(outlook.status, "On track");
        assert!(outlook.triggered.is_empty());
    }
}
