//! Dashboard assembly
//!
//! Combines a dataset, its chart series and the insight column into the
//! payload each dashboard renders. Built fresh on every request.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::charts::{
    budget_slices, outlook_economy_chart, outlook_emissions_chart, revenue_expense_chart,
    sustainability_chart, Chart, Slice,
};
use crate::error::Result;
use crate::insights::InsightEngine;
use crate::models::{
    Annotated, BudgetAllocation, EconomicIndicator, MunicipalDataset, OutlookDataset,
    OutlookRecord, RevenueExpense, SustainabilityRecord,
};
use crate::source::DataSource;

/// Everything shown on the municipal dashboard
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MunicipalDashboard {
    pub title: String,
    pub generated_at: DateTime<Utc>,
    pub revenue_expense: Vec<RevenueExpense>,
    pub revenue_expense_chart: Chart,
    pub budget: Vec<BudgetAllocation>,
    pub budget_chart: Vec<Slice>,
    pub indicators: Vec<EconomicIndicator>,
    pub sustainability_chart: Chart,
    pub sustainability: Vec<Annotated<SustainabilityRecord>>,
}

impl MunicipalDashboard {
    pub fn build(
        title: impl Into<String>,
        dataset: MunicipalDataset,
        engine: &InsightEngine,
    ) -> Self {
        Self {
            title: title.into(),
            generated_at: Utc::now(),
            revenue_expense_chart: revenue_expense_chart(&dataset.revenue_expense),
            budget_chart: budget_slices(&dataset.budget),
            sustainability_chart: sustainability_chart(&dataset.sustainability),
            sustainability: engine.annotate_sustainability(&dataset.sustainability),
            revenue_expense: dataset.revenue_expense,
            budget: dataset.budget,
            indicators: dataset.indicators,
        }
    }

    /// Fetch from a source and build
    pub async fn load(
        source: &dyn DataSource,
        engine: &InsightEngine,
        title: impl Into<String>,
    ) -> Result<Self> {
        let dataset = source.fetch_municipal().await?;
        Ok(Self::build(title, dataset, engine))
    }
}

/// Everything shown on the outlook dashboard
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutlookDashboard {
    pub title: String,
    pub generated_at: DateTime<Utc>,
    pub emissions_chart: Chart,
    pub economy_chart: Chart,
    pub records: Vec<Annotated<OutlookRecord>>,
}

impl OutlookDashboard {
    pub fn build(title: impl Into<String>, dataset: OutlookDataset, engine: &InsightEngine) -> Self {
        Self {
            title: title.into(),
            generated_at: Utc::now(),
            emissions_chart: outlook_emissions_chart(&dataset.records),
            economy_chart: outlook_economy_chart(&dataset.records),
            records: engine.annotate_outlook(&dataset.records),
        }
    }

    /// Fetch from a source and build
    pub async fn load(
        source: &dyn DataSource,
        engine: &InsightEngine,
        title: impl Into<String>,
    ) -> Result<Self> {
        let dataset = source.fetch_outlook().await?;
        Ok(Self::build(title, dataset, engine))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::datasets::{municipal_sample, outlook_sample};
    use crate::source::FixtureSource;

    #[test]
    fn test_build_municipal_dashboard() {
        let engine = InsightEngine::default();
        let dashboard = MunicipalDashboard::build("Town", municipal_sample(), &engine);

        assert_eq!(dashboard.title, "Town");
        assert_eq!(dashboard.budget.len(), 5);
        assert_eq!(dashboard.budget_chart.len(), 5);
        assert_eq!(dashboard.indicators.len(), 4);
        assert_eq!(dashboard.revenue_expense_chart.categories.len(), 3);
        assert_eq!(dashboard.sustainability[2].insight, "On track");
    }

    #[test]
    fn test_build_outlook_dashboard() {
        let engine = InsightEngine::default();
        let dashboard = OutlookDashboard::build("Outlook", outlook_sample(), &engine);

        assert_eq!(dashboard.records.len(), 3);
        assert_eq!(dashboard.records[2].insight, "On track");
        assert_eq!(dashboard.economy_chart.series.len(), 2);
    }

    #[tokio::test]
    async fn test_load_from_source() {
        let engine = InsightEngine::default();
        let source = FixtureSource::sample();

        let municipal = MunicipalDashboard::load(&source, &engine, "Town")
            .await
            .unwrap();
        assert_eq!(municipal.sustainability.len(), 3);

        let outlook = OutlookDashboard::load(&source, &engine, "Outlook")
            .await
            .unwrap();
        let years: Vec<i32> = outlook.records.iter().map(|r| r.row.year).collect();
        assert_eq!(years, vec![2021, 2022, 2023]);
    }

    #[test]
    fn test_dashboard_json_shape() {
        let engine = InsightEngine::default();
        let dashboard = MunicipalDashboard::build("Town", municipal_sample(), &engine);
        let json = serde_json::to_value(&dashboard).unwrap();

        assert_eq!(json["sustainability"][0]["insight"], "Moderate progress");
        assert_eq!(json["revenue_expense_chart"]["kind"], "grouped_bar");
        assert_eq!(json["budget_chart"][0]["label"], "Education");
    }
}
