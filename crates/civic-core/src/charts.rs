//! Chart series for the dashboards
//!
//! Charts are described as plain data; the server draws them as SVG and the
//! JSON API hands them to any other front end unchanged.

use serde::{Deserialize, Serialize};

use crate::models::{BudgetAllocation, OutlookRecord, RevenueExpense, SustainabilityRecord};

/// How a chart should be drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartKind {
    /// Bars grouped per category, one bar per series
    GroupedBar,
    /// One line per series across the categories
    Line,
}

/// One named series of values, aligned with the chart's categories
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Series {
    pub name: String,
    pub values: Vec<f64>,
}

/// A chart with categories along one axis and one or more series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chart {
    pub kind: ChartKind,
    pub title: String,
    pub categories: Vec<String>,
    pub series: Vec<Series>,
}

impl Chart {
    /// Largest value across all series (0 for an empty chart)
    pub fn max_value(&self) -> f64 {
        self.series
            .iter()
            .flat_map(|s| s.values.iter().copied())
            .fold(0.0, f64::max)
    }

    /// Smallest value across all series (0 when nothing is negative)
    pub fn min_value(&self) -> f64 {
        self.series
            .iter()
            .flat_map(|s| s.values.iter().copied())
            .fold(0.0, f64::min)
    }
}

/// One slice of a pie chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Slice {
    pub label: String,
    pub value: f64,
    /// Percentage of the total, 0 when the total is 0
    pub share_pct: f64,
}

/// Revenue and expenses per year as grouped bars
pub fn revenue_expense_chart(rows: &[RevenueExpense]) -> Chart {
    Chart {
        kind: ChartKind::GroupedBar,
        title: "Revenue and Expenses Over Years".to_string(),
        categories: rows.iter().map(|r| r.year.to_string()).collect(),
        series: vec![
            Series {
                name: "Revenue".to_string(),
                values: rows.iter().map(|r| r.revenue).collect(),
            },
            Series {
                name: "Expenses".to_string(),
                values: rows.iter().map(|r| r.expenses).collect(),
            },
        ],
    }
}

/// Budget share per sector
pub fn budget_slices(rows: &[BudgetAllocation]) -> Vec<Slice> {
    let total: f64 = rows.iter().map(|r| r.allocation_millions).sum();
    rows.iter()
        .map(|r| Slice {
            label: r.sector.clone(),
            value: r.allocation_millions,
            share_pct: if total == 0.0 {
                0.0
            } else {
                r.allocation_millions / total * 100.0
            },
        })
        .collect()
}

/// Emissions and renewable share per year
pub fn sustainability_chart(rows: &[SustainabilityRecord]) -> Chart {
    Chart {
        kind: ChartKind::Line,
        title: "Carbon Emissions and Renewable Energy Trends".to_string(),
        categories: rows.iter().map(|r| r.year.to_string()).collect(),
        series: vec![
            Series {
                name: "Carbon Emissions (tons)".to_string(),
                values: rows.iter().map(|r| r.carbon_emissions_tons).collect(),
            },
            Series {
                name: "Renewable Energy %".to_string(),
                values: rows.iter().map(|r| r.renewable_energy_pct).collect(),
            },
        ],
    }
}

/// Emissions and renewable share per year for the outlook
pub fn outlook_emissions_chart(rows: &[OutlookRecord]) -> Chart {
    Chart {
        kind: ChartKind::Line,
        title: "Carbon Emissions vs Renewable Energy".to_string(),
        categories: rows.iter().map(|r| r.year.to_string()).collect(),
        series: vec![
            Series {
                name: "Carbon Emissions (tons)".to_string(),
                values: rows.iter().map(|r| r.carbon_emissions_tons).collect(),
            },
            Series {
                name: "Renewable Energy %".to_string(),
                values: rows.iter().map(|r| r.renewable_energy_pct).collect(),
            },
        ],
    }
}

/// GDP growth and debt ratio per year
pub fn outlook_economy_chart(rows: &[OutlookRecord]) -> Chart {
    Chart {
        kind: ChartKind::Line,
        title: "GDP Growth and Debt Ratio".to_string(),
        categories: rows.iter().map(|r| r.year.to_string()).collect(),
        series: vec![
            Series {
                name: "GDP Growth %".to_string(),
                values: rows.iter().map(|r| r.gdp_growth_pct).collect(),
            },
            Series {
                name: "Debt Ratio %".to_string(),
                values: rows.iter().map(|r| r.debt_ratio_pct).collect(),
            },
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::datasets::{budget_sample, outlook_sample, revenue_expense_sample};

    #[test]
    fn test_revenue_expense_chart() {
        let chart = revenue_expense_chart(&revenue_expense_sample());
        assert_eq!(chart.kind, ChartKind::GroupedBar);
        assert_eq!(chart.categories, vec!["2021", "2022", "2023"]);
        assert_eq!(chart.series[0].values, vec![600.0, 650.0, 700.0]);
        assert_eq!(chart.series[1].values, vec![580.0, 660.0, 690.0]);
        assert_eq!(chart.max_value(), 700.0);
    }

    #[test]
    fn test_budget_slices_sum_to_100() {
        let slices = budget_slices(&budget_sample());
        let total: f64 = slices.iter().map(|s| s.share_pct).sum();
        assert!((total - 100.0).abs() < 1e-9);
        assert_eq!(slices[2].label, "Infrastructure");
        assert!((slices[2].share_pct - 31.25).abs() < 1e-9);
    }

    #[test]
    fn test_budget_slices_zero_total() {
        let slices = budget_slices(&[BudgetAllocation::new("Parks", 0.0)]);
        assert_eq!(slices[0].share_pct, 0.0);
        assert!(budget_slices(&[]).is_empty());
    }

    #[test]
    fn test_outlook_charts() {
        let records = outlook_sample().records;
        let economy = outlook_economy_chart(&records);
        assert_eq!(economy.series[0].name, "GDP Growth %");
        assert_eq!(economy.series[1].values, vec![72.0, 68.0, 64.0]);

        let emissions = outlook_emissions_chart(&records);
        assert_eq!(emissions.max_value(), 118000.0);
    }

    #[test]
    fn test_empty_chart_max_value() {
        let chart = sustainability_chart(&[]);
        assert!(chart.categories.is_empty());
        assert_eq!(chart.max_value(), 0.0);
        assert_eq!(chart.min_value(), 0.0);
    }

    #[test]
    fn test_min_value_with_negative_growth() {
        let records = vec![
            OutlookRecord::new(2021, 118000.0, 34.0, 2.1, 72.0),
            OutlookRecord::new(2022, 116500.0, 36.0, -1.5, 68.0),
        ];
        let economy = outlook_economy_chart(&records);
        assert_eq!(economy.min_value(), -1.5);
        assert_eq!(outlook_economy_chart(&outlook_sample().records).min_value(), 0.0);
    }
}
