//! Built-in sample datasets
//!
//! These are the fixed tables the dashboards ship with. They are plain
//! constructors so callers can pass them (or their own data) into a
//! `FixtureSource` instead of reading process-wide state.

use crate::models::{
    BudgetAllocation, EconomicIndicator, MunicipalDataset, OutlookDataset, OutlookRecord,
    RevenueExpense, SustainabilityRecord,
};

/// Budget allocation by sector, in millions
pub fn budget_sample() -> Vec<BudgetAllocation> {
    vec![
        BudgetAllocation::new("Education", 150.0),
        BudgetAllocation::new("Healthcare", 120.0),
        BudgetAllocation::new("Infrastructure", 200.0),
        BudgetAllocation::new("Public Safety", 90.0),
        BudgetAllocation::new("Welfare", 80.0),
    ]
}

/// Annual revenue vs expenses
pub fn revenue_expense_sample() -> Vec<RevenueExpense> {
    vec![
        RevenueExpense::new(2021, 600.0, 580.0),
        RevenueExpense::new(2022, 650.0, 660.0),
        RevenueExpense::new(2023, 700.0, 690.0),
    ]
}

/// Key economic indicators as displayed
pub fn indicators_sample() -> Vec<EconomicIndicator> {
    vec![
        EconomicIndicator::new("Unemployment Rate", "4.2%"),
        EconomicIndicator::new("Inflation Rate", "3.1%"),
        EconomicIndicator::new("GDP Growth", "2.5%"),
        EconomicIndicator::new("Debt Ratio", "62%"),
    ]
}

/// Sustainability trend, one row per year
pub fn sustainability_sample() -> Vec<SustainabilityRecord> {
    vec![
        SustainabilityRecord::new(2021, 120000.0, 32.0, 60.0),
        SustainabilityRecord::new(2022, 115000.0, 35.0, 63.0),
        SustainabilityRecord::new(2023, 110000.0, 40.0, 65.0),
    ]
}

/// Everything the municipal dashboard shows
pub fn municipal_sample() -> MunicipalDataset {
    MunicipalDataset {
        budget: budget_sample(),
        revenue_expense: revenue_expense_sample(),
        indicators: indicators_sample(),
        sustainability: sustainability_sample(),
    }
}

/// Simulated climate/fiscal outlook, standing in for a live feed
pub fn outlook_sample() -> OutlookDataset {
    OutlookDataset {
        records: vec![
            OutlookRecord::new(2021, 118000.0, 34.0, 2.1, 72.0),
            OutlookRecord::new(2022, 116500.0, 36.0, 2.4, 68.0),
            OutlookRecord::new(2023, 113000.0, 41.0, 2.9, 64.0),
        ],
    }
}
