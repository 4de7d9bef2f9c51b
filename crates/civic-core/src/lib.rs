//! Civic Core Library
//!
//! Shared functionality for the Civic municipal dashboard:
//! - Metric data model (budget, revenue, indicators, sustainability, outlook)
//! - Built-in sample datasets and pluggable data sources
//! - Rule-based insight classifiers (first-match and accumulating strategies)
//! - Chart series and dashboard assembly
//! - CSV export of annotated tables
//! - Dashboard configuration with embedded defaults

pub mod charts;
pub mod config;
pub mod dashboard;
pub mod datasets;
pub mod error;
pub mod export;
pub mod insights;
pub mod models;
pub mod source;

/// Test utilities including a mock data-source server
#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use config::{ConfigOrigin, DashboardConfig, DisplayConfig, SourceConfig, SourceKind};
pub use dashboard::{MunicipalDashboard, OutlookDashboard};
pub use error::{Error, Result};
pub use insights::{
    Accumulate, Classifier, FirstMatch, InsightEngine, InsightThresholds, OutlookThresholds, Rule,
    SustainabilityThresholds,
};
pub use models::{
    Annotated, BudgetAllocation, EconomicIndicator, InsightResult, MetricRow, MunicipalDataset,
    OutlookDataset, OutlookRecord, RevenueExpense, SustainabilityRecord, TableRow, Variant,
};
pub use source::{DataSource, FileSource, FixtureSource, HttpSource};
