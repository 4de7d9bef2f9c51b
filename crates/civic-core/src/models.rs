//! Domain models for Civic

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Which of the two dashboards a dataset or classifier belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    /// Budget, revenue, indicators and sustainability trend
    #[default]
    Municipal,
    /// Combined emissions, renewables, GDP and debt outlook
    Outlook,
}

impl Variant {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Municipal => "municipal",
            Self::Outlook => "outlook",
        }
    }
}

impl std::str::FromStr for Variant {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "municipal" | "sustainability" => Ok(Self::Municipal),
            "outlook" => Ok(Self::Outlook),
            _ => Err(format!("Unknown dashboard variant: {}", s)),
        }
    }
}

impl std::fmt::Display for Variant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One observation period of a metric table
///
/// Rows are immutable once built; a dataset is an ordered sequence of rows,
/// one per period. `validate` is the construction boundary: anything that
/// passes it can be classified without further checks.
pub trait MetricRow {
    /// The period (year) this row describes
    fn period(&self) -> i32;

    /// Reject rows with non-finite numeric fields
    fn validate(&self) -> Result<()>;
}

/// A table row that knows how to present itself as text cells
///
/// Used by CSV export, terminal tables and the HTML dashboards.
pub trait TableRow {
    /// Column headings, in cell order
    fn headers() -> Vec<&'static str>;

    /// Cell values formatted for display
    fn cells(&self) -> Vec<String>;
}

/// Format a metric value without a trailing ".0" for whole numbers
pub fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{:.0}", value)
    } else {
        format!("{}", value)
    }
}

fn ensure_finite(field: &str, value: f64, period: i32) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(Error::InvalidData(format!(
            "{} for {} must be a finite number, got {}",
            field, period, value
        )))
    }
}

fn ensure_label(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        Err(Error::InvalidData(format!("{} must not be empty", field)))
    } else {
        Ok(())
    }
}

/// Budget allocated to one sector
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetAllocation {
    pub sector: String,
    /// Allocation in millions
    pub allocation_millions: f64,
}

impl BudgetAllocation {
    pub fn new(sector: impl Into<String>, allocation_millions: f64) -> Self {
        Self {
            sector: sector.into(),
            allocation_millions,
        }
    }

    pub fn validate(&self) -> Result<()> {
        ensure_label("sector", &self.sector)?;
        if !self.allocation_millions.is_finite() {
            return Err(Error::InvalidData(format!(
                "allocation for {} must be a finite number, got {}",
                self.sector, self.allocation_millions
            )));
        }
        Ok(())
    }
}

impl TableRow for BudgetAllocation {
    fn headers() -> Vec<&'static str> {
        vec!["Sector", "Allocation (in Millions)"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.sector.clone(),
            format_number(self.allocation_millions),
        ]
    }
}

/// Annual revenue and expenses
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RevenueExpense {
    pub year: i32,
    pub revenue: f64,
    pub expenses: f64,
}

impl RevenueExpense {
    pub fn new(year: i32, revenue: f64, expenses: f64) -> Self {
        Self {
            year,
            revenue,
            expenses,
        }
    }

    /// Revenue minus expenses (negative means a deficit)
    pub fn balance(&self) -> f64 {
        self.revenue - self.expenses
    }
}

impl MetricRow for RevenueExpense {
    fn period(&self) -> i32 {
        self.year
    }

    fn validate(&self) -> Result<()> {
        ensure_finite("revenue", self.revenue, self.year)?;
        ensure_finite("expenses", self.expenses, self.year)
    }
}

impl TableRow for RevenueExpense {
    fn headers() -> Vec<&'static str> {
        vec!["Year", "Revenue", "Expenses"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.year.to_string(),
            format_number(self.revenue),
            format_number(self.expenses),
        ]
    }
}

/// A headline economic indicator, kept as display text (e.g. "4.2%")
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EconomicIndicator {
    pub indicator: String,
    pub value: String,
}

impl EconomicIndicator {
    pub fn new(indicator: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            indicator: indicator.into(),
            value: value.into(),
        }
    }

    pub fn validate(&self) -> Result<()> {
        ensure_label("indicator", &self.indicator)?;
        ensure_label("indicator value", &self.value)
    }
}

impl TableRow for EconomicIndicator {
    fn headers() -> Vec<&'static str> {
        vec!["Indicator", "Value"]
    }

    fn cells(&self) -> Vec<String> {
        vec![self.indicator.clone(), self.value.clone()]
    }
}

/// Sustainability trend for one year (municipal dashboard)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SustainabilityRecord {
    pub year: i32,
    pub carbon_emissions_tons: f64,
    pub renewable_energy_pct: f64,
    pub waste_recycled_pct: f64,
}

impl SustainabilityRecord {
    pub fn new(
        year: i32,
        carbon_emissions_tons: f64,
        renewable_energy_pct: f64,
        waste_recycled_pct: f64,
    ) -> Self {
        Self {
            year,
            carbon_emissions_tons,
            renewable_energy_pct,
            waste_recycled_pct,
        }
    }
}

impl MetricRow for SustainabilityRecord {
    fn period(&self) -> i32 {
        self.year
    }

    fn validate(&self) -> Result<()> {
        ensure_finite("carbon emissions", self.carbon_emissions_tons, self.year)?;
        ensure_finite("renewable energy %", self.renewable_energy_pct, self.year)?;
        ensure_finite("waste recycled %", self.waste_recycled_pct, self.year)
    }
}

impl TableRow for SustainabilityRecord {
    fn headers() -> Vec<&'static str> {
        vec![
            "Year",
            "Carbon Emissions (tons)",
            "Renewable Energy %",
            "Waste Recycled %",
        ]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.year.to_string(),
            format_number(self.carbon_emissions_tons),
            format_number(self.renewable_energy_pct),
            format_number(self.waste_recycled_pct),
        ]
    }
}

/// Climate and fiscal outlook for one year (outlook dashboard)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutlookRecord {
    pub year: i32,
    pub carbon_emissions_tons: f64,
    pub renewable_energy_pct: f64,
    pub gdp_growth_pct: f64,
    pub debt_ratio_pct: f64,
}

impl OutlookRecord {
    pub fn new(
        year: i32,
        carbon_emissions_tons: f64,
        renewable_energy_pct: f64,
        gdp_growth_pct: f64,
        debt_ratio_pct: f64,
    ) -> Self {
        Self {
            year,
            carbon_emissions_tons,
            renewable_energy_pct,
            gdp_growth_pct,
            debt_ratio_pct,
        }
    }
}

impl MetricRow for OutlookRecord {
    fn period(&self) -> i32 {
        self.year
    }

    fn validate(&self) -> Result<()> {
        ensure_finite("carbon emissions", self.carbon_emissions_tons, self.year)?;
        ensure_finite("renewable energy %", self.renewable_energy_pct, self.year)?;
        ensure_finite("GDP growth %", self.gdp_growth_pct, self.year)?;
        ensure_finite("debt ratio %", self.debt_ratio_pct, self.year)
    }
}

impl TableRow for OutlookRecord {
    fn headers() -> Vec<&'static str> {
        vec![
            "Year",
            "Carbon Emissions (tons)",
            "Renewable Energy %",
            "GDP Growth %",
            "Debt Ratio %",
        ]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.year.to_string(),
            format_number(self.carbon_emissions_tons),
            format_number(self.renewable_energy_pct),
            format_number(self.gdp_growth_pct),
            format_number(self.debt_ratio_pct),
        ]
    }
}

/// All tables shown on the municipal dashboard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MunicipalDataset {
    pub budget: Vec<BudgetAllocation>,
    pub revenue_expense: Vec<RevenueExpense>,
    pub indicators: Vec<EconomicIndicator>,
    pub sustainability: Vec<SustainabilityRecord>,
}

impl MunicipalDataset {
    /// Validate every row; the first bad row wins
    pub fn validate(&self) -> Result<()> {
        for row in &self.budget {
            row.validate()?;
        }
        for row in &self.revenue_expense {
            row.validate()?;
        }
        for row in &self.indicators {
            row.validate()?;
        }
        for row in &self.sustainability {
            row.validate()?;
        }
        Ok(())
    }
}

/// Rows shown on the outlook dashboard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutlookDataset {
    pub records: Vec<OutlookRecord>,
}

impl OutlookDataset {
    pub fn validate(&self) -> Result<()> {
        for row in &self.records {
            row.validate()?;
        }
        Ok(())
    }
}

/// Outcome of classifying one row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InsightResult {
    /// Status text shown in the insight column
    pub status: String,
    /// Keys of the rules that produced the status, in evaluation order.
    /// Empty when the status is a sentinel or fallback.
    pub triggered: Vec<String>,
}

/// A row plus its derived insight column
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Annotated<R> {
    #[serde(flatten)]
    pub row: R,
    pub insight: String,
}

impl<R: TableRow> TableRow for Annotated<R> {
    fn headers() -> Vec<&'static str> {
        let mut headers = R::headers();
        headers.push("AI Insight");
        headers
    }

    fn cells(&self) -> Vec<String> {
        let mut cells = self.row.cells();
        cells.push(self.insight.clone());
        cells
    }
}
