//! Dashboard configuration
//!
//! Titles, insight thresholds and the data source come from TOML.
//!
//! ## Configuration Resolution
//!
//! 1. An explicit path (`--config`), which must exist
//! 2. Override in data dir (~/.local/share/civic/config/dashboard.toml)
//! 3. Embedded defaults (compiled into binary)
//!
//! Keys missing from a file keep their default values.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::insights::{InsightEngine, InsightThresholds};
use crate::source::{DataSource, FileSource, FixtureSource, HttpSource};

/// Embedded default config (compiled into binary)
const DEFAULT_CONFIG: &str = include_str!("../../../config/dashboard.toml");

/// Which data source implementation to use
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    /// Built-in sample datasets
    #[default]
    Fixture,
    /// JSON document on disk
    File,
    /// JSON over HTTP
    Http,
}

impl SourceKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Fixture => "fixture",
            Self::File => "file",
            Self::Http => "http",
        }
    }
}

impl std::str::FromStr for SourceKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "fixture" | "sample" => Ok(Self::Fixture),
            "file" => Ok(Self::File),
            "http" => Ok(Self::Http),
            _ => Err(format!("Unknown data source: {}", s)),
        }
    }
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// `[source]` section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceConfig {
    pub kind: SourceKind,
    /// JSON document for `kind = "file"`
    pub path: Option<PathBuf>,
    /// Base URL for `kind = "http"`
    pub url: Option<String>,
    pub timeout_secs: u64,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            kind: SourceKind::Fixture,
            path: None,
            url: None,
            timeout_secs: 10,
        }
    }
}

impl SourceConfig {
    /// Instantiate the configured data source
    pub fn build(&self) -> Result<Arc<dyn DataSource>> {
        match self.kind {
            SourceKind::Fixture => Ok(Arc::new(FixtureSource::sample())),
            SourceKind::File => {
                let path = self.path.as_ref().ok_or_else(|| {
                    Error::Config("source.path is required for a file source".to_string())
                })?;
                Ok(Arc::new(FileSource::new(path)))
            }
            SourceKind::Http => {
                let url = self.url.as_deref().ok_or_else(|| {
                    Error::Config("source.url is required for an http source".to_string())
                })?;
                Ok(Arc::new(HttpSource::with_timeout(
                    url,
                    Duration::from_secs(self.timeout_secs),
                )))
            }
        }
    }
}

/// `[dashboard]` section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub title: String,
    pub outlook_title: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            title: "Municipal Economic Dashboard".to_string(),
            outlook_title: "Municipal Climate & Fiscal Outlook".to_string(),
        }
    }
}

/// Full dashboard configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct DashboardConfig {
    pub dashboard: DisplayConfig,
    pub thresholds: InsightThresholds,
    pub source: SourceConfig,
}

/// Where the effective configuration came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigOrigin {
    Embedded,
    File(PathBuf),
}

impl fmt::Display for ConfigOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Embedded => write!(f, "embedded defaults"),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

impl DashboardConfig {
    /// Load configuration (explicit path, then override, then embedded)
    pub fn load(explicit: Option<&Path>) -> Result<(Self, ConfigOrigin)> {
        if let Some(path) = explicit {
            return Ok((read_config(path)?, ConfigOrigin::File(path.to_path_buf())));
        }

        if let Some(path) = default_config_path() {
            if path.exists() {
                let config = read_config(&path)?;
                return Ok((config, ConfigOrigin::File(path)));
            }
        }

        Ok((Self::parse(DEFAULT_CONFIG)?, ConfigOrigin::Embedded))
    }

    /// Parse config from TOML content
    pub fn parse(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)
            .map_err(|e| Error::Config(format!("Invalid config TOML: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Thresholds must be finite so every comparison is meaningful
    pub fn validate(&self) -> Result<()> {
        let s = &self.thresholds.sustainability;
        let o = &self.thresholds.outlook;
        let values = [
            ("on_track_min_renewable_pct", s.on_track_min_renewable_pct),
            ("on_track_max_emissions_tons", s.on_track_max_emissions_tons),
            (
                "needs_improvement_below_renewable_pct",
                s.needs_improvement_below_renewable_pct,
            ),
            ("high_emissions_above_tons", o.high_emissions_above_tons),
            ("low_renewables_below_pct", o.low_renewables_below_pct),
            ("debt_ratio_above_pct", o.debt_ratio_above_pct),
            ("gdp_growth_below_pct", o.gdp_growth_below_pct),
        ];
        for (name, value) in values {
            if !value.is_finite() {
                return Err(Error::Config(format!(
                    "threshold {} must be a finite number, got {}",
                    name, value
                )));
            }
        }
        Ok(())
    }

    /// Build an insight engine for these thresholds
    pub fn engine(&self) -> InsightEngine {
        InsightEngine::new(self.thresholds)
    }
}

/// Default config override path
pub fn default_config_path() -> Option<PathBuf> {
    dirs::data_local_dir().map(|d| d.join("civic").join("config").join("dashboard.toml"))
}

fn read_config(path: &Path) -> Result<DashboardConfig> {
    let content = fs::read_to_string(path).map_err(|e| {
        Error::Config(format!("Failed to read config {}: {}", path.display(), e))
    })?;
    DashboardConfig::parse(&content)
}
