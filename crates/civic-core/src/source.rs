//! Pluggable data sources for the dashboards
//!
//! A [`DataSource`] produces both dataset shapes. The dashboards call it on
//! every render, so swapping the built-in fixtures for a file or a live feed
//! needs no change to the classifiers.
//!
//! Every fetched dataset is validated before it is returned; a bad row fails
//! the whole fetch with [`Error::InvalidData`].

use std::path::{Path, PathBuf};
use std::time::Duration;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::datasets::{municipal_sample, outlook_sample};
use crate::error::{Error, Result};
use crate::models::{MunicipalDataset, OutlookDataset};

/// Default timeout for HTTP sources
pub const DEFAULT_HTTP_TIMEOUT: Duration = Duration::from_secs(10);

/// Something that can produce the dashboard datasets
#[async_trait]
pub trait DataSource: Send + Sync {
    /// Short name for logs and the health endpoint
    fn name(&self) -> &'static str;

    /// Tables for the municipal dashboard
    async fn fetch_municipal(&self) -> Result<MunicipalDataset>;

    /// Rows for the outlook dashboard
    async fn fetch_outlook(&self) -> Result<OutlookDataset>;
}

/// Serves datasets held in memory (the built-in samples by default)
#[derive(Debug, Clone)]
pub struct FixtureSource {
    municipal: MunicipalDataset,
    outlook: OutlookDataset,
}

impl FixtureSource {
    pub fn new(municipal: MunicipalDataset, outlook: OutlookDataset) -> Self {
        Self { municipal, outlook }
    }

    /// The built-in sample datasets
    pub fn sample() -> Self {
        Self::new(municipal_sample(), outlook_sample())
    }
}

impl Default for FixtureSource {
    fn default() -> Self {
        Self::sample()
    }
}

#[async_trait]
impl DataSource for FixtureSource {
    fn name(&self) -> &'static str {
        "fixture"
    }

    async fn fetch_municipal(&self) -> Result<MunicipalDataset> {
        self.municipal.validate()?;
        Ok(self.municipal.clone())
    }

    async fn fetch_outlook(&self) -> Result<OutlookDataset> {
        self.outlook.validate()?;
        Ok(self.outlook.clone())
    }
}

/// JSON document read by [`FileSource`]; either section may be omitted
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SourceDocument {
    pub municipal: Option<MunicipalDataset>,
    pub outlook: Option<OutlookDataset>,
}

/// Reads a JSON document from disk on every fetch
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read_document(&self) -> Result<SourceDocument> {
        let content = tokio::fs::read_to_string(&self.path).await?;
        Ok(serde_json::from_str(&content)?)
    }
}

#[async_trait]
impl DataSource for FileSource {
    fn name(&self) -> &'static str {
        "file"
    }

    async fn fetch_municipal(&self) -> Result<MunicipalDataset> {
        let dataset = self.read_document().await?.municipal.ok_or_else(|| {
            Error::Source(format!(
                "{} has no municipal dataset",
                self.path.display()
            ))
        })?;
        dataset.validate()?;
        Ok(dataset)
    }

    async fn fetch_outlook(&self) -> Result<OutlookDataset> {
        let dataset = self.read_document().await?.outlook.ok_or_else(|| {
            Error::Source(format!("{} has no outlook dataset", self.path.display()))
        })?;
        dataset.validate()?;
        Ok(dataset)
    }
}

/// Fetches JSON datasets from `{base_url}/municipal` and `{base_url}/outlook`
#[derive(Debug, Clone)]
pub struct HttpSource {
    client: reqwest::Client,
    base_url: String,
    timeout: Duration,
}

impl HttpSource {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_timeout(base_url, DEFAULT_HTTP_TIMEOUT)
    }

    pub fn with_timeout(base_url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            timeout,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = format!("{}/{}", self.base_url, path);
        tracing::debug!(url = %url, "Fetching dataset");

        let response = self
            .client
            .get(&url)
            .timeout(self.timeout)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Error::Source(format!(
                "GET {} returned {}",
                url,
                response.status()
            )));
        }

        Ok(response.json().await?)
    }
}

#[async_trait]
impl DataSource for HttpSource {
    fn name(&self) -> &'static str {
        "http"
    }

    async fn fetch_municipal(&self) -> Result<MunicipalDataset> {
        let dataset: MunicipalDataset = self.get_json("municipal").await?;
        dataset.validate()?;
        Ok(dataset)
    }

    async fn fetch_outlook(&self) -> Result<OutlookDataset> {
        let dataset: OutlookDataset = self.get_json("outlook").await?;
        dataset.validate()?;
        Ok(dataset)
    }
}
