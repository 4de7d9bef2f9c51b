//! Insight listing

use std::path::Path;

use anyhow::{Context, Result};
use serde_json::json;

use civic_core::export::to_csv_string;
use civic_core::{DashboardConfig, Variant};

use super::{format_table, load_config};
use crate::cli::OutputFormat;

pub async fn cmd_insights(
    config_path: Option<&Path>,
    variant: Variant,
    format: OutputFormat,
) -> Result<()> {
    let (config, _) = load_config(config_path)?;
    let output = render_insights(&config, variant, format).await?;
    println!("{}", output.trim_end());
    Ok(())
}

/// Fetch, classify and format the rows of one dashboard
pub async fn render_insights(
    config: &DashboardConfig,
    variant: Variant,
    format: OutputFormat,
) -> Result<String> {
    let source = config.source.build()?;
    let engine = config.engine();

    let output = match variant {
        Variant::Municipal => {
            let dataset = source
                .fetch_municipal()
                .await
                .context("Failed to load municipal data")?;
            let rows = engine.annotate_sustainability(&dataset.sustainability);
            match format {
                OutputFormat::Table => format_table(&rows),
                OutputFormat::Json => serde_json::to_string_pretty(&json!({
                    "variant": variant,
                    "rows": rows,
                }))?,
                OutputFormat::Csv => to_csv_string(&rows)?,
            }
        }
        Variant::Outlook => {
            let dataset = source
                .fetch_outlook()
                .await
                .context("Failed to load outlook data")?;
            let rows = engine.annotate_outlook(&dataset.records);
            match format {
                OutputFormat::Table => format_table(&rows),
                OutputFormat::Json => serde_json::to_string_pretty(&json!({
                    "variant": variant,
                    "rows": rows,
                }))?,
                OutputFormat::Csv => to_csv_string(&rows)?,
            }
        }
    };

    Ok(output)
}
