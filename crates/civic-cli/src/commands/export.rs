//! CSV export

use std::path::Path;

use anyhow::{Context, Result};

use civic_core::export::to_csv_string;
use civic_core::{DashboardConfig, Variant};

use super::load_config;

pub async fn cmd_export(config_path: Option<&Path>, variant: Variant, output: &Path) -> Result<()> {
    let (config, _) = load_config(config_path)?;
    let count = export_insights(&config, variant, output).await?;

    println!("✅ Exported {} {} rows to {}", count, variant, output.display());
    Ok(())
}

/// Write the annotated rows of one dashboard to `output`, returning the row count
///
/// The source is read before `output` is touched, so a failed fetch leaves an
/// existing file as it was.
pub async fn export_insights(
    config: &DashboardConfig,
    variant: Variant,
    output: &Path,
) -> Result<usize> {
    let source = config.source.build()?;
    let engine = config.engine();

    let (content, count) = match variant {
        Variant::Municipal => {
            let dataset = source
                .fetch_municipal()
                .await
                .context("Failed to load municipal data")?;
            let rows = engine.annotate_sustainability(&dataset.sustainability);
            (to_csv_string(&rows)?, rows.len())
        }
        Variant::Outlook => {
            let dataset = source
                .fetch_outlook()
                .await
                .context("Failed to load outlook data")?;
            let rows = engine.annotate_outlook(&dataset.records);
            (to_csv_string(&rows)?, rows.len())
        }
    };

    std::fs::write(output, content)
        .with_context(|| format!("Failed to write {}", output.display()))?;

    Ok(count)
}
