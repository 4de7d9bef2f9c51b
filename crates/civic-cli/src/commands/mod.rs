//! CLI command implementations
//!
//! Commands are organized by area:
//! - `classify` - Classify a single row from flags
//! - `config` - Show the effective configuration
//! - `dashboard` - Terminal rendering of either dashboard
//! - `export` - CSV export of annotated rows
//! - `insights` - Annotated rows as a table, JSON or CSV
//! - `serve` - Web server command

pub mod classify;
pub mod config;
pub mod dashboard;
pub mod export;
pub mod insights;
pub mod serve;

// Re-export command functions for main.rs
pub use classify::*;
pub use config::*;
pub use dashboard::*;
pub use export::*;
pub use insights::*;
pub use serve::*;

use std::path::Path;

use anyhow::{Context, Result};
use civic_core::models::TableRow;
use civic_core::{ConfigOrigin, DashboardConfig};

/// Load the effective configuration for a command
pub fn load_config(path: Option<&Path>) -> Result<(DashboardConfig, ConfigOrigin)> {
    let (config, origin) = DashboardConfig::load(path).context("Failed to load configuration")?;
    tracing::debug!(origin = %origin, "Loaded configuration");
    Ok((config, origin))
}

/// Truncate a string to a maximum length, adding "..." if truncated
pub fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

/// Lay rows out as an aligned terminal table
pub fn format_table<R: TableRow>(rows: &[R]) -> String {
    let headers = R::headers();
    let cells: Vec<Vec<String>> = rows.iter().map(|r| r.cells()).collect();

    let widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(i, h)| {
            cells
                .iter()
                .filter_map(|row| row.get(i))
                .map(|c| c.chars().count())
                .chain(std::iter::once(h.chars().count()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let line = |values: Vec<String>| -> String {
        let padded: Vec<String> = values
            .iter()
            .zip(&widths)
            .map(|(v, w)| format!("{:w$}", v, w = *w))
            .collect();
        format!("   {}", padded.join(" │ ").trim_end())
    };

    let mut out = Vec::with_capacity(rows.len() + 2);
    out.push(line(headers.iter().map(|h| h.to_string()).collect()));
    out.push(format!(
        "   {}",
        widths
            .iter()
            .map(|w| "─".repeat(*w))
            .collect::<Vec<_>>()
            .join("─┼─")
    ));
    for row in cells {
        out.push(line(row));
    }
    out.join("\n")
}
