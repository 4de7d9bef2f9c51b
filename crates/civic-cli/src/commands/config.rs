//! Configuration display

use std::path::Path;

use anyhow::{Context, Result};

use civic_core::config::default_config_path;
use civic_core::DashboardConfig;

use super::load_config;

pub fn cmd_config(config_path: Option<&Path>) -> Result<()> {
    let (config, origin) = load_config(config_path)?;

    println!();
    println!("⚙️  Civic Configuration");
    println!("   ─────────────────────────────────────────────────────────────");
    println!("   Loaded from: {}", origin);
    if let Some(path) = default_config_path() {
        println!("   Override path: {}", path.display());
    }
    println!();
    println!("{}", render_config(&config)?);
    Ok(())
}

/// Effective configuration as TOML
pub fn render_config(config: &DashboardConfig) -> Result<String> {
    toml::to_string_pretty(config).context("Failed to serialize configuration")
}
