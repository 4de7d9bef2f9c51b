//! Server command implementation

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use civic_core::SourceKind;

use super::load_config;

/// Pick the listening port: flag, then `$PORT`, then the default
pub fn resolve_port(flag: Option<u16>, env: Option<&str>) -> Result<u16> {
    if let Some(port) = flag {
        return Ok(port);
    }
    match env.map(str::trim).filter(|v| !v.is_empty()) {
        Some(value) => value
            .parse()
            .with_context(|| format!("Invalid PORT value: {}", value)),
        None => Ok(civic_server::DEFAULT_PORT),
    }
}

#[allow(clippy::too_many_arguments)]
pub async fn cmd_serve(
    config_path: Option<&Path>,
    host: &str,
    port: Option<u16>,
    source: Option<SourceKind>,
    data: Option<PathBuf>,
    url: Option<String>,
    allow_origins: Vec<String>,
) -> Result<()> {
    let (mut config, origin) = load_config(config_path)?;

    // Flags override the [source] section
    if let Some(kind) = source {
        config.source.kind = kind;
    }
    if data.is_some() {
        config.source.path = data;
    }
    if url.is_some() {
        config.source.url = url;
    }

    let env_port = std::env::var("PORT").ok();
    let port = resolve_port(port, env_port.as_deref())?;
    let data_source = config
        .source
        .build()
        .context("Failed to set up data source")?;

    println!("🚀 Starting Civic dashboard server...");
    println!("   Config: {}", origin);
    println!("   Source: {}", data_source.name());
    if let Some(path) = &config.source.path {
        if config.source.kind == SourceKind::File {
            println!("   Data file: {}", path.display());
        }
    }
    if let Some(url) = &config.source.url {
        if config.source.kind == SourceKind::Http {
            println!("   Data feed: {}", url);
        }
    }
    println!("   Listening: http://{}:{}", host, port);
    if !allow_origins.is_empty() {
        println!("   🌐 Allowed origins: {}", allow_origins.join(", "));
    }
    println!();
    println!("   Press Ctrl+C to stop");

    let server_config = civic_server::ServerConfig {
        allowed_origins: allow_origins,
    };
    civic_server::serve_with_config(data_source, config, host, port, server_config).await?;

    Ok(())
}
