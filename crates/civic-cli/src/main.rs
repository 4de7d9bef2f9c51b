//! Civic CLI - Municipal economic and sustainability dashboard
//!
//! Usage:
//!   civic serve --port 8080              Start web server
//!   civic dashboard --variant outlook    Show a dashboard in the terminal
//!   civic insights --format csv          List rows with their insight
//!   civic classify outlook --emissions 118000 --renewable 34 --gdp 2.1 --debt 72

mod cli;
mod commands;


use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::*;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging
    // Priority: RUST_LOG env var > --verbose flag > default (info)
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).compact())
        .init();

    let config = cli.config.as_deref();

    match cli.command {
        Commands::Serve {
            port,
            host,
            source,
            data,
            url,
            allow_origins,
        } => commands::cmd_serve(config, &host, port, source, data, url, allow_origins).await,
        Commands::Dashboard { variant } => commands::cmd_dashboard(config, variant).await,
        Commands::Insights { variant, format } => {
            commands::cmd_insights(config, variant, format).await
        }
        Commands::Classify { target } => commands::cmd_classify(config, target),
        Commands::Export { variant, output } => {
            commands::cmd_export(config, variant, &output).await
        }
        Commands::Config => commands::cmd_config(config),
    }
}
