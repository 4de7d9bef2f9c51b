//! CLI argument definitions using clap
//!
//! This module contains all the clap structs and enums for parsing CLI arguments.
//! The actual command implementations are in the `commands` module.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use civic_core::{SourceKind, Variant};

/// Civic - Municipal economic and sustainability dashboard
#[derive(Parser)]
#[command(name = "civic")]
#[command(about = "Municipal economic and sustainability dashboard", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Config file
    ///
    /// Defaults to ~/.local/share/civic/config/dashboard.toml when present,
    /// otherwise the built-in configuration.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the web server
    Serve {
        /// Port to listen on (falls back to $PORT, then 8080)
        #[arg(short, long)]
        port: Option<u16>,

        /// Host to bind to
        #[arg(long, default_value = civic_server::DEFAULT_HOST)]
        host: String,

        /// Data source: fixture, file, http (overrides the config file)
        #[arg(long)]
        source: Option<SourceKind>,

        /// JSON document for the file source
        #[arg(long)]
        data: Option<PathBuf>,

        /// Base URL for the http source
        #[arg(long)]
        url: Option<String>,

        /// Allowed CORS origin (repeatable)
        #[arg(long = "allow-origin")]
        allow_origins: Vec<String>,
    },

    /// Show a dashboard in the terminal
    Dashboard {
        /// Dashboard: municipal, outlook
        #[arg(long, default_value = "municipal")]
        variant: Variant,
    },

    /// List rows with their insight column
    Insights {
        /// Dashboard: municipal, outlook
        #[arg(long, default_value = "municipal")]
        variant: Variant,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },

    /// Classify a single row
    Classify {
        #[command(subcommand)]
        target: ClassifyTarget,
    },

    /// Export rows with their insight column to CSV
    Export {
        /// Dashboard: municipal, outlook
        #[arg(long, default_value = "municipal")]
        variant: Variant,

        /// Output file
        #[arg(short, long)]
        output: PathBuf,
    },

    /// Show the effective configuration
    Config,
}

#[derive(Subcommand)]
pub enum ClassifyTarget {
    /// Municipal sustainability status (first matching rule wins)
    Sustainability {
        /// Renewable energy share in percent
        #[arg(long)]
        renewable: f64,

        /// Carbon emissions in tons
        #[arg(long)]
        emissions: f64,

        /// Waste recycled share in percent (not used by the rules)
        #[arg(long, default_value_t = 0.0)]
        recycled: f64,

        /// Year of the observation
        #[arg(long, default_value_t = 0)]
        year: i32,
    },

    /// Climate and fiscal outlook (every matching rule contributes)
    Outlook {
        /// Carbon emissions in tons
        #[arg(long)]
        emissions: f64,

        /// Renewable energy share in percent
        #[arg(long)]
        renewable: f64,

        /// GDP growth in percent
        #[arg(long, allow_hyphen_values = true)]
        gdp: f64,

        /// Debt ratio in percent
        #[arg(long)]
        debt: f64,

        /// Year of the observation
        #[arg(long, default_value_t = 0)]
        year: i32,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
    Csv,
}
