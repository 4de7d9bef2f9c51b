//! Terminal dashboards

use std::path::Path;

use anyhow::{Context, Result};

use civic_core::models::format_number;
use civic_core::{MunicipalDashboard, OutlookDashboard, Variant};

use super::{format_table, load_config, truncate};

pub async fn cmd_dashboard(config_path: Option<&Path>, variant: Variant) -> Result<()> {
    let (config, _) = load_config(config_path)?;
    let source = config.source.build()?;
    let engine = config.engine();

    let output = match variant {
        Variant::Municipal => {
            let dashboard =
                MunicipalDashboard::load(source.as_ref(), &engine, config.dashboard.title.as_str())
                    .await
                    .context("Failed to load municipal data")?;
            render_municipal(&dashboard)
        }
        Variant::Outlook => {
            let dashboard = OutlookDashboard::load(
                source.as_ref(),
                &engine,
                config.dashboard.outlook_title.as_str(),
            )
            .await
            .context("Failed to load outlook data")?;
            render_outlook(&dashboard)
        }
    };

    println!("{}", output);
    Ok(())
}

fn banner(title: &str) -> String {
    format!(
        "╭─────────────────────────────────────────╮\n│{:^41}│\n╰─────────────────────────────────────────╯",
        truncate(title, 39)
    )
}

/// Municipal dashboard as terminal text
pub fn render_municipal(dashboard: &MunicipalDashboard) -> String {
    let mut out = vec![banner(&dashboard.title), String::new()];

    out.push("💵 Revenue vs Expenses".to_string());
    out.push(format_table(&dashboard.revenue_expense));
    for row in &dashboard.revenue_expense {
        let balance = row.balance();
        let label = if balance < 0.0 { "deficit" } else { "surplus" };
        out.push(format!(
            "   {} {}: {}",
            row.year,
            label,
            format_number(balance.abs())
        ));
    }
    out.push(String::new());

    out.push("🏛️  Budget Allocation by Sector".to_string());
    for slice in &dashboard.budget_chart {
        out.push(format!(
            "   {:25} │ {:>10} │ {:>5.1}%",
            truncate(&slice.label, 25),
            format_number(slice.value),
            slice.share_pct
        ));
    }
    out.push(String::new());

    out.push("📈 Key Economic Indicators".to_string());
    out.push(format_table(&dashboard.indicators));
    out.push(String::new());

    out.push("🌱 Sustainability Metrics".to_string());
    out.push(format_table(&dashboard.sustainability));

    out.join("\n")
}

/// Outlook dashboard as terminal text
pub fn render_outlook(dashboard: &OutlookDashboard) -> String {
    let mut out = vec![banner(&dashboard.title), String::new()];

    out.push("🌍 Climate and Fiscal Outlook".to_string());
    out.push(format_table(&dashboard.records));

    let flagged = dashboard
        .records
        .iter()
        .filter(|r| r.insight != civic_core::insights::types::ON_TRACK)
        .count();
    out.push(String::new());
    out.push(format!(
        "   {} of {} years need attention",
        flagged,
        dashboard.records.len()
    ));

    out.join("\n")
}
