//! Integration tests for civic-core
//!
//! These tests exercise the full source → classify → dashboard → export
//! workflow through the public API.

use std::io::Write;

use civic_core::{
    datasets::{municipal_sample, outlook_sample},
    export::to_csv_string,
    Classifier, DashboardConfig, DataSource, FileSource, FixtureSource, InsightEngine,
    MunicipalDashboard, OutlookDashboard, OutlookRecord, SustainabilityRecord,
};

#[tokio::test]
async fn test_sample_dashboards_end_to_end() {
    let config = DashboardConfig::default();
    let engine = config.engine();
    let source = FixtureSource::sample();

    let municipal = MunicipalDashboard::load(&source, &engine, &config.dashboard.title)
        .await
        .unwrap();
    let insights: Vec<&str> = municipal
        .sustainability
        .iter()
        .map(|a| a.insight.as_str())
        .collect();
    assert_eq!(
        insights,
        vec!["Moderate progress", "Moderate progress", "On track"]
    );

    let outlook = OutlookDashboard::load(&source, &engine, &config.dashboard.outlook_title)
        .await
        .unwrap();
    assert_eq!(
        outlook.records[0].insight,
        "High emissions and low renewables: invest in clean energy. | \
         Debt ratio above safe threshold — consider fiscal reform. | \
         Slow GDP growth — review economic stimulus options."
    );
    assert_eq!(outlook.records[2].insight, "On track");
}

#[tokio::test]
async fn test_file_source_with_custom_rows_keeps_order() {
    let document = serde_json::json!({
        "outlook": {
            "records": [
                { "year": 2024, "carbon_emissions_tons": 118000.0, "renewable_energy_pct": 34.0,
                  "gdp_growth_pct": 2.1, "debt_ratio_pct": 72.0 },
                { "year": 2022, "carbon_emissions_tons": 115000.0, "renewable_energy_pct": 35.0,
                  "gdp_growth_pct": 2.7, "debt_ratio_pct": 65.0 },
                { "year": 2024, "carbon_emissions_tons": 118000.0, "renewable_energy_pct": 34.0,
                  "gdp_growth_pct": 2.1, "debt_ratio_pct": 72.0 }
            ]
        }
    });
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(document.to_string().as_bytes()).unwrap();

    let source = FileSource::new(file.path());
    let dataset = source.fetch_outlook().await.unwrap();
    let years: Vec<i32> = dataset.records.iter().map(|r| r.year).collect();
    assert_eq!(years, vec![2024, 2022, 2024]);

    let engine = InsightEngine::default();
    let annotated = engine.annotate_outlook(&dataset.records);
    assert_eq!(annotated[1].insight, "On track");
    assert_eq!(annotated[0].insight, annotated[2].insight);
}

#[test]
fn test_classifier_is_referentially_transparent() {
    let engine = InsightEngine::default();
    let row = SustainabilityRecord::new(2022, 115000.0, 35.0, 63.0);
    let first = engine.sustainability().classify(&row);
    let second = engine.sustainability().classify(&row);
    assert_eq!(first, second);

    let row = OutlookRecord::new(2021, 118000.0, 34.0, 2.1, 72.0);
    assert_eq!(
        engine.outlook().evaluate(&row),
        engine.outlook().evaluate(&row)
    );
}

#[test]
fn test_export_matches_dashboard_rows() {
    let engine = InsightEngine::default();
    let annotated = engine.annotate_sustainability(&municipal_sample().sustainability);
    let csv = to_csv_string(&annotated).unwrap();

    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines.len(), 4);
    assert_eq!(lines[1], "2021,120000,32,60,Moderate progress");
    assert_eq!(lines[3], "2023,110000,40,65,On track");

    let outlook = engine.annotate_outlook(&outlook_sample().records);
    let csv = to_csv_string(&outlook).unwrap();
    assert!(csv.starts_with(
        "Year,Carbon Emissions (tons),Renewable Energy %,GDP Growth %,Debt Ratio %,AI Insight\n"
    ));
}

#[tokio::test]
async fn test_shared_engine_across_tasks() {
    let engine = std::sync::Arc::new(InsightEngine::default());
    let mut handles = Vec::new();
    for _ in 0..4 {
        let engine = engine.clone();
        handles.push(tokio::spawn(async move {
            engine.annotate_outlook(&outlook_sample().records)
        }));
    }

    let expected = engine.annotate_outlook(&outlook_sample().records);
    for handle in handles {
        assert_eq!(handle.await.unwrap(), expected);
    }
}
