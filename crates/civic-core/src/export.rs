//! CSV export of dashboard tables

use std::io::Write;

use crate::error::{Error, Result};
use crate::models::TableRow;

/// Write rows as CSV (header line first) to any writer
pub fn write_csv<R: TableRow, W: Write>(rows: &[R], writer: W) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(R::headers())?;
    for row in rows {
        wtr.write_record(row.cells())?;
    }
    wtr.flush()?;
    Ok(())
}

/// Render rows as a CSV string
pub fn to_csv_string<R: TableRow>(rows: &[R]) -> Result<String> {
    let mut buffer = Vec::new();
    write_csv(rows, &mut buffer)?;
    String::from_utf8(buffer).map_err(|e| Error::InvalidData(format!("CSV is not UTF-8: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::datasets::outlook_sample;
    use crate::insights::InsightEngine;
    use crate::models::{Annotated, EconomicIndicator, SustainabilityRecord};

    #[test]
    fn test_export_annotated_sustainability() {
        let rows = vec![Annotated {
            row: SustainabilityRecord::new(2023, 110000.0, 40.0, 65.0),
            insight: "On track".to_string(),
        }];
        let csv = to_csv_string(&rows).unwrap();
        let mut lines = csv.lines();
        assert_eq!(
            lines.next().unwrap(),
            "Year,Carbon Emissions (tons),Renewable Energy %,Waste Recycled %,AI Insight"
        );
        assert_eq!(lines.next().unwrap(), "2023,110000,40,65,On track");
        assert!(lines.next().is_none());
    }

    #[test]
    fn test_export_outlook_insights_read_back() {
        let engine = InsightEngine::default();
        let rows = engine.annotate_outlook(&outlook_sample().records);
        let output = to_csv_string(&rows).unwrap();

        let mut reader = csv::Reader::from_reader(output.as_bytes());
        let records: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
        assert_eq!(records.len(), 3);
        assert_eq!(&records[0][5], rows[0].insight.as_str());
        assert_eq!(&records[2][5], "On track");
    }

    #[test]
    fn test_export_indicator_with_comma() {
        let rows = vec![EconomicIndicator::new("Debt, net", "62%")];
        let csv = to_csv_string(&rows).unwrap();
        assert!(csv.contains("\"Debt, net\",62%"));
    }

    #[test]
    fn test_export_empty_has_header() {
        let rows: Vec<EconomicIndicator> = vec![];
        assert_eq!(to_csv_string(&rows).unwrap(), "Indicator,Value\n");
    }
}
