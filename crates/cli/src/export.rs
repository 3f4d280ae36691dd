//! CSV export of missing-inventory reports.
//!
//! One row per missing item with columns `Location,PLU,Name`, grouped by
//! location in report order. The Location column carries the location name
//! when known, falling back to the ID.

use std::path::Path;

use thiserror::Error;

use retail_ops_core::CatalogItem;
use retail_ops_core::recon::MissingReport;

/// Errors that can occur while writing a report.
#[derive(Debug, Error)]
pub enum ExportError {
    /// CSV serialization failed.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Output file could not be created or written.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

const HEADER: [&str; 3] = ["Location", "PLU", "Name"];

/// Write an all-locations report to `path`.
///
/// # Errors
///
/// Returns an error when the file cannot be created or a row cannot be
/// written.
pub fn write_report(report: &MissingReport, path: &Path) -> Result<(), ExportError> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(HEADER)?;
    for entry in &report.locations {
        for item in &entry.missing {
            writer.write_record([entry.label(), item.plu.as_str(), item.name.as_str()])?;
        }
    }
    writer.flush()?;
    Ok(())
}

/// Write a single-location missing-items list to `path`.
///
/// # Errors
///
/// Returns an error when the file cannot be created or a row cannot be
/// written.
pub fn write_single_location(
    location_label: &str,
    missing: &[CatalogItem],
    path: &Path,
) -> Result<(), ExportError> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(HEADER)?;
    for item in missing {
        writer.write_record([location_label, item.plu.as_str(), item.name.as_str()])?;
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use retail_ops_core::recon::LocationMissing;

    fn write_report_to(report: &MissingReport, out: &mut Vec<u8>) -> Result<(), ExportError> {
        let mut writer = csv::Writer::from_writer(out);
        writer.write_record(HEADER)?;
        for entry in &report.locations {
            for item in &entry.missing {
                writer.write_record([entry.label(), item.plu.as_str(), item.name.as_str()])?;
            }
        }
        writer.flush()?;
        Ok(())
    }

    fn report() -> MissingReport {
        MissingReport {
            locations: vec![
                LocationMissing {
                    location_id: "loc1".to_string(),
                    location_name: Some("Main Street".to_string()),
                    missing: vec![
                        CatalogItem::new("456", "B"),
                        CatalogItem::new("999", "C"),
                    ],
                },
                LocationMissing {
                    location_id: "loc2".to_string(),
                    location_name: None,
                    missing: vec![CatalogItem::new("123", "A")],
                },
            ],
            unidentified_items: 0,
        }
    }

    #[test]
    fn test_rows_grouped_by_location_with_name_fallback() {
        let mut out = Vec::new();
        write_report_to(&report(), &mut out).expect("report should serialize");
        let rendered = String::from_utf8(out).expect("csv output should be utf-8");
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(
            lines,
            vec![
                "Location,PLU,Name",
                "Main Street,456,B",
                "Main Street,999,C",
                "loc2,123,A",
            ]
        );
    }

    #[test]
    fn test_write_report_to_file() {
        let dir = tempfile::tempdir().expect("tempdir should be created");
        let path = dir.path().join("missing.csv");
        write_report(&report(), &path).expect("report should write");
        let rendered = std::fs::read_to_string(&path).expect("file should be readable");
        assert!(rendered.starts_with("Location,PLU,Name"));
        assert_eq!(rendered.lines().count(), 4);
    }

    #[test]
    fn test_single_location_export() {
        let dir = tempfile::tempdir().expect("tempdir should be created");
        let path = dir.path().join("single.csv");
        let missing = vec![CatalogItem::new("456", "B")];
        write_single_location("Main Street", &missing, &path).expect("report should write");
        let rendered = std::fs::read_to_string(&path).expect("file should be readable");
        assert_eq!(rendered.lines().collect::<Vec<_>>(), vec![
            "Location,PLU,Name",
            "Main Street,456,B",
        ]);
    }
}
