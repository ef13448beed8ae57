//! CSV formatter implementation.
//!
//! Responsibilities:
//! - Format resources as RFC 4180 compliant CSV through the `csv` crate.
//!
//! Invariants:
//! - The header row is always written, so empty input yields headers only.
//! - Nested breakdowns are flattened into `Section,Key,Value` rows.

use akyljer_client::{ApiInfo, CropIssue, DashboardSummary, District, Event, Farm, HealthStatus};
use anyhow::{Context, Result};

use crate::formatters::Formatter;
use crate::formatters::common::TabularRecord;

/// CSV formatter.
pub struct CsvFormatter;

fn write_rows<I>(headers: &[&str], rows: I) -> Result<String>
where
    I: IntoIterator<Item = Vec<String>>,
{
    let mut writer = ::csv::Writer::from_writer(Vec::new());
    writer.write_record(headers)?;
    for row in rows {
        writer.write_record(&row)?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|e| anyhow::anyhow!("Failed to flush CSV output: {}", e.error()))?;
    String::from_utf8(bytes).context("CSV output is not valid UTF-8")
}

fn format_records<T: TabularRecord>(records: &[T]) -> Result<String> {
    write_rows(T::headers(), records.iter().map(TabularRecord::cells))
}

impl Formatter for CsvFormatter {
    fn format_districts(&self, districts: &[District]) -> Result<String> {
        format_records(districts)
    }

    fn format_farms(&self, farms: &[Farm]) -> Result<String> {
        format_records(farms)
    }

    fn format_events(&self, events: &[Event]) -> Result<String> {
        format_records(events)
    }

    fn format_crop_issues(&self, issues: &[CropIssue]) -> Result<String> {
        format_records(issues)
    }

    fn format_dashboard(&self, summary: &DashboardSummary) -> Result<String> {
        let row = |section: &str, key: &str, value: u64| {
            vec![section.to_string(), key.to_string(), value.to_string()]
        };

        let mut rows = vec![
            row("summary", "total_farms", summary.total_farms),
            row("summary", "total_animals", summary.total_animals),
            row("summary", "open_outbreaks", summary.open_outbreaks),
        ];
        rows.extend(
            summary
                .farms_by_district
                .iter()
                .map(|d| row("farms_by_district", &d.district_code, d.farm_count)),
        );
        rows.extend(
            summary
                .outbreaks_by_disease
                .iter()
                .map(|d| row("outbreaks_by_disease", &d.disease_suspected, d.count)),
        );

        write_rows(&["Section", "Key", "Value"], rows)
    }

    fn format_health(&self, health: &HealthStatus) -> Result<String> {
        write_rows(&["Status"], [vec![health.status.clone()]])
    }

    fn format_api_info(&self, info: &ApiInfo) -> Result<String> {
        let mut rows = vec![
            vec!["name".to_string(), info.message.clone()],
            vec!["version".to_string(), info.version.clone()],
        ];
        rows.extend(
            info.endpoints
                .iter()
                .map(|(name, path)| vec![format!("endpoint.{name}"), path.clone()]),
        );
        write_rows(&["Key", "Value"], rows)
    }
}
