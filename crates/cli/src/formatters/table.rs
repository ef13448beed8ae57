//! Table formatter implementation.
//!
//! Responsibilities:
//! - Format resources as tab-separated tables.
//! - Print a human message instead of an empty table.
//!
//! Does NOT handle:
//! - Other output formats.
//! - File I/O.

use akyljer_client::{ApiInfo, CropIssue, DashboardSummary, District, Event, Farm, HealthStatus};
use anyhow::Result;

use crate::formatters::Formatter;
use crate::formatters::common::TabularRecord;

/// Table formatter.
pub struct TableFormatter;

fn format_records<T: TabularRecord>(records: &[T]) -> String {
    if records.is_empty() {
        return format!("No {} found.\n", T::NOUN);
    }

    let mut output = String::new();
    output.push_str(&T::headers().join("\t"));
    output.push('\n');
    for record in records {
        output.push_str(&record.cells().join("\t"));
        output.push('\n');
    }
    output
}

impl Formatter for TableFormatter {
    fn format_districts(&self, districts: &[District]) -> Result<String> {
        Ok(format_records(districts))
    }

    fn format_farms(&self, farms: &[Farm]) -> Result<String> {
        Ok(format_records(farms))
    }

    fn format_events(&self, events: &[Event]) -> Result<String> {
        Ok(format_records(events))
    }

    fn format_crop_issues(&self, issues: &[CropIssue]) -> Result<String> {
        Ok(format_records(issues))
    }

    fn format_dashboard(&self, summary: &DashboardSummary) -> Result<String> {
        let mut output = String::new();
        output.push_str(&format!("Total farms:\t{}\n", summary.total_farms));
        output.push_str(&format!("Total animals:\t{}\n", summary.total_animals));
        output.push_str(&format!("Open outbreaks:\t{}\n", summary.open_outbreaks));

        output.push_str("\nFarms by district\n");
        if summary.farms_by_district.is_empty() {
            output.push_str("No districts found.\n");
        } else {
            output.push_str("Code\tDistrict\tFarms\n");
            for row in &summary.farms_by_district {
                output.push_str(&format!(
                    "{}\t{}\t{}\n",
                    row.district_code, row.district_name, row.farm_count
                ));
            }
        }

        output.push_str("\nOutbreaks by disease\n");
        if summary.outbreaks_by_disease.is_empty() {
            output.push_str("No outbreaks found.\n");
        } else {
            output.push_str("Disease\tCount\n");
            for row in &summary.outbreaks_by_disease {
                output.push_str(&format!("{}\t{}\n", row.disease_suspected, row.count));
            }
        }

        Ok(output)
    }

    fn format_health(&self, health: &HealthStatus) -> Result<String> {
        Ok(format!("Status:\t{}\n", health.status))
    }

    fn format_api_info(&self, info: &ApiInfo) -> Result<String> {
        let mut output = String::new();
        output.push_str(&format!("Name:\t{}\n", info.message));
        output.push_str(&format!("Version:\t{}\n", info.version));
        if !info.endpoints.is_empty() {
            output.push_str("\nEndpoint\tPath\n");
            for (name, path) in &info.endpoints {
                output.push_str(&format!("{}\t{}\n", name, path));
            }
        }
        Ok(output)
    }
}
