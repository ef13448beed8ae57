//! JSON formatter implementation.
//!
//! Responsibilities:
//! - Format all resource types as pretty-printed JSON.

use akyljer_client::{ApiInfo, CropIssue, DashboardSummary, District, Event, Farm, HealthStatus};
use anyhow::Result;

use crate::formatters::Formatter;

/// JSON formatter.
pub struct JsonFormatter;

fn to_json<T: serde::Serialize + ?Sized>(value: &T) -> Result<String> {
    let mut output = serde_json::to_string_pretty(value)?;
    output.push('\n');
    Ok(output)
}

impl Formatter for JsonFormatter {
    fn format_districts(&self, districts: &[District]) -> Result<String> {
        to_json(districts)
    }

    fn format_farms(&self, farms: &[Farm]) -> Result<String> {
        to_json(farms)
    }

    fn format_events(&self, events: &[Event]) -> Result<String> {
        to_json(events)
    }

    fn format_crop_issues(&self, issues: &[CropIssue]) -> Result<String> {
        to_json(issues)
    }

    fn format_dashboard(&self, summary: &DashboardSummary) -> Result<String> {
        to_json(summary)
    }

    fn format_health(&self, health: &HealthStatus) -> Result<String> {
        to_json(health)
    }

    fn format_api_info(&self, info: &ApiInfo) -> Result<String> {
        to_json(info)
    }
}
