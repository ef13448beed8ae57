//! YAML formatter implementation.

use akyljer_client::{ApiInfo, CropIssue, DashboardSummary, District, Event, Farm, HealthStatus};
use anyhow::Result;

use crate::formatters::Formatter;

/// YAML formatter.
pub struct YamlFormatter;

impl Formatter for YamlFormatter {
    fn format_districts(&self, districts: &[District]) -> Result<String> {
        Ok(serde_yaml::to_string(districts)?)
    }

    fn format_farms(&self, farms: &[Farm]) -> Result<String> {
        Ok(serde_yaml::to_string(farms)?)
    }

    fn format_events(&self, events: &[Event]) -> Result<String> {
        Ok(serde_yaml::to_string(events)?)
    }

    fn format_crop_issues(&self, issues: &[CropIssue]) -> Result<String> {
        Ok(serde_yaml::to_string(issues)?)
    }

    fn format_dashboard(&self, summary: &DashboardSummary) -> Result<String> {
        Ok(serde_yaml::to_string(summary)?)
    }

    fn format_health(&self, health: &HealthStatus) -> Result<String> {
        Ok(serde_yaml::to_string(health)?)
    }

    fn format_api_info(&self, info: &ApiInfo) -> Result<String> {
        Ok(serde_yaml::to_string(info)?)
    }
}
