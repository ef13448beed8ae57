//! Output formatters for CLI commands.
//!
//! Responsibilities:
//! - Provide the table, JSON, CSV and YAML output formats.
//! - Implement the `Formatter` trait for every portal resource.
//!
//! Does NOT handle:
//! - Terminal UI rendering (see `crates/tui`).
//!
//! Invariants:
//! - Tables use tab-separation for consistent alignment in standard terminals.
//!
//! ## Empty-State Handling
//!
//! | Format | Empty State Behavior | Example |
//! |--------|---------------------|---------|
//! | JSON | Valid empty structure | `[]` |
//! | YAML | Valid empty sequence | `[]` |
//! | CSV | Headers only, no data | `ID,Code,Name` |
//! | Table | Human message | `No districts found.` |
//!
//! ## Missing/Null Value Handling
//!
//! JSON and YAML keep `null` from serde. Table and CSV print `N/A`
//! ([`common::DEFAULT_MISSING_VALUE`]).

use akyljer_client::{ApiInfo, CropIssue, DashboardSummary, District, Event, Farm, HealthStatus};
use anyhow::Result;

mod common;
mod csv;
mod json;
mod table;
mod yaml;


pub use common::output_result;
pub use csv::CsvFormatter;
pub use json::JsonFormatter;
pub use table::TableFormatter;
pub use yaml::YamlFormatter;

/// Supported output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Table,
    Csv,
    Yaml,
}

impl OutputFormat {
    /// Parse from string.
    pub fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "table" => Ok(OutputFormat::Table),
            "csv" => Ok(OutputFormat::Csv),
            "yaml" | "yml" => Ok(OutputFormat::Yaml),
            _ => anyhow::bail!(
                "Invalid output format: {}. Valid options: table, json, csv, yaml",
                s
            ),
        }
    }
}

/// Formatter trait for different output types.
pub trait Formatter {
    fn format_districts(&self, districts: &[District]) -> Result<String>;

    fn format_farms(&self, farms: &[Farm]) -> Result<String>;

    /// Also used for the single event returned by a status change.
    fn format_events(&self, events: &[Event]) -> Result<String>;

    /// Also used for the single crop issue returned by a status change.
    fn format_crop_issues(&self, issues: &[CropIssue]) -> Result<String>;

    fn format_dashboard(&self, summary: &DashboardSummary) -> Result<String>;

    fn format_health(&self, health: &HealthStatus) -> Result<String>;

    fn format_api_info(&self, info: &ApiInfo) -> Result<String>;
}

/// Get a formatter for the specified output format.
pub fn get_formatter(format: OutputFormat) -> Box<dyn Formatter> {
    match format {
        OutputFormat::Json => Box::new(JsonFormatter),
        OutputFormat::Table => Box::new(TableFormatter),
        OutputFormat::Csv => Box::new(CsvFormatter),
        OutputFormat::Yaml => Box::new(YamlFormatter),
    }
}
