//! Common utilities for formatters.
//!
//! Responsibilities:
//! - Define the column layout shared by the table and CSV formatters.
//! - Standardized missing/empty value handling.
//! - Atomic file writing.
//!
//! Does NOT handle:
//! - Format-specific layout (lives in respective formatter modules).

use std::path::{Path, PathBuf};

use akyljer_client::{CropIssue, District, Event, Farm};
use anyhow::{Context, Result};

/// String representation for missing or empty values in table and CSV output.
pub const DEFAULT_MISSING_VALUE: &str = "N/A";

/// Timestamp layout used in tabular output.
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Format an optional value using Display, using the default missing value if None.
///
/// ```ignore
/// assert_eq!(format_missing_display(Some(42)), "42");
/// assert_eq!(format_missing_display(None::<i32>), "N/A");
/// ```
pub fn format_missing_display<T: std::fmt::Display>(opt: Option<T>) -> String {
    opt.map(|v| v.to_string())
        .unwrap_or_else(|| DEFAULT_MISSING_VALUE.to_string())
}

/// Blank strings count as missing.
pub fn format_text(value: &str) -> String {
    let value = value.trim();
    if value.is_empty() {
        DEFAULT_MISSING_VALUE.to_string()
    } else {
        value.to_string()
    }
}

/// A record rendered as one row of a table or CSV file.
pub trait TabularRecord {
    /// Plural noun used in the empty-table message.
    const NOUN: &'static str;

    fn headers() -> &'static [&'static str];

    fn cells(&self) -> Vec<String>;
}

impl TabularRecord for District {
    const NOUN: &'static str = "districts";

    fn headers() -> &'static [&'static str] {
        &["ID", "Code", "Name"]
    }

    fn cells(&self) -> Vec<String> {
        vec![self.id.to_string(), self.code.clone(), self.name.clone()]
    }
}

impl TabularRecord for Farm {
    const NOUN: &'static str = "farms";

    fn headers() -> &'static [&'static str] {
        &[
            "ID", "Farmer", "Phone", "Village", "District", "Location", "Herds", "Animals",
        ]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.farmer_name.clone(),
            format_text(&self.phone),
            format_text(&self.village),
            format_text(&self.district_name),
            format_missing_display(self.location()),
            format_text(&self.herd_summary()),
            self.total_animals.to_string(),
        ]
    }
}

impl TabularRecord for Event {
    const NOUN: &'static str = "events";

    fn headers() -> &'static [&'static str] {
        &[
            "ID", "Created", "Farmer", "Village", "District", "Type", "Disease", "Animals",
            "Status",
        ]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.created_at.format(TIMESTAMP_FORMAT).to_string(),
            self.farm_summary.farmer_name.clone(),
            format_text(&self.farm_summary.village),
            format_text(&self.farm_summary.district_name),
            self.event_type.to_string(),
            format_missing_display(self.disease_suspected.as_deref().filter(|d| !d.is_empty())),
            format_missing_display(self.animals_affected),
            self.status.to_string(),
        ]
    }
}

impl TabularRecord for CropIssue {
    const NOUN: &'static str = "crop issues";

    fn headers() -> &'static [&'static str] {
        &[
            "ID",
            "Created",
            "Farmer",
            "District",
            "Crop",
            "Problem",
            "Title",
            "Severity",
            "Area (ha)",
            "Status",
        ]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.created_at.format(TIMESTAMP_FORMAT).to_string(),
            self.farm_summary.farmer_name.clone(),
            format_text(&self.farm_summary.district_name),
            format_text(&self.crop_type),
            self.problem_type.to_string(),
            self.title.clone(),
            self.severity.to_string(),
            format_missing_display(self.area_affected_ha),
            self.status.to_string(),
        ]
    }
}

/// Print to stdout, or write to `output_file` when one is given.
pub fn output_result(
    output: &str,
    format: crate::formatters::OutputFormat,
    output_file: Option<&PathBuf>,
) -> Result<()> {
    if let Some(path) = output_file {
        write_to_file(output, path)
            .with_context(|| format!("Failed to write output to {}", path.display()))?;
        eprintln!(
            "Results written to {} ({:?} format)",
            path.display(),
            format
        );
    } else {
        print!("{}", output);
    }
    Ok(())
}

/// Write formatted output to a file atomically.
///
/// Creates parent directories if needed, writes to a temp file then renames.
pub fn write_to_file(content: &str, path: &Path) -> Result<()> {
    use std::fs;
    use std::io::Write;
    use tempfile::NamedTempFile;

    let parent_dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };

    if parent_dir != Path::new(".") {
        fs::create_dir_all(parent_dir)
            .with_context(|| format!("Failed to create directory: {}", parent_dir.display()))?;
    }

    let mut temp_file = NamedTempFile::new_in(parent_dir)
        .with_context(|| format!("Failed to create temp file in: {}", parent_dir.display()))?;

    temp_file
        .write_all(content.as_bytes())
        .context("Failed to write to temp file")?;
    temp_file.flush().context("Failed to flush temp file")?;

    temp_file
        .persist(path)
        .with_context(|| format!("Failed to write file: {}", path.display()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_values() {
        assert_eq!(format_missing_display(Some(42)), "42");
        assert_eq!(format_missing_display(None::<i32>), "N/A");
        assert_eq!(format_text("  "), "N/A");
        assert_eq!(format_text(" Talgar "), "Talgar");
    }

    #[test]
    fn test_headers_and_cells_line_up() {
        let district = District {
            id: 1,
            name: "Almaty Region".to_string(),
            code: "ALM".to_string(),
        };
        assert_eq!(District::headers().len(), district.cells().len());
    }

    #[test]
    fn test_write_to_file_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("farms.csv");
        write_to_file("ID,Farmer\n", &path).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "ID,Farmer\n");
    }
}
