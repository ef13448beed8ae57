//! CLI command implementations.
//!
//! Each command performs one request, formats the result with the selected
//! formatter and writes it through [`OutputOptions::emit`].

pub mod crop_issues;
pub mod dashboard;
pub mod districts;
pub mod events;
pub mod farms;
pub mod health;
pub mod info;

use std::path::PathBuf;

use anyhow::Result;

use crate::formatters::{Formatter, OutputFormat, get_formatter, output_result};

/// Output settings shared by every command.
pub struct OutputOptions {
    pub format: OutputFormat,
    pub file: Option<PathBuf>,
}

impl OutputOptions {
    pub fn new(format: &str, file: Option<PathBuf>) -> Result<Self> {
        Ok(Self {
            format: OutputFormat::from_str(format)?,
            file,
        })
    }

    pub fn formatter(&self) -> Box<dyn Formatter> {
        get_formatter(self.format)
    }

    pub fn emit(&self, output: &str) -> Result<()> {
        output_result(output, self.format, self.file.as_ref())
    }
}
