//! Command-line arguments for the terminal portal.
//!
//! Configuration precedence (highest to lowest):
//! 1. Command-line arguments
//! 2. Environment variables (`AKYLJER_API_BASE_URL`, `AKYLJER_TIMEOUT`, `AKYLJER_THEME`)
//! 3. Defaults

use std::path::PathBuf;

use akyljer_config::ColorTheme;
use akyljer_config::constants::DEFAULT_LOG_DIR;
use clap::Parser;

use crate::app::Route;

#[derive(Debug, Parser)]
#[command(
    name = "akyljer-tui",
    about = "Terminal portal for Akyl Jer farm, veterinary and crop records",
    version,
    after_help = "Examples:\n  akyljer-tui\n  akyljer-tui --base-url https://portal.example.kg --route /events\n  akyljer-tui --theme high_contrast --log-dir /var/log/akyljer\n"
)]
pub struct Cli {
    /// Base URL of the portal API
    #[arg(long)]
    pub base_url: Option<String>,

    /// Request timeout in seconds
    #[arg(long)]
    pub timeout: Option<u64>,

    /// Directory for log files
    #[arg(long, default_value = DEFAULT_LOG_DIR)]
    pub log_dir: PathBuf,

    /// Page to open at startup (/, /dashboard, /farms, /events, /crop-issues)
    #[arg(long, default_value = "/", value_parser = parse_route)]
    pub route: String,

    /// Color theme (default, light, high_contrast)
    #[arg(long, value_parser = parse_theme)]
    pub theme: Option<ColorTheme>,
}

fn parse_route(value: &str) -> Result<String, String> {
    Route::from_path(value)
        .map(|_| value.to_string())
        .ok_or_else(|| {
            format!("unknown route '{value}', expected one of: /, /dashboard, /farms, /events, /crop-issues")
        })
}

fn parse_theme(value: &str) -> Result<ColorTheme, String> {
    ColorTheme::parse(value)
        .ok_or_else(|| format!("unknown theme '{value}', expected default, light or high_contrast"))
}
