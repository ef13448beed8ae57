//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define the CLI structure using clap derive macros.
//! - Parse filter values into the client's closed enums at the edge.
//!
//! Non-responsibilities:
//! - Does not execute commands (see `dispatch` module).
//! - Does not resolve configuration (see `main()`).

use std::path::PathBuf;

use akyljer_client::{EventType, ProblemType, RecordStatus, Severity};
use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "akyljer-cli")]
#[command(about = "Akyl Jer CLI - Query the agricultural portal from the command line", long_about = None)]
#[command(version)]
#[command(
    after_help = "Examples:\n  akyljer-cli districts\n  akyljer-cli farms --district ALM --search Aibek\n  akyljer-cli events --event-type disease_report --status new\n  akyljer-cli crop-issues set-status 12 resolved\n  akyljer-cli -o json dashboard --district ALM\n"
)]
pub struct Cli {
    /// Base URL of the portal backend (e.g., http://localhost:8000)
    #[arg(short, long, global = true, env = "AKYLJER_API_BASE_URL")]
    pub base_url: Option<String>,

    /// Request timeout in seconds
    #[arg(long, global = true, env = "AKYLJER_TIMEOUT")]
    pub timeout: Option<u64>,

    /// Output format (table, json, csv, yaml)
    #[arg(short, long, global = true, default_value = "table")]
    pub output: String,

    /// Output file path (saves results to file instead of stdout)
    #[arg(long, global = true, value_name = "FILE")]
    pub output_file: Option<PathBuf>,

    /// Log line format on stderr
    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Text)]
    pub log_format: LogFormat,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List districts
    Districts,

    /// List farms
    Farms {
        /// District code (e.g., ALM)
        #[arg(short, long)]
        district: Option<String>,

        /// Match against farmer name and phone
        #[arg(short, long)]
        search: Option<String>,
    },

    /// List veterinary events, or change the status of one
    Events {
        #[command(subcommand)]
        command: Option<StatusCommand>,

        /// District code (e.g., ALM)
        #[arg(short, long)]
        district: Option<String>,

        /// Event type (vet_visit, vaccination, disease_report, mortality)
        #[arg(long)]
        event_type: Option<EventType>,

        /// Workflow status (new, in_progress, resolved)
        #[arg(long)]
        status: Option<RecordStatus>,
    },

    /// List crop issues, or change the status of one
    CropIssues {
        #[command(subcommand)]
        command: Option<StatusCommand>,

        /// District code (e.g., ALM)
        #[arg(short, long)]
        district: Option<String>,

        /// Crop name (e.g., wheat)
        #[arg(long)]
        crop_type: Option<String>,

        /// Problem type (pest, disease, nutrient_deficiency, water_stress, weed, other)
        #[arg(long)]
        problem_type: Option<ProblemType>,

        /// Severity (low, medium, high)
        #[arg(long)]
        severity: Option<Severity>,

        /// Workflow status (new, in_progress, resolved)
        #[arg(long)]
        status: Option<RecordStatus>,
    },

    /// Show the aggregate dashboard counters
    Dashboard {
        /// Scope the counters to one district code
        #[arg(short, long)]
        district: Option<String>,
    },

    /// Probe the backend health endpoint
    Health,

    /// Show the API name, version and endpoint map
    Info,
}

#[derive(Subcommand)]
pub enum StatusCommand {
    /// Set the workflow status of one record
    SetStatus {
        /// Record id
        id: u64,

        /// New status (new, in_progress, resolved)
        status: RecordStatus,
    },
}
