//! Command dispatch logic.
//!
//! Responsibilities:
//! - Route parsed CLI arguments to the matching command handler.
//! - Build the portal client once from the resolved configuration.
//!
//! Does NOT handle:
//! - CLI structure definitions (see `args` module).
//! - Configuration loading (see `main()`).

use akyljer_client::{CropIssueFilters, EventFilters, FarmFilters, PortalClient};
use akyljer_config::Config;
use anyhow::{Context, Result};

use crate::args::{Cli, Commands, StatusCommand};
use crate::commands::{self, OutputOptions};

pub(crate) async fn run_command(cli: Cli, config: Config) -> Result<()> {
    let client = PortalClient::builder()
        .from_config(&config)
        .build()
        .context("Failed to build portal client")?;

    let output = OutputOptions::new(&cli.output, cli.output_file.clone())?;

    match cli.command {
        Commands::Districts => commands::districts::run(&client, &output).await?,
        Commands::Farms { district, search } => {
            let filters = FarmFilters { district, search };
            commands::farms::run(&client, &filters, &output).await?;
        }
        Commands::Events {
            command: Some(StatusCommand::SetStatus { id, status }),
            ..
        } => commands::events::set_status(&client, id, status, &output).await?,
        Commands::Events {
            command: None,
            district,
            event_type,
            status,
        } => {
            let filters = EventFilters {
                district,
                event_type,
                status,
            };
            commands::events::run(&client, &filters, &output).await?;
        }
        Commands::CropIssues {
            command: Some(StatusCommand::SetStatus { id, status }),
            ..
        } => commands::crop_issues::set_status(&client, id, status, &output).await?,
        Commands::CropIssues {
            command: None,
            district,
            crop_type,
            problem_type,
            severity,
            status,
        } => {
            let filters = CropIssueFilters {
                district,
                crop_type,
                problem_type,
                severity,
                status,
            };
            commands::crop_issues::run(&client, &filters, &output).await?;
        }
        Commands::Dashboard { district } => {
            commands::dashboard::run(&client, district.as_deref(), &output).await?
        }
        Commands::Health => commands::health::run(&client, &output).await?,
        Commands::Info => commands::info::run(&client, &output).await?,
    }

    Ok(())
}
