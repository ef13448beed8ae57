//! Crop issues command implementation.

use akyljer_client::{CropIssueFilters, Labeled, PortalClient, RecordStatus};
use anyhow::{Context, Result};
use tracing::info;

use super::OutputOptions;

pub async fn run(
    client: &PortalClient,
    filters: &CropIssueFilters,
    output: &OutputOptions,
) -> Result<()> {
    info!(?filters, "Listing crop issues");

    let issues = client.list_crop_issues(filters).await?;
    output.emit(&output.formatter().format_crop_issues(&issues)?)
}

pub async fn set_status(
    client: &PortalClient,
    id: u64,
    status: RecordStatus,
    output: &OutputOptions,
) -> Result<()> {
    info!(id, status = status.as_str(), "Updating crop issue status");

    let issue = client
        .update_crop_issue_status(id, status)
        .await
        .with_context(|| format!("Failed to update crop issue {id}"))?;

    output.emit(&output.formatter().format_crop_issues(std::slice::from_ref(&issue))?)
}
