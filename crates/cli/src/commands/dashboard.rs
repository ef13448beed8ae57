//! Dashboard command implementation.

use akyljer_client::PortalClient;
use anyhow::Result;
use tracing::info;

use super::OutputOptions;

pub async fn run(
    client: &PortalClient,
    district: Option<&str>,
    output: &OutputOptions,
) -> Result<()> {
    info!(district = district.unwrap_or("all"), "Loading dashboard summary");

    let summary = client.dashboard_summary(district).await?;
    output.emit(&output.formatter().format_dashboard(&summary)?)
}
