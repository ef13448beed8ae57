//! Farms command implementation.

use akyljer_client::{FarmFilters, PortalClient};
use anyhow::Result;
use tracing::info;

use super::OutputOptions;

pub async fn run(
    client: &PortalClient,
    filters: &FarmFilters,
    output: &OutputOptions,
) -> Result<()> {
    info!(?filters, "Listing farms");

    let farms = client.list_farms(filters).await?;
    output.emit(&output.formatter().format_farms(&farms)?)
}
