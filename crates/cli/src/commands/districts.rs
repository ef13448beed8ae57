//! Districts command implementation.

use akyljer_client::PortalClient;
use anyhow::Result;
use tracing::info;

use super::OutputOptions;

pub async fn run(client: &PortalClient, output: &OutputOptions) -> Result<()> {
    info!("Listing districts");

    let districts = client.list_districts().await?;
    output.emit(&output.formatter().format_districts(&districts)?)
}
