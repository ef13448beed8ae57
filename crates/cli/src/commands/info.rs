//! Info command implementation.

use akyljer_client::PortalClient;
use anyhow::Result;

use super::OutputOptions;

pub async fn run(client: &PortalClient, output: &OutputOptions) -> Result<()> {
    let info = client.api_info().await?;
    output.emit(&output.formatter().format_api_info(&info)?)
}
