//! Health command implementation.

use akyljer_client::PortalClient;
use anyhow::{Result, bail};
use tracing::info;

use super::OutputOptions;

/// Prints the probe result, then fails when the backend reports anything but `ok`.
pub async fn run(client: &PortalClient, output: &OutputOptions) -> Result<()> {
    info!("Connecting to {}", client.base_url());

    let health = client.health().await?;
    output.emit(&output.formatter().format_health(&health)?)?;

    if !health.is_ok() {
        bail!("Backend reported status '{}'", health.status);
    }
    Ok(())
}
