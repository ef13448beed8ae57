//! Portal client creation.

use akyljer_client::PortalClient;
use akyljer_config::Config;
use anyhow::{Context, Result};

/// Build the portal client from the resolved configuration.
pub fn create_client(config: &Config) -> Result<PortalClient> {
    PortalClient::builder()
        .from_config(config)
        .build()
        .context("Failed to build portal client")
}
