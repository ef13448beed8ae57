//! Events command implementation.
//!
//! The status patch is sent for any event type. Only the terminal portal
//! refuses to edit vaccinations and vet visits; the backend is the authority
//! here.

use akyljer_client::{EventFilters, Labeled, PortalClient, RecordStatus};
use anyhow::{Context, Result};
use tracing::{info, warn};

use super::OutputOptions;

pub async fn run(
    client: &PortalClient,
    filters: &EventFilters,
    output: &OutputOptions,
) -> Result<()> {
    info!(?filters, "Listing events");

    let events = client.list_events(filters).await?;
    output.emit(&output.formatter().format_events(&events)?)
}

pub async fn set_status(
    client: &PortalClient,
    id: u64,
    status: RecordStatus,
    output: &OutputOptions,
) -> Result<()> {
    info!(id, status = status.as_str(), "Updating event status");

    let event = client
        .update_event_status(id, status)
        .await
        .with_context(|| format!("Failed to update event {id}"))?;

    if !event.is_status_editable() {
        warn!(
            id,
            event_type = event.event_type.as_str(),
            "Status set on a non-workflow event type"
        );
    }

    output.emit(&output.formatter().format_events(std::slice::from_ref(&event))?)
}
