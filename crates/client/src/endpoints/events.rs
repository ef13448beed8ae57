//! Veterinary event listing and status updates.

use reqwest::{Client, Method};

use crate::endpoints::{get_json, send_json};
use crate::error::Result;
use crate::models::{Event, EventFilters, QueryFilters, RecordStatus, StatusUpdate};

pub async fn list_events(client: &Client, base_url: &str, filters: &EventFilters) -> Result<Vec<Event>> {
    get_json(client, base_url, "/api/events/", &filters.query_pairs()).await
}

/// Patch the status of one event and return the server's representation.
pub async fn update_event_status(
    client: &Client,
    base_url: &str,
    id: u64,
    status: RecordStatus,
) -> Result<Event> {
    let path = format!("/api/events/{id}/");
    send_json(client, base_url, Method::PATCH, &path, Some(&StatusUpdate { status })).await
}
