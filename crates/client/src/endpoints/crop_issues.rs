//! Crop issue listing and status updates.

use reqwest::{Client, Method};

use crate::endpoints::{get_json, send_json};
use crate::error::Result;
use crate::models::{CropIssue, CropIssueFilters, QueryFilters, RecordStatus, StatusUpdate};

pub async fn list_crop_issues(
    client: &Client,
    base_url: &str,
    filters: &CropIssueFilters,
) -> Result<Vec<CropIssue>> {
    get_json(client, base_url, "/api/crop-issues/", &filters.query_pairs()).await
}

/// Patch the status of one crop issue and return the server's representation.
pub async fn update_crop_issue_status(
    client: &Client,
    base_url: &str,
    id: u64,
    status: RecordStatus,
) -> Result<CropIssue> {
    let path = format!("/api/crop-issues/{id}/");
    send_json(client, base_url, Method::PATCH, &path, Some(&StatusUpdate { status })).await
}
