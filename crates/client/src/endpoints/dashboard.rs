//! Dashboard aggregate summary.

use reqwest::Client;

use crate::endpoints::get_json;
use crate::error::Result;
use crate::models::DashboardSummary;

/// Fetch the summary, optionally scoped to one district code.
pub async fn get_dashboard_summary(
    client: &Client,
    base_url: &str,
    district: Option<&str>,
) -> Result<DashboardSummary> {
    let params = [("district", district.unwrap_or_default())];
    get_json(client, base_url, "/api/dashboard/summary/", &params).await
}
