//! Farm listing.

use reqwest::Client;

use crate::endpoints::get_json;
use crate::error::Result;
use crate::models::{Farm, FarmFilters, QueryFilters};

/// List farms. `search` matches farmer name and phone on the backend.
pub async fn list_farms(client: &Client, base_url: &str, filters: &FarmFilters) -> Result<Vec<Farm>> {
    get_json(client, base_url, "/api/farms/", &filters.query_pairs()).await
}
