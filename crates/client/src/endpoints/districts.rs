//! District reference data.

use reqwest::Client;

use crate::endpoints::get_json;
use crate::error::Result;
use crate::models::District;

pub async fn list_districts(client: &Client, base_url: &str) -> Result<Vec<District>> {
    let none: [(&str, &str); 0] = [];
    get_json(client, base_url, "/api/districts/", &none).await
}
