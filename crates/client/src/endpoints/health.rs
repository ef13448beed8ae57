//! Health probe and API root.

use reqwest::Client;

use crate::endpoints::get_json;
use crate::error::Result;
use crate::models::{ApiInfo, HealthStatus};

pub async fn get_health(client: &Client, base_url: &str) -> Result<HealthStatus> {
    let none: [(&str, &str); 0] = [];
    get_json(client, base_url, "/api/health/", &none).await
}

pub async fn get_api_info(client: &Client, base_url: &str) -> Result<ApiInfo> {
    let none: [(&str, &str); 0] = [];
    get_json(client, base_url, "/api/", &none).await
}
