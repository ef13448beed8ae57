//! Reference data, aggregates and probes.

use crate::client::PortalClient;
use crate::endpoints;
use crate::error::Result;
use crate::models::{ApiInfo, DashboardSummary, District, HealthStatus};

impl PortalClient {
    pub async fn list_districts(&self) -> Result<Vec<District>> {
        endpoints::list_districts(&self.http, &self.base_url).await
    }

    /// Summary across all districts, or scoped to one district code.
    pub async fn dashboard_summary(&self, district: Option<&str>) -> Result<DashboardSummary> {
        endpoints::get_dashboard_summary(&self.http, &self.base_url, district).await
    }

    pub async fn health(&self) -> Result<HealthStatus> {
        endpoints::get_health(&self.http, &self.base_url).await
    }

    pub async fn api_info(&self) -> Result<ApiInfo> {
        endpoints::get_api_info(&self.http, &self.base_url).await
    }
}
