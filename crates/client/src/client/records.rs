//! Farm, event and crop issue methods.

use crate::client::PortalClient;
use crate::endpoints;
use crate::error::Result;
use crate::models::{
    CropIssue, CropIssueFilters, Event, EventFilters, Farm, FarmFilters, RecordStatus,
};

impl PortalClient {
    pub async fn list_farms(&self, filters: &FarmFilters) -> Result<Vec<Farm>> {
        endpoints::list_farms(&self.http, &self.base_url, filters).await
    }

    pub async fn list_events(&self, filters: &EventFilters) -> Result<Vec<Event>> {
        endpoints::list_events(&self.http, &self.base_url, filters).await
    }

    /// Returns the event as stored by the backend after the patch.
    pub async fn update_event_status(&self, id: u64, status: RecordStatus) -> Result<Event> {
        endpoints::update_event_status(&self.http, &self.base_url, id, status).await
    }

    pub async fn list_crop_issues(&self, filters: &CropIssueFilters) -> Result<Vec<CropIssue>> {
        endpoints::list_crop_issues(&self.http, &self.base_url, filters).await
    }

    /// Returns the crop issue as stored by the backend after the patch.
    pub async fn update_crop_issue_status(
        &self,
        id: u64,
        status: RecordStatus,
    ) -> Result<CropIssue> {
        endpoints::update_crop_issue_status(&self.http, &self.base_url, id, status).await
    }
}
