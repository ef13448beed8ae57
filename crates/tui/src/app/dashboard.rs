//! Dashboard controller and API health state.
//!
//! Responsibilities:
//! - Fetch districts once and the summary for the selected district.
//! - Track the API health probe result.
//!
//! Invariants:
//! - Counters and breakdowns come straight from the summary payload.
//! - Only the response to the latest summary request is applied.

use akyljer_client::{DashboardSummary, District, HealthStatus};
use tracing::debug;

use crate::action::{Action, ApiResult};
use crate::app::list_view::next_district;

/// Health of the portal API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HealthState {
    #[default]
    Unknown,
    Healthy,
    Unhealthy,
}

impl HealthState {
    pub fn from_result(result: &ApiResult<HealthStatus>) -> Self {
        match result {
            Ok(status) if status.is_ok() => Self::Healthy,
            Ok(_) | Err(_) => Self::Unhealthy,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Unknown => "Unknown",
            Self::Healthy => "Healthy",
            Self::Unhealthy => "Unhealthy",
        }
    }
}

#[derive(Debug, Default)]
pub struct DashboardView {
    pub districts: Vec<District>,
    pub selected_district: Option<String>,
    pub summary: Option<DashboardSummary>,
    pub loading: bool,
    pub error: Option<String>,
    mounted: bool,
    latest_seq: u64,
}

impl DashboardView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    pub fn mount(&mut self) -> Option<Action> {
        if self.mounted {
            return None;
        }
        self.mounted = true;
        Some(self.begin_load(true))
    }

    pub fn reload(&mut self) -> Action {
        self.begin_load(self.districts.is_empty())
    }

    fn begin_load(&mut self, with_districts: bool) -> Action {
        self.latest_seq += 1;
        self.loading = true;
        self.error = None;
        Action::LoadDashboard {
            seq: self.latest_seq,
            district: self.selected_district.clone(),
            with_districts,
        }
    }

    /// Select the next district (or all districts) and re-fetch the summary.
    pub fn cycle_district(&mut self) -> Action {
        self.selected_district = next_district(&self.districts, self.selected_district.as_deref());
        self.reload()
    }

    pub fn clear_district(&mut self) -> Option<Action> {
        self.selected_district.take()?;
        Some(self.reload())
    }

    pub fn apply_loaded(
        &mut self,
        seq: u64,
        districts: Option<ApiResult<Vec<District>>>,
        summary: ApiResult<DashboardSummary>,
    ) -> bool {
        if seq != self.latest_seq {
            debug!(seq, latest = self.latest_seq, "discarding stale dashboard response");
            return false;
        }
        self.loading = false;
        if let Some(districts) = districts {
            match districts {
                Ok(d) => self.districts = d,
                Err(e) => self.error = Some(format!("Failed to load districts: {e}")),
            }
        }
        match summary {
            Ok(summary) => self.summary = Some(summary),
            Err(e) => {
                self.summary = None;
                self.error = Some(format!("Failed to load dashboard: {e}"));
            }
        }
        true
    }

    /// Name of the selected district for display, `"All districts"` when unset.
    pub fn district_label(&self) -> String {
        match &self.selected_district {
            None => "All districts".to_string(),
            Some(code) => self
                .districts
                .iter()
                .find(|d| &d.code == code)
                .map_or_else(|| code.clone(), |d| d.name.clone()),
        }
    }

    pub fn dismiss_error(&mut self) {
        self.error = None;
    }
}
