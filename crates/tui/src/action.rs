//! Action protocol for the terminal portal.
//!
//! Actions cover three kinds of messages travelling through one channel:
//! - user intents produced by [`crate::App::handle_input`],
//! - requests returned by [`crate::App::update`] and executed by
//!   [`crate::runtime::side_effects::handle_side_effects`],
//! - results sent back by the spawned request tasks.
//!
//! Every list and dashboard request carries the sequence number issued by its
//! controller; results echo it so late responses can be discarded.

use std::sync::Arc;

use akyljer_client::{
    ClientError, CropIssue, CropIssueFilters, DashboardSummary, District, Event, EventFilters,
    Farm, FarmFilters, HealthStatus, RecordStatus,
};
use crossterm::event::KeyEvent;

use crate::app::Route;

/// Result type carried by result actions. Errors are shared so actions stay `Clone`.
pub type ApiResult<T> = Result<T, Arc<ClientError>>;

#[derive(Debug, Clone)]
pub enum Action {
    // Control
    Quit,
    Tick,
    Input(KeyEvent),
    Resize(u16, u16),

    // Intents
    Navigate(Route),
    NextScreen,
    PreviousScreen,
    SelectNext,
    SelectPrevious,
    CycleDistrict,
    CycleType,
    CycleStatus,
    CycleSeverity,
    /// Apply the free-text filter of the current list (`None` clears it).
    ApplyTextFilter(Option<String>),
    ClearFilters,
    Reload,
    DismissError,
    /// Set the status of the selected row.
    SetSelectedStatus(RecordStatus),

    // Requests
    LoadFarms {
        seq: u64,
        filters: FarmFilters,
        with_districts: bool,
    },
    LoadEvents {
        seq: u64,
        filters: EventFilters,
        with_districts: bool,
    },
    LoadCropIssues {
        seq: u64,
        filters: CropIssueFilters,
        with_districts: bool,
    },
    LoadDashboard {
        seq: u64,
        district: Option<String>,
        with_districts: bool,
    },
    LoadHealth,
    UpdateEventStatus {
        id: u64,
        status: RecordStatus,
        previous: RecordStatus,
    },
    UpdateCropIssueStatus {
        id: u64,
        status: RecordStatus,
        previous: RecordStatus,
    },

    // Results
    FarmsLoaded {
        seq: u64,
        districts: Option<ApiResult<Vec<District>>>,
        records: ApiResult<Vec<Farm>>,
    },
    EventsLoaded {
        seq: u64,
        districts: Option<ApiResult<Vec<District>>>,
        records: ApiResult<Vec<Event>>,
    },
    CropIssuesLoaded {
        seq: u64,
        districts: Option<ApiResult<Vec<District>>>,
        records: ApiResult<Vec<CropIssue>>,
    },
    DashboardLoaded {
        seq: u64,
        districts: Option<ApiResult<Vec<District>>>,
        summary: ApiResult<DashboardSummary>,
    },
    HealthLoaded(ApiResult<HealthStatus>),
    EventStatusUpdated {
        id: u64,
        previous: RecordStatus,
        result: ApiResult<Event>,
    },
    CropIssueStatusUpdated {
        id: u64,
        previous: RecordStatus,
        result: ApiResult<CropIssue>,
    },
}

impl Action {
    /// Stable variant name for tracing. Never includes payloads.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Quit => "Quit",
            Self::Tick => "Tick",
            Self::Input(_) => "Input",
            Self::Resize(..) => "Resize",
            Self::Navigate(_) => "Navigate",
            Self::NextScreen => "NextScreen",
            Self::PreviousScreen => "PreviousScreen",
            Self::SelectNext => "SelectNext",
            Self::SelectPrevious => "SelectPrevious",
            Self::CycleDistrict => "CycleDistrict",
            Self::CycleType => "CycleType",
            Self::CycleStatus => "CycleStatus",
            Self::CycleSeverity => "CycleSeverity",
            Self::ApplyTextFilter(_) => "ApplyTextFilter",
            Self::ClearFilters => "ClearFilters",
            Self::Reload => "Reload",
            Self::DismissError => "DismissError",
            Self::SetSelectedStatus(_) => "SetSelectedStatus",
            Self::LoadFarms { .. } => "LoadFarms",
            Self::LoadEvents { .. } => "LoadEvents",
            Self::LoadCropIssues { .. } => "LoadCropIssues",
            Self::LoadDashboard { .. } => "LoadDashboard",
            Self::LoadHealth => "LoadHealth",
            Self::UpdateEventStatus { .. } => "UpdateEventStatus",
            Self::UpdateCropIssueStatus { .. } => "UpdateCropIssueStatus",
            Self::FarmsLoaded { .. } => "FarmsLoaded",
            Self::EventsLoaded { .. } => "EventsLoaded",
            Self::CropIssuesLoaded { .. } => "CropIssuesLoaded",
            Self::DashboardLoaded { .. } => "DashboardLoaded",
            Self::HealthLoaded(_) => "HealthLoaded",
            Self::EventStatusUpdated { .. } => "EventStatusUpdated",
            Self::CropIssueStatusUpdated { .. } => "CropIssueStatusUpdated",
        }
    }

    /// True for actions executed by the side-effect runtime.
    pub fn is_request(&self) -> bool {
        matches!(
            self,
            Self::LoadFarms { .. }
                | Self::LoadEvents { .. }
                | Self::LoadCropIssues { .. }
                | Self::LoadDashboard { .. }
                | Self::LoadHealth
                | Self::UpdateEventStatus { .. }
                | Self::UpdateCropIssueStatus { .. }
        )
    }
}
