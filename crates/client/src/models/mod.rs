//! Read models for the portal backend.
//!
//! Field names mirror the backend JSON one-to-one. Unknown fields (including
//! server-rendered `*_display` labels) are ignored on input.

mod crop_issue;
mod dashboard;
mod district;
mod event;
mod farm;
mod filters;
mod health;
mod labels;

pub use crop_issue::CropIssue;
pub use dashboard::{DashboardSummary, DiseaseCount, DistrictFarmCount};
pub use district::District;
pub use event::Event;
pub use farm::{Farm, FarmSummary, Herd};
pub use filters::{CropIssueFilters, EventFilters, FarmFilters, QueryFilters};
pub use health::{ApiInfo, HealthStatus, StatusUpdate};
pub use labels::{AnimalType, EventType, Labeled, ProblemType, RecordStatus, Severity};
