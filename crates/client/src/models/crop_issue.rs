use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::farm::FarmSummary;
use super::labels::{ProblemType, RecordStatus, Severity};

/// An agronomic problem reported for a farm.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CropIssue {
    pub id: u64,
    pub farm: u64,
    pub farm_summary: FarmSummary,
    pub crop_type: String,
    pub problem_type: ProblemType,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub severity: Severity,
    #[serde(
        default,
        deserialize_with = "crate::serde_helpers::opt_f64_from_string_or_number"
    )]
    pub area_affected_ha: Option<f64>,
    pub status: RecordStatus,
    #[serde(default)]
    pub reported_via: String,
    #[serde(with = "crate::serde_helpers::timestamp")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "crate::serde_helpers::timestamp")]
    pub updated_at: DateTime<Utc>,
}
