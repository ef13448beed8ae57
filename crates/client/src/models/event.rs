use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::farm::FarmSummary;
use super::labels::{EventType, RecordStatus};

/// A veterinary event reported for a farm.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: u64,
    pub farm: u64,
    pub farm_summary: FarmSummary,
    pub event_type: EventType,
    #[serde(default)]
    pub disease_suspected: Option<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub animals_affected: Option<u64>,
    pub status: RecordStatus,
    #[serde(with = "crate::serde_helpers::timestamp")]
    pub created_at: DateTime<Utc>,
}

impl Event {
    pub fn is_status_editable(&self) -> bool {
        self.event_type.is_status_editable()
    }
}
