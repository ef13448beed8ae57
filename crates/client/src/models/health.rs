use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::labels::RecordStatus;

/// Response of the health probe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
}

impl HealthStatus {
    pub fn is_ok(&self) -> bool {
        self.status.eq_ignore_ascii_case("ok")
    }
}

/// Response of the API root: name, version and the endpoint map.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiInfo {
    pub message: String,
    pub version: String,
    #[serde(default)]
    pub endpoints: BTreeMap<String, String>,
}

/// Body of a status patch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusUpdate {
    pub status: RecordStatus,
}
