//! Farm, herd and embedded farm summary models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::labels::AnimalType;

/// A group of animals of one species owned by a single farm.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Herd {
    pub id: u64,
    pub animal_type: AnimalType,
    pub headcount: u64,
}

/// A registered farm with its herds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Farm {
    pub id: u64,
    pub farmer_name: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub village: String,
    #[serde(default)]
    pub location_lat: Option<f64>,
    #[serde(default)]
    pub location_lng: Option<f64>,
    /// District primary key.
    pub district: u64,
    #[serde(default)]
    pub district_name: String,
    #[serde(default)]
    pub district_code: String,
    #[serde(default)]
    pub herds: Vec<Herd>,
    /// Computed by the backend; never summed client-side.
    #[serde(default)]
    pub total_animals: u64,
    #[serde(with = "crate::serde_helpers::timestamp")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "crate::serde_helpers::timestamp")]
    pub updated_at: DateTime<Utc>,
}

impl Farm {
    /// `"lat, lng"` when both coordinates are present.
    pub fn location(&self) -> Option<String> {
        match (self.location_lat, self.location_lng) {
            (Some(lat), Some(lng)) => Some(format!("{lat:.4}, {lng:.4}")),
            _ => None,
        }
    }

    /// Herds rendered as `"Cattle 40, Sheep 120"`.
    pub fn herd_summary(&self) -> String {
        self.herds
            .iter()
            .map(|h| format!("{} {}", h.animal_type, h.headcount))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Farm fields embedded in events and crop issues.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FarmSummary {
    pub farm_id: u64,
    pub farmer_name: String,
    #[serde(default)]
    pub village: String,
    #[serde(default)]
    pub district_name: String,
}
