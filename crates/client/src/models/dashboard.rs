use serde::{Deserialize, Serialize};

/// Precomputed aggregate counters. Nothing here is derived client-side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardSummary {
    pub total_farms: u64,
    pub total_animals: u64,
    pub open_outbreaks: u64,
    #[serde(default)]
    pub farms_by_district: Vec<DistrictFarmCount>,
    #[serde(default)]
    pub outbreaks_by_disease: Vec<DiseaseCount>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DistrictFarmCount {
    pub district_code: String,
    pub district_name: String,
    pub farm_count: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiseaseCount {
    pub disease_suspected: String,
    pub count: u64,
}
