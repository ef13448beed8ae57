//! Filter sets for the list endpoints.
//!
//! Responsibilities:
//! - Hold the partial filter state of each list.
//! - Produce the query parameters for a fetch.
//!
//! Invariants:
//! - Only fields with a non-empty value become query parameters. An absent
//!   field and an empty string are indistinguishable on the wire.
//! - Values are sent verbatim; no trimming or case folding.

use serde::{Deserialize, Serialize};

use super::labels::{EventType, Labeled, ProblemType, RecordStatus, Severity};

/// A filter set that can be turned into query parameters.
pub trait QueryFilters: Clone + Default + PartialEq + Send + Sync + 'static {
    /// Candidate parameters in a stable order, including empty ones.
    fn fields(&self) -> Vec<(&'static str, Option<String>)>;

    /// The `district` code currently selected, if any.
    fn district(&self) -> Option<&str>;

    fn set_district(&mut self, district: Option<String>);

    /// Non-empty parameters only.
    fn query_pairs(&self) -> Vec<(&'static str, String)> {
        self.fields()
            .into_iter()
            .filter_map(|(key, value)| value.filter(|v| !v.is_empty()).map(|v| (key, v)))
            .collect()
    }

    fn is_empty(&self) -> bool {
        self.query_pairs().is_empty()
    }
}

fn label_value<T: Labeled>(value: Option<T>) -> Option<String> {
    value.map(|v| v.as_str().to_string())
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FarmFilters {
    pub district: Option<String>,
    /// Matched against farmer name and phone by the backend.
    pub search: Option<String>,
}

impl QueryFilters for FarmFilters {
    fn fields(&self) -> Vec<(&'static str, Option<String>)> {
        vec![
            ("district", self.district.clone()),
            ("search", self.search.clone()),
        ]
    }

    fn district(&self) -> Option<&str> {
        self.district.as_deref()
    }

    fn set_district(&mut self, district: Option<String>) {
        self.district = district;
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventFilters {
    pub district: Option<String>,
    pub event_type: Option<EventType>,
    pub status: Option<RecordStatus>,
}

impl QueryFilters for EventFilters {
    fn fields(&self) -> Vec<(&'static str, Option<String>)> {
        vec![
            ("district", self.district.clone()),
            ("event_type", label_value(self.event_type)),
            ("status", label_value(self.status)),
        ]
    }

    fn district(&self) -> Option<&str> {
        self.district.as_deref()
    }

    fn set_district(&mut self, district: Option<String>) {
        self.district = district;
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CropIssueFilters {
    pub district: Option<String>,
    pub crop_type: Option<String>,
    pub problem_type: Option<ProblemType>,
    pub severity: Option<Severity>,
    pub status: Option<RecordStatus>,
}

impl QueryFilters for CropIssueFilters {
    fn fields(&self) -> Vec<(&'static str, Option<String>)> {
        vec![
            ("district", self.district.clone()),
            ("crop_type", self.crop_type.clone()),
            ("problem_type", label_value(self.problem_type)),
            ("severity", label_value(self.severity)),
            ("status", label_value(self.status)),
        ]
    }

    fn district(&self) -> Option<&str> {
        self.district.as_deref()
    }

    fn set_district(&mut self, district: Option<String>) {
        self.district = district;
    }
}
