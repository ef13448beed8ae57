//! Akyl Jer portal REST client.
//!
//! This crate provides a typed client for the portal backend: districts,
//! farms, veterinary events, crop issues, the dashboard summary and the
//! health probe. Failures are normalized into [`ClientError`], which carries
//! either an HTTP status or status `0` for transport and parse failures.
//! No request is ever retried.

pub mod client;
pub mod endpoints;
pub mod error;
pub mod models;
mod serde_helpers;

#[cfg(any(feature = "test-utils", test))]
pub mod testing;

pub use client::PortalClient;
pub use client::builder::PortalClientBuilder;
pub use error::{ClientError, Result};
pub use models::{
    AnimalType, ApiInfo, CropIssue, CropIssueFilters, DashboardSummary, DiseaseCount, District,
    DistrictFarmCount, Event, EventFilters, EventType, Farm, FarmFilters, FarmSummary,
    HealthStatus, Herd, Labeled, ProblemType, QueryFilters, RecordStatus, Severity, StatusUpdate,
};
