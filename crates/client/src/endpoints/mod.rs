//! REST API endpoint implementations.
//!
//! Each endpoint is a free function over a shared `reqwest::Client` and the
//! normalized base URL. [`crate::client::PortalClient`] wraps them.

mod crop_issues;
mod dashboard;
mod districts;
mod events;
mod farms;
mod health;
mod query;
mod request;

pub use crop_issues::{list_crop_issues, update_crop_issue_status};
pub use dashboard::get_dashboard_summary;
pub use districts::list_districts;
pub use events::{list_events, update_event_status};
pub use farms::list_farms;
pub use health::{get_api_info, get_health};
pub use query::build_query;
pub use request::{decode_json, delete, get_json, send_json, send_request};
