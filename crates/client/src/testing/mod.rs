//! Test utilities for the portal client.
//!
//! ```rust,ignore
//! use akyljer_client::testing::{client_for, load_fixture};
//!
//! let fixture = load_fixture("events/list_events.json");
//! let client = client_for(&mock_server.uri());
//! ```

use std::path::Path;
use std::time::Duration;

use crate::client::PortalClient;

/// Load a JSON fixture file from the fixtures directory.
///
/// # Panics
/// - If the fixture file cannot be read or is not valid JSON
pub fn load_fixture(fixture_path: &str) -> serde_json::Value {
    let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
    let full_path = manifest_dir.join("fixtures").join(fixture_path);
    let content = std::fs::read_to_string(&full_path)
        .unwrap_or_else(|_| panic!("Failed to load fixture: {}", full_path.display()));
    serde_json::from_str(&content).expect("Invalid JSON in fixture")
}

/// Client pointed at `base_url` with a short timeout.
///
/// # Panics
/// - If the client cannot be built
pub fn client_for(base_url: &str) -> PortalClient {
    PortalClient::builder()
        .base_url(base_url.to_string())
        .timeout(Duration::from_secs(5))
        .build()
        .expect("test client should build")
}
