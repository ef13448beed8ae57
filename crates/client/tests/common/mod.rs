//! Common test utilities for integration tests.
//!
//! # Invariants
//! - Fixtures are loaded from the `fixtures/` directory relative to the crate root
//!
//! # What this does NOT handle
//! - Mock server setup (use wiremock directly in tests)

#[allow(unused_imports)]
pub use akyljer_client::testing::{client_for, load_fixture};

#[allow(unused_imports)]
pub use akyljer_client::endpoints;
#[allow(unused_imports)]
pub use reqwest::Client;
#[allow(unused_imports)]
pub use wiremock::{Mock, MockServer, ResponseTemplate};

/// Query strings of every request the mock server has received, in order.
#[allow(dead_code)]
pub async fn received_queries(mock_server: &MockServer) -> Vec<Option<String>> {
    mock_server
        .received_requests()
        .await
        .unwrap_or_default()
        .iter()
        .map(|r| r.url.query().map(str::to_string))
        .collect()
}
