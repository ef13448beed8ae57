//! Shared test utilities for akyljer-cli integration tests.
//!
//! Invariants / Assumptions:
//! - Every command built here ignores local `.env` files and host
//!   `AKYLJER_*` variables.

#![allow(dead_code)]

use assert_cmd::Command;

pub use akyljer_client::testing::load_fixture;
pub use wiremock::matchers::{body_json, method, path, query_param};
pub use wiremock::{Mock, MockServer, ResponseTemplate};

/// Returns a hermetic `akyljer-cli` command.
pub fn akyljer_cmd() -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("akyljer-cli");

    cmd.env("DOTENV_DISABLED", "1");

    cmd.env_remove("AKYLJER_API_BASE_URL")
        .env_remove("AKYLJER_TIMEOUT")
        .env_remove("AKYLJER_THEME")
        .env_remove("RUST_LOG");

    cmd
}

/// Returns a hermetic `akyljer-cli` command pointed at `base_url`.
pub fn akyljer_cmd_with_base_url(base_url: &str) -> Command {
    let mut cmd = akyljer_cmd();
    cmd.env("AKYLJER_API_BASE_URL", base_url);
    cmd
}

/// Mounts a `GET` mock answering with a fixture body.
pub async fn mount_fixture(server: &MockServer, route: &str, fixture: &str) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(200).set_body_json(load_fixture(fixture)))
        .mount(server)
        .await;
}
