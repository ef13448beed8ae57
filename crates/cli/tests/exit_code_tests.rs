//! Integration tests for structured exit codes.

mod common;

use common::*;
use predicates::prelude::*;

#[tokio::test]
async fn test_success_returns_exit_code_0() {
    let server = MockServer::start().await;
    mount_fixture(&server, "/api/health/", "health/health.json").await;

    akyljer_cmd_with_base_url(&server.uri())
        .arg("health")
        .assert()
        .code(0)
        .stdout("Status:\tok\n");
}

#[test]
fn test_connection_refused_returns_exit_code_3() {
    akyljer_cmd_with_base_url("http://127.0.0.1:1")
        .arg("health")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Network Error"));
}

#[tokio::test]
async fn test_bad_request_returns_exit_code_5() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/crop-issues/"))
        .respond_with(ResponseTemplate::new(400))
        .mount(&server)
        .await;

    akyljer_cmd_with_base_url(&server.uri())
        .arg("crop-issues")
        .assert()
        .code(5);
}

#[tokio::test]
async fn test_malformed_body_returns_exit_code_5() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/districts/"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    akyljer_cmd_with_base_url(&server.uri())
        .arg("districts")
        .assert()
        .code(5);
}

#[tokio::test]
async fn test_service_unavailable_returns_exit_code_8() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/dashboard/summary/"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    akyljer_cmd_with_base_url(&server.uri())
        .arg("dashboard")
        .assert()
        .code(8)
        .stderr(predicate::str::contains("503"));
}

#[tokio::test]
async fn test_retryable_failure_is_logged() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/health/"))
        .respond_with(ResponseTemplate::new(502))
        .mount(&server)
        .await;

    akyljer_cmd_with_base_url(&server.uri())
        .env("RUST_LOG", "warn")
        .arg("health")
        .assert()
        .code(8)
        .stderr(predicate::str::contains("retrying may succeed"));
}

#[tokio::test]
async fn test_not_found_is_not_logged_as_retryable() {
    let server = MockServer::start().await;
    Mock::given(method("PATCH"))
        .and(path("/api/events/404/"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    akyljer_cmd_with_base_url(&server.uri())
        .env("RUST_LOG", "warn")
        .args(["events", "set-status", "404", "resolved"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("retrying may succeed").not());
}

#[tokio::test]
async fn test_server_error_returns_exit_code_1() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/farms/"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    akyljer_cmd_with_base_url(&server.uri())
        .arg("farms")
        .assert()
        .code(1);
}

#[tokio::test]
async fn test_unhealthy_status_fails_after_printing() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/health/"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({"status": "degraded"})),
        )
        .mount(&server)
        .await;

    akyljer_cmd_with_base_url(&server.uri())
        .arg("health")
        .assert()
        .code(1)
        .stdout("Status:\tdegraded\n")
        .stderr(predicate::str::contains("degraded"));
}

#[test]
fn test_invalid_base_url_is_rejected_at_startup() {
    akyljer_cmd()
        .args(["--base-url", "ftp://portal.example.kg", "districts"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Failed to build configuration"));
}
