//! Side effect handler tests against a mock portal API.

mod common;

use akyljer_client::{CropIssueFilters, EventFilters, FarmFilters, RecordStatus};
use common::*;
use wiremock::matchers::{body_json, method, path, query_param};

async fn mount_districts(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/api/districts/"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(load_fixture("districts/list_districts.json")),
        )
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_first_load_fetches_districts_and_records() {
    let mut harness = SideEffectsTestHarness::new().await;
    mount_districts(&harness.mock_server).await;
    Mock::given(method("GET"))
        .and(path("/api/crop-issues/"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(load_fixture("crop_issues/list_crop_issues.json")),
        )
        .expect(1)
        .mount(&harness.mock_server)
        .await;

    let result = harness
        .run(Action::LoadCropIssues {
            seq: 1,
            filters: CropIssueFilters::default(),
            with_districts: true,
        })
        .await;

    match result {
        Action::CropIssuesLoaded {
            seq,
            districts,
            records,
        } => {
            assert_eq!(seq, 1);
            let districts = districts.expect("districts requested").expect("districts ok");
            assert_eq!(districts.len(), 2);
            assert_eq!(records.expect("records ok").len(), 2);
        }
        other => panic!("unexpected action: {other:?}"),
    }
}

#[tokio::test]
async fn test_filtered_load_sends_only_set_fields() {
    let mut harness = SideEffectsTestHarness::new().await;
    Mock::given(method("GET"))
        .and(path("/api/crop-issues/"))
        .and(query_param("district", "ALM"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(load_fixture("crop_issues/list_crop_issues.json")),
        )
        .expect(1)
        .mount(&harness.mock_server)
        .await;

    let filters = CropIssueFilters {
        district: Some("ALM".to_string()),
        ..Default::default()
    };
    let result = harness
        .run(Action::LoadCropIssues {
            seq: 4,
            filters,
            with_districts: false,
        })
        .await;

    let Action::CropIssuesLoaded {
        seq, districts, ..
    } = result
    else {
        panic!("unexpected action: {result:?}");
    };
    assert_eq!(seq, 4);
    assert!(districts.is_none());

    let requests = harness
        .mock_server
        .received_requests()
        .await
        .expect("request recording is on");
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].url.query(), Some("district=ALM"));
}

#[tokio::test]
async fn test_events_network_failure_is_reported() {
    let mut harness = SideEffectsTestHarness::new().await;
    harness.client = client_for("http://127.0.0.1:1");

    let result = harness
        .run(Action::LoadEvents {
            seq: 2,
            filters: EventFilters::default(),
            with_districts: false,
        })
        .await;

    match result {
        Action::EventsLoaded { records: Err(e), .. } => {
            assert_eq!(e.status(), 0);
            assert!(e.to_string().starts_with("Network Error:"), "{e}");
        }
        other => panic!("unexpected action: {other:?}"),
    }
}

#[tokio::test]
async fn test_farm_search_is_passed_through() {
    let mut harness = SideEffectsTestHarness::new().await;
    Mock::given(method("GET"))
        .and(path("/api/farms/"))
        .and(query_param("search", "Almas"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(load_fixture("farms/list_farms.json")),
        )
        .expect(1)
        .mount(&harness.mock_server)
        .await;

    let result = harness
        .run(Action::LoadFarms {
            seq: 1,
            filters: FarmFilters {
                search: Some("Almas".to_string()),
                ..Default::default()
            },
            with_districts: false,
        })
        .await;

    assert!(matches!(
        result,
        Action::FarmsLoaded { records: Ok(ref farms), .. } if farms.len() == 2
    ));
}

#[tokio::test]
async fn test_event_status_patch() {
    let mut harness = SideEffectsTestHarness::new().await;
    Mock::given(method("PATCH"))
        .and(path("/api/events/10/"))
        .and(body_json(serde_json::json!({"status": "in_progress"})))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(load_fixture("events/update_event.json")),
        )
        .expect(1)
        .mount(&harness.mock_server)
        .await;

    let result = harness
        .run(Action::UpdateEventStatus {
            id: 10,
            status: RecordStatus::InProgress,
            previous: RecordStatus::New,
        })
        .await;

    match result {
        Action::EventStatusUpdated {
            id,
            previous,
            result: Ok(event),
        } => {
            assert_eq!(id, 10);
            assert_eq!(previous, RecordStatus::New);
            assert_eq!(event.status, RecordStatus::InProgress);
        }
        other => panic!("unexpected action: {other:?}"),
    }
}

#[tokio::test]
async fn test_crop_issue_status_patch_failure_keeps_previous() {
    let mut harness = SideEffectsTestHarness::new().await;
    Mock::given(method("PATCH"))
        .and(path("/api/crop-issues/1/"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&harness.mock_server)
        .await;

    let result = harness
        .run(Action::UpdateCropIssueStatus {
            id: 1,
            status: RecordStatus::Resolved,
            previous: RecordStatus::New,
        })
        .await;

    match result {
        Action::CropIssueStatusUpdated {
            previous,
            result: Err(e),
            ..
        } => {
            assert_eq!(previous, RecordStatus::New);
            assert_eq!(e.to_string(), "API Error: 500 Internal Server Error");
        }
        other => panic!("unexpected action: {other:?}"),
    }
}

#[tokio::test]
async fn test_dashboard_load_with_district() {
    let mut harness = SideEffectsTestHarness::new().await;
    mount_districts(&harness.mock_server).await;
    Mock::given(method("GET"))
        .and(path("/api/dashboard/summary/"))
        .and(query_param("district", "NUR"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(load_fixture("dashboard/summary.json")),
        )
        .expect(1)
        .mount(&harness.mock_server)
        .await;

    let result = harness
        .run(Action::LoadDashboard {
            seq: 3,
            district: Some("NUR".to_string()),
            with_districts: true,
        })
        .await;

    match result {
        Action::DashboardLoaded {
            seq,
            districts: Some(Ok(districts)),
            summary: Ok(summary),
        } => {
            assert_eq!(seq, 3);
            assert_eq!(districts.len(), 2);
            assert_eq!(summary.open_outbreaks, 2);
        }
        other => panic!("unexpected action: {other:?}"),
    }
}

#[tokio::test]
async fn test_health_probe() {
    let mut harness = SideEffectsTestHarness::new().await;
    Mock::given(method("GET"))
        .and(path("/api/health/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(load_fixture("health/health.json")))
        .mount(&harness.mock_server)
        .await;

    let actions = harness.handle_and_collect(Action::LoadHealth, 1).await;
    assert_eq!(actions.len(), 1);
    assert!(matches!(
        &actions[0],
        Action::HealthLoaded(Ok(status)) if status.is_ok()
    ));
}

#[tokio::test]
async fn test_non_request_actions_have_no_side_effects() {
    let mut harness = SideEffectsTestHarness::new().await;
    let actions = harness.handle_and_collect(Action::Reload, 1).await;
    assert!(actions.is_empty());
}
