//! District and farm endpoint tests.

mod common;

use akyljer_client::{AnimalType, FarmFilters};
use common::*;
use wiremock::matchers::{header, method, path, query_param};

#[tokio::test]
async fn test_list_districts() {
    let mock_server = MockServer::start().await;
    let fixture = load_fixture("districts/list_districts.json");

    Mock::given(method("GET"))
        .and(path("/api/districts/"))
        .and(header("accept", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&fixture))
        .mount(&mock_server)
        .await;

    let client = Client::new();
    let districts = endpoints::list_districts(&client, &mock_server.uri())
        .await
        .unwrap();

    assert_eq!(districts.len(), 2);
    assert_eq!(districts[0].code, "ALM");
    assert_eq!(districts[1].name, "Nur-Sultan Region");
}

#[tokio::test]
async fn test_list_farms_unfiltered_sends_no_query_string() {
    let mock_server = MockServer::start().await;
    let fixture = load_fixture("farms/list_farms.json");

    Mock::given(method("GET"))
        .and(path("/api/farms/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&fixture))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server.uri());
    let farms = client.list_farms(&FarmFilters::default()).await.unwrap();

    assert_eq!(farms.len(), 2);
    assert_eq!(farms[0].herds[1].animal_type, AnimalType::Sheep);
    assert_eq!(farms[0].total_animals, 165);
    assert_eq!(farms[1].location_lat, None);
    assert_eq!(received_queries(&mock_server).await, vec![None]);
}

#[tokio::test]
async fn test_list_farms_passes_district_and_search() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/farms/"))
        .and(query_param("district", "ALM"))
        .and(query_param("search", "Almas"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server.uri());
    let filters = FarmFilters {
        district: Some("ALM".to_string()),
        search: Some("Almas".to_string()),
    };
    let farms = client.list_farms(&filters).await.unwrap();
    assert!(farms.is_empty());
}

#[tokio::test]
async fn test_list_farms_omits_empty_search() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/farms/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server.uri());
    let filters = FarmFilters {
        district: Some("NUR".to_string()),
        search: Some(String::new()),
    };
    client.list_farms(&filters).await.unwrap();

    assert_eq!(
        received_queries(&mock_server).await,
        vec![Some("district=NUR".to_string())]
    );
}
