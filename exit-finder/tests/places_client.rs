//! Integration tests for `PlaceClient` using wiremock HTTP mocks.

use exit_finder::domain::Coordinates;
use exit_finder::places::{PlaceClient, PlaceClientConfig, PlaceError, PlaceResolver};
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_client(base_url: &str) -> PlaceClient {
    PlaceClient::new(PlaceClientConfig::new("test-key").with_base_url(base_url))
        .expect("client construction should not fail")
}

fn seoul() -> Coordinates {
    Coordinates::new(37.5758, 127.0253).unwrap()
}

#[tokio::test]
async fn resolves_and_normalizes_nearest_station() {
    let server = MockServer::start().await;

    let body = serde_json::json!({
        "documents": [
            {
                "place_name": "신설동역 1호선",
                "distance": "184",
                "category_group_code": "SW8"
            },
            {
                "place_name": "동묘앞역 6호선",
                "distance": "472",
                "category_group_code": "SW8"
            }
        ],
        "meta": { "total_count": 2 }
    });

    Mock::given(method("GET"))
        .and(path("/v2/local/search/category.json"))
        .and(query_param("category_group_code", "SW8"))
        .and(query_param("radius", "1000"))
        .and(header("Authorization", "KakaoAK test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let station = client
        .resolve_nearest_station(seoul())
        .await
        .expect("should resolve station");

    // Only the top (nearest) candidate is used, normalized.
    assert_eq!(station.as_str(), "신설동역");
}

#[tokio::test]
async fn sends_coordinates_as_query_params() {
    let server = MockServer::start().await;

    let body = serde_json::json!({
        "documents": [
            { "place_name": "시청역 2호선", "distance": "50", "category_group_code": "SW8" }
        ],
        "meta": { "total_count": 1 }
    });

    Mock::given(method("GET"))
        .and(query_param("x", "127.0253"))
        .and(query_param("y", "37.5758"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let station = client.resolve_nearest_station(seoul()).await.unwrap();
    assert_eq!(station.as_str(), "시청역");
}

#[tokio::test]
async fn no_candidates_is_no_nearby_station() {
    let server = MockServer::start().await;

    let body = serde_json::json!({ "documents": [], "meta": { "total_count": 0 } });

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let result = client.resolve_nearest_station(seoul()).await;

    assert!(matches!(
        result,
        Err(PlaceError::NoNearbyStation { radius_m: 1000 })
    ));
}

#[tokio::test]
async fn blank_place_name_is_missing_name() {
    let server = MockServer::start().await;

    let body = serde_json::json!({
        "documents": [ { "place_name": "  ", "distance": "10" } ],
        "meta": { "total_count": 1 }
    });

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let result = client.resolve_nearest_station(seoul()).await;

    assert!(matches!(result, Err(PlaceError::MissingPlaceName)));
}

#[tokio::test]
async fn unauthorized_status_maps_to_unauthorized() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let result = client.resolve_nearest_station(seoul()).await;

    assert!(matches!(result, Err(PlaceError::Unauthorized)));
}

#[tokio::test]
async fn server_error_carries_status() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let result = client.resolve_nearest_station(seoul()).await;

    match result {
        Err(PlaceError::Api { status, message }) => {
            assert_eq!(status, 500);
            assert_eq!(message, "boom");
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn malformed_body_is_a_json_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let result = client.resolve_nearest_station(seoul()).await;

    assert!(matches!(result, Err(PlaceError::Json { .. })));
}
