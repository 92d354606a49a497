//! Integration tests for `KmartClient` using wiremock HTTP mocks.

use std::path::PathBuf;

use stockwatch_core::AppConfig;
use stockwatch_kmart::{AvailabilityError, KmartClient};
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_config() -> AppConfig {
    AppConfig {
        endpoint_url: "https://api.kmart.com.au/gateway/graphql".to_owned(),
        user_agent: "stockwatch-tests/0.1".to_owned(),
        referer: "https://www.kmart.com.au/".to_owned(),
        country: "AU".to_owned(),
        skus_path: PathBuf::from("./skus.txt"),
        log_level: "info".to_owned(),
        request_timeout_secs: 5,
        inter_request_delay_ms: 0,
        cnc_location_limit: 3,
    }
}

fn test_client(base_url: &str) -> KmartClient {
    KmartClient::with_endpoint(&format!("{base_url}/gateway/graphql"), &test_config())
        .expect("client construction should not fail")
}

fn success_body() -> serde_json::Value {
    serde_json::json!({
        "data": {
            "getProductAvailability": {
                "postcode": "3000",
                "country": "AU",
                "region": "VIC",
                "availability": {
                    "HOME_DELIVERY": [
                        {
                            "keycode": "65463499",
                            "poolName": "VIC Metro",
                            "stock": { "available": 4 }
                        }
                    ],
                    "CLICK_AND_COLLECT": [
                        {
                            "keycode": "65463499",
                            "stock": { "totalAvailable": 2 },
                            "locations": [
                                {
                                    "fulfilment": {
                                        "locationId": "1021",
                                        "stock": { "available": 2 }
                                    },
                                    "location": { "locationId": "1021" }
                                }
                            ]
                        }
                    ]
                }
            }
        }
    })
}

#[tokio::test]
async fn check_availability_returns_parsed_tree() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/gateway/graphql"))
        .and(header("referer", "https://www.kmart.com.au/"))
        .and(header("user-agent", "stockwatch-tests/0.1"))
        .and(body_partial_json(serde_json::json!({
            "operationName": "getProductAvailability",
            "variables": {
                "input": {
                    "country": "AU",
                    "postcode": "3000",
                    "products": [ { "keycode": "65463499", "quantity": 1 } ]
                }
            }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(success_body()))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let availability = client
        .check_availability("65463499", "3000")
        .await
        .expect("should parse availability");

    assert_eq!(availability.home_delivery.len(), 1);
    assert_eq!(
        availability.home_delivery[0].pool_name.as_deref(),
        Some("VIC Metro")
    );
    assert_eq!(availability.home_delivery[0].stock.available, 4);
    assert_eq!(availability.click_and_collect.len(), 1);
    assert_eq!(availability.click_and_collect[0].stock.total_available, 2);
    assert_eq!(
        availability.click_and_collect[0].locations[0].location.location_id,
        "1021"
    );
}

#[tokio::test]
async fn non_2xx_status_is_a_network_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/gateway/graphql"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = client
        .check_availability("65463499", "3000")
        .await
        .unwrap_err();

    assert!(
        matches!(err, AvailabilityError::UnexpectedStatus { status: 503, .. }),
        "expected UnexpectedStatus(503), got: {err:?}"
    );
    assert!(err.is_network());
}

#[tokio::test]
async fn connection_failure_is_a_network_error() {
    // Point at a server that is no longer listening. A dedicated (non-pooled)
    // server is required so the listener actually closes on drop.
    let server = MockServer::builder().start().await;
    let uri = server.uri();
    drop(server);

    let client = test_client(&uri);
    let err = client
        .check_availability("65463499", "3000")
        .await
        .unwrap_err();

    assert!(
        matches!(err, AvailabilityError::Http(_)),
        "expected Http transport error, got: {err:?}"
    );
    assert!(err.is_network());
}

#[tokio::test]
async fn graphql_errors_surface_as_api_error() {
    let server = MockServer::start().await;

    let body = serde_json::json!({
        "data": null,
        "errors": [ { "message": "keycode not found" } ]
    });

    Mock::given(method("POST"))
        .and(path("/gateway/graphql"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = client
        .check_availability("99999999", "3000")
        .await
        .unwrap_err();

    assert!(
        matches!(err, AvailabilityError::Api(ref msg) if msg.contains("keycode not found")),
        "expected Api error, got: {err:?}"
    );
    assert!(!err.is_network());
}

#[tokio::test]
async fn missing_availability_tree_is_reported() {
    let server = MockServer::start().await;

    let body = serde_json::json!({
        "data": {
            "getProductAvailability": {
                "postcode": "3000",
                "country": "AU",
                "region": "VIC"
            }
        }
    });

    Mock::given(method("POST"))
        .and(path("/gateway/graphql"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = client
        .check_availability("S168428", "3000")
        .await
        .unwrap_err();

    assert!(
        matches!(err, AvailabilityError::MissingAvailability { ref keycode } if keycode == "S168428"),
        "expected MissingAvailability, got: {err:?}"
    );
    assert!(!err.is_network());
}

#[tokio::test]
async fn malformed_body_is_a_deserialize_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/gateway/graphql"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json at all"))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = client
        .check_availability("65463499", "3000")
        .await
        .unwrap_err();

    assert!(
        matches!(err, AvailabilityError::Deserialize { .. }),
        "expected Deserialize error, got: {err:?}"
    );
    assert!(!err.is_network());
}
