//! Integration tests for the dispatch client (wiremock-based)

use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use integration_dispatch::{DispatchClient, DispatchConfig, DispatchError, HttpDispatchClient};

fn config_for_mock(base_url: &str) -> DispatchConfig {
    DispatchConfig {
        base_url: base_url.to_string(),
        timeout_secs: 5,
    }
}

const fn sample_quote_json() -> &'static str {
    r#"{
        "taxi": [{
            "license_number": "인천 12가 3456",
            "driver_name": "김기사",
            "driver_phone": "010-1234-5678"
        }],
        "duration": 125,
        "fair": 5000
    }"#
}

#[tokio::test]
async fn test_nearby_taxi_success() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/taxi/nearby"))
        .and(header("content-type", "application/json"))
        .and(body_json(serde_json::json!({
            "destination_address": "인천광역시 미추홀구 인하로 100"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_string(sample_quote_json()))
        .mount(&server)
        .await;

    let client = HttpDispatchClient::new(&config_for_mock(&server.uri())).unwrap();
    let quote = client
        .nearby_taxi("인천광역시 미추홀구 인하로 100")
        .await
        .unwrap();

    assert_eq!(quote.taxi.len(), 1);
    assert_eq!(quote.nearest().unwrap().license_number, "인천 12가 3456");
    assert_eq!(quote.duration, 125);
    assert_eq!(quote.fare, 5000);
}

#[tokio::test]
async fn test_nearby_taxi_empty_list() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/taxi/nearby"))
        .respond_with(
            ResponseTemplate::new(200).set_body_string(r#"{ "taxi": [], "duration": 0 }"#),
        )
        .mount(&server)
        .await;

    let client = HttpDispatchClient::new(&config_for_mock(&server.uri())).unwrap();
    let quote = client.nearby_taxi("인하대학교").await.unwrap();

    assert!(quote.nearest().is_none());
}

#[tokio::test]
async fn test_nearby_taxi_server_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/taxi/nearby"))
        .respond_with(ResponseTemplate::new(500).set_body_string("internal error"))
        .mount(&server)
        .await;

    let client = HttpDispatchClient::new(&config_for_mock(&server.uri())).unwrap();
    let err = client.nearby_taxi("인하대학교").await.unwrap_err();

    assert!(matches!(
        err,
        DispatchError::RequestFailed { status: 500, .. }
    ));
}

#[tokio::test]
async fn test_nearby_taxi_rate_limited() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/taxi/nearby"))
        .respond_with(ResponseTemplate::new(429).insert_header("retry-after", "12"))
        .mount(&server)
        .await;

    let client = HttpDispatchClient::new(&config_for_mock(&server.uri())).unwrap();
    let err = client.nearby_taxi("인하대학교").await.unwrap_err();

    assert!(matches!(
        err,
        DispatchError::RateLimitExceeded {
            retry_after_secs: Some(12)
        }
    ));
}

#[tokio::test]
async fn test_nearby_taxi_malformed_body() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/taxi/nearby"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let client = HttpDispatchClient::new(&config_for_mock(&server.uri())).unwrap();
    let result = client.nearby_taxi("인하대학교").await;

    assert!(matches!(result, Err(DispatchError::ParseError(_))));
}

#[tokio::test]
async fn test_trailing_slash_base_url() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/taxi/nearby"))
        .respond_with(ResponseTemplate::new(200).set_body_string(sample_quote_json()))
        .expect(1)
        .mount(&server)
        .await;

    let config = config_for_mock(&format!("{}/", server.uri()));
    let client = HttpDispatchClient::new(&config).unwrap();

    assert!(client.nearby_taxi("인하대학교").await.is_ok());
}
