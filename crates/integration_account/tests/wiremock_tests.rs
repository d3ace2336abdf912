//! Integration tests for the account client (wiremock-based)

use domain::{NewAddress, NewProtector};
use secrecy::SecretString;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use integration_account::{AccountClient, AccountConfig, AccountError, HttpAccountClient};

fn config_for_mock(base_url: &str) -> AccountConfig {
    AccountConfig {
        base_url: base_url.to_string(),
        access_token: Some(SecretString::from("token-123".to_string())),
        timeout_secs: 5,
    }
}

fn address() -> NewAddress {
    NewAddress {
        address_name: "집".to_string(),
        road_address: "인천광역시 미추홀구 인하로 100".to_string(),
        detail_address: "101동 202호".to_string(),
    }
}

#[tokio::test]
async fn test_fetch_profile() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/me"))
        .and(header("authorization", "Bearer token-123"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"{
                "user": {
                    "user_login_id": "inha01",
                    "user_name": "홍길동",
                    "user_gender": "M",
                    "user_phone": "010-0000-0000",
                    "user_age": 72
                },
                "represent_protector": {
                    "protector_name": "홍보호",
                    "protector_email": "guard@example.com"
                },
                "represent_address": "인천광역시 미추홀구 인하로 100"
            }"#,
        ))
        .mount(&server)
        .await;

    let client = HttpAccountClient::new(&config_for_mock(&server.uri())).unwrap();
    let profile = client.fetch_profile().await.unwrap();

    assert_eq!(profile.name, "홍길동");
    assert_eq!(profile.age, Some(72));
    assert_eq!(profile.represent_protector.unwrap().name, "홍보호");
}

#[tokio::test]
async fn test_fetch_profile_unauthorized() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/me"))
        .respond_with(
            ResponseTemplate::new(401).set_body_string(r#"{ "message": "토큰이 만료되었습니다" }"#),
        )
        .mount(&server)
        .await;

    let client = HttpAccountClient::new(&config_for_mock(&server.uri())).unwrap();
    let err = client.fetch_profile().await.unwrap_err();

    match err {
        AccountError::Unauthorized(message) => assert_eq!(message, "토큰이 만료되었습니다"),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_add_address_posts_json() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/new/addresses"))
        .and(body_json(serde_json::json!({
            "address_name": "집",
            "road_address": "인천광역시 미추홀구 인하로 100",
            "detail_address": "101동 202호"
        })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let client = HttpAccountClient::new(&config_for_mock(&server.uri())).unwrap();
    client.add_address(&address()).await.unwrap();
}

#[tokio::test]
async fn test_add_address_surfaces_server_message() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/new/addresses"))
        .respond_with(
            ResponseTemplate::new(400).set_body_string(r#"{ "message": "도로명 주소가 필요합니다" }"#),
        )
        .mount(&server)
        .await;

    let client = HttpAccountClient::new(&config_for_mock(&server.uri())).unwrap();
    let err = client.add_address(&address()).await.unwrap_err();

    assert!(matches!(
        &err,
        AccountError::Rejected { status: 400, message } if message == "도로명 주소가 필요합니다"
    ));
}

#[tokio::test]
async fn test_add_protector_without_message_uses_reason() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/new/protectors"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    let client = HttpAccountClient::new(&config_for_mock(&server.uri())).unwrap();
    let protector = NewProtector {
        protector_name: "김보호".to_string(),
        protector_email: "kim@example.com".to_string(),
    };
    let err = client.add_protector(&protector).await.unwrap_err();

    assert!(matches!(
        &err,
        AccountError::Rejected { status: 500, message } if message == "Internal Server Error"
    ));
}
