//! Profile entry persistence against a file-backed SQLite store
//!
//! These tests verify that entries registered through the account backend
//! survive a restart of the store.

use std::sync::Arc;

use application::{KeyValueStorePort, NEW_ENTRIES_KEY, ProfileService};
use domain::{NewAddress, NewProtector, ProfileEntry};
use infrastructure::{AccountAdapter, SqliteKeyValueStore, StorageConfig, create_pool};
use integration_account::AccountConfig;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

// ============================================================================
// Test Helpers
// ============================================================================

fn storage_at(dir: &tempfile::TempDir) -> StorageConfig {
    StorageConfig {
        path: dir.path().join("taxicall.db").to_string_lossy().into_owned(),
        max_connections: 2,
    }
}

fn open_store(storage: &StorageConfig) -> Arc<SqliteKeyValueStore> {
    Arc::new(SqliteKeyValueStore::new(Arc::new(create_pool(storage).unwrap())))
}

fn profile_service(server: &MockServer, store: Arc<SqliteKeyValueStore>) -> ProfileService {
    let account = AccountConfig {
        base_url: server.uri(),
        ..AccountConfig::for_testing()
    };
    ProfileService::new(Arc::new(AccountAdapter::new(&account).unwrap()), store)
}

async fn accepting_backend() -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/new/addresses"))
        .respond_with(ResponseTemplate::new(201))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/new/protectors"))
        .respond_with(ResponseTemplate::new(201))
        .mount(&server)
        .await;
    server
}

fn home() -> NewAddress {
    NewAddress {
        address_name: "집".to_string(),
        road_address: "인천광역시 미추홀구 인하로 100".to_string(),
        detail_address: "101동 202호".to_string(),
    }
}

fn guardian() -> NewProtector {
    NewProtector {
        protector_name: "김보호".to_string(),
        protector_email: "kim@example.com".to_string(),
    }
}

// ============================================================================
// Profile Entry Tests
// ============================================================================

#[tokio::test]
async fn entries_survive_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let storage = storage_at(&dir);
    let server = accepting_backend().await;

    {
        let service = profile_service(&server, open_store(&storage));
        service.add_address(home()).await.unwrap();
        service.add_protector(guardian()).await.unwrap();
    }

    let service = profile_service(&server, open_store(&storage));
    assert_eq!(
        service.new_entries().await.unwrap(),
        vec![ProfileEntry::Address(home()), ProfileEntry::Protector(guardian())]
    );
}

#[tokio::test]
async fn rejected_entry_is_not_persisted() {
    let dir = tempfile::tempdir().unwrap();
    let storage = storage_at(&dir);
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/new/protectors"))
        .respond_with(
            ResponseTemplate::new(400)
                .set_body_json(serde_json::json!({ "message": "이미 등록된 보호자입니다" })),
        )
        .mount(&server)
        .await;

    let store = open_store(&storage);
    let service = profile_service(&server, Arc::clone(&store));
    let err = service.add_protector(guardian()).await.unwrap_err();

    assert!(err.to_string().contains("이미 등록된 보호자입니다"));
    assert_eq!(store.get(NEW_ENTRIES_KEY).await.unwrap(), None);
}

#[tokio::test]
async fn stored_list_is_plain_json_array() {
    let dir = tempfile::tempdir().unwrap();
    let storage = storage_at(&dir);
    let server = accepting_backend().await;

    let store = open_store(&storage);
    profile_service(&server, Arc::clone(&store))
        .add_address(home())
        .await
        .unwrap();

    let raw = store.get(NEW_ENTRIES_KEY).await.unwrap().unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(
        value,
        serde_json::json!([{
            "address_name": "집",
            "road_address": "인천광역시 미추홀구 인하로 100",
            "detail_address": "101동 202호"
        }])
    );
}
