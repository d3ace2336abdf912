//! Profile use cases
//!
//! Reads the profile from the account backend and keeps a local list of the
//! addresses and protectors registered from this client.

use std::sync::Arc;

use domain::{NewAddress, NewProtector, ProfileEntry, UserProfile};
use tokio::sync::Mutex;
use tracing::{debug, info, instrument};

use crate::error::ApplicationError;
use crate::ports::{AccountPort, KeyValueStorePort};

/// Storage key of the locally persisted entry list
pub const NEW_ENTRIES_KEY: &str = "newData";

/// Profile service
pub struct ProfileService {
    account: Arc<dyn AccountPort>,
    store: Arc<dyn KeyValueStorePort>,
    append_lock: Mutex<()>,
}

impl std::fmt::Debug for ProfileService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProfileService").finish_non_exhaustive()
    }
}

impl ProfileService {
    /// Create a new profile service
    #[must_use]
    pub fn new(account: Arc<dyn AccountPort>, store: Arc<dyn KeyValueStorePort>) -> Self {
        Self {
            account,
            store,
            append_lock: Mutex::new(()),
        }
    }

    /// Fetch the signed-in user's profile
    ///
    /// # Errors
    ///
    /// Returns an error if the account backend call fails.
    #[instrument(skip(self))]
    pub async fn fetch_profile(&self) -> Result<UserProfile, ApplicationError> {
        self.account.fetch_profile().await
    }

    /// Register an address and remember it locally
    ///
    /// Returns the updated entry list.
    ///
    /// # Errors
    ///
    /// Returns a domain error for blank fields, or the backend's error.
    /// Nothing is stored locally unless the backend accepted the address.
    #[instrument(skip(self, address), fields(name = %address.address_name))]
    pub async fn add_address(
        &self,
        address: NewAddress,
    ) -> Result<Vec<ProfileEntry>, ApplicationError> {
        address.validate()?;
        self.account.add_address(&address).await?;
        info!("Address registered");
        self.append(ProfileEntry::Address(address)).await
    }

    /// Register a protector and remember it locally
    ///
    /// Returns the updated entry list.
    ///
    /// # Errors
    ///
    /// Returns a domain error for invalid fields, or the backend's error.
    #[instrument(skip(self, protector), fields(name = %protector.protector_name))]
    pub async fn add_protector(
        &self,
        protector: NewProtector,
    ) -> Result<Vec<ProfileEntry>, ApplicationError> {
        protector.validate()?;
        self.account.add_protector(&protector).await?;
        info!("Protector registered");
        self.append(ProfileEntry::Protector(protector)).await
    }

    /// Entries registered from this client, oldest first
    ///
    /// # Errors
    ///
    /// Returns an error if the store fails or holds a corrupt list.
    pub async fn new_entries(&self) -> Result<Vec<ProfileEntry>, ApplicationError> {
        match self.store.get(NEW_ENTRIES_KEY).await? {
            Some(json) => serde_json::from_str(&json).map_err(|e| {
                ApplicationError::Internal(format!("corrupt {NEW_ENTRIES_KEY} list: {e}"))
            }),
            None => Ok(Vec::new()),
        }
    }

    async fn append(&self, entry: ProfileEntry) -> Result<Vec<ProfileEntry>, ApplicationError> {
        let _guard = self.append_lock.lock().await;
        let mut entries = self.new_entries().await?;
        entries.push(entry);

        let json = serde_json::to_string(&entries)
            .map_err(|e| ApplicationError::Internal(e.to_string()))?;
        self.store.set(NEW_ENTRIES_KEY, &json).await?;
        debug!(count = entries.len(), "Persisted profile entries");

        Ok(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::{MockAccountPort, MockKeyValueStorePort};
    use domain::DomainError;
    use std::collections::HashMap;
    use std::sync::Mutex as StdMutex;

    /// In-memory store so appends can be observed end to end
    #[derive(Default)]
    struct MemoryStore {
        values: StdMutex<HashMap<String, String>>,
    }

    #[async_trait::async_trait]
    impl KeyValueStorePort for MemoryStore {
        async fn get(&self, key: &str) -> Result<Option<String>, ApplicationError> {
            Ok(self.values.lock().unwrap().get(key).cloned())
        }

        async fn set(&self, key: &str, value: &str) -> Result<(), ApplicationError> {
            self.values
                .lock()
                .unwrap()
                .insert(key.to_string(), value.to_string());
            Ok(())
        }
    }

    fn address() -> NewAddress {
        NewAddress {
            address_name: "집".to_string(),
            road_address: "인천광역시 미추홀구 인하로 100".to_string(),
            detail_address: "101동 202호".to_string(),
        }
    }

    fn protector() -> NewProtector {
        NewProtector {
            protector_name: "김보호".to_string(),
            protector_email: "kim@example.com".to_string(),
        }
    }

    fn accepting_account() -> MockAccountPort {
        let mut account = MockAccountPort::new();
        account.expect_add_address().returning(|_| Ok(()));
        account.expect_add_protector().returning(|_| Ok(()));
        account
    }

    #[tokio::test]
    async fn new_entries_empty_when_missing() {
        let mut store = MockKeyValueStorePort::new();
        store
            .expect_get()
            .withf(|key| key.to_string() == NEW_ENTRIES_KEY)
            .returning(|_| Ok(None));

        let service = ProfileService::new(Arc::new(MockAccountPort::new()), Arc::new(store));
        assert!(service.new_entries().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn entries_are_appended_and_rehydrated() {
        let store = Arc::new(MemoryStore::default());
        let service = ProfileService::new(Arc::new(accepting_account()), store.clone());

        service.add_address(address()).await.unwrap();
        let entries = service.add_protector(protector()).await.unwrap();
        assert_eq!(entries.len(), 2);

        let rehydrated = ProfileService::new(Arc::new(MockAccountPort::new()), store);
        let entries = rehydrated.new_entries().await.unwrap();
        assert_eq!(
            entries,
            vec![
                ProfileEntry::Address(address()),
                ProfileEntry::Protector(protector())
            ]
        );
    }

    #[tokio::test]
    async fn persisted_json_is_plain_submitted_objects() {
        let store = Arc::new(MemoryStore::default());
        let service = ProfileService::new(Arc::new(accepting_account()), store.clone());
        service.add_protector(protector()).await.unwrap();

        let json = store.get(NEW_ENTRIES_KEY).await.unwrap().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(
            value,
            serde_json::json!([{ "protector_name": "김보호", "protector_email": "kim@example.com" }])
        );
    }

    #[tokio::test]
    async fn rejected_registration_is_not_stored() {
        let mut account = MockAccountPort::new();
        account
            .expect_add_address()
            .returning(|_| Err(ApplicationError::ExternalService("중복된 주소".to_string())));
        let mut store = MockKeyValueStorePort::new();
        store.expect_set().never();

        let service = ProfileService::new(Arc::new(account), Arc::new(store));
        let err = service.add_address(address()).await.unwrap_err();
        assert!(err.to_string().contains("중복된 주소"));
    }

    #[tokio::test]
    async fn invalid_protector_skips_backend() {
        let mut account = MockAccountPort::new();
        account.expect_add_protector().never();

        let service = ProfileService::new(Arc::new(account), Arc::new(MockKeyValueStorePort::new()));
        let bad = NewProtector {
            protector_email: "not-an-email".to_string(),
            ..protector()
        };
        let err = service.add_protector(bad).await.unwrap_err();
        assert!(matches!(
            err,
            ApplicationError::Domain(DomainError::ValidationError(_))
        ));
    }

    #[tokio::test]
    async fn corrupt_list_is_an_error() {
        let mut store = MockKeyValueStorePort::new();
        store
            .expect_get()
            .returning(|_| Ok(Some("{not json".to_string())));

        let service = ProfileService::new(Arc::new(MockAccountPort::new()), Arc::new(store));
        assert!(matches!(
            service.new_entries().await,
            Err(ApplicationError::Internal(_))
        ));
    }

    #[tokio::test]
    async fn fetch_profile_passes_through() {
        let mut account = MockAccountPort::new();
        account.expect_fetch_profile().returning(|| {
            Ok(UserProfile {
                login_id: "inha01".to_string(),
                name: "홍길동".to_string(),
                ..UserProfile::default()
            })
        });

        let service = ProfileService::new(Arc::new(account), Arc::new(MockKeyValueStorePort::new()));
        assert_eq!(service.fetch_profile().await.unwrap().name, "홍길동");
    }
}
