//! Builds application services from configuration

use std::sync::Arc;

use anyhow::Context;
use application::{CallScreen, ProfileService, TaxiCallService};
use infrastructure::{
    AccountAdapter, AppConfig, DispatchAdapter, KakaoGeocodingAdapter, KakaoRoutingAdapter,
    SqliteKeyValueStore, create_pool,
};

/// Taxi-call controller wired to Kakao and the dispatch backend
pub fn taxi_call_service(config: &AppConfig) -> anyhow::Result<Arc<TaxiCallService>> {
    let workflow = config
        .workflow
        .to_workflow_config()
        .map_err(anyhow::Error::msg)
        .context("invalid [workflow] configuration")?;

    let geocoder = KakaoGeocodingAdapter::new(&config.kakao).context("geocoding client")?;
    let router = KakaoRoutingAdapter::new(&config.kakao).context("directions client")?;
    let dispatcher = DispatchAdapter::new(&config.dispatch).context("dispatch client")?;

    Ok(Arc::new(TaxiCallService::with_config(
        Arc::new(geocoder),
        Arc::new(router),
        Arc::new(dispatcher),
        workflow,
    )))
}

/// Call screen with the configured pickup label
pub fn call_screen(config: &AppConfig) -> anyhow::Result<CallScreen> {
    Ok(CallScreen::new(taxi_call_service(config)?)
        .with_starting_address(config.workflow.starting_address.clone()))
}

/// Profile service backed by the account API and the local store
pub fn profile_service(config: &AppConfig) -> anyhow::Result<ProfileService> {
    let account = AccountAdapter::new(&config.account).context("account client")?;
    let pool = create_pool(&config.storage)
        .with_context(|| format!("opening store at {}", config.storage.path))?;
    let store = SqliteKeyValueStore::new(Arc::new(pool));

    Ok(ProfileService::new(Arc::new(account), Arc::new(store)))
}
