//! Infrastructure adapters
//!
//! Adapters connect application ports to concrete implementations.

mod account_adapter;
mod dispatch_adapter;
mod kakao_geocoding_adapter;
mod kakao_routing_adapter;

pub use account_adapter::AccountAdapter;
pub use dispatch_adapter::DispatchAdapter;
pub use kakao_geocoding_adapter::KakaoGeocodingAdapter;
pub use kakao_routing_adapter::KakaoRoutingAdapter;
