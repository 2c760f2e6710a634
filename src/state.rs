//! Application state for Axum web framework.
//!
//! Contains shared services and resources that are accessible
//! across all request handlers.

use std::sync::Arc;

use crate::cache::CacheStore;
use crate::config::{ApplicationConfig, Settings};
use crate::error::AppResult;
use crate::external::storefront::{ItunesStorefront, StorefrontProvider};
use crate::services::Services;

/// Application state containing all shared services and resources.
///
/// Cloning is cheap since the services and cache sit behind `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// All business logic services
    pub services: Services,
    /// Direct access to the response cache, for stats endpoints
    pub cache: Arc<CacheStore>,
    /// Name and version reported by the index and health endpoints
    pub application: ApplicationConfig,
}

impl AppState {
    /// Builds the state around an already constructed provider and cache.
    pub fn new(
        provider: Arc<dyn StorefrontProvider>,
        cache: Arc<CacheStore>,
        settings: &Settings,
    ) -> Self {
        let services = Services::new(provider, cache.clone(), &settings.storefront);
        Self {
            services,
            cache,
            application: settings.application.clone(),
        }
    }

    /// Wires the live iTunes storefront and a cache from configuration.
    pub fn from_settings(settings: &Settings) -> AppResult<Self> {
        let provider: Arc<dyn StorefrontProvider> =
            Arc::new(ItunesStorefront::new(&settings.storefront)?);
        tracing::info!(provider = provider.name(), "Storefront provider ready");
        let cache = Arc::new(CacheStore::from_settings(&settings.cache));
        Ok(Self::new(provider, cache, settings))
    }
}
