//! Service layer.
//!
//! Services sit between the HTTP handlers and the storefront/cache, and
//! own the rules for caching and degrading on upstream failure.

mod catalog_service;
mod keyword_service;
mod trend_service;

pub use catalog_service::CatalogService;
pub use keyword_service::KeywordService;
pub use trend_service::TrendService;

use std::sync::Arc;

use crate::cache::CacheStore;
use crate::config::StorefrontConfig;
use crate::external::storefront::StorefrontProvider;

/// Aggregates all services for convenient access.
///
/// Cloning is cheap since the provider and cache are behind `Arc`.
#[derive(Clone)]
pub struct Services {
    pub catalog: CatalogService,
    pub keywords: KeywordService,
    pub trends: TrendService,
}

impl Services {
    pub fn new(
        provider: Arc<dyn StorefrontProvider>,
        cache: Arc<CacheStore>,
        config: &StorefrontConfig,
    ) -> Self {
        Self {
            catalog: CatalogService::new(provider.clone(), cache, config),
            keywords: KeywordService::new(provider, config),
            trends: TrendService::new(),
        }
    }
}
