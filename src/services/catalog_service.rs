//! Cache-aside access to the storefront catalog.

use std::future::Future;
use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::cache::{CacheKey, CacheStore};
use crate::config::StorefrontConfig;
use crate::error::{AppError, AppResult};
use crate::external::storefront::StorefrontProvider;
use crate::models::{AppDetail, RankingListing, SearchListing};

/// Search, app detail and rankings backed by the shared cache.
///
/// Upstream failures never reach the client as errors: search and
/// rankings degrade to an empty listing, app detail to not-found.
#[derive(Clone)]
pub struct CatalogService {
    provider: Arc<dyn StorefrontProvider>,
    cache: Arc<CacheStore>,
    default_country: String,
    default_limit: u32,
}

impl CatalogService {
    pub fn new(
        provider: Arc<dyn StorefrontProvider>,
        cache: Arc<CacheStore>,
        config: &StorefrontConfig,
    ) -> Self {
        Self {
            provider,
            cache,
            default_country: config.default_country.clone(),
            default_limit: config.default_limit,
        }
    }

    fn country<'a>(&'a self, country: Option<&'a str>) -> &'a str {
        country
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .unwrap_or(&self.default_country)
    }

    /// Fresh cached value for `key`, or the result of `fetch` stored under it.
    ///
    /// `Ok(None)` from `fetch` is returned as-is and not cached.
    async fn cached<T, F, Fut>(&self, key: &CacheKey, fetch: F) -> AppResult<Option<T>>
    where
        T: Serialize + DeserializeOwned,
        F: FnOnce() -> Fut,
        Fut: Future<Output = Option<T>>,
    {
        if let Some(hit) = self.cache.get_typed::<T>(key) {
            return Ok(Some(hit));
        }

        let _guard = self.cache.lock_key(key).await;
        // another request may have filled the entry while we waited
        if let Some(hit) = self.cache.get_typed::<T>(key) {
            return Ok(Some(hit));
        }

        tracing::debug!(key = %key, "Cache miss");
        let Some(value) = fetch().await else {
            return Ok(None);
        };

        self.cache.put_typed(key, &value).map_err(|e| AppError::Internal {
            source: anyhow::Error::new(e).context(format!("failed to cache {}", key)),
        })?;
        Ok(Some(value))
    }

    pub async fn search(
        &self,
        keyword: &str,
        country: Option<&str>,
        limit: Option<u32>,
    ) -> AppResult<SearchListing> {
        let keyword = keyword.trim();
        if keyword.is_empty() {
            return Err(AppError::missing_param("keyword"));
        }
        let country = self.country(country);
        let limit = limit.unwrap_or(self.default_limit);
        let key = CacheKey::search(keyword, country);

        let listing = self
            .cached(&key, || async {
                let apps = match self.provider.search(keyword, country, limit).await {
                    Ok(apps) => apps,
                    Err(e) => {
                        tracing::warn!(
                            provider = self.provider.name(),
                            operation = "search",
                            keyword = %keyword,
                            country = %country,
                            error = %e,
                            "Storefront search failed, serving empty result"
                        );
                        Vec::new()
                    }
                };
                Some(SearchListing::new(keyword, apps))
            })
            .await?;

        listing.ok_or_else(|| AppError::Internal {
            source: anyhow::anyhow!("search listing missing after fetch"),
        })
    }

    pub async fn app_detail(&self, app_id: &str, country: Option<&str>) -> AppResult<AppDetail> {
        let country = self.country(country);
        let key = CacheKey::app(app_id, country);

        let detail = self
            .cached(&key, || async {
                match self.provider.lookup(app_id, country).await {
                    Ok(detail) => detail,
                    Err(e) => {
                        tracing::warn!(
                            provider = self.provider.name(),
                            operation = "lookup",
                            app_id = %app_id,
                            country = %country,
                            error = %e,
                            "Storefront lookup failed"
                        );
                        None
                    }
                }
            })
            .await?;

        detail.ok_or_else(|| AppError::NotFound {
            entity: "app".to_string(),
            field: "id".to_string(),
            value: app_id.to_string(),
        })
    }

    pub async fn rankings(&self, country: Option<&str>, limit: Option<u32>) -> AppResult<RankingListing> {
        let country = self.country(country);
        let limit = limit.unwrap_or(self.default_limit);
        let key = CacheKey::rankings(country);

        let listing = self
            .cached(&key, || async {
                let apps = match self.provider.top_charts(country, limit).await {
                    Ok(apps) => apps,
                    Err(e) => {
                        tracing::warn!(
                            provider = self.provider.name(),
                            operation = "top_charts",
                            country = %country,
                            error = %e,
                            "Storefront chart fetch failed, serving empty rankings"
                        );
                        Vec::new()
                    }
                };
                Some(RankingListing::new(country, apps))
            })
            .await?;

        listing.ok_or_else(|| AppError::Internal {
            source: anyhow::anyhow!("rankings listing missing after fetch"),
        })
    }
}
