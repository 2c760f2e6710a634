//! Keyword competition analysis.

use std::sync::Arc;

use futures::future::join_all;

use crate::analysis::keyword::analyze;
use crate::config::StorefrontConfig;
use crate::error::{AppError, AppResult};
use crate::external::storefront::StorefrontProvider;
use crate::models::KeywordMetric;

/// Analyzes keywords against live search results. Bypasses the cache.
#[derive(Clone)]
pub struct KeywordService {
    provider: Arc<dyn StorefrontProvider>,
    country: String,
    limit: u32,
}

impl KeywordService {
    pub fn new(provider: Arc<dyn StorefrontProvider>, config: &StorefrontConfig) -> Self {
        Self {
            provider,
            country: config.default_country.clone(),
            limit: config.analyze_limit,
        }
    }

    async fn analyze_one(&self, keyword: &str) -> KeywordMetric {
        let apps = match self.provider.search(keyword, &self.country, self.limit).await {
            Ok(apps) => apps,
            Err(e) => {
                tracing::warn!(
                    provider = self.provider.name(),
                    operation = "analyze",
                    keyword = %keyword,
                    country = %self.country,
                    error = %e,
                    "Storefront search failed, analyzing empty result"
                );
                Vec::new()
            }
        };
        let metric = analyze(keyword, &apps);
        tracing::debug!(
            keyword = %keyword,
            app_count = metric.app_count,
            competition = metric.competition_level.as_str(),
            hot_score = metric.hot_score,
            "Keyword analyzed"
        );
        metric
    }

    /// One metric per keyword, in request order. Keywords are fetched
    /// concurrently.
    pub async fn analyze(&self, keywords: &[String]) -> AppResult<Vec<KeywordMetric>> {
        if keywords.is_empty() {
            return Err(AppError::missing_param("keywords"));
        }
        let metrics = join_all(keywords.iter().map(|k| self.analyze_one(k))).await;
        Ok(metrics)
    }
}
