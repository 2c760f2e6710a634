use async_trait::async_trait;
use reqwest::Url;
use serde::de::DeserializeOwned;

use super::normalize::{detail_from_item, ranked_from_feed, summary_from_item};
use super::provider::StorefrontProvider;
use super::types::ItunesResponse;
use crate::config::StorefrontConfig;
use crate::error::{AppError, AppResult};
use crate::external::client::build_http_client;
use crate::models::{AppDetail, AppSummary, RankedApp};

const SOURCE_NAME: &str = "itunes";

/// iTunes Search API and top-charts RSS feed.
pub struct ItunesStorefront {
    client: reqwest::Client,
    base_url: String,
}

impl ItunesStorefront {
    pub fn new(config: &StorefrontConfig) -> AppResult<Self> {
        Ok(Self::with_client(
            build_http_client(config)?,
            config.base_url.clone(),
        ))
    }

    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn make_error(message: impl Into<String>, source: Option<anyhow::Error>) -> AppError {
        AppError::ExternalApi {
            source_name: SOURCE_NAME.into(),
            message: message.into(),
            source,
        }
    }

    fn url(&self, op: &str, path: &str, params: &[(&str, &str)]) -> AppResult<Url> {
        let raw = format!("{}{}", self.base_url, path);
        let parsed = if params.is_empty() {
            Url::parse(&raw)
        } else {
            Url::parse_with_params(&raw, params)
        };
        parsed.map_err(|e| Self::make_error(format!("{} invalid URL: {}", op, e), Some(e.into())))
    }

    /// Builds `base/{segments...}`, percent-encoding each segment so a
    /// caller value cannot add path levels, a query or a fragment.
    fn feed_url(&self, op: &str, segments: &[&str]) -> AppResult<Url> {
        let mut url = self.url(op, "", &[])?;
        url.path_segments_mut()
            .map_err(|()| Self::make_error(format!("{} invalid base URL", op), None))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn get_json<T: DeserializeOwned>(&self, op: &str, url: Url) -> AppResult<T> {
        tracing::debug!(operation = op, url = %url, "Storefront request");

        let resp = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e: reqwest::Error| {
                Self::make_error(format!("{} request failed: {}", op, e), Some(e.into()))
            })?
            .error_for_status()
            .map_err(|e: reqwest::Error| {
                Self::make_error(format!("{} HTTP error: {}", op, e), Some(e.into()))
            })?;

        resp.json().await.map_err(|e: reqwest::Error| {
            Self::make_error(format!("{} invalid JSON: {}", op, e), Some(e.into()))
        })
    }
}

#[async_trait]
impl StorefrontProvider for ItunesStorefront {
    fn name(&self) -> &'static str {
        SOURCE_NAME
    }

    async fn search(
        &self,
        keyword: &str,
        country: &str,
        limit: u32,
    ) -> AppResult<Vec<AppSummary>> {
        let op = format!("search({}, {})", keyword, country);
        let limit = limit.to_string();
        let url = self.url(
            &op,
            "/search",
            &[
                ("term", keyword),
                ("country", country),
                ("entity", "software"),
                ("limit", limit.as_str()),
            ],
        )?;

        let data: ItunesResponse = self.get_json(&op, url).await?;
        Ok(data.results.into_iter().map(summary_from_item).collect())
    }

    async fn lookup(&self, app_id: &str, country: &str) -> AppResult<Option<AppDetail>> {
        let op = format!("lookup({}, {})", app_id, country);
        let url = self.url(&op, "/lookup", &[("id", app_id), ("country", country)])?;

        let data: ItunesResponse = self.get_json(&op, url).await?;
        if data.result_count == 0 {
            return Ok(None);
        }
        Ok(data.results.into_iter().next().map(detail_from_item))
    }

    async fn top_charts(&self, country: &str, limit: u32) -> AppResult<Vec<RankedApp>> {
        let op = format!("top_charts({})", country);
        let limit = format!("limit={}", limit);
        let url = self.feed_url(
            &op,
            &[country, "rss", "topfreeapplications", limit.as_str(), "json"],
        )?;

        let body: serde_json::Value = self.get_json(&op, url).await?;
        Ok(ranked_from_feed(&body))
    }
}
