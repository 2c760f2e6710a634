//! In-memory storefront for tests.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;

use super::provider::StorefrontProvider;
use crate::error::{AppError, AppResult};
use crate::models::{AppDetail, AppSummary, RankedApp};

#[derive(Debug, Default)]
pub struct StubStorefront {
    pub search_results: HashMap<String, Vec<AppSummary>>,
    pub details: HashMap<String, AppDetail>,
    pub charts: Vec<RankedApp>,
    pub delay: Option<Duration>,
    fail: AtomicBool,
    search_calls: AtomicUsize,
    lookup_calls: AtomicUsize,
    chart_calls: AtomicUsize,
}

impl StubStorefront {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search(mut self, keyword: &str, apps: Vec<AppSummary>) -> Self {
        self.search_results.insert(keyword.to_string(), apps);
        self
    }

    pub fn with_detail(mut self, detail: AppDetail) -> Self {
        self.details.insert(detail.id.clone(), detail);
        self
    }

    pub fn with_charts(mut self, charts: Vec<RankedApp>) -> Self {
        self.charts = charts;
        self
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn set_failing(&self, fail: bool) {
        self.fail.store(fail, Ordering::SeqCst);
    }

    pub fn search_calls(&self) -> usize {
        self.search_calls.load(Ordering::SeqCst)
    }

    pub fn lookup_calls(&self) -> usize {
        self.lookup_calls.load(Ordering::SeqCst)
    }

    pub fn chart_calls(&self) -> usize {
        self.chart_calls.load(Ordering::SeqCst)
    }

    async fn pause_or_fail(&self, op: &str) -> AppResult<()> {
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        if self.fail.load(Ordering::SeqCst) {
            return Err(AppError::ExternalApi {
                source_name: "stub".into(),
                message: format!("{} failed", op),
                source: None,
            });
        }
        Ok(())
    }
}

/// Search result with just enough fields set to be recognisable.
pub fn summary(id: &str, rating: f64, rating_count: u64) -> AppSummary {
    AppSummary {
        id: id.to_string(),
        name: format!("App {}", id),
        developer: "Stub Dev".to_string(),
        category: "Utilities".to_string(),
        price: 0.0,
        rating,
        rating_count,
        version: "1.0".to_string(),
        description: "...".to_string(),
        icon_url: String::new(),
        url: String::new(),
    }
}

pub fn detail(id: &str) -> AppDetail {
    AppDetail {
        id: id.to_string(),
        name: format!("App {}", id),
        developer: "Stub Dev".to_string(),
        category: "Utilities".to_string(),
        rating: 4.5,
        rating_count: 100,
        version: "1.0".to_string(),
        description: "Full description".to_string(),
        release_notes: String::new(),
        price: 0.0,
        icon_url: String::new(),
        screenshots: Vec::new(),
        url: String::new(),
    }
}

pub fn ranked(rank: u32, id: &str) -> RankedApp {
    RankedApp {
        rank,
        app_id: id.to_string(),
        id: id.to_string(),
        name: format!("App {}", id),
        developer: "Stub Dev".to_string(),
        category: "Games".to_string(),
        price: 0.0,
        description: String::new(),
        icon_url: String::new(),
        url: String::new(),
    }
}

#[async_trait]
impl StorefrontProvider for StubStorefront {
    fn name(&self) -> &'static str {
        "stub"
    }

    async fn search(
        &self,
        keyword: &str,
        _country: &str,
        limit: u32,
    ) -> AppResult<Vec<AppSummary>> {
        self.search_calls.fetch_add(1, Ordering::SeqCst);
        self.pause_or_fail("search").await?;
        let mut apps = self.search_results.get(keyword).cloned().unwrap_or_default();
        apps.truncate(limit as usize);
        Ok(apps)
    }

    async fn lookup(&self, app_id: &str, _country: &str) -> AppResult<Option<AppDetail>> {
        self.lookup_calls.fetch_add(1, Ordering::SeqCst);
        self.pause_or_fail("lookup").await?;
        Ok(self.details.get(app_id).cloned())
    }

    async fn top_charts(&self, _country: &str, limit: u32) -> AppResult<Vec<RankedApp>> {
        self.chart_calls.fetch_add(1, Ordering::SeqCst);
        self.pause_or_fail("top_charts").await?;
        Ok(self.charts.iter().take(limit as usize).cloned().collect())
    }
}
