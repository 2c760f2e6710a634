use async_trait::async_trait;

use crate::error::AppResult;
use crate::models::{AppDetail, AppSummary, RankedApp};

/// Upstream app catalog.
///
/// Implementations report transport and decoding failures as
/// `AppError::ExternalApi`; deciding what a failure means for the client
/// is left to the caller.
#[async_trait]
pub trait StorefrontProvider: Send + Sync {
    fn name(&self) -> &'static str;

    /// Software search, at most `limit` results in storefront order.
    async fn search(&self, keyword: &str, country: &str, limit: u32)
    -> AppResult<Vec<AppSummary>>;

    /// `Ok(None)` when the storefront knows no app with this id.
    async fn lookup(&self, app_id: &str, country: &str) -> AppResult<Option<AppDetail>>;

    /// Top free apps chart, ranked by feed position.
    async fn top_charts(&self, country: &str, limit: u32) -> AppResult<Vec<RankedApp>>;
}
