//! Data Transfer Objects for API requests and responses.
//!
//! DTOs are organized by domain:
//! - `catalog` - Search, app detail and rankings query parameters
//! - `keyword` - Keyword analysis request/response
//! - `trend` - Trend series response
//! - `system` - Index, health and dashboard responses
//! - `error` - Common error response DTOs
//!
//! Search and rankings responses are the cached envelopes from
//! [`crate::models`] and are returned as-is.

mod catalog;
mod error;
mod keyword;
mod system;
mod trend;

pub use catalog::{AppQuery, RankingsQuery, SearchQuery};
pub use error::ErrorResponse;
pub use keyword::{AnalyzeRequest, KeywordAnalysisResponse};
pub use system::{DashboardStats, HealthResponse, IndexResponse};
pub use trend::TrendsResponse;
