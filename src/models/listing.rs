//! Cacheable response envelopes.
//!
//! These are stored in the cache as-is, timestamp included, so a cache hit
//! returns exactly what the first request returned.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::{AppSummary, RankedApp};

/// Keyword search results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SearchListing {
    pub keyword: String,
    pub total: usize,
    pub apps: Vec<AppSummary>,
    /// When the results were fetched (RFC 3339)
    #[schema(value_type = String, format = DateTime)]
    pub timestamp: String,
}

impl SearchListing {
    pub fn new(keyword: impl Into<String>, apps: Vec<AppSummary>) -> Self {
        Self {
            keyword: keyword.into(),
            total: apps.len(),
            apps,
            timestamp: crate::utils::time::now_rfc3339(),
        }
    }
}

/// Top-chart rankings for one country.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RankingListing {
    pub country: String,
    pub total: usize,
    pub apps: Vec<RankedApp>,
    #[schema(value_type = String, format = DateTime)]
    pub timestamp: String,
}

impl RankingListing {
    pub fn new(country: impl Into<String>, apps: Vec<RankedApp>) -> Self {
        Self {
            country: country.into(),
            total: apps.len(),
            apps,
            timestamp: crate::utils::time::now_rfc3339(),
        }
    }
}
