//! Keyword competition metrics.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum CompetitionLevel {
    Low,
    Medium,
    High,
}

impl CompetitionLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            CompetitionLevel::Low => "low",
            CompetitionLevel::Medium => "medium",
            CompetitionLevel::High => "high",
        }
    }
}

/// Summary statistics over one keyword's search results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
#[schema(example = json!({
    "keyword": "photo editor",
    "appCount": 50,
    "totalRatings": 2345678,
    "avgRating": 4.52,
    "competitionLevel": "high",
    "hotScore": 100
}))]
pub struct KeywordMetric {
    pub keyword: String,
    pub app_count: u32,
    pub total_ratings: u64,
    /// Mean rating, two decimals; 0 when there are no results
    pub avg_rating: f64,
    pub competition_level: CompetitionLevel,
    /// `min(100, total_ratings / 1000)`
    pub hot_score: u32,
}
