//! Keyword analysis DTOs.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::models::KeywordMetric;

/// Body of `POST /api/keywords/analyze`.
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[schema(example = json!({ "keywords": ["photo editor", "vpn"] }))]
pub struct AnalyzeRequest {
    /// Keywords to analyze, in the order results should be returned
    #[serde(default)]
    #[validate(length(min = 1, message = "missing required parameter 'keywords'"))]
    pub keywords: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct KeywordAnalysisResponse {
    pub keywords: Vec<KeywordMetric>,
    #[schema(value_type = String, format = DateTime)]
    pub timestamp: String,
}

impl KeywordAnalysisResponse {
    pub fn new(keywords: Vec<KeywordMetric>) -> Self {
        Self {
            keywords,
            timestamp: crate::utils::time::now_rfc3339(),
        }
    }
}
