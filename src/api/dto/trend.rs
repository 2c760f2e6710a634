//! Trend series DTO.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::TrendPoint;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TrendsResponse {
    pub app_id: String,
    pub trends: Vec<TrendPoint>,
    #[schema(value_type = String, format = DateTime)]
    pub timestamp: String,
}

impl TrendsResponse {
    pub fn new(app_id: impl Into<String>, trends: Vec<TrendPoint>) -> Self {
        Self {
            app_id: app_id.into(),
            trends,
            timestamp: crate::utils::time::now_rfc3339(),
        }
    }
}
