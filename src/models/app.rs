//! App metadata in the normalized shape served to clients.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One search result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
#[schema(example = json!({
    "id": "1142110895",
    "name": "Example Photo Editor",
    "developer": "Example Inc.",
    "category": "Photo & Video",
    "price": 0.0,
    "rating": 4.7,
    "ratingCount": 120345,
    "version": "5.2.1",
    "description": "Edit photos in seconds...",
    "iconUrl": "https://is1-ssl.mzstatic.com/image/512x512bb.jpg",
    "url": "https://apps.apple.com/cn/app/id1142110895"
}))]
pub struct AppSummary {
    pub id: String,
    pub name: String,
    pub developer: String,
    pub category: String,
    pub price: f64,
    /// Average user rating, one decimal
    pub rating: f64,
    pub rating_count: u64,
    pub version: String,
    /// First 200 characters followed by `...`
    pub description: String,
    pub icon_url: String,
    pub url: String,
}

/// Full lookup result for a single app.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AppDetail {
    pub id: String,
    pub name: String,
    pub developer: String,
    pub category: String,
    pub rating: f64,
    pub rating_count: u64,
    pub version: String,
    /// Untruncated description
    pub description: String,
    pub release_notes: String,
    pub price: f64,
    pub icon_url: String,
    pub screenshots: Vec<String>,
    pub url: String,
}

/// Top-chart entry. `rank` is the 1-based feed position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RankedApp {
    pub rank: u32,
    pub app_id: String,
    pub id: String,
    pub name: String,
    pub developer: String,
    pub category: String,
    pub price: f64,
    pub description: String,
    pub icon_url: String,
    pub url: String,
}
