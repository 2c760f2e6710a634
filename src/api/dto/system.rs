//! Index, health and dashboard DTOs.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Service banner returned by `GET /`.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[schema(example = json!({
    "name": "aso-rs",
    "version": "0.1.0",
    "status": "running",
    "endpoints": ["/api/health", "/api/search"]
}))]
pub struct IndexResponse {
    pub name: String,
    pub version: String,
    #[schema(example = "running")]
    pub status: String,
    /// Paths of every API endpoint
    pub endpoints: Vec<String>,
}

/// Health check response structure.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[schema(example = json!({
    "status": "ok",
    "version": "0.1.0",
    "timestamp": "2024-01-01T12:00:00Z",
    "cache_size": 12
}))]
pub struct HealthResponse {
    #[schema(example = "ok")]
    pub status: String,
    /// Application version
    pub version: String,
    /// Timestamp of the health check (RFC 3339)
    #[schema(value_type = String, format = DateTime)]
    pub timestamp: String,
    /// Number of cached app details
    pub cache_size: usize,
}

/// Dashboard summary counters.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    /// Cached app details
    pub total_apps: usize,
    /// Cached keyword searches
    pub total_keywords: usize,
    /// Fixed display value, not measured
    #[schema(example = 85.5)]
    pub cache_hit_rate: f64,
    #[schema(value_type = String, format = DateTime)]
    pub last_update: String,
}
