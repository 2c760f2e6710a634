//! Service banner at `/`.

use axum::{Json, extract::State};
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

use crate::api::doc::SYSTEM_TAG;
use crate::api::dto::IndexResponse;
use crate::state::AppState;

/// Paths advertised by the index endpoint and the startup banner.
pub const ENDPOINTS: [(&str, &str, &str); 7] = [
    ("GET", "/api/health", "Health check"),
    ("GET", "/api/search", "Search apps by keyword"),
    ("GET", "/api/app/{appId}", "App detail"),
    ("GET", "/api/rankings", "Top free chart"),
    ("POST", "/api/keywords/analyze", "Keyword competition analysis"),
    ("GET", "/api/trends/{appId}", "Trend series"),
    ("GET", "/api/dashboard/stats", "Dashboard counters"),
];

pub fn index_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new().routes(routes!(index))
}

/// GET / - Service name, version and endpoint list.
#[utoipa::path(
    get,
    path = "/",
    tag = SYSTEM_TAG,
    responses(
        (status = 200, description = "Service is running", body = IndexResponse)
    )
)]
async fn index(State(state): State<AppState>) -> Json<IndexResponse> {
    Json(IndexResponse {
        name: state.application.name.clone(),
        version: state.application.version.clone(),
        status: "running".to_string(),
        endpoints: ENDPOINTS.iter().map(|(_, path, _)| path.to_string()).collect(),
    })
}
