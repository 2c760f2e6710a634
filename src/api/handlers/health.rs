//! Health check endpoint handler.

use axum::{Json, extract::State};
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

use crate::api::doc::SYSTEM_TAG;
use crate::api::dto::HealthResponse;
use crate::cache::Namespace;
use crate::state::AppState;
use crate::utils::time::now_rfc3339;

pub fn health_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new().routes(routes!(health_check))
}

/// GET /api/health - Liveness plus the number of cached app details.
///
/// Never touches the storefront, so it stays green during upstream outages.
#[utoipa::path(
    get,
    path = "/health",
    tag = SYSTEM_TAG,
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse)
    )
)]
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: state.application.version.clone(),
        timestamp: now_rfc3339(),
        cache_size: state.cache.len(Namespace::Apps),
    })
}
