//! Trend series handler.

use axum::{
    Json,
    extract::{Path, State},
};
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

use crate::api::doc::TREND_TAG;
use crate::api::dto::TrendsResponse;
use crate::state::AppState;

pub fn trend_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new().routes(routes!(get_trends))
}

/// GET /api/trends/{appId} - Seven daily points ending today.
///
/// The series is synthetic and identical for every app id.
#[utoipa::path(
    get,
    path = "/trends/{app_id}",
    tag = TREND_TAG,
    params(
        ("app_id" = String, Path, description = "Storefront app id (not validated)")
    ),
    responses(
        (status = 200, description = "Trend series", body = TrendsResponse)
    )
)]
async fn get_trends(
    State(state): State<AppState>,
    Path(app_id): Path<String>,
) -> Json<TrendsResponse> {
    let trends = state.services.trends.trends(&app_id);
    Json(TrendsResponse::new(app_id, trends))
}
