//! App detail handler.

use axum::{
    Json,
    extract::{Path, State},
};
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

use crate::api::doc::CATALOG_TAG;
use crate::api::dto::{AppQuery, ErrorResponse};
use crate::error::AppResult;
use crate::models::AppDetail;
use crate::state::AppState;
use crate::utils::validate::ValidatedQuery;

pub fn app_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new().routes(routes!(get_app))
}

/// GET /api/app/{appId} - Look up one app by storefront id.
#[utoipa::path(
    get,
    path = "/app/{app_id}",
    tag = CATALOG_TAG,
    params(
        ("app_id" = String, Path, description = "Numeric storefront app id"),
        AppQuery
    ),
    responses(
        (status = 200, description = "App detail", body = AppDetail),
        (status = 400, description = "Malformed country code", body = ErrorResponse),
        (status = 404, description = "App not found or lookup failed", body = ErrorResponse)
    )
)]
async fn get_app(
    State(state): State<AppState>,
    Path(app_id): Path<String>,
    ValidatedQuery(query): ValidatedQuery<AppQuery>,
) -> AppResult<Json<AppDetail>> {
    let detail = state
        .services
        .catalog
        .app_detail(&app_id, query.country.as_deref())
        .await?;
    Ok(Json(detail))
}
