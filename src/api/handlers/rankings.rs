//! Top-chart rankings handler.

use axum::{Json, extract::State};
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

use crate::api::doc::CATALOG_TAG;
use crate::api::dto::{ErrorResponse, RankingsQuery};
use crate::error::AppResult;
use crate::models::RankingListing;
use crate::state::AppState;
use crate::utils::validate::ValidatedQuery;

pub fn rankings_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new().routes(routes!(get_rankings))
}

/// GET /api/rankings - Top free apps for a country, in chart order.
#[utoipa::path(
    get,
    path = "/rankings",
    tag = CATALOG_TAG,
    params(RankingsQuery),
    responses(
        (status = 200, description = "Ranked apps", body = RankingListing),
        (status = 400, description = "Invalid limit or country code", body = ErrorResponse)
    )
)]
async fn get_rankings(
    State(state): State<AppState>,
    ValidatedQuery(query): ValidatedQuery<RankingsQuery>,
) -> AppResult<Json<RankingListing>> {
    let listing = state
        .services
        .catalog
        .rankings(query.country.as_deref(), query.limit)
        .await?;
    Ok(Json(listing))
}
