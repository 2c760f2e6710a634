//! Keyword search handler.

use axum::{Json, extract::State};
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

use crate::api::doc::CATALOG_TAG;
use crate::api::dto::{ErrorResponse, SearchQuery};
use crate::error::AppResult;
use crate::models::SearchListing;
use crate::state::AppState;
use crate::utils::validate::ValidatedQuery;

pub fn search_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new().routes(routes!(search_apps))
}

/// GET /api/search - Search the storefront by keyword.
///
/// Results are cached per keyword and country. An upstream failure yields
/// an empty (but successful) listing.
#[utoipa::path(
    get,
    path = "/search",
    tag = CATALOG_TAG,
    params(SearchQuery),
    responses(
        (status = 200, description = "Search results", body = SearchListing),
        (status = 400, description = "Missing keyword, invalid limit or country code", body = ErrorResponse)
    )
)]
async fn search_apps(
    State(state): State<AppState>,
    ValidatedQuery(query): ValidatedQuery<SearchQuery>,
) -> AppResult<Json<SearchListing>> {
    let listing = state
        .services
        .catalog
        .search(
            query.keyword.as_deref().unwrap_or_default(),
            query.country.as_deref(),
            query.limit,
        )
        .await?;
    Ok(Json(listing))
}
