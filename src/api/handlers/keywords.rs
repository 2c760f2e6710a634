//! Keyword analysis handler.

use axum::{Json, extract::State};
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

use crate::api::doc::KEYWORD_TAG;
use crate::api::dto::{AnalyzeRequest, ErrorResponse, KeywordAnalysisResponse};
use crate::error::AppResult;
use crate::state::AppState;
use crate::utils::validate::ValidatedJson;

pub fn keyword_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new().routes(routes!(analyze_keywords))
}

/// POST /api/keywords/analyze - Competition metrics per keyword.
///
/// Always queries the storefront; analysis results are not cached.
#[utoipa::path(
    post,
    path = "/keywords/analyze",
    tag = KEYWORD_TAG,
    request_body = AnalyzeRequest,
    responses(
        (status = 200, description = "One metric per keyword, in request order", body = KeywordAnalysisResponse),
        (status = 400, description = "Missing or empty keyword list", body = ErrorResponse)
    )
)]
async fn analyze_keywords(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<AnalyzeRequest>,
) -> AppResult<Json<KeywordAnalysisResponse>> {
    let metrics = state.services.keywords.analyze(&request.keywords).await?;
    Ok(Json(KeywordAnalysisResponse::new(metrics)))
}
