use utoipa::OpenApi;

pub const SYSTEM_TAG: &str = "System";
pub const CATALOG_TAG: &str = "Catalog";
pub const KEYWORD_TAG: &str = "Keywords";
pub const TREND_TAG: &str = "Trends";

#[derive(OpenApi)]
#[openapi(
    info(
        title = "ASO Analytics",
        description = "App Store search, detail, rankings and keyword analysis backed by the iTunes storefront",
    ),
    components(
        schemas(
            crate::api::dto::ErrorResponse,
            crate::models::CompetitionLevel,
        )
    ),
    tags(
        (name = SYSTEM_TAG, description = "Index, health and dashboard endpoints"),
        (name = CATALOG_TAG, description = "Cached storefront search, app detail and rankings"),
        (name = KEYWORD_TAG, description = "Keyword competition analysis"),
        (name = TREND_TAG, description = "Synthetic trend series"),
    )
)]
pub struct ApiDoc;
