//! HTTP request handlers for API endpoints.
//!
//! Each module exposes a `*_routes()` function returning an
//! [`OpenApiRouter`] so routes and their OpenAPI paths are registered
//! together.

pub mod apps;
pub mod dashboard;
pub mod health;
pub mod index;
pub mod keywords;
pub mod rankings;
pub mod search;
pub mod trends;

use utoipa_axum::router::OpenApiRouter;

use crate::state::AppState;

/// All routes served under `/api`.
pub fn api_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .merge(health::health_routes())
        .merge(search::search_routes())
        .merge(apps::app_routes())
        .merge(rankings::rankings_routes())
        .merge(keywords::keyword_routes())
        .merge(trends::trend_routes())
        .merge(dashboard::dashboard_routes())
}
