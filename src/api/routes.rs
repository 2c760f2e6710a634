//! Router configuration for the API.
//!
//! This module provides centralized route registration and middleware
//! configuration for the application.

use axum::{Router, middleware};
use tower_http::catch_panic::CatchPanicLayer;
use utoipa::OpenApi;
use utoipa_axum::router::OpenApiRouter;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::doc::ApiDoc;
use crate::api::handlers;
use crate::api::middleware::{
    create_cors_layer, global_error_handler, handle_panic, logging_middleware,
    not_found_fallback, request_id_middleware,
};
use crate::state::AppState;

/// Creates the main application router with all routes and middleware.
///
/// # Middleware Order
/// Middleware is applied in reverse order of declaration (last added runs first):
/// 1. Panic catcher - turns a handler panic into a JSON 500
/// 2. CORS - answers preflight requests before anything else sees them
/// 3. Request ID - generates/propagates request IDs
/// 4. Logging - logs requests with request IDs
/// 5. Global error handler - rewrites non-JSON error bodies
///
/// # Routes
/// - `/` - Service banner
/// - `/api/*` - JSON endpoints
/// - `/swagger-ui`, `/api-docs/openapi.json` - API documentation
pub fn create_router(state: AppState) -> Router {
    let (router, openapi) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .merge(handlers::index::index_routes())
        .nest("/api", handlers::api_routes())
        .split_for_parts();

    router
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi))
        .fallback(not_found_fallback)
        .layer(middleware::from_fn(global_error_handler))
        .layer(middleware::from_fn(logging_middleware))
        .layer(middleware::from_fn(request_id_middleware))
        .layer(create_cors_layer())
        .layer(CatchPanicLayer::custom(handle_panic))
        .with_state(state)
}
