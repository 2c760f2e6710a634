//! Cross-origin policy for the dashboard frontend.

use axum::http::{Method, header};
use tower_http::cors::{Any, CorsLayer};

/// Any origin may call the API with GET, POST and OPTIONS plus a
/// `Content-Type` header.
pub fn create_cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE])
}
