//! Error handler for converting AppError to HTTP responses.
//!
//! This module implements the IntoResponse trait for AppError and the
//! fallbacks that keep every error body in the `{ "error": ... }` shape:
//! unknown routes, non-JSON framework errors and handler panics.

use std::any::Any;

use axum::{
    Json,
    body::Body,
    extract::Request,
    http::{StatusCode, Uri, header},
    middleware::Next,
    response::{IntoResponse, Response},
};
use serde_json::json;

use super::RequestId;
use crate::api::dto::ErrorResponse;
use crate::error::AppError;

impl IntoResponse for AppError {
    /// Converts an AppError into an HTTP response.
    ///
    /// # Status Code Mapping
    /// - NotFound → 404 NOT_FOUND
    /// - Validation / ValidationErrors / BadRequest → 400 BAD_REQUEST
    /// - ExternalApi → 502 BAD_GATEWAY
    /// - Configuration / Internal → 500 INTERNAL_SERVER_ERROR
    fn into_response(self) -> Response {
        let status = error_to_status_code(&self);
        let error_response = match &self {
            AppError::NotFound {
                entity,
                field,
                value,
            } => ErrorResponse::not_found_error(entity, field, value),
            AppError::Validation { field, reason } => ErrorResponse::validation_error(field, reason),
            AppError::ValidationErrors { errors } => ErrorResponse::validation_errors(errors),
            AppError::BadRequest { message } => ErrorResponse::new("BAD_REQUEST", message),
            AppError::ExternalApi { source_name, .. } => {
                tracing::warn!(error = %self, "Upstream error reached the client");
                ErrorResponse::new("EXTERNAL_API_ERROR", "Upstream service request failed")
                    .with_details(json!({ "source": source_name }))
            }
            AppError::Configuration { key, .. } => {
                tracing::error!(error = ?self, "Configuration error while handling request");
                ErrorResponse::new("CONFIGURATION_ERROR", &format!("Configuration error: {}", key))
                    .with_details(json!({ "key": key }))
            }
            AppError::Internal { .. } => {
                tracing::error!(error = ?self, "Internal error while handling request");
                ErrorResponse::new("INTERNAL_ERROR", "An internal error occurred")
            }
        };

        (status, Json(error_response)).into_response()
    }
}

/// Maps an AppError variant to its corresponding HTTP status code.
pub fn error_to_status_code(error: &AppError) -> StatusCode {
    match error {
        AppError::NotFound { .. } => StatusCode::NOT_FOUND,
        AppError::Validation { .. } => StatusCode::BAD_REQUEST,
        AppError::ValidationErrors { .. } => StatusCode::BAD_REQUEST,
        AppError::BadRequest { .. } => StatusCode::BAD_REQUEST,
        AppError::ExternalApi { .. } => StatusCode::BAD_GATEWAY,
        AppError::Configuration { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Maps an AppError variant to its error code string.
pub fn error_to_code(error: &AppError) -> &'static str {
    match error {
        AppError::NotFound { .. } => "NOT_FOUND",
        AppError::Validation { .. } => "VALIDATION_ERROR",
        AppError::ValidationErrors { .. } => "VALIDATION_ERROR",
        AppError::BadRequest { .. } => "BAD_REQUEST",
        AppError::ExternalApi { .. } => "EXTERNAL_API_ERROR",
        AppError::Configuration { .. } => "CONFIGURATION_ERROR",
        AppError::Internal { .. } => "INTERNAL_ERROR",
    }
}

/// Router fallback for paths no route matches.
pub async fn not_found_fallback(uri: Uri) -> Response {
    tracing::debug!(path = %uri.path(), "No route matched");
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse::new("NOT_FOUND", "Endpoint not found")),
    )
        .into_response()
}

/// Panic handler for `CatchPanicLayer::custom`.
pub fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response<Body> {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.as_str()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s
    } else {
        "unknown panic payload"
    };
    tracing::error!(panic = %detail, "Handler panicked");

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse::new(
            "INTERNAL_SERVER_ERROR",
            "An internal server error occurred",
        )),
    )
        .into_response()
}

fn default_message(status: StatusCode) -> &'static str {
    match status {
        StatusCode::BAD_REQUEST => "Bad request - invalid or malformed request",
        StatusCode::NOT_FOUND => "The requested resource was not found",
        StatusCode::METHOD_NOT_ALLOWED => "HTTP method not allowed for this endpoint",
        StatusCode::UNSUPPORTED_MEDIA_TYPE => "Unsupported media type",
        StatusCode::REQUEST_TIMEOUT => "Request timeout",
        StatusCode::PAYLOAD_TOO_LARGE => "Request payload too large",
        StatusCode::INTERNAL_SERVER_ERROR => "An internal server error occurred",
        StatusCode::BAD_GATEWAY => "Bad gateway",
        StatusCode::SERVICE_UNAVAILABLE => "Service temporarily unavailable",
        StatusCode::GATEWAY_TIMEOUT => "Gateway timeout",
        _ => "An unknown error occurred",
    }
}

fn status_code_name(status: StatusCode) -> String {
    status
        .canonical_reason()
        .map(|reason| reason.to_uppercase().replace([' ', '-'], "_"))
        .unwrap_or_else(|| "UNKNOWN_ERROR".to_string())
}

/// Global error handling middleware.
///
/// Any 4xx/5xx response without a JSON body is rewritten into an
/// [`ErrorResponse`], keeping the original body text as the message when
/// there is one.
pub async fn global_error_handler(request: Request, next: Next) -> Response {
    let request_id = request
        .extensions()
        .get::<RequestId>()
        .map(|r| r.0.clone());

    let response = next.run(request).await;
    let status = response.status();

    if !(status.is_client_error() || status.is_server_error()) {
        return response;
    }

    let is_json = response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.contains("application/json"));
    if is_json {
        return response;
    }

    let (parts, body) = response.into_parts();
    let body_bytes = axum::body::to_bytes(body, 64 * 1024)
        .await
        .unwrap_or_default();
    let original_message = String::from_utf8_lossy(&body_bytes).trim().to_string();

    let message = if original_message.is_empty() {
        default_message(status).to_string()
    } else {
        original_message
    };

    let mut error_response = ErrorResponse::new(&status_code_name(status), &message);
    if let Some(id) = request_id {
        error_response = error_response.with_request_id(&id);
    }

    let mut rebuilt = (status, Json(error_response)).into_response();
    // keep headers such as `allow` on 405
    for (name, value) in parts.headers.iter() {
        if name != header::CONTENT_TYPE && name != header::CONTENT_LENGTH {
            rebuilt.headers_mut().insert(name.clone(), value.clone());
        }
    }
    rebuilt
}
