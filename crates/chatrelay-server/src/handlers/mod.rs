//! HTTP route handlers.

pub mod chat;

use axum::http::StatusCode;

/// Catch-all for non-POST methods on the chat endpoint.
pub async fn method_not_allowed() -> (StatusCode, &'static str) {
    (StatusCode::METHOD_NOT_ALLOWED, "Method not allowed")
}

/// Catch-all for unknown API paths.
pub async fn not_found() -> (StatusCode, &'static str) {
    (StatusCode::NOT_FOUND, "Not found")
}
