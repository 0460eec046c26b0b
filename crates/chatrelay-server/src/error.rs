//! Application error type and Axum response conversion.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chatrelay_core::RelayError;
use serde::Serialize;

/// Single catch-all for the chat endpoint: parse failures and upstream
/// failures collapse into the same generic 500 response. The underlying
/// cause goes to the log only, never to the client.
#[derive(Debug)]
pub enum AppError {
    Internal(String),
}

impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self {
        AppError::Internal(e.to_string())
    }
}

impl From<RelayError> for AppError {
    fn from(e: RelayError) -> Self {
        AppError::Internal(e.to_string())
    }
}

impl From<axum::http::Error> for AppError {
    fn from(e: axum::http::Error) -> Self {
        AppError::Internal(e.to_string())
    }
}

#[derive(Serialize)]
struct ErrorResponse {
    error: &'static str,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let AppError::Internal(message) = self;
        tracing::error!("Failed to process request: {}", message);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse { error: "Failed to process request" }),
        )
            .into_response()
    }
}
