//! Chat endpoint: forwards the conversation to the inference service and
//! relays its event stream back to the caller.

use std::sync::Arc;

use axum::body::{Body, Bytes};
use axum::extract::State;
use axum::http::{header, Response, StatusCode};
use chatrelay_core::{ensure_system_prompt, ChatMessage};
use chatrelay_llm::ChatOptions;
use serde::Deserialize;
use tracing::debug;

use crate::error::AppError;
use crate::ServerState;

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub messages: Vec<ChatMessage>,
}

/// POST /api/chat - streams model output as Server-Sent Events.
///
/// The body is parsed by hand rather than through the `Json` extractor so
/// that malformed input takes the same 500 path as upstream failures.
pub async fn handle(
    State(state): State<Arc<ServerState>>,
    body: Bytes,
) -> Result<Response<Body>, AppError> {
    let request: ChatRequest = serde_json::from_slice(&body)?;

    let mut messages = request.messages;
    ensure_system_prompt(&mut messages, &state.system_prompt);

    debug!("Forwarding {} messages upstream", messages.len());

    let opts = ChatOptions { max_tokens: state.max_tokens };
    let stream = state.inference.chat_stream(&messages, &opts).await?;

    // Chunks pass through as the upstream produces them; the body is
    // never assembled in memory.
    let response = Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, "text/event-stream; charset=utf-8")
        .header(header::CACHE_CONTROL, "no-cache")
        .header(header::CONNECTION, "keep-alive")
        .body(Body::from_stream(stream))?;

    Ok(response)
}
