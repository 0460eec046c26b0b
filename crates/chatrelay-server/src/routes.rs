//! API route assembly.
//!
//! Anything outside `/api/` is the static-asset collaborator's business;
//! `main` mounts it as the router fallback.

use std::sync::Arc;

use axum::routing::{any, post};
use axum::Router;

use crate::handlers;
use crate::ServerState;

pub fn router(state: Arc<ServerState>) -> Router {
    Router::new()
        .route(
            "/api/chat",
            post(handlers::chat::handle).fallback(handlers::method_not_allowed),
        )
        .route("/api/{*path}", any(handlers::not_found))
        .with_state(state)
}
