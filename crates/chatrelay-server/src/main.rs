mod config;
mod error;
mod handlers;
mod routes;

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use axum::body::Body;
use axum::http::{Request, Response};
use chatrelay_llm::{InferenceService, WorkersAi};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::config::ServerConfig;

pub struct ServerState {
    pub inference: Arc<dyn InferenceService>,
    pub system_prompt: String,
    pub max_tokens: u32,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_target(false)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".parse().unwrap()),
        )
        .compact()
        .init();

    let config = ServerConfig::from_env()?;

    let mut inference = WorkersAi::new(&config.account_id, &config.api_token, &config.model);
    if let Some(gateway) = &config.gateway {
        inference = inference.with_gateway(gateway);
    }

    let state = Arc::new(ServerState {
        inference: Arc::new(inference),
        system_prompt: config.system_prompt.clone(),
        max_tokens: config.max_tokens,
    });

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|req: &Request<Body>| {
            tracing::info_span!(
                "request",
                method = %req.method(),
                uri = %req.uri(),
                version = ?req.version(),
            )
        })
        .on_response(|res: &Response<Body>, latency: Duration, _span: &tracing::Span| {
            info!(
                latency = %format!("{} ms", latency.as_millis()),
                status = %res.status().as_u16(),
                "finished processing request"
            );
        });

    let app = routes::router(state)
        .fallback_service(ServeDir::new(&config.static_dir))
        .layer(trace_layer)
        .layer(cors);

    info!("Starting server on {}", config.bind_addr);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
