use std::net::SocketAddr;
use std::sync::Arc;

use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::Router;
use tokio::net::TcpListener;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;
use transcription_application::TranscribeUseCase;
use transcription_configuration::ServerConfig;

pub mod error;
pub mod handlers;
mod multipart;

pub use error::{error_mapper, HttpError};
pub use handlers::*;

#[derive(Clone)]
pub struct AppState {
    pub usecase: Arc<dyn TranscribeUseCase>,
}

impl AppState {
    pub fn new(usecase: Arc<dyn TranscribeUseCase>) -> Self {
        Self { usecase }
    }
}

pub fn build_router(state: AppState, max_body_bytes: usize) -> Router {
    let transcribe_route =
        post(create_transcription).layer(DefaultBodyLimit::max(max_body_bytes));

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    Router::new()
        .route("/", get(index))
        .route("/health", get(health_check))
        .route("/v1/models", get(list_models))
        .route("/v1/audio/transcriptions", transcribe_route)
        .layer(trace_layer)
        .with_state(state)
}

pub async fn create_app_routes(
    state: AppState,
    config: ServerConfig,
    max_body_bytes: usize,
) -> anyhow::Result<()> {
    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;
    let listener = TcpListener::bind(addr).await?;
    tracing::info!(%addr, "transcription http server listening");

    axum::serve(listener, build_router(state, max_body_bytes))
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to listen for shutdown signal");
    }
    tracing::info!("shutdown signal received");
}
