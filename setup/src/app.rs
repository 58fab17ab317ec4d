use std::sync::Arc;

use anyhow::Error;
use axum::Router;
use transcription_application::{ProviderRegistry, TranscribeUseCase, TranscribeUseCaseImpl};
use transcription_configuration::{AppConfig, ProviderConfig, ServerConfig};
use transcription_domain::TranscriptionModel;
use transcription_http_server::{build_router, create_app_routes, AppState};
use transcription_infra_workers_ai::{
    WhisperAdapter, WhisperTurboAdapter, WorkersAiClient, WorkersAiConfig,
};

pub async fn build_and_run(config: AppConfig, server_config: ServerConfig) -> Result<(), Error> {
    let app = Application::new(config).await?;
    app.run(server_config).await
}

pub struct Application {
    pub config: AppConfig,
    pub state: AppState,
}

impl Application {
    pub async fn new(config: AppConfig) -> Result<Self, Error> {
        let provider = &config.service.provider;
        tracing::info!(
            base_url = %provider.base_url,
            request_timeout_ms = provider.request_timeout_ms,
            max_body_bytes = config.service.http.max_body_bytes,
            "initializing transcription application"
        );
        if provider.account_id.is_empty() || provider.api_token.is_empty() {
            tracing::warn!("workers ai credentials are not configured; provider calls will fail");
        }

        let registry = provider_registry(provider)?;
        tracing::info!(models = ?registry.models(), "registered transcription providers");

        let usecase: Arc<dyn TranscribeUseCase> =
            Arc::new(TranscribeUseCaseImpl::new(Arc::new(registry)));
        let state = AppState::new(usecase);

        Ok(Self { config, state })
    }

    pub fn router(&self) -> Router {
        build_router(self.state.clone(), self.config.service.http.max_body_bytes)
    }

    pub async fn run(self, server_config: ServerConfig) -> Result<(), Error> {
        tracing::info!(
            host = %server_config.host,
            port = server_config.port,
            "starting transcription HTTP routes"
        );

        create_app_routes(
            self.state,
            server_config,
            self.config.service.http.max_body_bytes,
        )
        .await
        .map_err(|err| anyhow::anyhow!("server startup failed: {err}"))
    }
}

fn provider_registry(provider: &ProviderConfig) -> Result<ProviderRegistry, Error> {
    let client = Arc::new(WorkersAiClient::new(WorkersAiConfig {
        base_url: provider.base_url.clone(),
        account_id: provider.account_id.clone(),
        api_token: provider.api_token.clone(),
        request_timeout: provider.request_timeout(),
    })?);

    Ok(ProviderRegistry::new()
        .register(Arc::new(WhisperAdapter::new(
            client.clone(),
            TranscriptionModel::Whisper,
        )))
        .register(Arc::new(WhisperAdapter::new(
            client.clone(),
            TranscriptionModel::WhisperTinyEn,
        )))
        .register(Arc::new(WhisperTurboAdapter::new(client))))
}
