use std::time::Duration;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use transcription_domain::{DomainError, TranscriptionModel};

#[derive(Debug, Clone)]
pub struct WorkersAiConfig {
    pub base_url: String,
    pub account_id: String,
    pub api_token: String,
    pub request_timeout: Duration,
}

/// Thin client for `POST /accounts/{account}/ai/run/{model}`.
pub struct WorkersAiClient {
    http: reqwest::Client,
    config: WorkersAiConfig,
}

#[derive(Debug, Deserialize)]
struct Envelope<T> {
    result: Option<T>,
    #[serde(default)]
    success: bool,
    #[serde(default)]
    errors: Vec<ApiMessage>,
}

#[derive(Debug, Deserialize)]
struct ApiMessage {
    #[serde(default)]
    code: i64,
    #[serde(default)]
    message: String,
}

impl WorkersAiClient {
    pub fn new(config: WorkersAiConfig) -> Result<Self, DomainError> {
        let http = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(|err| {
                DomainError::provider_unavailable("workers-ai", format!("client init failed: {err}"))
            })?;
        Ok(Self { http, config })
    }

    fn run_url(&self, model: TranscriptionModel) -> String {
        format!(
            "{}/accounts/{}/ai/run/{}",
            self.config.base_url.trim_end_matches('/'),
            self.config.account_id,
            model.as_str()
        )
    }

    pub async fn run<B, T>(&self, model: TranscriptionModel, body: &B) -> Result<T, DomainError>
    where
        B: Serialize + Sync,
        T: DeserializeOwned,
    {
        let provider = model.as_str();
        let response = self
            .http
            .post(self.run_url(model))
            .bearer_auth(&self.config.api_token)
            .json(body)
            .send()
            .await
            .map_err(|err| {
                let reason = if err.is_timeout() {
                    "request timed out".to_string()
                } else {
                    format!("request failed: {err}")
                };
                DomainError::provider_unavailable(provider, reason)
            })?;

        let status = response.status();
        let raw = response.text().await.map_err(|err| {
            DomainError::provider_unavailable(provider, format!("failed to read body: {err}"))
        })?;

        if !status.is_success() {
            let detail = serde_json::from_str::<Envelope<serde_json::Value>>(&raw)
                .ok()
                .map(|envelope| describe_errors(&envelope.errors))
                .filter(|detail| !detail.is_empty())
                .unwrap_or(raw);
            tracing::warn!(model = provider, status = %status, detail = %detail, "workers ai run failed");
            return Err(DomainError::provider_unavailable(
                provider,
                format!("HTTP {status}: {detail}"),
            ));
        }

        let envelope: Envelope<T> = serde_json::from_str(&raw).map_err(|err| {
            DomainError::provider_unavailable(provider, format!("malformed response: {err}"))
        })?;
        if !envelope.success {
            return Err(DomainError::provider_unavailable(
                provider,
                describe_errors(&envelope.errors),
            ));
        }
        envelope
            .result
            .ok_or_else(|| DomainError::provider_unavailable(provider, "response carried no result"))
    }
}

fn describe_errors(errors: &[ApiMessage]) -> String {
    errors
        .iter()
        .map(|error| format!("{}: {}", error.code, error.message))
        .collect::<Vec<_>>()
        .join("; ")
}
