use std::sync::Arc;

use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::Serialize;
use transcription_domain::raw::WhisperTurboOutput;
use transcription_domain::{
    DomainError, ProviderRequest, RawProviderResult, TranscriptionModel, TranscriptionProvider,
};

use crate::WorkersAiClient;

/// `@cf/openai/whisper-large-v3-turbo`: base64 audio plus language and
/// initial prompt conditioning.
pub struct WhisperTurboAdapter {
    client: Arc<WorkersAiClient>,
}

#[derive(Serialize)]
struct WhisperTurboInput<'a> {
    audio: String,
    task: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    language: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    initial_prompt: Option<&'a str>,
}

impl WhisperTurboAdapter {
    pub fn new(client: Arc<WorkersAiClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl TranscriptionProvider for WhisperTurboAdapter {
    fn model(&self) -> TranscriptionModel {
        TranscriptionModel::WhisperLargeV3Turbo
    }

    async fn invoke(&self, request: ProviderRequest) -> Result<RawProviderResult, DomainError> {
        tracing::debug!(
            audio_bytes = request.audio.len(),
            language = request.language.as_deref().unwrap_or("auto"),
            has_prompt = request.prompt.is_some(),
            temperature = request.temperature,
            "invoking whisper-large-v3-turbo"
        );

        let input = WhisperTurboInput {
            audio: STANDARD.encode(&request.audio),
            task: "transcribe",
            language: request.language.as_deref(),
            initial_prompt: request.prompt.as_deref(),
        };
        let output: WhisperTurboOutput = self.client.run(self.model(), &input).await?;
        Ok(RawProviderResult::WhisperTurbo(output))
    }
}
