use std::sync::Arc;

use async_trait::async_trait;
use serde::Serialize;
use transcription_domain::raw::WhisperOutput;
use transcription_domain::{
    DomainError, ProviderRequest, RawProviderResult, TranscriptionModel, TranscriptionProvider,
};

use crate::WorkersAiClient;

/// `@cf/openai/whisper` and `@cf/openai/whisper-tiny-en`: raw audio sent as a
/// JSON byte array, no conditioning.
pub struct WhisperAdapter {
    client: Arc<WorkersAiClient>,
    model: TranscriptionModel,
}

#[derive(Serialize)]
struct WhisperInput<'a> {
    audio: &'a [u8],
}

impl WhisperAdapter {
    pub fn new(client: Arc<WorkersAiClient>, model: TranscriptionModel) -> Self {
        Self { client, model }
    }
}

#[async_trait]
impl TranscriptionProvider for WhisperAdapter {
    fn model(&self) -> TranscriptionModel {
        self.model
    }

    async fn invoke(&self, request: ProviderRequest) -> Result<RawProviderResult, DomainError> {
        tracing::debug!(
            model = %self.model,
            audio_bytes = request.audio.len(),
            temperature = request.temperature,
            "invoking whisper"
        );

        let output: WhisperOutput = self
            .client
            .run(self.model, &WhisperInput {
                audio: &request.audio,
            })
            .await?;
        Ok(RawProviderResult::Whisper(output))
    }
}
