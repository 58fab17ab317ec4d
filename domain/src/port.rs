use async_trait::async_trait;

use crate::{DomainError, RawProviderResult, TranscriptionModel};

#[derive(Debug, Clone)]
pub struct ProviderRequest {
    pub audio: Vec<u8>,
    pub language: Option<String>,
    pub prompt: Option<String>,
    pub temperature: f32,
}

/// One implementation per model; each builds its own wire shape.
#[async_trait]
pub trait TranscriptionProvider: Send + Sync {
    fn model(&self) -> TranscriptionModel;

    async fn invoke(&self, request: ProviderRequest) -> Result<RawProviderResult, DomainError>;
}
