use thiserror::Error;

use crate::ResponseFormat;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum DomainError {
    #[error("validation failed: {0}")]
    Validation(String),

    #[error("provider `{provider}` unavailable: {message}")]
    ProviderUnavailable { provider: String, message: String },

    #[error("response_format `{0}` is not implemented")]
    UnsupportedFormat(ResponseFormat),

    #[error("transcription info not found in provider result")]
    MissingTranscriptionMetadata,

    #[error("invalid response_format `{0}`")]
    InvalidResponseFormat(String),

    #[error("failed to encode response body: {0}")]
    Serialization(String),
}

impl DomainError {
    pub fn provider_unavailable(provider: &str, message: impl Into<String>) -> Self {
        DomainError::ProviderUnavailable {
            provider: provider.to_string(),
            message: message.into(),
        }
    }

    /// Message safe to hand back to API clients; provider details stay in logs.
    pub fn public_message(&self) -> String {
        match self {
            DomainError::Validation(message) => message.clone(),
            DomainError::ProviderUnavailable { .. } => "Inference provider unavailable".to_string(),
            DomainError::UnsupportedFormat(_) => "Not implemented".to_string(),
            DomainError::MissingTranscriptionMetadata => "Transcription info not found".to_string(),
            DomainError::InvalidResponseFormat(_) => "Invalid response_format".to_string(),
            DomainError::Serialization(_) => "Failed to encode transcription".to_string(),
        }
    }
}
