use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;
use validator::Validate;

use transcription_domain::{
    normalize, render, DomainError, ModelCapabilities, ProviderRequest, RenderOptions,
    ResponseFormat, TranscriptionModel, TranscriptionRequest,
};

use crate::{
    ApplicationError, DispatchStage, ProviderRegistry, TranscribeAudioRequest,
    TranscribeAudioResponse,
};

#[async_trait]
pub trait TranscribeUseCase: Send + Sync {
    async fn transcribe(
        &self,
        request: TranscribeAudioRequest,
    ) -> Result<TranscribeAudioResponse, ApplicationError>;

    fn models(&self) -> Vec<TranscriptionModel>;
}

pub struct TranscribeUseCaseImpl {
    providers: Arc<ProviderRegistry>,
}

impl TranscribeUseCaseImpl {
    pub fn new(providers: Arc<ProviderRegistry>) -> Self {
        Self { providers }
    }
}

#[async_trait]
impl TranscribeUseCase for TranscribeUseCaseImpl {
    async fn transcribe(
        &self,
        request: TranscribeAudioRequest,
    ) -> Result<TranscribeAudioResponse, ApplicationError> {
        request
            .validate()
            .map_err(|errors| ApplicationError::Validation(errors.to_string()))?;

        let request_id = Uuid::new_v4().to_string();
        let request = to_domain_request(request)?;
        let model = request.model;
        let format = request.response_format;
        let capabilities = ModelCapabilities::for_model(model);

        tracing::debug!(
            request_id = %request_id,
            model = %model,
            response_format = %format,
            audio_bytes = request.audio.len(),
            "dispatching transcription"
        );

        if !capabilities.supports(format) {
            return Err(ApplicationError::at(DispatchStage::Dispatch)(
                DomainError::UnsupportedFormat(format),
            ));
        }

        let provider = self.providers.get(model).ok_or_else(|| {
            ApplicationError::at(DispatchStage::Dispatch)(DomainError::provider_unavailable(
                model.as_str(),
                "no adapter registered",
            ))
        })?;

        let (language, prompt) = if capabilities.accepts_conditioning {
            (request.language, request.prompt)
        } else {
            (None, None)
        };
        let raw = provider
            .invoke(ProviderRequest {
                audio: request.audio,
                language,
                prompt,
                temperature: request.temperature,
            })
            .await
            .map_err(ApplicationError::at(DispatchStage::Provider))?;

        let canonical = normalize(raw);
        let rendered = render(
            &canonical,
            RenderOptions {
                format,
                granularities: &request.granularities,
                capabilities,
            },
        )
        .map_err(ApplicationError::at(DispatchStage::Render))?;

        tracing::debug!(
            request_id = %request_id,
            content_type = rendered.content_type.as_str(),
            body_bytes = rendered.body.len(),
            "transcription rendered"
        );

        Ok(TranscribeAudioResponse {
            request_id,
            model,
            response_format: format,
            body: rendered.body,
            content_type: rendered.content_type,
        })
    }

    fn models(&self) -> Vec<TranscriptionModel> {
        self.providers.models()
    }
}

fn to_domain_request(
    request: TranscribeAudioRequest,
) -> Result<TranscriptionRequest, ApplicationError> {
    let granularities = request
        .granularities()
        .map_err(|err| ApplicationError::Validation(err.to_string()))?;
    let model = request
        .model
        .parse::<TranscriptionModel>()
        .map_err(ApplicationError::at(DispatchStage::Dispatch))?;
    let response_format = match request.response_format.as_deref() {
        Some(value) => value
            .parse::<ResponseFormat>()
            .map_err(ApplicationError::at(DispatchStage::Dispatch))?,
        None => ResponseFormat::default(),
    };
    let temperature = request.temperature.unwrap_or(0.0);
    if !temperature.is_finite() {
        return Err(ApplicationError::Validation(
            "temperature must be a finite number".to_string(),
        ));
    }

    Ok(TranscriptionRequest {
        audio: request.file,
        model,
        language: request.language,
        prompt: request.prompt,
        response_format,
        temperature,
        granularities,
    })
}
