use std::borrow::Cow;

use validator::{Validate, ValidationError};

use transcription_domain::{
    ContentType, Granularities, ResponseFormat, TimestampGranularity, TranscriptionModel,
};

/// Decoded `multipart/form-data` body of `POST /v1/audio/transcriptions`.
#[derive(Debug, Clone, Default, Validate)]
pub struct TranscribeAudioRequest {
    #[validate(length(min = 1, message = "file must not be empty"))]
    pub file: Vec<u8>,
    pub file_name: Option<String>,
    #[validate(custom(function = "validate_model"))]
    pub model: String,
    pub language: Option<String>,
    pub prompt: Option<String>,
    #[validate(custom(function = "validate_response_format"))]
    pub response_format: Option<String>,
    #[validate(range(min = 0.0, max = 1.0))]
    pub temperature: Option<f32>,
    #[validate(custom(function = "validate_granularities"))]
    pub timestamp_granularities: Option<Vec<String>>,
}

#[derive(Debug, Clone)]
pub struct TranscribeAudioResponse {
    pub request_id: String,
    pub model: TranscriptionModel,
    pub response_format: ResponseFormat,
    pub body: String,
    pub content_type: ContentType,
}

impl TranscribeAudioRequest {
    pub fn granularities(&self) -> Result<Granularities, ValidationError> {
        let Some(values) = &self.timestamp_granularities else {
            return Ok(Granularities::default());
        };
        let parsed = values
            .iter()
            .map(|value| {
                value
                    .parse::<TimestampGranularity>()
                    .map_err(|err| invalid("timestamp_granularities", err.to_string()))
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Granularities::from_requested(&parsed))
    }
}

fn validate_model(model: &str) -> Result<(), ValidationError> {
    model
        .parse::<TranscriptionModel>()
        .map(|_| ())
        .map_err(|err| invalid("model", err.to_string()))
}

fn validate_response_format(format: &str) -> Result<(), ValidationError> {
    format
        .parse::<ResponseFormat>()
        .map(|_| ())
        .map_err(|err| invalid("response_format", err.to_string()))
}

fn validate_granularities(values: &[String]) -> Result<(), ValidationError> {
    for value in values {
        value
            .parse::<TimestampGranularity>()
            .map_err(|err| invalid("timestamp_granularities", err.to_string()))?;
    }
    Ok(())
}

fn invalid(code: &'static str, message: String) -> ValidationError {
    ValidationError::new(code).with_message(Cow::Owned(message))
}
