use axum::extract::multipart::{Field, Multipart, MultipartError};
use transcription_application::TranscribeAudioRequest;

use crate::error::HttpError;

/// Collects the OpenAI transcription form into a request DTO.
///
/// Only structural problems are reported here; field values are checked by
/// the DTO's validation.
pub async fn read_transcription_form(
    mut multipart: Multipart,
) -> Result<TranscribeAudioRequest, HttpError> {
    let mut request = TranscribeAudioRequest::default();
    let mut file = None;
    let mut model = None;

    while let Some(field) = multipart.next_field().await.map_err(malformed)? {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "file" => {
                request.file_name = field.file_name().map(str::to_string);
                file = Some(field.bytes().await.map_err(malformed)?.to_vec());
            }
            "model" => model = Some(text(field).await?),
            "language" => {
                let language = text(field).await?;
                request.language = (!language.is_empty()).then_some(language);
            }
            "prompt" => {
                let prompt = text(field).await?;
                request.prompt = (!prompt.is_empty()).then_some(prompt);
            }
            "response_format" => request.response_format = Some(text(field).await?),
            "temperature" => {
                let raw = text(field).await?;
                let temperature = raw.trim().parse::<f32>().map_err(|_| HttpError::Validation {
                    message: format!("temperature must be a number, got {raw:?}"),
                })?;
                request.temperature = Some(temperature);
            }
            "timestamp_granularities[]" | "timestamp_granularities" => {
                let value = text(field).await?;
                request
                    .timestamp_granularities
                    .get_or_insert_with(Vec::new)
                    .push(value);
            }
            other => tracing::debug!(field = other, "ignoring unknown form field"),
        }
    }

    request.file = file.ok_or_else(|| missing("file"))?;
    request.model = model.ok_or_else(|| missing("model"))?;
    Ok(request)
}

async fn text(field: Field<'_>) -> Result<String, HttpError> {
    field.text().await.map_err(malformed)
}

fn malformed(err: MultipartError) -> HttpError {
    HttpError::Validation {
        message: format!("malformed multipart body: {}", err.body_text()),
    }
}

fn missing(field: &str) -> HttpError {
    HttpError::Validation {
        message: format!("missing required form field `{field}`"),
    }
}
