use axum::{
    extract::{Multipart, State},
    http::{header, HeaderName, StatusCode},
};

use crate::error::{error_mapper, HttpError};
use crate::multipart::read_transcription_form;
use crate::AppState;

const REQUEST_ID_HEADER: HeaderName = HeaderName::from_static("x-request-id");

pub async fn create_transcription(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<(StatusCode, [(HeaderName, String); 2], String), HttpError> {
    let request = read_transcription_form(multipart).await.inspect_err(|error| {
        tracing::warn!(error = ?error, "rejected transcription form");
    })?;

    tracing::info!(
        model = %request.model,
        audio_bytes = request.file.len(),
        file_name = request.file_name.as_deref().unwrap_or("unnamed"),
        response_format = request.response_format.as_deref().unwrap_or("json"),
        "received transcription request"
    );

    match state.usecase.transcribe(request).await {
        Ok(response) => {
            tracing::info!(
                request_id = %response.request_id,
                model = %response.model,
                response_format = %response.response_format,
                "transcription request completed"
            );
            Ok((
                StatusCode::OK,
                [
                    (header::CONTENT_TYPE, response.content_type.as_str().to_string()),
                    (REQUEST_ID_HEADER, response.request_id),
                ],
                response.body,
            ))
        }
        Err(error) => {
            tracing::error!(error = %error, "transcription request failed");
            Err(error_mapper(error))
        }
    }
}
