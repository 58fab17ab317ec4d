use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use transcription_application::ApplicationError;
use transcription_domain::DomainError;

#[derive(Debug)]
pub enum HttpError {
    Validation { message: String },
    Internal { message: String, stage: &'static str },
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let (status, message, stage) = match self {
            HttpError::Validation { message } => {
                (StatusCode::UNPROCESSABLE_ENTITY, message, "validation")
            }
            HttpError::Internal { message, stage } => {
                (StatusCode::INTERNAL_SERVER_ERROR, message, stage)
            }
        };

        (
            status,
            Json(json!({
                "error": message,
                "stage": stage,
            })),
        )
            .into_response()
    }
}

pub fn error_mapper(error: ApplicationError) -> HttpError {
    match error {
        ApplicationError::Validation(message) => HttpError::Validation { message },
        ApplicationError::Stage {
            source: DomainError::Validation(message),
            ..
        } => HttpError::Validation { message },
        ApplicationError::Stage { stage, source } => HttpError::Internal {
            message: source.public_message(),
            stage: stage.as_str(),
        },
    }
}
