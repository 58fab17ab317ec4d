use std::fmt;

use thiserror::Error;
use transcription_domain::DomainError;

/// Where in the dispatch flow a request failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchStage {
    Dispatch,
    Provider,
    Render,
}

impl DispatchStage {
    pub fn as_str(&self) -> &'static str {
        match self {
            DispatchStage::Dispatch => "dispatch",
            DispatchStage::Provider => "provider",
            DispatchStage::Render => "render",
        }
    }
}

impl fmt::Display for DispatchStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("{stage} stage failed: {source}")]
    Stage {
        stage: DispatchStage,
        #[source]
        source: DomainError,
    },
}

impl ApplicationError {
    pub fn at(stage: DispatchStage) -> impl FnOnce(DomainError) -> ApplicationError {
        move |source| match source {
            DomainError::Validation(message) => ApplicationError::Validation(message),
            source => ApplicationError::Stage { stage, source },
        }
    }
}
