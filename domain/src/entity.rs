use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::DomainError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TranscriptionModel {
    #[serde(rename = "@cf/openai/whisper")]
    Whisper,
    #[serde(rename = "@cf/openai/whisper-tiny-en")]
    WhisperTinyEn,
    #[serde(rename = "@cf/openai/whisper-large-v3-turbo")]
    WhisperLargeV3Turbo,
}

impl TranscriptionModel {
    pub const ALL: [TranscriptionModel; 3] = [
        TranscriptionModel::Whisper,
        TranscriptionModel::WhisperTinyEn,
        TranscriptionModel::WhisperLargeV3Turbo,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TranscriptionModel::Whisper => "@cf/openai/whisper",
            TranscriptionModel::WhisperTinyEn => "@cf/openai/whisper-tiny-en",
            TranscriptionModel::WhisperLargeV3Turbo => "@cf/openai/whisper-large-v3-turbo",
        }
    }
}

impl fmt::Display for TranscriptionModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TranscriptionModel {
    type Err = DomainError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|model| model.as_str() == value)
            .ok_or_else(|| DomainError::Validation(format!("unsupported model `{value}`")))
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponseFormat {
    #[default]
    Json,
    Text,
    Srt,
    VerboseJson,
    Vtt,
}

impl ResponseFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResponseFormat::Json => "json",
            ResponseFormat::Text => "text",
            ResponseFormat::Srt => "srt",
            ResponseFormat::VerboseJson => "verbose_json",
            ResponseFormat::Vtt => "vtt",
        }
    }
}

impl fmt::Display for ResponseFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ResponseFormat {
    type Err = DomainError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "json" => Ok(ResponseFormat::Json),
            "text" => Ok(ResponseFormat::Text),
            "srt" => Ok(ResponseFormat::Srt),
            "verbose_json" => Ok(ResponseFormat::VerboseJson),
            "vtt" => Ok(ResponseFormat::Vtt),
            other => Err(DomainError::InvalidResponseFormat(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimestampGranularity {
    Word,
    Segment,
}

impl TimestampGranularity {
    pub fn as_str(&self) -> &'static str {
        match self {
            TimestampGranularity::Word => "word",
            TimestampGranularity::Segment => "segment",
        }
    }
}

impl FromStr for TimestampGranularity {
    type Err = DomainError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "word" => Ok(TimestampGranularity::Word),
            "segment" => Ok(TimestampGranularity::Segment),
            other => Err(DomainError::Validation(format!(
                "unsupported timestamp granularity `{other}`"
            ))),
        }
    }
}

/// Granularities requested by the client. `explicit` is false when the
/// default `{segment}` was applied because the form carried none.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Granularities {
    pub word: bool,
    pub segment: bool,
    pub explicit: bool,
}

impl Granularities {
    pub fn from_requested(requested: &[TimestampGranularity]) -> Self {
        Self {
            word: requested.contains(&TimestampGranularity::Word),
            segment: requested.contains(&TimestampGranularity::Segment),
            explicit: true,
        }
    }

    pub fn includes(&self, granularity: TimestampGranularity) -> bool {
        match granularity {
            TimestampGranularity::Word => self.word,
            TimestampGranularity::Segment => self.segment,
        }
    }
}

impl Default for Granularities {
    fn default() -> Self {
        Self {
            word: false,
            segment: true,
            explicit: false,
        }
    }
}

#[derive(Debug, Clone)]
pub struct TranscriptionRequest {
    pub audio: Vec<u8>,
    pub model: TranscriptionModel,
    pub language: Option<String>,
    pub prompt: Option<String>,
    pub response_format: ResponseFormat,
    pub temperature: f32,
    pub granularities: Granularities,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    pub index: u32,
    pub seek_offset: u32,
    pub start_sec: f64,
    pub end_sec: f64,
    pub text: String,
    pub token_ids: Vec<i64>,
    pub temperature: f64,
    pub avg_log_prob: f64,
    pub compression_ratio: f64,
    pub no_speech_prob: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Word {
    pub text: String,
    pub start_sec: f64,
    pub end_sec: f64,
}

/// Provider-agnostic transcription every response format is rendered from.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CanonicalTranscription {
    pub text: String,
    pub language: Option<String>,
    pub duration: Option<f64>,
    pub segments: Option<Vec<Segment>>,
    pub words: Option<Vec<Word>>,
    pub vtt: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentType {
    Json,
    PlainText,
    Vtt,
}

impl ContentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentType::Json => "application/json",
            ContentType::PlainText => "text/plain",
            ContentType::Vtt => "text/vtt",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedResponse {
    pub body: String,
    pub content_type: ContentType,
}
