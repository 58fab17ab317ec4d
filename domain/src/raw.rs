//! Output shapes returned by the Workers AI whisper models.
//!
//! Every field besides `text` may be missing or `null`, so all of them are
//! optional. These types stop at the normalizer; nothing downstream of
//! [`crate::normalize`] sees them.

use serde::Deserialize;

#[derive(Debug, Clone)]
pub enum RawProviderResult {
    Whisper(WhisperOutput),
    WhisperTurbo(WhisperTurboOutput),
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct WhisperOutput {
    pub text: String,
    #[serde(default)]
    pub words: Option<Vec<RawWord>>,
    #[serde(default)]
    pub vtt: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct WhisperTurboOutput {
    pub text: String,
    #[serde(default)]
    pub transcription_info: Option<RawTranscriptionInfo>,
    #[serde(default)]
    pub segments: Option<Vec<RawSegment>>,
    #[serde(default)]
    pub vtt: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawTranscriptionInfo {
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub duration: Option<f64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawSegment {
    #[serde(default)]
    pub start: Option<f64>,
    #[serde(default)]
    pub end: Option<f64>,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub temperature: Option<f64>,
    #[serde(default)]
    pub avg_logprob: Option<f64>,
    #[serde(default)]
    pub compression_ratio: Option<f64>,
    #[serde(default)]
    pub no_speech_prob: Option<f64>,
    #[serde(default)]
    pub words: Option<Vec<RawWord>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawWord {
    #[serde(default)]
    pub word: Option<String>,
    #[serde(default)]
    pub start: Option<f64>,
    #[serde(default)]
    pub end: Option<f64>,
}
