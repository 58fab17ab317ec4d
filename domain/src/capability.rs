use crate::{ResponseFormat, TranscriptionModel};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelCapabilities {
    pub accepts_conditioning: bool,
    /// The provider reports language and duration, which `verbose_json` needs.
    pub transcription_info: bool,
    /// `json` renders the verbose shape when granularities were requested
    /// explicitly and the result carries language and duration.
    pub json_timing: bool,
    pub formats: &'static [ResponseFormat],
}

const NATIVE_FORMATS: &[ResponseFormat] = &[
    ResponseFormat::Json,
    ResponseFormat::Text,
    ResponseFormat::VerboseJson,
    ResponseFormat::Vtt,
];

static WHISPER: ModelCapabilities = ModelCapabilities {
    accepts_conditioning: false,
    transcription_info: false,
    json_timing: false,
    formats: NATIVE_FORMATS,
};

static WHISPER_LARGE_V3_TURBO: ModelCapabilities = ModelCapabilities {
    accepts_conditioning: true,
    transcription_info: true,
    json_timing: true,
    formats: NATIVE_FORMATS,
};

impl ModelCapabilities {
    pub fn for_model(model: TranscriptionModel) -> &'static ModelCapabilities {
        match model {
            TranscriptionModel::Whisper | TranscriptionModel::WhisperTinyEn => &WHISPER,
            TranscriptionModel::WhisperLargeV3Turbo => &WHISPER_LARGE_V3_TURBO,
        }
    }

    pub fn supports(&self, format: ResponseFormat) -> bool {
        self.formats.contains(&format)
            && (format != ResponseFormat::VerboseJson || self.transcription_info)
    }
}
