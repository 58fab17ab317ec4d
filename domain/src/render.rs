use serde::Serialize;

use crate::{
    CanonicalTranscription, ContentType, DomainError, Granularities, ModelCapabilities,
    RenderedResponse, ResponseFormat, Segment, TimestampGranularity, Word,
};

pub const EMPTY_VTT: &str = "WEBVTT\n\n";

#[derive(Debug, Clone, Copy)]
pub struct RenderOptions<'a> {
    pub format: ResponseFormat,
    pub granularities: &'a Granularities,
    pub capabilities: &'a ModelCapabilities,
}

pub fn render(
    canonical: &CanonicalTranscription,
    options: RenderOptions<'_>,
) -> Result<RenderedResponse, DomainError> {
    match options.format {
        ResponseFormat::Json => render_json(canonical, options),
        ResponseFormat::Text => Ok(RenderedResponse {
            body: canonical.text.clone(),
            content_type: ContentType::PlainText,
        }),
        ResponseFormat::Vtt => Ok(RenderedResponse {
            body: canonical
                .vtt
                .clone()
                .unwrap_or_else(|| EMPTY_VTT.to_string()),
            content_type: ContentType::Vtt,
        }),
        ResponseFormat::Srt => Err(DomainError::UnsupportedFormat(ResponseFormat::Srt)),
        ResponseFormat::VerboseJson => {
            let body = verbose_body(canonical, options.granularities)?;
            json_response(&body)
        }
    }
}

fn render_json(
    canonical: &CanonicalTranscription,
    options: RenderOptions<'_>,
) -> Result<RenderedResponse, DomainError> {
    if options.capabilities.json_timing && options.granularities.explicit {
        if let Ok(body) = verbose_body(canonical, options.granularities) {
            return json_response(&body);
        }
    }
    json_response(&TextBody {
        text: &canonical.text,
    })
}

fn verbose_body<'a>(
    canonical: &'a CanonicalTranscription,
    granularities: &Granularities,
) -> Result<VerboseBody<'a>, DomainError> {
    let (Some(language), Some(duration)) = (canonical.language.as_deref(), canonical.duration)
    else {
        return Err(DomainError::MissingTranscriptionMetadata);
    };

    let words = granularities
        .includes(TimestampGranularity::Word)
        .then(|| {
            canonical
                .words
                .iter()
                .flatten()
                .map(WordBody::from)
                .collect()
        });
    let segments = granularities
        .includes(TimestampGranularity::Segment)
        .then(|| {
            canonical
                .segments
                .iter()
                .flatten()
                .map(SegmentBody::from)
                .collect()
        });

    Ok(VerboseBody {
        language,
        duration,
        text: &canonical.text,
        words,
        segments,
    })
}

fn json_response<T: Serialize>(body: &T) -> Result<RenderedResponse, DomainError> {
    let body =
        serde_json::to_string(body).map_err(|err| DomainError::Serialization(err.to_string()))?;
    Ok(RenderedResponse {
        body,
        content_type: ContentType::Json,
    })
}

#[derive(Serialize)]
struct TextBody<'a> {
    text: &'a str,
}

#[derive(Serialize)]
struct VerboseBody<'a> {
    language: &'a str,
    duration: f64,
    text: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    words: Option<Vec<WordBody<'a>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    segments: Option<Vec<SegmentBody<'a>>>,
}

#[derive(Serialize)]
struct WordBody<'a> {
    word: &'a str,
    start: f64,
    end: f64,
}

impl<'a> From<&'a Word> for WordBody<'a> {
    fn from(word: &'a Word) -> Self {
        Self {
            word: &word.text,
            start: word.start_sec,
            end: word.end_sec,
        }
    }
}

#[derive(Serialize)]
struct SegmentBody<'a> {
    id: u32,
    seek: u32,
    start: f64,
    end: f64,
    text: &'a str,
    tokens: &'a [i64],
    temperature: f64,
    avg_logprob: f64,
    compression_ratio: f64,
    no_speech_prob: f64,
}

impl<'a> From<&'a Segment> for SegmentBody<'a> {
    fn from(segment: &'a Segment) -> Self {
        Self {
            id: segment.index,
            seek: segment.seek_offset,
            start: segment.start_sec,
            end: segment.end_sec,
            text: &segment.text,
            tokens: &segment.token_ids,
            temperature: segment.temperature,
            avg_logprob: segment.avg_log_prob,
            compression_ratio: segment.compression_ratio,
            no_speech_prob: segment.no_speech_prob,
        }
    }
}
