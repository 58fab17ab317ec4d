use crate::raw::{RawProviderResult, RawSegment, RawWord, WhisperOutput, WhisperTurboOutput};
use crate::{CanonicalTranscription, Segment, Word};

pub fn normalize(raw: RawProviderResult) -> CanonicalTranscription {
    match raw {
        RawProviderResult::Whisper(output) => from_whisper(output),
        RawProviderResult::WhisperTurbo(output) => from_whisper_turbo(output),
    }
}

fn from_whisper(output: WhisperOutput) -> CanonicalTranscription {
    CanonicalTranscription {
        text: output.text,
        language: None,
        duration: None,
        segments: None,
        words: output
            .words
            .map(|words| words.into_iter().filter_map(to_word).collect()),
        vtt: output.vtt,
    }
}

fn from_whisper_turbo(output: WhisperTurboOutput) -> CanonicalTranscription {
    let (language, duration) = match output.transcription_info {
        Some(info) => (info.language, info.duration),
        None => (None, None),
    };

    let raw_segments = output.segments.unwrap_or_default();
    let mut segments = Vec::with_capacity(raw_segments.len());
    let mut words = Vec::new();
    for mut raw_segment in raw_segments {
        // Words are collected even when their segment is incomplete.
        if let Some(raw_words) = raw_segment.words.take() {
            words.extend(raw_words.into_iter().filter_map(to_word));
        }
        let index = segments.len() as u32;
        if let Some(segment) = to_segment(raw_segment, index) {
            segments.push(segment);
        }
    }

    CanonicalTranscription {
        text: output.text,
        language,
        duration,
        segments: Some(segments),
        words: Some(words),
        vtt: output.vtt,
    }
}

fn to_segment(raw: RawSegment, index: u32) -> Option<Segment> {
    Some(Segment {
        index,
        seek_offset: 0,
        start_sec: raw.start?,
        end_sec: raw.end?,
        text: raw.text?,
        token_ids: Vec::new(),
        temperature: raw.temperature?,
        avg_log_prob: raw.avg_logprob?,
        compression_ratio: raw.compression_ratio?,
        no_speech_prob: raw.no_speech_prob?,
    })
}

fn to_word(raw: RawWord) -> Option<Word> {
    Some(Word {
        text: raw.word?,
        start_sec: raw.start?,
        end_sec: raw.end?,
    })
}
