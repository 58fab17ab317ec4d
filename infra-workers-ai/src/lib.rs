mod client;
mod whisper;
mod whisper_turbo;

pub use client::{WorkersAiClient, WorkersAiConfig};
pub use whisper::WhisperAdapter;
pub use whisper_turbo::WhisperTurboAdapter;
