mod transcription;

pub use transcription::*;
