mod health;
mod models;
mod transcriptions;

pub use health::{health_check, index};
pub use models::list_models;
pub use transcriptions::create_transcription;
