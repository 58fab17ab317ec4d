pub mod dto;
pub mod error;
pub mod registry;
pub mod usecase;

pub use dto::*;
pub use error::*;
pub use registry::ProviderRegistry;
pub use usecase::{TranscribeUseCase, TranscribeUseCaseImpl};
