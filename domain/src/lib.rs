pub mod capability;
pub mod entity;
pub mod error;
pub mod normalize;
pub mod port;
pub mod raw;
pub mod render;

pub use capability::*;
pub use entity::*;
pub use error::DomainError;
pub use normalize::normalize;
pub use port::*;
pub use raw::RawProviderResult;
pub use render::{render, RenderOptions, EMPTY_VTT};
