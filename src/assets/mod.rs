// Content loading system
//
// Resolves content paths, decodes texture pixel data, and hands out cheap
// shared handles that the graphics subsystem passes around instead of pixels.

mod content;
mod handle;
mod loader;

pub use content::{ContentLoader, ContentManager, ContentStats, TextureData};
pub use handle::{AssetHandle, AssetId, TextureAsset, TextureHandle};
pub use loader::AssetLoader;

/// Content loading errors
#[derive(Debug, thiserror::Error)]
pub enum AssetError {
    #[error("asset not found: {0}")]
    NotFound(String),

    #[error("failed to load asset: {0}")]
    LoadError(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
