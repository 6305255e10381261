// Central content manager: decode-and-cache texture loading

use super::{AssetError, AssetHandle, AssetId, AssetLoader, TextureHandle};
use anyhow::Result;
use image::GenericImageView;
use log::info;
use std::collections::HashMap;
use std::path::Path;

/// The content-loading collaborator consumed by the graphics subsystem.
///
/// `TextureAtlas::from_file` resolves its texture path and reads its
/// descriptor document through this trait, so atlases can be loaded from any
/// content source (filesystem, archive, test fixture).
pub trait ContentLoader {
    /// Resolve and load the texture at a content-relative path, returning a
    /// shared handle to it
    fn load_texture(&mut self, path: &str) -> Result<TextureHandle>;

    /// Load the raw bytes of a content file
    fn load_bytes(&self, path: &str) -> Result<Vec<u8>>;
}

/// A decoded texture: RGBA8 pixels plus dimensions.
///
/// The core never uploads pixels anywhere; the renderer collaborator fetches
/// this by handle when it needs to.
#[derive(Debug, Clone)]
pub struct TextureData {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

/// Filesystem-backed content manager.
///
/// Decodes textures once, caches them by path, and hands out stable handles:
/// loading the same path twice returns the same handle without re-decoding.
pub struct ContentManager {
    loader: AssetLoader,
    textures: HashMap<AssetId, TextureData>,
    texture_paths: HashMap<String, AssetId>,
}

impl ContentManager {
    /// Create a content manager rooted at the given content directory
    pub fn new<P: AsRef<Path>>(content_path: P) -> Self {
        Self {
            loader: AssetLoader::new(content_path),
            textures: HashMap::new(),
            texture_paths: HashMap::new(),
        }
    }

    /// Register a texture decoded from in-memory image bytes.
    ///
    /// Fails if the name is already registered.
    pub fn load_texture_from_bytes(&mut self, name: &str, bytes: &[u8]) -> Result<TextureHandle> {
        if self.texture_paths.contains_key(name) {
            return Err(AssetError::LoadError(format!("texture already loaded: {}", name)).into());
        }
        self.insert_decoded(name, bytes)
    }

    /// Look up a decoded texture by handle
    pub fn texture(&self, handle: TextureHandle) -> Option<&TextureData> {
        self.textures.get(&handle.id())
    }

    /// Statistics about loaded content
    pub fn stats(&self) -> ContentStats {
        ContentStats {
            texture_count: self.textures.len(),
        }
    }

    /// Get the underlying path loader
    pub fn loader(&self) -> &AssetLoader {
        &self.loader
    }

    fn insert_decoded(&mut self, name: &str, bytes: &[u8]) -> Result<TextureHandle> {
        let decoded = image::load_from_memory(bytes)
            .map_err(|e| AssetError::LoadError(format!("failed to decode {}: {}", name, e)))?;
        let (width, height) = decoded.dimensions();
        let pixels = decoded.to_rgba8().into_raw();

        let id = AssetId::from_path(name);
        self.textures.insert(
            id,
            TextureData {
                width,
                height,
                pixels,
            },
        );
        self.texture_paths.insert(name.to_string(), id);

        info!("loaded texture {} ({}x{})", name, width, height);
        Ok(AssetHandle::new(id))
    }
}

impl ContentLoader for ContentManager {
    fn load_texture(&mut self, path: &str) -> Result<TextureHandle> {
        if let Some(&id) = self.texture_paths.get(path) {
            return Ok(AssetHandle::new(id));
        }

        let bytes = self.loader.load_bytes(path)?;
        self.insert_decoded(path, &bytes)
    }

    fn load_bytes(&self, path: &str) -> Result<Vec<u8>> {
        self.loader.load_bytes(path)
    }
}

/// Statistics about loaded content
#[derive(Debug, Clone, Copy)]
pub struct ContentStats {
    pub texture_count: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn png_bytes(width: u32, height: u32) -> Vec<u8> {
        let img = image::RgbaImage::from_pixel(width, height, image::Rgba([255, 0, 255, 255]));
        let mut bytes = Vec::new();
        img.write_to(&mut Cursor::new(&mut bytes), image::ImageOutputFormat::Png)
            .unwrap();
        bytes
    }

    #[test]
    fn test_load_from_bytes_decodes_dimensions() {
        let mut content = ContentManager::new(".");
        let handle = content
            .load_texture_from_bytes("atlas.png", &png_bytes(4, 2))
            .unwrap();

        let data = content.texture(handle).unwrap();
        assert_eq!(data.width, 4);
        assert_eq!(data.height, 2);
        assert_eq!(data.pixels.len(), 4 * 2 * 4);
    }

    #[test]
    fn test_duplicate_byte_load_is_rejected() {
        let mut content = ContentManager::new(".");
        content
            .load_texture_from_bytes("atlas.png", &png_bytes(2, 2))
            .unwrap();
        assert!(content
            .load_texture_from_bytes("atlas.png", &png_bytes(2, 2))
            .is_err());
    }

    #[test]
    fn test_garbage_bytes_fail_to_decode() {
        let mut content = ContentManager::new(".");
        assert!(content
            .load_texture_from_bytes("bogus.png", b"not an image")
            .is_err());
    }

    #[test]
    fn test_repeated_loads_return_the_cached_handle() {
        let mut content = ContentManager::new(".");
        let first = content
            .load_texture_from_bytes("a.png", &png_bytes(2, 2))
            .unwrap();

        // The path is cached, so this never touches the filesystem.
        let second = content.load_texture("a.png").unwrap();
        assert_eq!(first, second);
        assert_eq!(content.stats().texture_count, 1);
    }

    #[test]
    fn test_missing_texture_file_propagates_not_found() {
        let mut content = ContentManager::new(".");
        assert!(content.load_texture("no-such-texture.png").is_err());
    }

    #[test]
    fn test_stats_count_textures() {
        let mut content = ContentManager::new(".");
        assert_eq!(content.stats().texture_count, 0);

        content
            .load_texture_from_bytes("a.png", &png_bytes(1, 1))
            .unwrap();
        content
            .load_texture_from_bytes("b.png", &png_bytes(1, 1))
            .unwrap();
        assert_eq!(content.stats().texture_count, 2);
    }
}
