// Rectangular sub-views of a texture

use crate::assets::TextureHandle;
use crate::core::Rect;

/// An immutable rectangular region of a texture, in pixel units.
///
/// Regions share their texture through its handle; an atlas typically owns
/// many regions over a single packed texture.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextureRegion {
    texture: TextureHandle,
    source: Rect,
}

impl TextureRegion {
    /// Create a region covering `source` within the given texture
    pub fn new(texture: TextureHandle, source: Rect) -> Self {
        Self { texture, source }
    }

    /// The texture this region is a view into
    pub fn texture(&self) -> TextureHandle {
        self.texture
    }

    /// The pixel rectangle this region covers
    pub fn source(&self) -> Rect {
        self.source
    }

    /// Width of the region in pixels
    pub fn width(&self) -> f32 {
        self.source.width
    }

    /// Height of the region in pixels
    pub fn height(&self) -> f32 {
        self.source.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::{AssetHandle, AssetId};

    fn texture() -> TextureHandle {
        AssetHandle::new(AssetId::from_path("atlas.png"))
    }

    #[test]
    fn test_dimensions_come_from_the_source_rect() {
        let region = TextureRegion::new(texture(), Rect::new(32.0, 0.0, 48.0, 16.0));
        assert_eq!(region.width(), 48.0);
        assert_eq!(region.height(), 16.0);
        assert_eq!(region.source(), Rect::new(32.0, 0.0, 48.0, 16.0));
    }

    #[test]
    fn test_regions_share_one_texture() {
        let a = TextureRegion::new(texture(), Rect::new(0.0, 0.0, 32.0, 32.0));
        let b = TextureRegion::new(texture(), Rect::new(32.0, 0.0, 32.0, 32.0));
        assert_eq!(a.texture(), b.texture());
    }
}
