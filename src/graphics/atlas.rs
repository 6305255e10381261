// Texture atlas registries and descriptor parsing

use super::{AnimatedSprite, Animation, GraphicsError, Sprite, TextureRegion};
use crate::assets::{ContentLoader, TextureHandle};
use crate::core::Rect;
use anyhow::Result;
use log::warn;
use serde::Deserialize;
use std::collections::HashMap;
use std::sync::Arc;

/// Frame duration used when a descriptor animation omits `frametime`
pub const DEFAULT_FRAME_TIME_MS: f32 = 100.0;

/// One packed texture plus name-keyed registries of regions and animations.
///
/// Built once at load time (programmatically or from a descriptor document)
/// and read-only afterwards; regions and animations are handed out as shared
/// references, never copies.
pub struct TextureAtlas {
    texture: TextureHandle,
    regions: HashMap<String, Arc<TextureRegion>>,
    animations: HashMap<String, Arc<Animation>>,
}

impl TextureAtlas {
    /// Create an empty atlas over the given texture
    pub fn new(texture: TextureHandle) -> Self {
        Self {
            texture,
            regions: HashMap::new(),
            animations: HashMap::new(),
        }
    }

    /// The packed texture every region is a view into
    pub fn texture(&self) -> TextureHandle {
        self.texture
    }

    /// Register a region by its pixel coordinates.
    ///
    /// Fails with `DuplicateRegion` if the name is already taken.
    pub fn add_region(
        &mut self,
        name: &str,
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    ) -> Result<(), GraphicsError> {
        self.add_region_rect(
            name,
            Rect::new(x as f32, y as f32, width as f32, height as f32),
        )
    }

    /// Register a region covering the given pixel rectangle
    pub fn add_region_rect(&mut self, name: &str, source: Rect) -> Result<(), GraphicsError> {
        if self.regions.contains_key(name) {
            return Err(GraphicsError::DuplicateRegion(name.to_string()));
        }
        self.regions.insert(
            name.to_string(),
            Arc::new(TextureRegion::new(self.texture, source)),
        );
        Ok(())
    }

    /// Register an animation.
    ///
    /// Fails with `DuplicateAnimation` if the name is already taken.
    pub fn add_animation(&mut self, name: &str, animation: Animation) -> Result<(), GraphicsError> {
        if self.animations.contains_key(name) {
            return Err(GraphicsError::DuplicateAnimation(name.to_string()));
        }
        self.animations.insert(name.to_string(), Arc::new(animation));
        Ok(())
    }

    /// Look up a region by exact name
    pub fn get_region(&self, name: &str) -> Result<Arc<TextureRegion>, GraphicsError> {
        self.regions
            .get(name)
            .cloned()
            .ok_or_else(|| GraphicsError::RegionNotFound(name.to_string()))
    }

    /// Look up an animation by exact name
    pub fn get_animation(&self, name: &str) -> Result<Arc<Animation>, GraphicsError> {
        self.animations
            .get(name)
            .cloned()
            .ok_or_else(|| GraphicsError::AnimationNotFound(name.to_string()))
    }

    /// Number of registered regions
    pub fn region_count(&self) -> usize {
        self.regions.len()
    }

    /// Number of registered animations
    pub fn animation_count(&self) -> usize {
        self.animations.len()
    }

    /// Create a sprite over the named region
    pub fn create_sprite(&self, region_name: &str) -> Result<Sprite, GraphicsError> {
        Ok(Sprite::new(self.get_region(region_name)?))
    }

    /// Create an animated sprite playing the named animation
    pub fn create_animated_sprite(
        &self,
        animation_name: &str,
    ) -> Result<AnimatedSprite, GraphicsError> {
        Ok(AnimatedSprite::new(self.get_animation(animation_name)?))
    }

    /// Load an atlas from a descriptor document.
    ///
    /// The document names the packed texture (loaded through the content
    /// collaborator) and lists regions followed by animations:
    ///
    /// ```json
    /// {
    ///   "texture": "images/atlas.png",
    ///   "regions": [
    ///     { "name": "slime", "x": 0, "y": 0, "width": 32, "height": 32 }
    ///   ],
    ///   "animations": [
    ///     { "name": "slime-idle", "frametime": 100,
    ///       "frames": [ { "region": "slime" } ] }
    ///   ]
    /// }
    /// ```
    ///
    /// Malformed individual entries never abort the load: regions without a
    /// name, frames without a resolvable region, and animations that end up
    /// with zero frames are skipped with a warning. Missing numeric region
    /// attributes default to 0, a missing `frametime` defaults to 100 ms.
    /// Document-level failures (unreadable file, malformed JSON, missing
    /// texture) fail the whole call.
    pub fn from_file(content: &mut dyn ContentLoader, path: &str) -> Result<TextureAtlas> {
        let bytes = content.load_bytes(path)?;
        let document: AtlasDocument = serde_json::from_slice(&bytes)?;

        let texture = content.load_texture(&document.texture)?;
        let mut atlas = TextureAtlas::new(texture);

        for entry in &document.regions {
            if entry.name.is_empty() {
                warn!("{}: skipping region entry without a name", path);
                continue;
            }
            atlas.add_region(&entry.name, entry.x, entry.y, entry.width, entry.height)?;
        }

        for entry in &document.animations {
            if entry.name.is_empty() {
                warn!("{}: skipping animation entry without a name", path);
                continue;
            }

            let mut frames = Vec::with_capacity(entry.frames.len());
            for frame in &entry.frames {
                if frame.region.is_empty() {
                    continue;
                }
                match atlas.regions.get(&frame.region) {
                    Some(region) => frames.push(Arc::clone(region)),
                    None => warn!(
                        "{}: animation {} references unknown region {}",
                        path, entry.name, frame.region
                    ),
                }
            }

            if frames.is_empty() {
                warn!(
                    "{}: dropping animation {} with no resolvable frames",
                    path, entry.name
                );
                continue;
            }

            let animation = Animation::new(frames, entry.frametime / 1000.0)?;
            atlas.add_animation(&entry.name, animation)?;
        }

        Ok(atlas)
    }
}

#[derive(Debug, Deserialize)]
struct AtlasDocument {
    texture: String,
    #[serde(default)]
    regions: Vec<RegionEntry>,
    #[serde(default)]
    animations: Vec<AnimationEntry>,
}

#[derive(Debug, Deserialize)]
struct RegionEntry {
    #[serde(default)]
    name: String,
    #[serde(default)]
    x: u32,
    #[serde(default)]
    y: u32,
    #[serde(default)]
    width: u32,
    #[serde(default)]
    height: u32,
}

#[derive(Debug, Deserialize)]
struct AnimationEntry {
    #[serde(default)]
    name: String,
    /// Milliseconds between frames
    #[serde(default = "default_frametime")]
    frametime: f32,
    #[serde(default)]
    frames: Vec<FrameEntry>,
}

#[derive(Debug, Deserialize)]
struct FrameEntry {
    #[serde(default)]
    region: String,
}

fn default_frametime() -> f32 {
    DEFAULT_FRAME_TIME_MS
}
