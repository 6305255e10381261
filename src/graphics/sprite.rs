// Transformable drawable sprites

use super::batch::{DrawCommand, SpriteBatch, SpriteEffects};
use super::TextureRegion;
use crate::core::Rect;
use glam::{Vec2, Vec4};
use std::sync::Arc;

/// Anything that can be drawn through a sprite batch and occupies an
/// axis-aligned bounding box.
///
/// Callers that only need "a drawable" depend on this capability instead of a
/// concrete sprite type, so static and animated sprites are interchangeable.
pub trait Drawable {
    /// Move to `position` and submit one draw command to the batch.
    ///
    /// Drawing and positioning are coupled: the drawable keeps `position` as
    /// its new location.
    fn draw(&mut self, batch: &mut dyn SpriteBatch, position: Vec2);

    /// Move the rotation/scale pivot to the center of the drawable, in
    /// unscaled pixel units
    fn center_origin(&mut self);

    /// The world-space axis-aligned bounding box.
    ///
    /// Rotation is ignored; the box is anchored at position − origin and
    /// sized by the scaled region.
    fn bounds(&self) -> Rect;

    /// AABB intersection test. Rotation is ignored on both sides.
    fn collides_with(&self, other: &dyn Drawable) -> bool {
        self.bounds().intersects(&other.bounds())
    }

    /// True only when the bounding box lies entirely inside the window's
    /// client bounds; partially visible drawables report false
    fn on_screen(&self, window: Rect) -> bool {
        window.contains_rect(&self.bounds())
    }
}

/// A transformable drawable over one texture region.
#[derive(Debug, Clone)]
pub struct Sprite {
    /// The region the sprite displays; shared with the owning atlas
    pub region: Arc<TextureRegion>,
    pub position: Vec2,
    pub scale: Vec2,
    pub origin: Vec2,
    /// Rotation in radians
    pub rotation: f32,
    /// RGBA tint, opaque white by default
    pub color: Vec4,
    pub effects: SpriteEffects,
    pub depth: f32,
}

impl Sprite {
    /// Create a sprite over the given region with default transform state
    pub fn new(region: Arc<TextureRegion>) -> Self {
        Self {
            region,
            position: Vec2::ZERO,
            scale: Vec2::ONE,
            origin: Vec2::ZERO,
            rotation: 0.0,
            color: Vec4::ONE,
            effects: SpriteEffects::NONE,
            depth: 0.0,
        }
    }

    /// Rendered width: region width times the horizontal scale
    pub fn width(&self) -> f32 {
        self.region.width() * self.scale.x
    }

    /// Rendered height: region height times the vertical scale
    pub fn height(&self) -> f32 {
        self.region.height() * self.scale.y
    }

    /// Move by `magnitude` along `direction`, which is normalized first.
    ///
    /// `direction` must be non-zero; normalizing a zero vector produces NaN
    /// components and poisons the position.
    pub fn move_by(&mut self, magnitude: f32, direction: Vec2) {
        self.position += direction.normalize() * magnitude;
    }
}

impl Drawable for Sprite {
    fn draw(&mut self, batch: &mut dyn SpriteBatch, position: Vec2) {
        self.position = position;
        batch.submit(DrawCommand {
            texture: self.region.texture(),
            source: self.region.source(),
            position: self.position,
            color: self.color,
            rotation: self.rotation,
            origin: self.origin,
            scale: self.scale,
            effects: self.effects,
            depth: self.depth,
        });
    }

    fn center_origin(&mut self) {
        self.origin = Vec2::new(self.region.width(), self.region.height()) * 0.5;
    }

    fn bounds(&self) -> Rect {
        Rect::from_position_size(
            self.position - self.origin,
            Vec2::new(self.width(), self.height()),
        )
    }
}
