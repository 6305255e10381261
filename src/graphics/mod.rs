// Sprite graphics system
//
// The texture atlas data model and the drawable layer on top of it:
//
// - `region`: an immutable rectangular sub-view of a texture
// - `animation`: an ordered, non-empty frame sequence with a per-frame duration
// - `atlas`: name-keyed region/animation registries plus descriptor parsing
// - `batch`: the draw-command submission seam to the renderer collaborator
// - `sprite`: a transformable drawable wrapping one region
// - `animated`: a sprite plus a playback state machine over an animation

mod animated;
mod animation;
mod atlas;
mod batch;
mod region;
mod sprite;

pub use animated::AnimatedSprite;
pub use animation::Animation;
pub use atlas::TextureAtlas;
pub use batch::{CommandQueue, DrawCommand, SpriteBatch, SpriteEffects};
pub use region::TextureRegion;
pub use sprite::{Drawable, Sprite};

/// Atlas and sprite construction errors
#[derive(Debug, thiserror::Error)]
pub enum GraphicsError {
    #[error("region not found: {0}")]
    RegionNotFound(String),

    #[error("animation not found: {0}")]
    AnimationNotFound(String),

    #[error("duplicate region name: {0}")]
    DuplicateRegion(String),

    #[error("duplicate animation name: {0}")]
    DuplicateAnimation(String),

    #[error("animation must have at least one frame")]
    EmptyAnimation,

    #[error("frame time cannot be negative: {0}")]
    NegativeFrameTime(f32),
}
