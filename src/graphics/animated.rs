// Animated sprites: playback state over a shared animation

use super::batch::SpriteBatch;
use super::{Animation, Drawable, Sprite};
use crate::core::Rect;
use glam::Vec2;
use std::sync::Arc;

/// A sprite that steps through an animation's frames on a fixed cadence.
///
/// Composes a [`Sprite`] with playback state instead of extending it; both
/// types are used interchangeably through [`Drawable`].
#[derive(Debug, Clone)]
pub struct AnimatedSprite {
    sprite: Sprite,
    animation: Arc<Animation>,
    current_frame: usize,
    elapsed: f32,
    playing: bool,
}

impl AnimatedSprite {
    /// Create an animated sprite displaying frame 0 of `animation`, playing
    pub fn new(animation: Arc<Animation>) -> Self {
        // Animations are non-empty by construction, so frame 0 exists.
        let sprite = Sprite::new(Arc::clone(&animation.frames()[0]));
        Self {
            sprite,
            animation,
            current_frame: 0,
            elapsed: 0.0,
            playing: true,
        }
    }

    /// The sprite transform state (position, scale, tint, ...)
    pub fn sprite(&self) -> &Sprite {
        &self.sprite
    }

    /// Mutable access to the sprite transform state
    pub fn sprite_mut(&mut self) -> &mut Sprite {
        &mut self.sprite
    }

    /// The animation being played
    pub fn animation(&self) -> &Arc<Animation> {
        &self.animation
    }

    /// Replace the animation.
    ///
    /// Resets the frame index and elapsed time and snaps the displayed
    /// region to frame 0 immediately, whether or not playback is paused.
    pub fn set_animation(&mut self, animation: Arc<Animation>) {
        self.animation = animation;
        self.current_frame = 0;
        self.elapsed = 0.0;
        self.sprite.region = Arc::clone(&self.animation.frames()[0]);
    }

    /// Resume playback
    pub fn play(&mut self) {
        self.playing = true;
    }

    /// Pause playback, keeping the current frame on screen
    pub fn pause(&mut self) {
        self.playing = false;
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// Index of the frame currently displayed
    pub fn current_frame(&self) -> usize {
        self.current_frame
    }

    /// Advance playback by `delta_time` seconds.
    ///
    /// Accumulated time is spent one frame duration at a time, so a large
    /// delta advances multiple frames; the index wraps past the last frame.
    /// No-op while paused.
    pub fn update(&mut self, delta_time: f32) {
        if !self.playing {
            return;
        }

        let frame_time = self.animation.frame_time();
        if frame_time <= 0.0 {
            // A zero frame time would spin the advance loop forever.
            return;
        }

        self.elapsed += delta_time;
        while self.elapsed >= frame_time {
            self.elapsed -= frame_time;
            self.current_frame = (self.current_frame + 1) % self.animation.frame_count();
            self.sprite.region = Arc::clone(&self.animation.frames()[self.current_frame]);
        }
    }
}

impl Drawable for AnimatedSprite {
    fn draw(&mut self, batch: &mut dyn SpriteBatch, position: Vec2) {
        self.sprite.draw(batch, position);
    }

    fn center_origin(&mut self) {
        self.sprite.center_origin();
    }

    fn bounds(&self) -> Rect {
        self.sprite.bounds()
    }
}
