// Frame-timed animations over shared texture regions

use super::{GraphicsError, TextureRegion};
use std::sync::Arc;

/// An ordered, non-empty sequence of texture regions played at a fixed
/// per-frame duration.
///
/// Frames are shared references into the owning atlas, not copies.
#[derive(Debug, Clone)]
pub struct Animation {
    frames: Vec<Arc<TextureRegion>>,
    frame_time: f32,
}

impl Animation {
    /// Create an animation from a frame list and a per-frame duration in
    /// seconds.
    ///
    /// Fails with `EmptyAnimation` if the frame list is empty and with
    /// `NegativeFrameTime` if the duration is below zero. A zero duration is
    /// legal but will never advance playback.
    pub fn new(frames: Vec<Arc<TextureRegion>>, frame_time: f32) -> Result<Self, GraphicsError> {
        if frames.is_empty() {
            return Err(GraphicsError::EmptyAnimation);
        }
        if frame_time < 0.0 {
            return Err(GraphicsError::NegativeFrameTime(frame_time));
        }

        Ok(Self { frames, frame_time })
    }

    /// The frames of the animation, in playback order
    pub fn frames(&self) -> &[Arc<TextureRegion>] {
        &self.frames
    }

    /// The frame at the given index
    pub fn frame(&self, index: usize) -> Option<&Arc<TextureRegion>> {
        self.frames.get(index)
    }

    /// Number of frames
    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    /// Per-frame duration in seconds
    pub fn frame_time(&self) -> f32 {
        self.frame_time
    }

    /// Duration of one full cycle in seconds
    pub fn total_duration(&self) -> f32 {
        self.frames.len() as f32 * self.frame_time
    }
}
