// Draw-command submission seam between sprites and the renderer

use crate::assets::TextureHandle;
use crate::core::Rect;
use glam::{Vec2, Vec4};

/// Render-effect flags applied when a sprite is rasterized
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SpriteEffects {
    pub flip_horizontal: bool,
    pub flip_vertical: bool,
}

impl SpriteEffects {
    pub const NONE: Self = Self {
        flip_horizontal: false,
        flip_vertical: false,
    };

    pub const FLIP_HORIZONTAL: Self = Self {
        flip_horizontal: true,
        flip_vertical: false,
    };

    pub const FLIP_VERTICAL: Self = Self {
        flip_horizontal: false,
        flip_vertical: true,
    };
}

/// One fully-specified sprite draw: a texture sub-rectangle plus its
/// transform and tint.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawCommand {
    pub texture: TextureHandle,
    pub source: Rect,
    pub position: Vec2,
    pub color: Vec4,
    pub rotation: f32,
    pub origin: Vec2,
    pub scale: Vec2,
    pub effects: SpriteEffects,
    pub depth: f32,
}

/// The renderer collaborator.
///
/// The core submits exactly one command per sprite draw and never batches,
/// sorts, or flushes; the implementor owns all of that, bracketed by the
/// caller around a frame's submissions.
pub trait SpriteBatch {
    fn submit(&mut self, command: DrawCommand);
}

/// A `SpriteBatch` that records submitted commands in order.
///
/// Useful as a staging queue in front of a real renderer and as a test
/// double for asserting what a frame would draw.
#[derive(Debug, Default)]
pub struct CommandQueue {
    commands: Vec<DrawCommand>,
}

impl CommandQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// The commands submitted since the last clear, in submission order
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Take all recorded commands, leaving the queue empty
    pub fn drain(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    /// Discard all recorded commands
    pub fn clear(&mut self) {
        self.commands.clear();
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

impl SpriteBatch for CommandQueue {
    fn submit(&mut self, command: DrawCommand) {
        self.commands.push(command);
    }
}
