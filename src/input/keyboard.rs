// Keyboard state aggregation and edge detection

use std::collections::HashSet;
use winit::keyboard::KeyCode;

/// A snapshot of which keys are down at one instant.
#[derive(Debug, Clone, Default)]
pub struct KeyboardState {
    pressed: HashSet<KeyCode>,
}

impl KeyboardState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark a key as down
    pub fn press(&mut self, key: KeyCode) {
        self.pressed.insert(key);
    }

    /// Mark a key as up
    pub fn release(&mut self, key: KeyCode) {
        self.pressed.remove(&key);
    }

    pub fn is_down(&self, key: KeyCode) -> bool {
        self.pressed.contains(&key)
    }
}

/// Double-buffered keyboard state: the snapshot from this tick and the one
/// before it, refreshed once per tick by the input manager.
#[derive(Debug, Clone, Default)]
pub struct KeyboardInfo {
    previous: KeyboardState,
    current: KeyboardState,
}

impl KeyboardInfo {
    /// Seed both buffers; `current` becomes the initial snapshot
    pub fn new(initial: KeyboardState) -> Self {
        Self {
            previous: KeyboardState::default(),
            current: initial,
        }
    }

    /// Rotate in a fresh snapshot, retiring the current one
    pub(crate) fn update(&mut self, state: KeyboardState) {
        self.previous = std::mem::replace(&mut self.current, state);
    }

    /// True while the key is held
    pub fn is_key_down(&self, key: KeyCode) -> bool {
        self.current.is_down(key)
    }

    /// True while the key is not held
    pub fn is_key_up(&self, key: KeyCode) -> bool {
        !self.current.is_down(key)
    }

    /// True only on the tick the key went from up to down
    pub fn just_pressed(&self, key: KeyCode) -> bool {
        self.current.is_down(key) && !self.previous.is_down(key)
    }

    /// True only on the tick the key went from down to up
    pub fn just_released(&self, key: KeyCode) -> bool {
        !self.current.is_down(key) && self.previous.is_down(key)
    }
}
