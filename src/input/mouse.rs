// Mouse state aggregation and edge detection

use glam::Vec2;
use std::collections::HashSet;
use winit::event::MouseButton;

/// A snapshot of the mouse at one instant: cursor position, cumulative
/// scroll-wheel value, and which buttons are down.
#[derive(Debug, Clone, Default)]
pub struct MouseState {
    pub position: Vec2,
    /// Running total of wheel movement, not a per-tick delta
    pub scroll: f32,
    pressed: HashSet<MouseButton>,
}

impl MouseState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark a button as down
    pub fn press(&mut self, button: MouseButton) {
        self.pressed.insert(button);
    }

    /// Mark a button as up
    pub fn release(&mut self, button: MouseButton) {
        self.pressed.remove(&button);
    }

    pub fn is_down(&self, button: MouseButton) -> bool {
        self.pressed.contains(&button)
    }
}

/// Double-buffered mouse state, refreshed once per tick by the input manager.
#[derive(Debug, Clone, Default)]
pub struct MouseInfo {
    previous: MouseState,
    current: MouseState,
}

impl MouseInfo {
    /// Seed both buffers; `current` becomes the initial snapshot
    pub fn new(initial: MouseState) -> Self {
        Self {
            previous: MouseState::default(),
            current: initial,
        }
    }

    /// Rotate in a fresh snapshot, retiring the current one
    pub(crate) fn update(&mut self, state: MouseState) {
        self.previous = std::mem::replace(&mut self.current, state);
    }

    /// Cursor position this tick
    pub fn position(&self) -> Vec2 {
        self.current.position
    }

    /// Cursor position last tick
    pub fn previous_position(&self) -> Vec2 {
        self.previous.position
    }

    /// Cursor movement since last tick
    pub fn delta_position(&self) -> Vec2 {
        self.current.position - self.previous.position
    }

    /// True when the cursor moved since last tick
    pub fn moved(&self) -> bool {
        self.delta_position() != Vec2::ZERO
    }

    /// Wheel movement since last tick
    pub fn delta_scroll(&self) -> f32 {
        self.current.scroll - self.previous.scroll
    }

    pub fn is_scrolling_up(&self) -> bool {
        self.delta_scroll() > 0.0
    }

    pub fn is_scrolling_down(&self) -> bool {
        self.delta_scroll() < 0.0
    }

    /// True while the button is held
    pub fn is_button_down(&self, button: MouseButton) -> bool {
        self.current.is_down(button)
    }

    /// True while the button is not held
    pub fn is_button_up(&self, button: MouseButton) -> bool {
        !self.current.is_down(button)
    }

    /// True only on the tick the button went from up to down
    pub fn just_pressed(&self, button: MouseButton) -> bool {
        self.current.is_down(button) && !self.previous.is_down(button)
    }

    /// True only on the tick the button went from down to up
    pub fn just_released(&self, button: MouseButton) -> bool {
        !self.current.is_down(button) && self.previous.is_down(button)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_button_edge_detection() {
        let mut mouse = MouseInfo::default();

        let mut down = MouseState::new();
        down.press(MouseButton::Left);
        mouse.update(down.clone());

        assert!(mouse.is_button_down(MouseButton::Left));
        assert!(mouse.just_pressed(MouseButton::Left));
        assert!(!mouse.just_pressed(MouseButton::Right));

        mouse.update(down);
        assert!(!mouse.just_pressed(MouseButton::Left));

        mouse.update(MouseState::new());
        assert!(mouse.just_released(MouseButton::Left));
        assert!(mouse.is_button_up(MouseButton::Left));
    }

    #[test]
    fn test_position_delta_and_moved() {
        let mut mouse = MouseInfo::default();

        let mut state = MouseState::new();
        state.position = Vec2::new(10.0, 20.0);
        mouse.update(state.clone());

        state.position = Vec2::new(13.0, 18.0);
        mouse.update(state.clone());

        assert_eq!(mouse.position(), Vec2::new(13.0, 18.0));
        assert_eq!(mouse.previous_position(), Vec2::new(10.0, 20.0));
        assert_eq!(mouse.delta_position(), Vec2::new(3.0, -2.0));
        assert!(mouse.moved());

        mouse.update(state);
        assert!(!mouse.moved());
    }

    #[test]
    fn test_scroll_delta_direction() {
        let mut mouse = MouseInfo::default();

        let mut state = MouseState::new();
        state.scroll = 2.0;
        mouse.update(state.clone());
        assert!(mouse.is_scrolling_up());
        assert!(!mouse.is_scrolling_down());
        assert_eq!(mouse.delta_scroll(), 2.0);

        state.scroll = 0.5;
        mouse.update(state.clone());
        assert!(mouse.is_scrolling_down());

        mouse.update(state);
        assert!(!mouse.is_scrolling_up());
        assert!(!mouse.is_scrolling_down());
    }
}
