// Gamepad state aggregation, edge detection, and timed vibration

use glam::Vec2;
use std::collections::HashSet;

/// The digital buttons of a standard gamepad
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GamepadButton {
    // Face buttons
    South,
    East,
    West,
    North,

    // D-pad
    DPadUp,
    DPadDown,
    DPadLeft,
    DPadRight,

    // Shoulders and stick clicks
    LeftShoulder,
    RightShoulder,
    LeftStick,
    RightStick,

    // Meta buttons
    Start,
    Back,
    Guide,
}

/// A snapshot of one gamepad slot at one instant.
///
/// The default snapshot is a disconnected pad: all buttons up, sticks and
/// triggers at rest.
#[derive(Debug, Clone, Default)]
pub struct GamePadState {
    pub connected: bool,
    pub left_stick: Vec2,
    pub right_stick: Vec2,
    pub left_trigger: f32,
    pub right_trigger: f32,
    pressed: HashSet<GamepadButton>,
}

impl GamePadState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark a button as down
    pub fn press(&mut self, button: GamepadButton) {
        self.pressed.insert(button);
    }

    /// Mark a button as up
    pub fn release(&mut self, button: GamepadButton) {
        self.pressed.remove(&button);
    }

    pub fn is_down(&self, button: GamepadButton) -> bool {
        self.pressed.contains(&button)
    }
}

/// Double-buffered state for one gamepad slot, plus motor strengths and a
/// one-shot vibration countdown.
///
/// The slot is polled every tick whether or not a physical pad is attached;
/// a disconnected pad just keeps reporting the default all-up snapshot.
#[derive(Debug, Clone, Default)]
pub struct GamePadInfo {
    previous: GamePadState,
    current: GamePadState,
    /// Left and right motor strengths, 0 to 1
    vibration: (f32, f32),
    vibration_time_remaining: f32,
}

impl GamePadInfo {
    /// Seed both buffers; `current` becomes the initial snapshot
    pub fn new(initial: GamePadState) -> Self {
        Self {
            previous: GamePadState::default(),
            current: initial,
            vibration: (0.0, 0.0),
            vibration_time_remaining: 0.0,
        }
    }

    /// Rotate in a fresh snapshot and advance the vibration countdown.
    ///
    /// When an armed countdown crosses zero the motors are forced off once;
    /// strengths set manually afterwards are left alone.
    pub(crate) fn update(&mut self, state: GamePadState, delta_time: f32) {
        self.previous = std::mem::replace(&mut self.current, state);

        if self.vibration_time_remaining > 0.0 {
            self.vibration_time_remaining -= delta_time;
            if self.vibration_time_remaining <= 0.0 {
                self.stop_vibration();
                self.vibration_time_remaining = 0.0;
            }
        }
    }

    /// Whether a physical pad is attached to this slot
    pub fn is_connected(&self) -> bool {
        self.current.connected
    }

    /// Left thumbstick position, each axis in -1 to 1
    pub fn left_stick(&self) -> Vec2 {
        self.current.left_stick
    }

    /// Right thumbstick position, each axis in -1 to 1
    pub fn right_stick(&self) -> Vec2 {
        self.current.right_stick
    }

    /// Left trigger travel, 0 unpressed to 1 fully pressed
    pub fn left_trigger(&self) -> f32 {
        self.current.left_trigger
    }

    /// Right trigger travel, 0 unpressed to 1 fully pressed
    pub fn right_trigger(&self) -> f32 {
        self.current.right_trigger
    }

    /// True while the button is held
    pub fn is_button_down(&self, button: GamepadButton) -> bool {
        self.current.is_down(button)
    }

    /// True while the button is not held
    pub fn is_button_up(&self, button: GamepadButton) -> bool {
        !self.current.is_down(button)
    }

    /// True only on the tick the button went from up to down
    pub fn just_pressed(&self, button: GamepadButton) -> bool {
        self.current.is_down(button) && !self.previous.is_down(button)
    }

    /// True only on the tick the button went from down to up
    pub fn just_released(&self, button: GamepadButton) -> bool {
        !self.current.is_down(button) && self.previous.is_down(button)
    }

    /// Current motor strengths as (left, right).
    ///
    /// The core tracks strengths as state; a platform layer forwards them to
    /// the hardware after each tick.
    pub fn vibration(&self) -> (f32, f32) {
        self.vibration
    }

    /// Set both motors to one strength
    pub fn set_vibration(&mut self, strength: f32) {
        self.set_vibration_motors(strength, strength);
    }

    /// Set each motor's strength independently
    pub fn set_vibration_motors(&mut self, left: f32, right: f32) {
        self.vibration = (left, right);
    }

    /// Turn both motors off
    pub fn stop_vibration(&mut self) {
        self.set_vibration(0.0);
    }

    /// Vibrate both motors at `strength` for `duration` seconds, then stop.
    ///
    /// The strength applies immediately; the countdown is advanced by
    /// `update` and switches the motors off exactly once when it expires.
    pub fn start_vibration(&mut self, strength: f32, duration: f32) {
        self.set_vibration(strength);
        self.vibration_time_remaining = duration;
    }
}
