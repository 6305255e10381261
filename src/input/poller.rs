// Device-polling collaborator: the seam between raw devices and the manager

use super::{GamePadState, KeyboardState, MouseState};
use glam::Vec2;
use winit::event::{ElementState, MouseScrollDelta, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

/// Scroll unit conversion for backends that report wheel movement in pixels
const PIXELS_PER_SCROLL_LINE: f32 = 16.0;

/// The raw device-polling collaborator.
///
/// Queried once per device per tick by the input manager; implementations
/// return whatever the devices look like right now. Slots without a physical
/// gamepad return the default disconnected snapshot.
pub trait DevicePoller {
    fn poll_keyboard(&mut self) -> KeyboardState;
    fn poll_mouse(&mut self) -> MouseState;
    fn poll_gamepad(&mut self, slot: usize) -> GamePadState;

    /// Feed a window event to event-driven backends. Backends that truly
    /// poll hardware ignore this.
    fn handle_window_event(&mut self, _event: &WindowEvent) {}
}

/// A poller that folds winit window events into device snapshots.
///
/// The event loop forwards every `WindowEvent`; keyboard and mouse state
/// accumulate here until the input manager polls them at the top of a tick.
/// winit carries no gamepad events, so all four slots report disconnected.
#[derive(Debug, Clone, Default)]
pub struct EventPoller {
    keyboard: KeyboardState,
    mouse: MouseState,
}

impl EventPoller {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a key transition
    pub fn key_event(&mut self, key: KeyCode, pressed: bool) {
        if pressed {
            self.keyboard.press(key);
        } else {
            self.keyboard.release(key);
        }
    }

    /// Apply a mouse button transition
    pub fn mouse_button(&mut self, button: winit::event::MouseButton, pressed: bool) {
        if pressed {
            self.mouse.press(button);
        } else {
            self.mouse.release(button);
        }
    }

    /// Track the cursor position
    pub fn cursor_moved(&mut self, position: Vec2) {
        self.mouse.position = position;
    }

    /// Accumulate scroll-wheel movement, in lines
    pub fn scrolled(&mut self, lines: f32) {
        self.mouse.scroll += lines;
    }
}

impl DevicePoller for EventPoller {
    fn poll_keyboard(&mut self) -> KeyboardState {
        self.keyboard.clone()
    }

    fn poll_mouse(&mut self) -> MouseState {
        self.mouse.clone()
    }

    fn poll_gamepad(&mut self, _slot: usize) -> GamePadState {
        GamePadState::default()
    }

    fn handle_window_event(&mut self, event: &WindowEvent) {
        match event {
            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(code) = event.physical_key {
                    self.key_event(code, event.state == ElementState::Pressed);
                }
            }
            WindowEvent::MouseInput { state, button, .. } => {
                self.mouse_button(*button, *state == ElementState::Pressed);
            }
            WindowEvent::CursorMoved { position, .. } => {
                self.cursor_moved(Vec2::new(position.x as f32, position.y as f32));
            }
            WindowEvent::MouseWheel { delta, .. } => match delta {
                MouseScrollDelta::LineDelta(_, y) => self.scrolled(*y),
                MouseScrollDelta::PixelDelta(position) => {
                    self.scrolled(position.y as f32 / PIXELS_PER_SCROLL_LINE);
                }
            },
            _ => {}
        }
    }
}
