// Input handling system
//
// Turns heterogeneous raw devices (keyboard, mouse, up to four gamepads) into
// named, edge-detected actions that game logic can query without knowing
// which physical device fired.
//
// ## Architecture
//
// - `poller`: the raw device collaborator, plus a winit-backed implementation
// - `keyboard` / `mouse` / `gamepad`: per-device double-buffered snapshots
//   with uniform just-pressed / just-released edge detection
// - `manager`: owns the poller and every device state, refreshes them once
//   per tick
// - `action`: device-agnostic bindings that OR-merge several sources
//
// ## Usage
//
// ```rust
// use spriterig::input::{EventPoller, InputAction, InputManager, InputSource};
// use winit::keyboard::KeyCode;
//
// let mut input = InputManager::new(Box::new(EventPoller::new()));
// let jump = InputAction::new(vec![InputSource::key(KeyCode::Space)]);
//
// // Each tick: forward window events, refresh once, then query.
// input.update(1.0 / 60.0);
// if jump.just_pressed(&input) {
//     // jump!
// }
// ```

mod action;
mod gamepad;
mod keyboard;
mod manager;
mod mouse;
mod poller;

pub use action::{InputAction, InputSource};
pub use gamepad::{GamePadInfo, GamePadState, GamepadButton};
pub use keyboard::{KeyboardInfo, KeyboardState};
pub use manager::{InputManager, GAMEPAD_SLOTS};
pub use mouse::{MouseInfo, MouseState};
pub use poller::{DevicePoller, EventPoller};
