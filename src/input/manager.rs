// Input manager: owns the device states and advances them once per tick

use super::{DevicePoller, GamePadInfo, KeyboardInfo, MouseInfo};
use winit::event::WindowEvent;

/// Number of gamepad slots, polled unconditionally every tick
pub const GAMEPAD_SLOTS: usize = 4;

/// Owns the poller and every device-state object, and refreshes them all
/// exactly once per tick.
///
/// There is no global instance: the manager is constructed once at startup
/// and passed by reference to whatever queries input. `update` must run
/// before any query in the same tick, so edge detection compares this tick
/// against the previous one.
pub struct InputManager {
    poller: Box<dyn DevicePoller>,
    keyboard: KeyboardInfo,
    mouse: MouseInfo,
    gamepads: [GamePadInfo; GAMEPAD_SLOTS],
}

impl InputManager {
    /// Create a manager over the given poller, seeding every device's
    /// current state with an initial poll
    pub fn new(mut poller: Box<dyn DevicePoller>) -> Self {
        let keyboard = KeyboardInfo::new(poller.poll_keyboard());
        let mouse = MouseInfo::new(poller.poll_mouse());
        let gamepads = std::array::from_fn(|slot| GamePadInfo::new(poller.poll_gamepad(slot)));

        Self {
            poller,
            keyboard,
            mouse,
            gamepads,
        }
    }

    /// Refresh keyboard, mouse, and all four gamepad slots.
    ///
    /// `delta_time` (seconds) advances the gamepads' vibration countdowns.
    pub fn update(&mut self, delta_time: f32) {
        self.keyboard.update(self.poller.poll_keyboard());
        self.mouse.update(self.poller.poll_mouse());
        for (slot, gamepad) in self.gamepads.iter_mut().enumerate() {
            gamepad.update(self.poller.poll_gamepad(slot), delta_time);
        }
    }

    /// Forward a window event to the poller (for event-driven backends)
    pub fn handle_window_event(&mut self, event: &WindowEvent) {
        self.poller.handle_window_event(event);
    }

    pub fn keyboard(&self) -> &KeyboardInfo {
        &self.keyboard
    }

    pub fn mouse(&self) -> &MouseInfo {
        &self.mouse
    }

    /// The gamepad in the given slot. Panics if `slot >= GAMEPAD_SLOTS`.
    pub fn gamepad(&self, slot: usize) -> &GamePadInfo {
        &self.gamepads[slot]
    }

    /// Mutable access to a gamepad slot, e.g. to start vibration.
    /// Panics if `slot >= GAMEPAD_SLOTS`.
    pub fn gamepad_mut(&mut self, slot: usize) -> &mut GamePadInfo {
        &mut self.gamepads[slot]
    }

    /// All gamepad slots in index order
    pub fn gamepads(&self) -> &[GamePadInfo] {
        &self.gamepads
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::{GamePadState, GamepadButton, KeyboardState, MouseState};
    use std::cell::RefCell;
    use std::rc::Rc;
    use winit::keyboard::KeyCode;

    /// Device state shared between a test and the poller it scripted.
    #[derive(Default)]
    struct Devices {
        keyboard: KeyboardState,
        mouse: MouseState,
        gamepads: [GamePadState; GAMEPAD_SLOTS],
        gamepad_polls: usize,
    }

    struct ScriptedPoller(Rc<RefCell<Devices>>);

    impl DevicePoller for ScriptedPoller {
        fn poll_keyboard(&mut self) -> KeyboardState {
            self.0.borrow().keyboard.clone()
        }

        fn poll_mouse(&mut self) -> MouseState {
            self.0.borrow().mouse.clone()
        }

        fn poll_gamepad(&mut self, slot: usize) -> GamePadState {
            let mut devices = self.0.borrow_mut();
            devices.gamepad_polls += 1;
            devices.gamepads[slot].clone()
        }
    }

    fn scripted() -> (Rc<RefCell<Devices>>, InputManager) {
        let devices = Rc::new(RefCell::new(Devices::default()));
        let manager = InputManager::new(Box::new(ScriptedPoller(Rc::clone(&devices))));
        (devices, manager)
    }

    #[test]
    fn test_update_refreshes_every_device() {
        let (devices, mut input) = scripted();

        devices.borrow_mut().keyboard.press(KeyCode::KeyA);
        devices.borrow_mut().mouse.press(winit::event::MouseButton::Left);
        devices.borrow_mut().gamepads[2].press(GamepadButton::South);

        input.update(0.016);

        assert!(input.keyboard().is_key_down(KeyCode::KeyA));
        assert!(input.mouse().is_button_down(winit::event::MouseButton::Left));
        assert!(input.gamepad(2).is_button_down(GamepadButton::South));
        assert!(!input.gamepad(0).is_button_down(GamepadButton::South));
    }

    #[test]
    fn test_all_four_slots_are_polled_every_tick() {
        let (devices, mut input) = scripted();
        devices.borrow_mut().gamepad_polls = 0;

        input.update(0.016);
        assert_eq!(devices.borrow().gamepad_polls, GAMEPAD_SLOTS);

        input.update(0.016);
        assert_eq!(devices.borrow().gamepad_polls, 2 * GAMEPAD_SLOTS);
    }

    #[test]
    fn test_edge_detection_spans_ticks() {
        let (devices, mut input) = scripted();

        devices.borrow_mut().keyboard.press(KeyCode::Space);
        input.update(0.016);
        assert!(input.keyboard().just_pressed(KeyCode::Space));

        input.update(0.016);
        assert!(!input.keyboard().just_pressed(KeyCode::Space));
        assert!(input.keyboard().is_key_down(KeyCode::Space));

        devices.borrow_mut().keyboard.release(KeyCode::Space);
        input.update(0.016);
        assert!(input.keyboard().just_released(KeyCode::Space));
    }

    #[test]
    fn test_disconnected_slots_report_all_up() {
        let (_, mut input) = scripted();
        input.update(0.016);

        for gamepad in input.gamepads() {
            assert!(!gamepad.is_connected());
            assert!(gamepad.is_button_up(GamepadButton::Start));
        }
    }

    #[test]
    fn test_update_drives_vibration_countdown() {
        let (_, mut input) = scripted();

        input.gamepad_mut(1).start_vibration(1.0, 0.05);
        assert_eq!(input.gamepad(1).vibration(), (1.0, 1.0));

        input.update(0.1);
        assert_eq!(input.gamepad(1).vibration(), (0.0, 0.0));
    }
}
