// Device-agnostic input actions

use super::{GamepadButton, InputManager};
use winit::event::MouseButton;
use winit::keyboard::KeyCode;

/// One physical trigger for an action: exactly one of a keyboard key, a
/// gamepad button, or a mouse button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputSource {
    Key(KeyCode),
    GamepadButton(GamepadButton),
    MouseButton(MouseButton),
}

impl InputSource {
    /// Create a keyboard input source
    pub fn key(code: KeyCode) -> Self {
        Self::Key(code)
    }

    /// Create a gamepad button input source
    pub fn button(button: GamepadButton) -> Self {
        Self::GamepadButton(button)
    }

    /// Create a mouse button input source
    pub fn mouse(button: MouseButton) -> Self {
        Self::MouseButton(button)
    }
}

/// A named game action satisfied by any of several physical sources.
///
/// An action holds no per-frame state of its own; every query merges the
/// bound sources against the manager's double-buffered device state, so game
/// logic asks "is move-left held" without branching per device. Gamepad
/// sources are checked against player one's pad unless a `_for` variant is
/// given another slot.
pub struct InputAction {
    sources: Vec<InputSource>,
    callback: Option<Box<dyn FnMut()>>,
}

impl InputAction {
    /// Create an action with no callback
    pub fn new(sources: Vec<InputSource>) -> Self {
        Self {
            sources,
            callback: None,
        }
    }

    /// Create an action that runs `callback` through `do_on_held` /
    /// `do_on_press`
    pub fn with_callback(sources: Vec<InputSource>, callback: impl FnMut() + 'static) -> Self {
        Self {
            sources,
            callback: Some(Box::new(callback)),
        }
    }

    /// Replace the action callback
    pub fn set_callback(&mut self, callback: impl FnMut() + 'static) {
        self.callback = Some(Box::new(callback));
    }

    /// The bound sources
    pub fn sources(&self) -> &[InputSource] {
        &self.sources
    }

    /// True while any bound source is down, checking player one's gamepad
    pub fn is_held(&self, input: &InputManager) -> bool {
        self.is_held_for(input, 0)
    }

    /// True while any bound source is down, checking the given gamepad slot.
    ///
    /// An action with no sources is never held.
    pub fn is_held_for(&self, input: &InputManager, pad: usize) -> bool {
        self.sources.iter().any(|source| match *source {
            InputSource::Key(key) => input.keyboard().is_key_down(key),
            InputSource::GamepadButton(button) => input.gamepad(pad).is_button_down(button),
            InputSource::MouseButton(button) => input.mouse().is_button_down(button),
        })
    }

    /// True on the tick any bound source went down, checking player one's
    /// gamepad
    pub fn just_pressed(&self, input: &InputManager) -> bool {
        self.just_pressed_for(input, 0)
    }

    /// True on the tick any bound source went down, checking the given
    /// gamepad slot
    pub fn just_pressed_for(&self, input: &InputManager, pad: usize) -> bool {
        self.sources.iter().any(|source| match *source {
            InputSource::Key(key) => input.keyboard().just_pressed(key),
            InputSource::GamepadButton(button) => input.gamepad(pad).just_pressed(button),
            InputSource::MouseButton(button) => input.mouse().just_pressed(button),
        })
    }

    /// Run the callback unconditionally; no-op when none is bound
    pub fn do_action(&mut self) {
        if let Some(callback) = &mut self.callback {
            callback();
        }
    }

    /// Run the callback if the action is held this tick. Meant to be called
    /// once per tick.
    pub fn do_on_held(&mut self, input: &InputManager) {
        if self.is_held(input) {
            self.do_action();
        }
    }

    /// Run the callback on the tick the action is first pressed. Meant to be
    /// called once per tick.
    pub fn do_on_press(&mut self, input: &InputManager) {
        if self.just_pressed(input) {
            self.do_action();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::{DevicePoller, GamePadState, KeyboardState, MouseState, GAMEPAD_SLOTS};
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Default)]
    struct Devices {
        keyboard: KeyboardState,
        mouse: MouseState,
        gamepads: [GamePadState; GAMEPAD_SLOTS],
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
            self.0.borrow().gamepads[slot].clone()
        }
    }

    fn scripted() -> (Rc<RefCell<Devices>>, InputManager) {
        let devices = Rc::new(RefCell::new(Devices::default()));
        let manager = InputManager::new(Box::new(ScriptedPoller(Rc::clone(&devices))));
        (devices, manager)
    }

    fn jump_action() -> InputAction {
        InputAction::new(vec![
            InputSource::key(KeyCode::Space),
            InputSource::button(GamepadButton::South),
            InputSource::mouse(MouseButton::Left),
        ])
    }

    #[test]
    fn test_any_source_kind_satisfies_the_action() {
        let (devices, mut input) = scripted();
        let action = jump_action();

        assert!(!action.is_held(&input));

        devices.borrow_mut().keyboard.press(KeyCode::Space);
        input.update(0.016);
        assert!(action.is_held(&input));

        devices.borrow_mut().keyboard.release(KeyCode::Space);
        devices.borrow_mut().gamepads[0].press(GamepadButton::South);
        input.update(0.016);
        assert!(action.is_held(&input));

        devices.borrow_mut().gamepads[0].release(GamepadButton::South);
        devices.borrow_mut().mouse.press(MouseButton::Left);
        input.update(0.016);
        assert!(action.is_held(&input));
    }

    #[test]
    fn test_empty_action_is_never_held() {
        let (devices, mut input) = scripted();
        let action = InputAction::new(Vec::new());

        devices.borrow_mut().keyboard.press(KeyCode::Space);
        input.update(0.016);

        assert!(!action.is_held(&input));
        assert!(!action.just_pressed(&input));
    }

    #[test]
    fn test_just_pressed_merges_edges_not_levels() {
        let (devices, mut input) = scripted();
        let action = jump_action();

        devices.borrow_mut().keyboard.press(KeyCode::Space);
        input.update(0.016);
        assert!(action.just_pressed(&input));

        input.update(0.016);
        assert!(!action.just_pressed(&input));
        assert!(action.is_held(&input));
    }

    #[test]
    fn test_gamepad_sources_follow_the_slot() {
        let (devices, mut input) = scripted();
        let action = InputAction::new(vec![InputSource::button(GamepadButton::South)]);

        devices.borrow_mut().gamepads[3].press(GamepadButton::South);
        input.update(0.016);

        assert!(!action.is_held(&input));
        assert!(action.is_held_for(&input, 3));
        assert!(action.just_pressed_for(&input, 3));
    }

    #[test]
    fn test_do_on_held_runs_the_callback_each_tick() {
        let (devices, mut input) = scripted();
        let count = Rc::new(RefCell::new(0));
        let counter = Rc::clone(&count);
        let mut action = InputAction::with_callback(
            vec![InputSource::key(KeyCode::Space)],
            move || *counter.borrow_mut() += 1,
        );

        action.do_on_held(&input);
        assert_eq!(*count.borrow(), 0);

        devices.borrow_mut().keyboard.press(KeyCode::Space);
        input.update(0.016);
        action.do_on_held(&input);
        input.update(0.016);
        action.do_on_held(&input);
        assert_eq!(*count.borrow(), 2);
    }

    #[test]
    fn test_do_on_press_runs_once_per_press() {
        let (devices, mut input) = scripted();
        let count = Rc::new(RefCell::new(0));
        let counter = Rc::clone(&count);
        let mut action = InputAction::with_callback(
            vec![InputSource::key(KeyCode::Space)],
            move || *counter.borrow_mut() += 1,
        );

        devices.borrow_mut().keyboard.press(KeyCode::Space);
        input.update(0.016);
        action.do_on_press(&input);
        input.update(0.016);
        action.do_on_press(&input);
        assert_eq!(*count.borrow(), 1);
    }

    #[test]
    fn test_do_action_without_callback_is_a_no_op() {
        let mut action = jump_action();
        action.do_action();
    }
}
