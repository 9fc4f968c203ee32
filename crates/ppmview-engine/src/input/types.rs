/// Keyboard key identifier (physical position, US layout names).
///
/// Keys the viewer has no binding for map to `Unknown` with the platform code.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Key {
    Escape,

    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,

    A,
    E,
    R,
    S,

    Unknown(u32),
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum KeyState {
    Pressed,
    Released,
}

/// Mouse wheel delta.
///
/// `Line` is notched wheel input; `Pixel` is high-precision (touchpad) input in
/// logical pixels. Positive `y` scrolls up / away from the user.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum MouseWheelDelta {
    Line { x: f32, y: f32 },
    Pixel { x: f32, y: f32 },
}

impl MouseWheelDelta {
    /// Vertical component regardless of unit.
    pub fn y(self) -> f32 {
        match self {
            MouseWheelDelta::Line { y, .. } | MouseWheelDelta::Pixel { y, .. } => y,
        }
    }
}

/// Platform-agnostic input events emitted by the runtime.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    Key {
        key: Key,
        state: KeyState,
        /// True for OS auto-repeat while the key is held.
        repeat: bool,
    },

    MouseWheel(MouseWheelDelta),
}

impl InputEvent {
    /// `Some(key)` for an initial press; `None` for releases, repeats and
    /// non-key events.
    pub fn initial_press(&self) -> Option<Key> {
        match *self {
            InputEvent::Key {
                key,
                state: KeyState::Pressed,
                repeat: false,
            } => Some(key),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(key: Key, state: KeyState, repeat: bool) -> InputEvent {
        InputEvent::Key { key, state, repeat }
    }

    #[test]
    fn initial_press_ignores_repeat_and_release() {
        assert_eq!(key(Key::R, KeyState::Pressed, false).initial_press(), Some(Key::R));
        assert_eq!(key(Key::R, KeyState::Pressed, true).initial_press(), None);
        assert_eq!(key(Key::R, KeyState::Released, false).initial_press(), None);

        let wheel = InputEvent::MouseWheel(MouseWheelDelta::Line { x: 0.0, y: 1.0 });
        assert_eq!(wheel.initial_press(), None);
    }

    #[test]
    fn wheel_y_for_both_units() {
        assert_eq!(MouseWheelDelta::Line { x: 0.0, y: -2.0 }.y(), -2.0);
        assert_eq!(MouseWheelDelta::Pixel { x: 3.0, y: 12.5 }.y(), 12.5);
    }
}
