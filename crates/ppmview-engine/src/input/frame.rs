use super::types::InputEvent;

/// Input received since the last frame, in arrival order.
///
/// Cleared by the runtime after every frame.
#[derive(Debug, Default)]
pub struct InputFrame {
    pub events: Vec<InputEvent>,
}

impl InputFrame {
    pub fn clear(&mut self) {
        self.events.clear();
    }

    pub fn push_event(&mut self, ev: InputEvent) {
        self.events.push(ev);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::{Key, KeyState, MouseWheelDelta};

    fn key(key: Key, state: KeyState) -> InputEvent {
        InputEvent::Key { key, state, repeat: false }
    }

    #[test]
    fn events_keep_arrival_order() {
        let mut frame = InputFrame::default();

        let evs = [
            key(Key::E, KeyState::Pressed),
            InputEvent::MouseWheel(MouseWheelDelta::Line { x: 0.0, y: 1.0 }),
            key(Key::E, KeyState::Released),
            key(Key::E, KeyState::Pressed),
        ];
        for ev in evs.clone() {
            frame.push_event(ev);
        }
        assert_eq!(frame.events, evs);

        frame.clear();
        assert!(frame.events.is_empty());
    }
}
