use ppmview_engine::input::{InputEvent, Key};
use ppmview_view::ViewAction;

/// Maps an input event to a view action.
///
/// Only initial key presses count; releases and OS auto-repeat are ignored.
/// Any vertical wheel movement zooms.
pub fn action_for(event: &InputEvent) -> Option<ViewAction> {
    if let InputEvent::MouseWheel(delta) = event {
        return Some(ViewAction::Zoom(delta.y()));
    }

    let action = match event.initial_press()? {
        Key::Escape => ViewAction::Close,
        Key::R => ViewAction::RotateCounterClockwise,
        Key::E => ViewAction::RotateClockwise,
        Key::S => ViewAction::ShearRight,
        Key::A => ViewAction::ShearLeft,
        Key::ArrowLeft => ViewAction::PanLeft,
        Key::ArrowRight => ViewAction::PanRight,
        Key::ArrowUp => ViewAction::PanUp,
        Key::ArrowDown => ViewAction::PanDown,
        _ => return None,
    };
    Some(action)
}
