use crate::state::ViewState;

/// A discrete view input event.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ViewAction {
    RotateClockwise,
    RotateCounterClockwise,
    ShearRight,
    ShearLeft,
    PanLeft,
    PanRight,
    PanUp,
    PanDown,
    /// Scroll delta; see [`ViewState::on_zoom`].
    Zoom(f32),
    Close,
}

/// What the host loop should do after an action.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ViewSignal {
    Continue,
    Close,
}

impl ViewState {
    /// Asks the host to end the session. Leaves the state untouched.
    pub fn on_request_close(&self) -> ViewSignal {
        ViewSignal::Close
    }

    /// Dispatches `action` to its handler.
    pub fn apply(&mut self, action: ViewAction) -> ViewSignal {
        log::trace!("view action: {action:?}");

        match action {
            ViewAction::RotateClockwise => self.on_rotate_clockwise(),
            ViewAction::RotateCounterClockwise => self.on_rotate_counter_clockwise(),
            ViewAction::ShearRight => self.on_shear_right(),
            ViewAction::ShearLeft => self.on_shear_left(),
            ViewAction::PanLeft => self.on_pan_left(),
            ViewAction::PanRight => self.on_pan_right(),
            ViewAction::PanUp => self.on_pan_up(),
            ViewAction::PanDown => self.on_pan_down(),
            ViewAction::Zoom(delta) => self.on_zoom(delta),
            ViewAction::Close => return self.on_request_close(),
        }

        ViewSignal::Continue
    }
}
