/// Per-event increment for shear and pan.
pub(crate) const NUDGE: f32 = 0.05;

/// Scroll units per unit of scale.
pub(crate) const ZOOM_DIVISOR: f32 = 100.0;

/// Rotation step bound checked after each rotate event.
const ROTATION_RESET_BOUND: i32 = 4;

/// Mutable view parameters for one viewer session.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ViewState {
    /// Quarter turns; the rotation angle is `rotation_step * π/2`.
    pub rotation_step: i32,

    /// Uniform 2D scale. Never negative.
    pub scale: f32,

    /// Horizontal shear coefficient (`x' = x + shear * y`).
    pub shear: f32,

    pub translate_x: f32,
    pub translate_y: f32,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            rotation_step: 0,
            scale: 1.0,
            shear: 0.0,
            translate_x: 0.0,
            translate_y: 0.0,
        }
    }
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decrements the rotation step.
    ///
    /// The reset to 0 only fires at `>= 4`, which a decrement never reaches,
    /// so repeated clockwise turns keep counting down. Steps wrap instead of
    /// overflowing.
    pub fn on_rotate_clockwise(&mut self) {
        self.rotation_step = self.rotation_step.wrapping_sub(1);
        if self.rotation_step >= ROTATION_RESET_BOUND {
            self.rotation_step = 0;
        }
    }

    /// Increments the rotation step; resets to 0 only at `<= -4`.
    pub fn on_rotate_counter_clockwise(&mut self) {
        self.rotation_step = self.rotation_step.wrapping_add(1);
        if self.rotation_step <= -ROTATION_RESET_BOUND {
            self.rotation_step = 0;
        }
    }

    pub fn on_shear_right(&mut self) {
        self.shear += NUDGE;
    }

    pub fn on_shear_left(&mut self) {
        self.shear -= NUDGE;
    }

    pub fn on_pan_left(&mut self) {
        self.translate_x += NUDGE;
    }

    pub fn on_pan_right(&mut self) {
        self.translate_x -= NUDGE;
    }

    pub fn on_pan_down(&mut self) {
        self.translate_y += NUDGE;
    }

    pub fn on_pan_up(&mut self) {
        self.translate_y -= NUDGE;
    }

    /// Adds `delta / 100` to the scale, clamping at 0.
    ///
    /// A scale of exactly 0 collapses the image to a point; it is a valid
    /// state and further positive deltas grow it back.
    pub fn on_zoom(&mut self, delta: f32) {
        self.scale += delta / ZOOM_DIVISOR;
        if self.scale <= 0.0 || self.scale.is_nan() {
            self.scale = 0.0;
        }
    }
}
