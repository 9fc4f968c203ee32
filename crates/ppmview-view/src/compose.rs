use std::f32::consts::FRAC_PI_2;

use glam::{Mat4, Vec3, Vec4};

use crate::state::ViewState;

impl ViewState {
    /// Rotation angle in radians (`rotation_step * π/2`).
    pub fn rotation_angle(&self) -> f32 {
        self.rotation_step as f32 * FRAC_PI_2
    }

    /// Builds this frame's transform.
    ///
    /// `M = Scale * Shear * Translate(tx, ty, 1) * RotateZ`, column-major.
    /// Translation therefore moves the image in the sheared and scaled frame,
    /// and rotation acts on the quad before anything else. There is no
    /// projection or aspect correction: a non-square window stretches the
    /// image.
    ///
    /// Pure; calling it twice on an unchanged state yields identical bits.
    pub fn compose(&self) -> Mat4 {
        let shear = shear_x(self.shear);
        let scale = Mat4::from_scale(Vec3::new(self.scale, self.scale, 1.0));

        let mut m = Mat4::IDENTITY;
        m = shear * m;
        m = scale * m;
        m *= Mat4::from_translation(Vec3::new(self.translate_x, self.translate_y, 1.0));
        m *= quarter_turns_z(self.rotation_step);
        m
    }
}

fn shear_x(k: f32) -> Mat4 {
    Mat4::from_cols(Vec4::X, Vec4::new(k, 1.0, 0.0, 0.0), Vec4::Z, Vec4::W)
}

/// Z rotation by `steps * π/2`.
///
/// Uses exact sin/cos values so quarter turns stay axis-aligned and large step
/// counts lose no precision.
fn quarter_turns_z(steps: i32) -> Mat4 {
    let (sin, cos) = match steps.rem_euclid(4) {
        0 => (0.0, 1.0),
        1 => (1.0, 0.0),
        2 => (0.0, -1.0),
        _ => (-1.0, 0.0),
    };
    Mat4::from_cols(
        Vec4::new(cos, sin, 0.0, 0.0),
        Vec4::new(-sin, cos, 0.0, 0.0),
        Vec4::Z,
        Vec4::W,
    )
}
