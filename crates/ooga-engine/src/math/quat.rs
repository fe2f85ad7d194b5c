use core::ops::Mul;

use super::{Mat4, Vec3};

/// Rotation quaternion `(x, y, z, w)` with `w` as the scalar part.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Quat {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}

impl Default for Quat {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Quat {
    pub const IDENTITY: Quat = Quat::new(0.0, 0.0, 0.0, 1.0);

    #[inline]
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { x, y, z, w }
    }

    /// `axis` is expected to be unit length.
    pub fn from_axis_angle(axis: Vec3, radians: f32) -> Self {
        let (s, c) = (radians * 0.5).sin_cos();
        Self::new(axis.x * s, axis.y * s, axis.z * s, c)
    }

    /// Rotation + translation matrix, same element layout as
    /// [`Mat4::from_axis_angle`].
    #[inline]
    pub fn to_mat4_with_pos(self, pos: Vec3) -> Mat4 {
        Mat4::from_quat_pos(self, pos)
    }
}

/// Hamilton product: `a * b` applies `b` first, then `a`.
impl Mul for Quat {
    type Output = Quat;

    fn mul(self, b: Quat) -> Quat {
        let a = self;
        Quat {
            w: a.w * b.w - a.x * b.x - a.y * b.y - a.z * b.z,
            x: a.w * b.x + a.x * b.w + a.y * b.z - a.z * b.y,
            y: a.w * b.y - a.x * b.z + a.y * b.w + a.z * b.x,
            z: a.w * b.z + a.x * b.y - a.y * b.x + a.z * b.w,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::f32::consts::FRAC_PI_2;

    fn assert_mat_near(a: Mat4, b: Mat4) {
        for (x, y) in a.data().iter().zip(b.data()) {
            assert!((x - y).abs() < 1e-5, "{a:?}\n!=\n{b:?}");
        }
    }

    #[test]
    fn identity_is_neutral() {
        let q = Quat::from_axis_angle(Vec3::Y, 0.7);
        assert_eq!(q * Quat::IDENTITY, q);
        assert_eq!(Quat::IDENTITY * q, q);
    }

    #[test]
    fn matches_axis_angle_matrix() {
        let axis = Vec3::new(1.0, 2.0, 3.0).normalize();
        let q = Quat::from_axis_angle(axis, 1.1);
        assert_mat_near(q.to_mat4_with_pos(Vec3::ZERO), Mat4::from_axis_angle(axis, 1.1));
    }

    #[test]
    fn composed_quarter_turns_make_half_turn() {
        let q = Quat::from_axis_angle(Vec3::Z, FRAC_PI_2);
        let half = q * q;
        assert_mat_near(
            half.to_mat4_with_pos(Vec3::new(1.0, 2.0, 3.0)),
            Mat4::from_translation(Vec3::new(1.0, 2.0, 3.0)) * Mat4::from_rotation_z(2.0 * FRAC_PI_2),
        );
    }
}
