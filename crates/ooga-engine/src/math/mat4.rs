use core::ops::Mul;

use bytemuck::{Pod, Zeroable};

use super::{Quat, Vec3, Vec4};

/// 4x4 matrix, row-major (`m[row][col]`).
///
/// Vectors are treated as columns: `transform(v)` computes `M · v`, and the
/// translation lives in the last column (`m[0..3][3]`).
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct Mat4 {
    pub m: [[f32; 4]; 4],
}

impl Default for Mat4 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Mat4 {
    pub const ZERO: Mat4 = Mat4::scalar(0.0);
    pub const IDENTITY: Mat4 = Mat4::scalar(1.0);

    /// Diagonal matrix with `s` on the diagonal.
    #[inline]
    pub const fn scalar(s: f32) -> Self {
        Self {
            m: [
                [s, 0.0, 0.0, 0.0],
                [0.0, s, 0.0, 0.0],
                [0.0, 0.0, s, 0.0],
                [0.0, 0.0, 0.0, s],
            ],
        }
    }

    #[inline]
    pub const fn from_rows(m: [[f32; 4]; 4]) -> Self {
        Self { m }
    }

    /// Flat row-major view of the 16 elements.
    #[inline]
    pub fn data(&self) -> &[f32; 16] {
        bytemuck::cast_ref(&self.m)
    }

    #[inline]
    pub fn data_mut(&mut self) -> &mut [f32; 16] {
        bytemuck::cast_mut(&mut self.m)
    }

    pub fn transpose(self) -> Self {
        let mut t = Self::ZERO;
        for (r, row) in self.m.iter().enumerate() {
            for (c, v) in row.iter().enumerate() {
                t.m[c][r] = *v;
            }
        }
        t
    }

    // ── constructors ──────────────────────────────────────────────────────

    pub fn from_translation(t: Vec3) -> Self {
        let mut m = Self::IDENTITY;
        m.m[0][3] = t.x;
        m.m[1][3] = t.y;
        m.m[2][3] = t.z;
        m
    }

    /// Rotation of `radians` around `axis` (expected to be unit length).
    ///
    /// For the z axis this maps `+x` towards `-y`; pass a negated angle for a
    /// counter-clockwise rotation.
    pub fn from_axis_angle(axis: Vec3, radians: f32) -> Self {
        let (s, c) = radians.sin_cos();
        let t = 1.0 - c;
        let Vec3 { x, y, z } = axis;

        let mut m = Self::IDENTITY;
        m.m[0][0] = c + x * x * t;
        m.m[0][1] = x * y * t + z * s;
        m.m[0][2] = x * z * t - y * s;

        m.m[1][0] = y * x * t - z * s;
        m.m[1][1] = c + y * y * t;
        m.m[1][2] = y * z * t + x * s;

        m.m[2][0] = z * x * t + y * s;
        m.m[2][1] = z * y * t - x * s;
        m.m[2][2] = c + z * z * t;
        m
    }

    #[inline]
    pub fn from_rotation_z(radians: f32) -> Self {
        Self::from_axis_angle(Vec3::Z, radians)
    }

    pub fn from_scale(s: Vec3) -> Self {
        let mut m = Self::IDENTITY;
        m.m[0][0] = s.x;
        m.m[1][1] = s.y;
        m.m[2][2] = s.z;
        m
    }

    /// Rotation from `q` followed by a translation to `pos`.
    pub fn from_quat_pos(q: Quat, pos: Vec3) -> Self {
        let Quat { x, y, z, w } = q;
        let mut m = Self::IDENTITY;
        m.m[0][0] = 1.0 - 2.0 * y * y - 2.0 * z * z;
        m.m[0][1] = 2.0 * x * y + 2.0 * w * z;
        m.m[0][2] = 2.0 * x * z - 2.0 * w * y;
        m.m[1][0] = 2.0 * x * y - 2.0 * w * z;
        m.m[1][1] = 1.0 - 2.0 * x * x - 2.0 * z * z;
        m.m[1][2] = 2.0 * y * z + 2.0 * w * x;
        m.m[2][0] = 2.0 * x * z + 2.0 * w * y;
        m.m[2][1] = 2.0 * y * z - 2.0 * w * x;
        m.m[2][2] = 1.0 - 2.0 * x * x - 2.0 * y * y;
        m.m[0][3] = pos.x;
        m.m[1][3] = pos.y;
        m.m[2][3] = pos.z;
        m
    }

    pub fn orthographic(left: f32, right: f32, bottom: f32, top: f32, near: f32, far: f32) -> Self {
        let mut m = Self::IDENTITY;
        m.m[0][0] = 2.0 / (right - left);
        m.m[1][1] = 2.0 / (top - bottom);
        m.m[2][2] = -2.0 / (far - near);
        m.m[0][3] = -(right + left) / (right - left);
        m.m[1][3] = -(top + bottom) / (top - bottom);
        m.m[2][3] = -(far + near) / (far - near);
        m
    }

    /// Right-handed perspective projection.
    ///
    /// The quad pipeline performs no perspective divide, so quads submitted
    /// through it with this projection are only correct where `w == 1`.
    pub fn perspective(fov_y: f32, aspect: f32, near: f32, far: f32) -> Self {
        let f = 1.0 / (fov_y * 0.5).tan();
        let mut m = Self::ZERO;
        m.m[0][0] = f / aspect;
        m.m[1][1] = f;
        m.m[2][2] = (far + near) / (near - far);
        m.m[2][3] = (2.0 * far * near) / (near - far);
        m.m[3][2] = -1.0;
        m
    }

    pub fn look_at(eye: Vec3, target: Vec3, up: Vec3) -> Self {
        let f = (target - eye).normalize();
        let s = f.cross(up).normalize();
        let u = s.cross(f);

        Self::from_rows([
            [s.x, s.y, s.z, -s.dot(eye)],
            [u.x, u.y, u.z, -u.dot(eye)],
            [-f.x, -f.y, -f.z, f.dot(eye)],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    // ── composition (applied on the right) ────────────────────────────────

    #[inline]
    pub fn translate(self, t: Vec3) -> Self {
        self * Self::from_translation(t)
    }

    #[inline]
    pub fn rotate(self, axis: Vec3, radians: f32) -> Self {
        self * Self::from_axis_angle(axis, radians)
    }

    #[inline]
    pub fn rotate_x(self, radians: f32) -> Self {
        self.rotate(Vec3::X, radians)
    }

    #[inline]
    pub fn rotate_y(self, radians: f32) -> Self {
        self.rotate(Vec3::Y, radians)
    }

    #[inline]
    pub fn rotate_z(self, radians: f32) -> Self {
        self.rotate(Vec3::Z, radians)
    }

    #[inline]
    pub fn scale(self, s: Vec3) -> Self {
        self * Self::from_scale(s)
    }

    // ── application ───────────────────────────────────────────────────────

    pub fn transform(&self, v: Vec4) -> Vec4 {
        let row = |r: usize| {
            let m = &self.m[r];
            m[0] * v.x + m[1] * v.y + m[2] * v.z + m[3] * v.w
        };
        Vec4::new(row(0), row(1), row(2), row(3))
    }

    /// Inverse via the adjugate (transposed cofactor) matrix.
    ///
    /// Returns `Mat4::ZERO` when the determinant is exactly zero. There is no
    /// epsilon: nearly singular matrices produce very large entries.
    pub fn inverse(&self) -> Self {
        let mut adj = Self::ZERO;
        for r in 0..4 {
            for c in 0..4 {
                adj.m[c][r] = self.cofactor(r, c);
            }
        }

        let det: f32 = (0..4).map(|c| self.m[0][c] * adj.m[c][0]).sum();
        if det == 0.0 {
            return Self::ZERO;
        }

        let inv_det = 1.0 / det;
        for v in adj.data_mut() {
            *v *= inv_det;
        }
        adj
    }

    pub fn determinant(&self) -> f32 {
        (0..4).map(|c| self.m[0][c] * self.cofactor(0, c)).sum()
    }

    fn cofactor(&self, row: usize, col: usize) -> f32 {
        let mut minor = [[0.0f32; 3]; 3];
        let mut mr = 0;
        for r in (0..4).filter(|&r| r != row) {
            let mut mc = 0;
            for c in (0..4).filter(|&c| c != col) {
                minor[mr][mc] = self.m[r][c];
                mc += 1;
            }
            mr += 1;
        }

        let det3 = minor[0][0] * (minor[1][1] * minor[2][2] - minor[1][2] * minor[2][1])
            - minor[0][1] * (minor[1][0] * minor[2][2] - minor[1][2] * minor[2][0])
            + minor[0][2] * (minor[1][0] * minor[2][1] - minor[1][1] * minor[2][0]);

        if (row + col) % 2 == 0 { det3 } else { -det3 }
    }
}

impl Mul for Mat4 {
    type Output = Mat4;

    fn mul(self, rhs: Mat4) -> Mat4 {
        let mut out = Mat4::ZERO;
        for i in 0..4 {
            for j in 0..4 {
                out.m[i][j] = self.m[i][0] * rhs.m[0][j]
                    + self.m[i][1] * rhs.m[1][j]
                    + self.m[i][2] * rhs.m[2][j]
                    + self.m[i][3] * rhs.m[3][j];
            }
        }
        out
    }
}

impl Mul<Vec4> for Mat4 {
    type Output = Vec4;

    #[inline]
    fn mul(self, rhs: Vec4) -> Vec4 {
        self.transform(rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{Rng, SeedableRng};
    use rand::rngs::StdRng;

    fn assert_near(a: &Mat4, b: &Mat4, eps: f32) {
        for (x, y) in a.data().iter().zip(b.data()) {
            assert!((x - y).abs() <= eps, "{a:?}\n!=\n{b:?}");
        }
    }

    #[test]
    fn data_is_row_major() {
        let m = Mat4::from_translation(Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(m.data()[3], 1.0);
        assert_eq!(m.data()[7], 2.0);
        assert_eq!(m.data()[11], 3.0);
    }

    #[test]
    fn translate_then_point() {
        let m = Mat4::IDENTITY.translate(Vec3::new(5.0, -2.0, 0.0));
        let p = m.transform(Vec4::new(1.0, 1.0, 0.0, 1.0));
        assert_eq!(p, Vec4::new(6.0, -1.0, 0.0, 1.0));
    }

    #[test]
    fn composition_applies_in_local_frame() {
        // Scale first, then translate: the translation is scaled too.
        let m = Mat4::IDENTITY.scale(Vec3::new(2.0, 2.0, 1.0)).translate(Vec3::new(1.0, 0.0, 0.0));
        let p = m.transform(Vec4::new(0.0, 0.0, 0.0, 1.0));
        assert_eq!(p.xy(), crate::math::Vec2::new(2.0, 0.0));
    }

    #[test]
    fn rotation_z_maps_x_to_negative_y() {
        let m = Mat4::from_rotation_z(core::f32::consts::FRAC_PI_2);
        let p = m.transform(Vec4::new(1.0, 0.0, 0.0, 1.0));
        assert!(p.x.abs() < 1e-6);
        assert!((p.y + 1.0).abs() < 1e-6);
    }

    #[test]
    fn inverse_round_trip_random_transforms() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            let axis = Vec3::new(rng.gen_range(-1.0..1.0), rng.gen_range(-1.0..1.0), rng.gen_range(0.1..1.0))
                .normalize();
            let m = Mat4::IDENTITY
                .translate(Vec3::new(rng.gen_range(-20.0..20.0), rng.gen_range(-20.0..20.0), rng.gen_range(-5.0..5.0)))
                .rotate(axis, rng.gen_range(-3.0..3.0))
                .scale(Vec3::new(rng.gen_range(0.5..3.0), rng.gen_range(0.5..3.0), rng.gen_range(0.5..3.0)));

            assert_near(&(m * m.inverse()), &Mat4::IDENTITY, 1e-4);
        }
    }

    #[test]
    fn inverse_of_singular_is_zero() {
        assert_eq!(Mat4::ZERO.inverse(), Mat4::ZERO);

        let mut m = Mat4::IDENTITY;
        m.m[2] = [0.0; 4];
        assert_eq!(m.inverse(), Mat4::ZERO);
    }

    #[test]
    fn determinant_of_scale() {
        let m = Mat4::from_scale(Vec3::new(2.0, 3.0, 4.0));
        assert_eq!(m.determinant(), 24.0);
    }

    #[test]
    fn orthographic_maps_extents_to_unit_box() {
        let m = Mat4::orthographic(-400.0, 400.0, -300.0, 300.0, -1.0, 10.0);
        let p = m.transform(Vec4::new(400.0, -300.0, 0.0, 1.0));
        assert!((p.x - 1.0).abs() < 1e-6);
        assert!((p.y + 1.0).abs() < 1e-6);
    }

    #[test]
    fn transpose_twice_is_identity_op() {
        let m = Mat4::IDENTITY.translate(Vec3::new(1.0, 2.0, 3.0)).rotate_y(0.3);
        assert_eq!(m.transpose().transpose(), m);
    }

    #[test]
    fn perspective_maps_near_and_far_to_clip_depth() {
        let (near, far) = (0.1, 100.0);
        let m = Mat4::perspective(core::f32::consts::FRAC_PI_2, 16.0 / 9.0, near, far);

        let n = m.transform(Vec4::new(0.0, 0.0, -near, 1.0));
        let f = m.transform(Vec4::new(0.0, 0.0, -far, 1.0));
        assert!((n.z / n.w + 1.0).abs() < 1e-5, "near z/w = {}", n.z / n.w);
        assert!((f.z / f.w - 1.0).abs() < 1e-4, "far z/w = {}", f.z / f.w);
        assert!((n.w - near).abs() < 1e-6);
    }

    #[test]
    fn look_at_puts_eye_at_origin_facing_negative_z() {
        let eye = Vec3::new(2.0, 3.0, 4.0);
        let target = Vec3::new(5.0, 3.0, 0.0);
        let m = Mat4::look_at(eye, target, Vec3::Y);

        let e = m.transform(eye.extend(1.0));
        assert!(e.xyz().length() < 1e-5, "{e:?}");

        let t = m.transform(target.extend(1.0));
        let dist = (target - eye).length();
        assert!(t.xy().length() < 1e-5, "{t:?}");
        assert!((t.z + dist).abs() < 1e-5, "{t:?}");

        assert_near(&(m * m.inverse()), &Mat4::IDENTITY, 1e-4);
    }
}

