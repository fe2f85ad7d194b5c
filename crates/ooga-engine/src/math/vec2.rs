use bytemuck::{Pod, Zeroable};

use super::{impl_vec_ops, Vec3};

/// 2D vector. Used for quad corners, positions and sizes.
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Pod, Zeroable)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2::new(0.0, 0.0);
    pub const ONE: Vec2 = Vec2::new(1.0, 1.0);

    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    #[inline]
    pub const fn extend(self, z: f32) -> Vec3 {
        Vec3::new(self.x, self.y, z)
    }

    /// Scalar 2D cross product (`z` of the 3D cross).
    #[inline]
    pub fn cross(self, rhs: Vec2) -> f32 {
        self.x * rhs.y - self.y * rhs.x
    }

    /// Rotates `self` counter-clockwise around `pivot`.
    pub fn rotate_around(self, pivot: Vec2, radians: f32) -> Vec2 {
        let (s, c) = radians.sin_cos();
        let p = self - pivot;
        Vec2::new(p.x * c - p.y * s, p.x * s + p.y * c) + pivot
    }
}

impl_vec_ops!(Vec2 { x, y });

impl From<[f32; 2]> for Vec2 {
    #[inline]
    fn from([x, y]: [f32; 2]) -> Self {
        Self::new(x, y)
    }
}
