//! Linear algebra used by the draw pipeline.
//!
//! Conventions:
//! - `Mat4` is row-major (`m[row][col]`) and transforms column vectors
//! - composition helpers (`translate`, `rotate`, `scale`) apply on the right,
//!   so successive calls act in the current local frame
//! - angles are radians

mod mat4;
mod quat;
mod vec2;
mod vec3;
mod vec4;

pub use mat4::Mat4;
pub use quat::Quat;
pub use vec2::Vec2;
pub use vec3::Vec3;
pub use vec4::Vec4;

/// Implements component-wise arithmetic for a float vector type.
macro_rules! impl_vec_ops {
    ($ty:ident { $($f:ident),+ }) => {
        impl core::ops::Add for $ty {
            type Output = $ty;
            #[inline]
            fn add(self, rhs: $ty) -> $ty {
                $ty { $($f: self.$f + rhs.$f),+ }
            }
        }

        impl core::ops::Sub for $ty {
            type Output = $ty;
            #[inline]
            fn sub(self, rhs: $ty) -> $ty {
                $ty { $($f: self.$f - rhs.$f),+ }
            }
        }

        impl core::ops::Mul for $ty {
            type Output = $ty;
            #[inline]
            fn mul(self, rhs: $ty) -> $ty {
                $ty { $($f: self.$f * rhs.$f),+ }
            }
        }

        impl core::ops::Div for $ty {
            type Output = $ty;
            #[inline]
            fn div(self, rhs: $ty) -> $ty {
                $ty { $($f: self.$f / rhs.$f),+ }
            }
        }

        impl core::ops::Mul<f32> for $ty {
            type Output = $ty;
            #[inline]
            fn mul(self, rhs: f32) -> $ty {
                $ty { $($f: self.$f * rhs),+ }
            }
        }

        impl core::ops::Div<f32> for $ty {
            type Output = $ty;
            #[inline]
            fn div(self, rhs: f32) -> $ty {
                $ty { $($f: self.$f / rhs),+ }
            }
        }

        impl core::ops::Neg for $ty {
            type Output = $ty;
            #[inline]
            fn neg(self) -> $ty {
                $ty { $($f: -self.$f),+ }
            }
        }

        impl $ty {
            #[inline]
            pub const fn splat(v: f32) -> Self {
                Self { $($f: v),+ }
            }

            #[inline]
            pub fn dot(self, rhs: Self) -> f32 {
                0.0 $(+ self.$f * rhs.$f)+
            }

            #[inline]
            pub fn length(self) -> f32 {
                self.dot(self).sqrt()
            }

            /// Returns the unit vector; the zero vector normalizes to zero.
            #[inline]
            pub fn normalize(self) -> Self {
                let len = self.length();
                if len == 0.0 { Self::splat(0.0) } else { self / len }
            }

            #[inline]
            pub fn lerp(self, to: Self, t: f32) -> Self {
                Self { $($f: $crate::math::lerp(self.$f, to.$f, t)),+ }
            }

            #[inline]
            pub fn abs(self) -> Self {
                Self { $($f: self.$f.abs()),+ }
            }

            #[inline]
            pub fn is_finite(self) -> bool {
                true $(&& self.$f.is_finite())+
            }
        }
    };
}

pub(crate) use impl_vec_ops;

/// Linear interpolation: `t = 0` yields `from`, `t = 1` yields `to`.
#[inline]
pub fn lerp(from: f32, to: f32, t: f32) -> f32 {
    (to - from) * t + from
}

/// Smoothstep-eased interpolation.
#[inline]
pub fn smerp(from: f32, to: f32, t: f32) -> f32 {
    let smooth = t * t * (3.0 - 2.0 * t);
    lerp(from, to, smooth)
}
