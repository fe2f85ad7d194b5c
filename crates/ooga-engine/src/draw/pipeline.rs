//! The single submission path every shape goes through.
//!
//! `world -> clip` transform, whole-quad culling, state stamping, append,
//! then pixel snapping. No perspective divide is performed: corners are
//! transformed as `(x, y, 0, 1)` and only `x`/`y` of the result are kept.

use crate::math::{Mat4, Vec2, Vec4};

use super::{DrawFrame, DrawQuad, FilterMode, QuadMut, WindowSize, VERTEX_USER_DATA_COUNT};

impl DrawFrame {
    /// Transforms `quad`'s corners by `world_to_clip`, culls it when it is
    /// entirely off one side of the clip square, stamps the current z layer
    /// and scissor, appends it and snaps its corners to the pixel grid.
    ///
    /// A quad with a non-finite projected corner (NaN or infinite input, or a
    /// degenerate `world_to_clip`) is dropped like a culled one.
    ///
    /// Filters are reset to [`FilterMode::Nearest`] and userdata is zeroed;
    /// set them through the returned handle. Color, image, uv and kind are
    /// kept from `quad`.
    pub fn push_quad_projected(&mut self, mut quad: DrawQuad, world_to_clip: Mat4) -> QuadMut<'_> {
        let corners = project_corners(&quad, &world_to_clip);
        if is_outside_clip(&corners) {
            log::trace!("quad culled: {corners:?}");
            return QuadMut::culled();
        }
        if !corners.iter().all(|c| c.is_finite()) {
            log::warn!("quad dropped, non-finite corners: {corners:?}");
            return QuadMut::culled();
        }

        quad.set_corners(corners);
        quad.min_filter = FilterMode::Nearest;
        quad.mag_filter = FilterMode::Nearest;
        quad.z = self.current_z();
        quad.scissor = self.current_scissor();
        quad.userdata = [Vec4::ZERO; VERTEX_USER_DATA_COUNT];

        let index = self.quads.push(quad);
        let snap = self.config.pixel_snapping && self.window.is_valid();
        let window = self.window;

        let stored = &mut self.quads.as_mut_slice()[index];
        if snap {
            let snapped = snap_corners(stored.corners(), window);
            stored.set_corners(snapped);
        }
        QuadMut::stored(index, stored)
    }

    /// Submits a quad whose corners are in world space.
    #[inline]
    pub fn push_quad(&mut self, quad: DrawQuad) -> QuadMut<'_> {
        let world_to_clip = self.world_to_clip();
        self.push_quad_projected(quad, world_to_clip)
    }

    /// Submits a quad whose corners are local to `xform`.
    #[inline]
    pub fn push_quad_xform(&mut self, quad: DrawQuad, xform: Mat4) -> QuadMut<'_> {
        let world_to_clip = self.world_to_clip() * xform;
        self.push_quad_projected(quad, world_to_clip)
    }

    /// `projection * inverse(camera_xform)`.
    #[inline]
    pub fn world_to_clip(&self) -> Mat4 {
        self.projection * self.camera_xform.inverse()
    }
}

/// Applies `m` to each corner as `(x, y, 0, 1)` and keeps `x`/`y`.
pub fn project_corners(quad: &DrawQuad, m: &Mat4) -> [Vec2; 4] {
    quad.corners().map(|c| m.transform(c.extend(0.0).extend(1.0)).xy())
}

/// True when all four corners lie beyond the same edge of `[-1, 1]^2`.
///
/// A quad that straddles the viewport, or covers it entirely, is kept.
pub fn is_outside_clip(corners: &[Vec2; 4]) -> bool {
    corners.iter().all(|c| c.x < -1.0)
        || corners.iter().all(|c| c.x > 1.0)
        || corners.iter().all(|c| c.y < -1.0)
        || corners.iter().all(|c| c.y > 1.0)
}

/// Rounds `v` to the nearest multiple of `step` (half away from zero).
#[inline]
pub fn snap_to_grid(v: f32, step: f32) -> f32 {
    (v / step).round() * step
}

/// Snaps NDC corners to the pixel grid of `window`. The window must be valid.
pub fn snap_corners(corners: [Vec2; 4], window: WindowSize) -> [Vec2; 4] {
    let (pw, ph) = window.ndc_pixel_size();
    corners.map(|c| Vec2::new(snap_to_grid(c.x, pw), snap_to_grid(c.y, ph)))
}
