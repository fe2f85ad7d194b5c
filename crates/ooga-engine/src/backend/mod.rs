//! The seam between the draw pipeline and whatever rasterizes quads.
//!
//! A backend receives a read-only [`FrameView`] once per rendered frame. Quads
//! are already in normalized device coordinates, culled, pixel-snapped and,
//! when requested, ordered by `z`.

use crate::draw::{DrawFrame, DrawQuad, ImageHandle, ShaderExtension, WindowSize};
use crate::math::Mat4;

/// Read-only view of a finished frame, as handed to a [`Backend`].
#[derive(Debug, Copy, Clone)]
pub struct FrameView<'a> {
    pub projection: Mat4,
    pub camera_xform: Mat4,
    pub quads: &'a [DrawQuad],
    /// Slots up to the highest bound one; unbound slots in between are `None`.
    pub bound_images: &'a [Option<ImageHandle>],
    pub shader_extension: Option<&'a ShaderExtension>,
    pub window: WindowSize,
    pub z_sorted: bool,
}

impl<'a> FrameView<'a> {
    pub fn of(frame: &'a DrawFrame) -> Self {
        Self {
            projection: frame.projection,
            camera_xform: frame.camera_xform,
            quads: frame.quads(),
            bound_images: frame.bound_images(),
            shader_extension: frame.shader_extension.as_ref(),
            window: frame.window(),
            z_sorted: frame.z_sorting_enabled(),
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.quads.is_empty()
    }
}

impl DrawFrame {
    #[inline]
    pub fn view(&self) -> FrameView<'_> {
        FrameView::of(self)
    }
}

/// Renderer contract implemented by platform layers.
pub trait Backend {
    /// Draws one frame. Called once per [`Gfx::update`](crate::gfx::Gfx::update)
    /// and per [`Gfx::render_frame`](crate::gfx::Gfx::render_frame).
    fn render_frame(&mut self, frame: &FrameView<'_>) -> anyhow::Result<()>;

    /// Called when the window size changes.
    fn resize(&mut self, window: WindowSize) -> anyhow::Result<()> {
        let _ = window;
        Ok(())
    }
}

/// Backend that accepts every frame and draws nothing.
#[derive(Debug, Default, Copy, Clone)]
pub struct NullBackend;

impl Backend for NullBackend {
    fn render_frame(&mut self, frame: &FrameView<'_>) -> anyhow::Result<()> {
        log::trace!("null backend: dropped {} quads", frame.quads.len());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::Vec2;
    use crate::paint::Color;

    #[test]
    fn view_reflects_frame_state() {
        let mut f = DrawFrame::default();
        f.reset(WindowSize::new(320, 240));
        f.bind_image(ImageHandle(4), 1);
        f.shader_extension = Some(ShaderExtension::new(crate::draw::ShaderHandle(2)));
        f.set_z_sorting(true);
        f.push_rect(Vec2::ZERO, Vec2::new(8.0, 8.0), Color::WHITE);

        let v = f.view();
        assert_eq!(v.quads.len(), 1);
        assert_eq!(v.bound_images, &[None, Some(ImageHandle(4))]);
        assert!(v.shader_extension.is_some());
        assert_eq!(v.window, WindowSize::new(320, 240));
        assert!(v.z_sorted);
        assert!(!v.is_empty());
    }

    #[test]
    fn null_backend_accepts_empty_frames() {
        let f = DrawFrame::default();
        assert!(NullBackend.render_frame(&f.view()).is_ok());
    }
}
