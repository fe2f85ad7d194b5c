use crate::math::{Mat4, Vec2};
use crate::paint::Color;
use crate::draw::{DrawFrame, DrawQuad, ImageHandle, QuadKind, QuadMut, FULL_UV};

fn image_quad(image: ImageHandle, position: Vec2, size: Vec2, color: Color) -> DrawQuad {
    DrawQuad {
        image: Some(image),
        uv: FULL_UV,
        ..DrawQuad::from_rect(position, size, color, QuadKind::Regular)
    }
}

impl DrawFrame {
    /// Textured rectangle sampling the whole image. `color` tints it.
    #[inline]
    pub fn push_image(&mut self, image: ImageHandle, position: Vec2, size: Vec2, color: Color) -> QuadMut<'_> {
        self.push_quad(image_quad(image, position, size, color))
    }

    #[inline]
    pub fn push_image_xform(&mut self, image: ImageHandle, xform: Mat4, size: Vec2, color: Color) -> QuadMut<'_> {
        self.push_quad_xform(image_quad(image, Vec2::ZERO, size, color), xform)
    }
}

#[cfg(test)]
mod tests {
    use crate::draw::{DrawFrame, FilterMode, ImageHandle, WindowSize, FULL_UV};
    use crate::math::{Vec2, Vec4};
    use crate::paint::Color;

    #[test]
    fn image_quad_carries_handle_and_full_uv() {
        let mut f = DrawFrame::default();
        f.reset(WindowSize::new(800, 600));
        f.push_image(ImageHandle(3), Vec2::ZERO, Vec2::new(32.0, 32.0), Color::WHITE);

        let q = f.quads()[0];
        assert_eq!(q.image, Some(ImageHandle(3)));
        assert_eq!(q.uv, FULL_UV);
        assert_eq!(q.min_filter, FilterMode::Nearest);
    }

    #[test]
    fn sub_rect_uv_through_handle() {
        let mut f = DrawFrame::default();
        f.reset(WindowSize::new(800, 600));
        let atlas_cell = Vec4::new(0.25, 0.5, 0.5, 0.75);
        f.push_image(ImageHandle(1), Vec2::ZERO, Vec2::new(16.0, 16.0), Color::WHITE)
            .uv(atlas_cell)
            .filter(FilterMode::Linear);

        let q = f.quads()[0];
        assert_eq!(q.uv, atlas_cell);
        assert_eq!(q.mag_filter, FilterMode::Linear);
    }
}
