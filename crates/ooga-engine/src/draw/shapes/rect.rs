use crate::math::{Mat4, Vec2};
use crate::paint::Color;
use crate::draw::{DrawFrame, DrawQuad, QuadKind, QuadMut};

impl DrawFrame {
    /// Axis-aligned rectangle with its bottom-left corner at `position` (world space).
    #[inline]
    pub fn push_rect(&mut self, position: Vec2, size: Vec2, color: Color) -> QuadMut<'_> {
        self.push_quad(DrawQuad::from_rect(position, size, color, QuadKind::Regular))
    }

    /// Rectangle spanning `0..size` in the local space of `xform`.
    #[inline]
    pub fn push_rect_xform(&mut self, xform: Mat4, size: Vec2, color: Color) -> QuadMut<'_> {
        self.push_quad_xform(DrawQuad::from_rect(Vec2::ZERO, size, color, QuadKind::Regular), xform)
    }
}

#[cfg(test)]
mod tests {
    use crate::config::FrameConfig;
    use crate::draw::{DrawFrame, QuadKind, WindowSize};
    use crate::math::{Mat4, Vec2, Vec3};
    use crate::paint::Color;

    fn frame() -> DrawFrame {
        let mut f = DrawFrame::new(FrameConfig::default());
        f.reset(WindowSize::new(800, 600));
        f
    }

    #[test]
    fn rect_and_xform_rect_agree() {
        let mut f = frame();
        f.push_rect(Vec2::new(20.0, -40.0), Vec2::new(60.0, 30.0), Color::RED);
        f.push_rect_xform(
            Mat4::from_translation(Vec3::new(20.0, -40.0, 0.0)),
            Vec2::new(60.0, 30.0),
            Color::RED,
        );

        let [a, b] = [f.quads()[0], f.quads()[1]];
        assert_eq!(a.corners(), b.corners());
        assert_eq!(a.kind, QuadKind::Regular);
        assert_eq!(a.image, None);
    }

    #[test]
    fn offscreen_rect_is_culled() {
        let mut f = frame();
        assert!(f.push_rect(Vec2::new(1000.0, 0.0), Vec2::new(10.0, 10.0), Color::WHITE).is_culled());
        assert_eq!(f.quad_count(), 0);
    }
}
