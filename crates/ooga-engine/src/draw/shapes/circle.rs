use crate::math::{Mat4, Vec2};
use crate::paint::Color;
use crate::draw::{DrawFrame, DrawQuad, QuadKind, QuadMut};

impl DrawFrame {
    /// Ellipse inscribed in the rectangle `position .. position + size`.
    /// Geometry is a plain quad; the backend shades it as a circle.
    #[inline]
    pub fn push_circle(&mut self, position: Vec2, size: Vec2, color: Color) -> QuadMut<'_> {
        self.push_quad(DrawQuad::from_rect(position, size, color, QuadKind::Circle))
    }

    #[inline]
    pub fn push_circle_xform(&mut self, xform: Mat4, size: Vec2, color: Color) -> QuadMut<'_> {
        self.push_quad_xform(DrawQuad::from_rect(Vec2::ZERO, size, color, QuadKind::Circle), xform)
    }
}
