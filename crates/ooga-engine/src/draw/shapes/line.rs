use crate::math::{Mat4, Vec2, Vec3};
use crate::paint::Color;
use crate::draw::{DrawFrame, QuadMut};

impl DrawFrame {
    /// Line segment from `p0` to `p1` drawn as a `width`-thick rectangle
    /// centered on the segment.
    pub fn push_line(&mut self, p0: Vec2, p1: Vec2, width: f32, color: Color) -> QuadMut<'_> {
        let d = p1 - p0;
        let length = d.length();
        // z rotation maps +x towards -y, hence the negated dy.
        let r = (-d.y).atan2(d.x);

        let xform = Mat4::IDENTITY
            .translate(p0.extend(0.0))
            .rotate_z(r)
            .translate(Vec3::new(0.0, -width / 2.0, 0.0));

        self.push_rect_xform(xform, Vec2::new(length, width), color)
    }
}
