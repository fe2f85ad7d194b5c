use crate::draw::{DrawFrame, FilterMode, ImageHandle, QuadKind, QuadMut};
use crate::math::{Mat4, Vec2, Vec3, Vec4};
use crate::paint::Color;

/// A rasterized glyph in a font atlas.
///
/// Offsets, advance and size are in atlas pixels; `uv` is the glyph's
/// `x0, y0, x1, y1` box in the atlas image.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct Glyph {
    pub codepoint: u32,
    pub xoffset: f32,
    pub yoffset: f32,
    pub advance: f32,
    pub width: f32,
    pub height: f32,
    pub uv: Vec4,
}

/// A glyph placed by an external layout pass.
///
/// `x`/`y` is where the glyph quad's bottom-left goes, in the text's local
/// space (already scaled).
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct PositionedGlyph {
    pub glyph: Glyph,
    pub x: f32,
    pub y: f32,
}

impl PositionedGlyph {
    #[inline]
    pub fn new(glyph: Glyph, x: f32, y: f32) -> Self {
        Self { glyph, x, y }
    }
}

/// Bounds of a run of glyphs, in the text's local space.
///
/// The visual box covers the glyph quads. The functional box spans the pen
/// positions horizontally (origin to origin + advance) and matches the visual
/// box vertically, which is what callers align and wrap with.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct TextMetrics {
    pub functional_pos_min: Vec2,
    pub functional_pos_max: Vec2,
    pub functional_size: Vec2,
    pub visual_pos_min: Vec2,
    pub visual_pos_max: Vec2,
    pub visual_size: Vec2,
}

impl TextMetrics {
    /// Measures `glyphs` at `scale` without drawing anything.
    pub fn measure(glyphs: &[PositionedGlyph], scale: Vec2) -> Self {
        let mut it = glyphs.iter();
        let Some(first) = it.next() else {
            return Self::default();
        };

        let (mut vmin, mut vmax) = visual_box(first, scale);
        let (mut fmin_x, mut fmax_x) = pen_span(first, scale);
        for g in it {
            let (lo, hi) = visual_box(g, scale);
            vmin = Vec2::new(vmin.x.min(lo.x), vmin.y.min(lo.y));
            vmax = Vec2::new(vmax.x.max(hi.x), vmax.y.max(hi.y));

            let (pl, ph) = pen_span(g, scale);
            fmin_x = fmin_x.min(pl);
            fmax_x = fmax_x.max(ph);
        }

        let fmin = Vec2::new(fmin_x, vmin.y);
        let fmax = Vec2::new(fmax_x, vmax.y);
        Self {
            functional_pos_min: fmin,
            functional_pos_max: fmax,
            functional_size: fmax - fmin,
            visual_pos_min: vmin,
            visual_pos_max: vmax,
            visual_size: vmax - vmin,
        }
    }
}

fn visual_box(g: &PositionedGlyph, scale: Vec2) -> (Vec2, Vec2) {
    let min = Vec2::new(g.x, g.y);
    let size = Vec2::new(g.glyph.width, g.glyph.height) * scale;
    (min, min + size)
}

fn pen_span(g: &PositionedGlyph, scale: Vec2) -> (f32, f32) {
    let pen = g.x - g.glyph.xoffset * scale.x;
    (pen, pen + g.glyph.advance * scale.x)
}

impl DrawFrame {
    /// One glyph quad from `atlas`, placed at the glyph's position inside `xform`.
    ///
    /// Text is sampled with linear filtering.
    pub fn push_glyph(
        &mut self,
        atlas: ImageHandle,
        glyph: &PositionedGlyph,
        xform: Mat4,
        scale: Vec2,
        color: Color,
    ) -> QuadMut<'_> {
        let size = Vec2::new(glyph.glyph.width, glyph.glyph.height) * scale;
        let glyph_xform = xform.translate(Vec3::new(glyph.x, glyph.y, 0.0));

        self.push_image_xform(atlas, glyph_xform, size, color)
            .uv(glyph.glyph.uv)
            .kind(QuadKind::Text)
            .filter(FilterMode::Linear)
    }

    /// Draws pre-laid-out glyphs in the local space of `xform`.
    pub fn push_text_xform(
        &mut self,
        atlas: ImageHandle,
        glyphs: &[PositionedGlyph],
        xform: Mat4,
        scale: Vec2,
        color: Color,
    ) -> TextMetrics {
        for g in glyphs {
            self.push_glyph(atlas, g, xform, scale, color);
        }
        TextMetrics::measure(glyphs, scale)
    }

    #[inline]
    pub fn push_text(
        &mut self,
        atlas: ImageHandle,
        glyphs: &[PositionedGlyph],
        position: Vec2,
        scale: Vec2,
        color: Color,
    ) -> TextMetrics {
        self.push_text_xform(atlas, glyphs, Mat4::from_translation(position.extend(0.0)), scale, color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::WindowSize;

    fn glyph(codepoint: char, advance: f32) -> Glyph {
        Glyph {
            codepoint: codepoint as u32,
            xoffset: 1.0,
            yoffset: 0.0,
            advance,
            width: 8.0,
            height: 12.0,
            uv: Vec4::new(0.0, 0.0, 0.125, 0.25),
        }
    }

    fn hi() -> Vec<PositionedGlyph> {
        vec![
            PositionedGlyph::new(glyph('h', 10.0), 1.0, 0.0),
            PositionedGlyph::new(glyph('i', 10.0), 11.0, 0.0),
        ]
    }

    #[test]
    fn text_quads_are_linear_text_kind() {
        let mut f = DrawFrame::default();
        f.reset(WindowSize::new(800, 600));
        f.push_text(ImageHandle(9), &hi(), Vec2::ZERO, Vec2::ONE, Color::WHITE);

        assert_eq!(f.quad_count(), 2);
        for q in f.quads() {
            assert_eq!(q.kind, QuadKind::Text);
            assert_eq!(q.image, Some(ImageHandle(9)));
            assert_eq!(q.min_filter, FilterMode::Linear);
            assert_eq!(q.mag_filter, FilterMode::Linear);
            assert_eq!(q.uv, Vec4::new(0.0, 0.0, 0.125, 0.25));
        }
    }

    #[test]
    fn metrics_cover_glyph_run() {
        let m = TextMetrics::measure(&hi(), Vec2::ONE);
        assert_eq!(m.visual_pos_min, Vec2::new(1.0, 0.0));
        assert_eq!(m.visual_pos_max, Vec2::new(19.0, 12.0));
        assert_eq!(m.visual_size, Vec2::new(18.0, 12.0));
        assert_eq!(m.functional_pos_min, Vec2::new(0.0, 0.0));
        assert_eq!(m.functional_pos_max, Vec2::new(20.0, 12.0));
    }

    #[test]
    fn scale_applies_to_size_not_position() {
        let g = [PositionedGlyph::new(glyph('x', 10.0), 4.0, 0.0)];
        let m = TextMetrics::measure(&g, Vec2::new(2.0, 0.5));
        assert_eq!(m.visual_pos_min, Vec2::new(4.0, 0.0));
        assert_eq!(m.visual_size, Vec2::new(16.0, 6.0));
    }

    #[test]
    fn empty_text_measures_zero_and_draws_nothing() {
        let mut f = DrawFrame::default();
        f.reset(WindowSize::new(800, 600));
        let m = f.push_text(ImageHandle(0), &[], Vec2::ZERO, Vec2::ONE, Color::WHITE);
        assert_eq!(m, TextMetrics::default());
        assert_eq!(f.quad_count(), 0);
    }
}
