use ooga_engine::draw::{
    DrawError, DrawFrame, Glyph, ImageHandle, PositionedGlyph, ShaderExtension, ShaderHandle,
};
use ooga_engine::math::{Mat4, Vec2, Vec3, Vec4};
use ooga_engine::paint::Color;

const FONT_ATLAS: ImageHandle = ImageHandle(1);
const NOISE: ImageHandle = ImageHandle(2);
const GRID: i32 = 8;
const CELL: f32 = 40.0;

/// Rects placed far off-screen every tick to exercise culling.
const OFFSCREEN: usize = 4;

/// Draws one tick of the demo scene at time `t` (seconds).
///
/// Returns how many submissions the pipeline culled.
pub fn draw(frame: &mut DrawFrame, t: f32) -> Result<usize, DrawError> {
    frame.set_z_sorting(true);
    frame.bind_image(NOISE, 0);
    frame.shader_extension = Some(ShaderExtension::new(ShaderHandle(7)).with_constants(&[t, 0.0f32, 0.0, 0.0]));

    // Spinning grid in the background.
    frame.with_z_layer(-10, |frame| {
        let half = GRID as f32 * CELL / 2.0;
        for y in 0..GRID {
            for x in 0..GRID {
                let center = Vec3::new(x as f32 * CELL - half, y as f32 * CELL - half, 0.0);
                let xform = Mat4::from_translation(center)
                    .rotate_z(t + (x + y) as f32 * 0.1)
                    .translate(Vec3::new(-CELL / 4.0, -CELL / 4.0, 0.0));
                let tint = Color::rgba(x as f32 / GRID as f32, y as f32 / GRID as f32, 0.6, 1.0);
                frame.push_rect_xform(xform, Vec2::splat(CELL / 2.0), tint);
            }
        }
    })?;

    // Clock hand.
    let tip = Vec2::new(t.cos(), t.sin()) * 200.0;
    frame.push_line(Vec2::ZERO, tip, 4.0, Color::WHITE).z(5);

    // Circles clipped to a panel, drawn above everything.
    frame.with_z_layer(10, |frame| {
        frame.with_scissor(Vec2::new(40.0, 40.0), Vec2::new(360.0, 240.0), |frame| {
            for i in 0..6 {
                let p = Vec2::new(-300.0 + i as f32 * 50.0, 120.0 + (t * 2.0 + i as f32).sin() * 30.0);
                frame
                    .push_circle(p, Vec2::splat(36.0), Color::from_hex(0xff8800ff))
                    .userdata(0, Vec4::new(t, i as f32, 0.0, 0.0));
            }
        })
    })??;

    // Noise-textured panel with the custom shader.
    frame
        .push_image(NOISE, Vec2::new(200.0, -250.0), Vec2::new(128.0, 128.0), Color::WHITE)
        .uv(Vec4::new(0.0, 0.0, 0.5, 0.5));

    // Caption from a pre-laid-out glyph run.
    let glyphs = caption();
    let metrics = frame.push_text(FONT_ATLAS, &glyphs, Vec2::new(-600.0, 320.0), Vec2::ONE, Color::BLACK);
    frame.push_rect(
        Vec2::new(-600.0, 320.0) + metrics.visual_pos_min,
        metrics.visual_size,
        Color::WHITE.with_alpha(0.5),
    )
    .z(-1);

    let culled = (0..OFFSCREEN)
        .filter(|&i| {
            frame
                .push_rect(Vec2::new(10_000.0 + i as f32 * 100.0, 0.0), Vec2::splat(10.0), Color::RED)
                .is_culled()
        })
        .count();

    Ok(culled)
}

/// Monospace layout of "OOGA" in a 16x16-cell atlas.
fn caption() -> Vec<PositionedGlyph> {
    "OOGA"
        .chars()
        .enumerate()
        .map(|(i, c)| {
            let code = c as u32;
            let (col, row) = ((code % 16) as f32, (code / 16) as f32);
            let glyph = Glyph {
                codepoint: code,
                xoffset: 0.0,
                yoffset: 0.0,
                advance: 18.0,
                width: 16.0,
                height: 24.0,
                uv: Vec4::new(col / 16.0, row / 16.0, (col + 1.0) / 16.0, (row + 1.0) / 16.0),
            };
            PositionedGlyph::new(glyph, i as f32 * 18.0, 0.0)
        })
        .collect()
}
