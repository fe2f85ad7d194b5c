/// Per-frame configuration.
///
/// Defaults match the engine's historical constants. Keep this structure small;
/// add knobs only when a caller needs them.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameConfig {
    /// Maximum depth of the z-layer stack.
    pub z_stack_max: usize,

    /// Maximum depth of the scissor stack.
    pub scissor_stack_max: usize,

    /// Quads to reserve when the frame is created.
    pub reserve_quads: usize,

    /// Snap projected corners to the physical pixel grid.
    ///
    /// Removes sampling seams on atlas-packed images and glyphs, at the cost of
    /// visibly stepped sub-pixel motion.
    pub pixel_snapping: bool,

    /// Near plane of the default orthographic projection.
    pub ortho_near: f32,

    /// Far plane of the default orthographic projection.
    pub ortho_far: f32,
}

impl Default for FrameConfig {
    fn default() -> Self {
        Self {
            z_stack_max: 4096,
            scissor_stack_max: 4096,
            reserve_quads: 0,
            pixel_snapping: true,
            ortho_near: -1.0,
            ortho_far: 10.0,
        }
    }
}
