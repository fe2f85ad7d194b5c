use crate::collections::GrowingBuffer;
use crate::config::FrameConfig;
use crate::math::{Mat4, Vec2};
use crate::sort::{key_bits_for_range, radix_sort_by_key, Z_SORT_BITS};

use super::stack::BoundedStack;
use super::{DrawError, DrawQuad, ImageHandle, ScissorRect, ShaderExtension, StackKind, WindowSize};

/// Number of image slots a frame can bind for custom shaders.
pub const MAX_BOUND_IMAGES: usize = 16;

/// Per-tick container of resolved quads and render state.
///
/// Immediate mode: everything is rebuilt each tick. Call [`reset`](Self::reset)
/// once per tick, set `projection` / `camera_xform` if the defaults do not fit,
/// then submit. `camera_xform` is the inverse of a view matrix: translating it
/// by `+x` moves the camera right, so the world appears to slide left.
///
/// A frame is single-threaded (`&mut self` for every submission). Independent
/// frames can be built on different threads and handed to the backend in turn.
#[derive(Debug)]
pub struct DrawFrame {
    pub projection: Mat4,
    pub camera_xform: Mat4,
    pub shader_extension: Option<ShaderExtension>,

    pub(super) quads: GrowingBuffer<DrawQuad>,
    pub(super) z_stack: BoundedStack<i32>,
    pub(super) scissor_stack: BoundedStack<ScissorRect>,

    bound_images: [Option<ImageHandle>; MAX_BOUND_IMAGES],
    highest_bound_slot: Option<usize>,

    z_sorting: bool,
    pub(super) window: WindowSize,
    pub(super) config: FrameConfig,
}

impl DrawFrame {
    /// Creates a frame, reserving `config.reserve_quads` quads.
    ///
    /// The frame is usable right away but has a zero-sized window until the
    /// first [`reset`](Self::reset).
    pub fn new(config: FrameConfig) -> Self {
        let reserve = config.reserve_quads;
        Self::with_reserve(reserve, config)
    }

    /// Creates a frame with room for `quads` quads, overriding `config.reserve_quads`.
    pub fn with_reserve(quads: usize, config: FrameConfig) -> Self {
        log::debug!("draw frame init (reserve {quads} quads)");
        Self {
            projection: Mat4::IDENTITY,
            camera_xform: Mat4::IDENTITY,
            shader_extension: None,
            quads: GrowingBuffer::with_reserve(quads),
            z_stack: BoundedStack::new(StackKind::ZLayer, config.z_stack_max),
            scissor_stack: BoundedStack::new(StackKind::Scissor, config.scissor_stack_max),
            bound_images: [None; MAX_BOUND_IMAGES],
            highest_bound_slot: None,
            z_sorting: false,
            window: WindowSize::default(),
            config,
        }
    }

    /// Starts a new tick.
    ///
    /// Clears quads (keeping their storage), stacks, bound images and shader
    /// extension, disables z sorting, resets the camera to identity, and sets
    /// `projection` to a pixel-space orthographic projection centered on the
    /// window: `[-w/2, w/2] x [-h/2, h/2]`. An empty window gets the identity
    /// projection and no pixel snapping.
    pub fn reset(&mut self, window: WindowSize) {
        if !window.is_valid() {
            log::warn!("draw frame reset with empty window {window:?}, using identity projection");
        }

        self.quads.clear();
        self.z_stack.clear();
        self.scissor_stack.clear();
        self.bound_images = [None; MAX_BOUND_IMAGES];
        self.highest_bound_slot = None;
        self.shader_extension = None;
        self.z_sorting = false;
        self.window = window;

        self.projection = if window.is_valid() {
            let half_w = window.width as f32 / 2.0;
            let half_h = window.height as f32 / 2.0;
            Mat4::orthographic(
                -half_w,
                half_w,
                -half_h,
                half_h,
                self.config.ortho_near,
                self.config.ortho_far,
            )
        } else {
            Mat4::IDENTITY
        };
        self.camera_xform = Mat4::IDENTITY;
    }

    /// Updates the window size used for pixel snapping without resetting the frame.
    #[inline]
    pub fn set_window_size(&mut self, window: WindowSize) {
        self.window = window;
    }

    #[inline]
    pub fn window(&self) -> WindowSize {
        self.window
    }

    #[inline]
    pub fn config(&self) -> &FrameConfig {
        &self.config
    }

    // ── bound images ──────────────────────────────────────────────────────

    /// Binds `image` to a shader slot. Slots past [`MAX_BOUND_IMAGES`] are
    /// logged and ignored.
    pub fn bind_image(&mut self, image: ImageHandle, slot: usize) {
        if slot >= MAX_BOUND_IMAGES {
            log::error!(
                "the highest bind image slot is {}, tried to bind to {slot}",
                MAX_BOUND_IMAGES - 1
            );
            return;
        }
        self.bound_images[slot] = Some(image);
        self.highest_bound_slot = Some(self.highest_bound_slot.map_or(slot, |h| h.max(slot)));
    }

    /// Bound slots up to and including the highest bound one.
    #[inline]
    pub fn bound_images(&self) -> &[Option<ImageHandle>] {
        match self.highest_bound_slot {
            Some(h) => &self.bound_images[..=h],
            None => &[],
        }
    }

    #[inline]
    pub fn highest_bound_slot(&self) -> Option<usize> {
        self.highest_bound_slot
    }

    // ── z layers & scissors ───────────────────────────────────────────────

    /// Quads submitted until the matching pop get `z` as their sort key.
    #[inline]
    pub fn push_z_layer(&mut self, z: i32) -> Result<(), DrawError> {
        self.z_stack.push(z)
    }

    #[inline]
    pub fn pop_z_layer(&mut self) -> Result<i32, DrawError> {
        self.z_stack.pop()
    }

    /// Quads submitted until the matching pop are clipped to `min..max`
    /// (window space). Scissors replace, not intersect, the previous one.
    #[inline]
    pub fn push_scissor(&mut self, min: Vec2, max: Vec2) -> Result<(), DrawError> {
        self.scissor_stack.push(ScissorRect::new(min, max))
    }

    #[inline]
    pub fn pop_scissor(&mut self) -> Result<ScissorRect, DrawError> {
        self.scissor_stack.pop()
    }

    /// Runs `draw` inside a z layer, popping it afterwards.
    pub fn with_z_layer<R>(&mut self, z: i32, draw: impl FnOnce(&mut Self) -> R) -> Result<R, DrawError> {
        self.push_z_layer(z).inspect_err(|e| log::warn!("with_z_layer({z}): {e}"))?;
        let out = draw(self);
        self.pop_z_layer().inspect_err(|e| log::warn!("with_z_layer({z}): {e}"))?;
        Ok(out)
    }

    /// Runs `draw` inside a scissor, popping it afterwards.
    pub fn with_scissor<R>(
        &mut self,
        min: Vec2,
        max: Vec2,
        draw: impl FnOnce(&mut Self) -> R,
    ) -> Result<R, DrawError> {
        self.push_scissor(min, max).inspect_err(|e| log::warn!("with_scissor: {e}"))?;
        let out = draw(self);
        self.pop_scissor().inspect_err(|e| log::warn!("with_scissor: {e}"))?;
        Ok(out)
    }

    /// Top of the z stack, or 0.
    #[inline]
    pub fn current_z(&self) -> i32 {
        self.z_stack.top().unwrap_or(0)
    }

    #[inline]
    pub fn current_scissor(&self) -> Option<ScissorRect> {
        self.scissor_stack.top()
    }

    #[inline]
    pub fn z_depth(&self) -> usize {
        self.z_stack.len()
    }

    #[inline]
    pub fn scissor_depth(&self) -> usize {
        self.scissor_stack.len()
    }

    // ── quads ─────────────────────────────────────────────────────────────

    /// Resolved quads in submission order (or z order after [`sort_by_z`](Self::sort_by_z)).
    #[inline]
    pub fn quads(&self) -> &[DrawQuad] {
        self.quads.as_slice()
    }

    #[inline]
    pub fn quad(&self, index: usize) -> Option<&DrawQuad> {
        self.quads.get(index)
    }

    /// Mutable access by the index returned from [`QuadMut::index`](super::QuadMut::index).
    /// Indices are only meaningful until the frame is sorted or reset.
    #[inline]
    pub fn quad_mut(&mut self, index: usize) -> Option<&mut DrawQuad> {
        self.quads.get_mut(index)
    }

    #[inline]
    pub fn quad_count(&self) -> usize {
        self.quads.len()
    }

    #[inline]
    pub fn quad_capacity(&self) -> usize {
        self.quads.capacity()
    }

    // ── z sorting ─────────────────────────────────────────────────────────

    /// Requests that the backend receive quads ordered by `z`. Cleared on reset.
    #[inline]
    pub fn set_z_sorting(&mut self, enabled: bool) {
        self.z_sorting = enabled;
    }

    #[inline]
    pub fn z_sorting_enabled(&self) -> bool {
        self.z_sorting
    }

    /// Stably sorts the quads by `z` using `scratch` as the radix buffer.
    ///
    /// The key width is derived from the z range actually present, never
    /// narrower than [`Z_SORT_BITS`]; quads with equal `z` keep submission
    /// order. Returns the key width used.
    pub fn sort_by_z(&mut self, scratch: &mut Vec<DrawQuad>) -> u32 {
        let quads = self.quads.as_mut_slice();
        let (min, max) = quads
            .iter()
            .fold((0, 0), |(lo, hi), q| (q.z.min(lo), q.z.max(hi)));
        let bits = key_bits_for_range(min, max).max(Z_SORT_BITS);

        scratch.clear();
        scratch.extend_from_slice(quads);
        radix_sort_by_key(quads, scratch, bits, |q| q.z);
        bits
    }
}

impl Default for DrawFrame {
    fn default() -> Self {
        Self::new(FrameConfig::default())
    }
}
