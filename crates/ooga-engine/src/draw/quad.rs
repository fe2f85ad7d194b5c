use crate::math::{Vec2, Vec4};
use crate::paint::Color;

/// Number of opaque per-vertex user-data slots carried by each quad.
pub const VERTEX_USER_DATA_COUNT: usize = 8;

/// Full-texture uv box (`x0, y0, x1, y1`).
pub const FULL_UV: Vec4 = Vec4::new(0.0, 0.0, 1.0, 1.0);

/// Opaque image handle. The backend owns the image; the frame only stores the id.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct ImageHandle(pub u64);

/// Texture sampling filter.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
pub enum FilterMode {
    #[default]
    Nearest,
    Linear,
}

/// How the backend shades a quad. Circles and rects share geometry; only the
/// shader path differs.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
pub enum QuadKind {
    #[default]
    Regular,
    Circle,
    Text,
}

/// Scissor box in window space, stored as min/max corners.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct ScissorRect {
    pub min: Vec2,
    pub max: Vec2,
}

impl ScissorRect {
    #[inline]
    pub const fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    /// `x0, y0, x1, y1`.
    #[inline]
    pub const fn to_xyxy(self) -> Vec4 {
        Vec4::new(self.min.x, self.min.y, self.max.x, self.max.y)
    }
}

/// The atomic renderable unit.
///
/// Before submission the corners are in local/world space. Once stored in a
/// [`DrawFrame`](super::DrawFrame) they are in normalized device coordinates,
/// already culled and pixel-snapped.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct DrawQuad {
    pub bottom_left: Vec2,
    pub top_left: Vec2,
    pub top_right: Vec2,
    pub bottom_right: Vec2,
    pub color: Color,
    pub image: Option<ImageHandle>,
    pub min_filter: FilterMode,
    pub mag_filter: FilterMode,
    /// Sort key. Keep within `±MAX_Z` for the default sort width.
    pub z: i32,
    pub kind: QuadKind,
    pub scissor: Option<ScissorRect>,
    pub uv: Vec4,
    pub userdata: [Vec4; VERTEX_USER_DATA_COUNT],
}

impl Default for DrawQuad {
    fn default() -> Self {
        Self {
            bottom_left: Vec2::ZERO,
            top_left: Vec2::ZERO,
            top_right: Vec2::ZERO,
            bottom_right: Vec2::ZERO,
            color: Color::WHITE,
            image: None,
            min_filter: FilterMode::Nearest,
            mag_filter: FilterMode::Nearest,
            z: 0,
            kind: QuadKind::Regular,
            scissor: None,
            uv: FULL_UV,
            userdata: [Vec4::ZERO; VERTEX_USER_DATA_COUNT],
        }
    }
}

impl DrawQuad {
    /// Axis-aligned quad spanning `position .. position + size` (y up).
    pub fn from_rect(position: Vec2, size: Vec2, color: Color, kind: QuadKind) -> Self {
        let left = position.x;
        let right = position.x + size.x;
        let bottom = position.y;
        let top = position.y + size.y;

        Self {
            bottom_left: Vec2::new(left, bottom),
            top_left: Vec2::new(left, top),
            top_right: Vec2::new(right, top),
            bottom_right: Vec2::new(right, bottom),
            color,
            kind,
            ..Self::default()
        }
    }

    /// Corners in `bottom_left, top_left, top_right, bottom_right` order.
    #[inline]
    pub fn corners(&self) -> [Vec2; 4] {
        [self.bottom_left, self.top_left, self.top_right, self.bottom_right]
    }

    #[inline]
    pub fn set_corners(&mut self, [bl, tl, tr, br]: [Vec2; 4]) {
        self.bottom_left = bl;
        self.top_left = tl;
        self.top_right = tr;
        self.bottom_right = br;
    }

    #[inline]
    pub fn has_scissor(&self) -> bool {
        self.scissor.is_some()
    }
}
