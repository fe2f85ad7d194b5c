//! Immediate-mode quad drawing.
//!
//! Responsibilities:
//! - collect resolved quads for one tick in a [`DrawFrame`]
//! - project, cull, stamp and pixel-snap every submission in one pipeline
//! - keep shape-specific helpers isolated per shape file under `draw::shapes`

mod error;
mod extension;
mod frame;
mod handle;
mod pipeline;
mod quad;
mod stack;
mod window;

pub mod shapes;

pub use error::{DrawError, StackKind};
pub use extension::{ShaderExtension, ShaderHandle};
pub use frame::{DrawFrame, MAX_BOUND_IMAGES};
pub use handle::QuadMut;
pub use pipeline::{is_outside_clip, project_corners, snap_corners, snap_to_grid};
pub use quad::{DrawQuad, FilterMode, ImageHandle, QuadKind, ScissorRect, FULL_UV, VERTEX_USER_DATA_COUNT};
pub use shapes::text::{Glyph, PositionedGlyph, TextMetrics};
pub use window::WindowSize;
