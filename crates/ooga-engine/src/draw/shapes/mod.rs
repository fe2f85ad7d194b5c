//! Shape helpers, one `impl DrawFrame` block per file. Every helper builds a
//! local-space [`DrawQuad`](super::DrawQuad) and hands it to the pipeline.

pub(crate) mod circle;
pub(crate) mod image;
pub(crate) mod line;
pub(crate) mod rect;
pub(crate) mod text;
