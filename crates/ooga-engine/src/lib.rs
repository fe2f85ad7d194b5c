//! Ooga engine crate.
//!
//! Immediate-mode 2D quad renderer core: per-tick draw frames, the
//! projection/cull/snap pipeline, z sorting, and the backend seam. Windowing
//! and GPU submission live behind [`backend::Backend`].

pub mod backend;
pub mod collections;
pub mod config;
pub mod draw;
pub mod gfx;
pub mod logging;
pub mod math;
pub mod paint;
pub mod sort;
