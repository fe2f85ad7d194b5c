//! Paint definitions carried on quads.

mod color;

pub use color::Color;
