/// Window size in physical pixels.
///
/// The only window state the draw pipeline reads: it sizes the default
/// orthographic projection on reset and the pixel-snap grid on submission.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct WindowSize {
    pub width: u32,
    pub height: u32,
}

impl WindowSize {
    #[inline]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }

    /// NDC extent of one pixel: `(2 / width, 2 / height)`.
    #[inline]
    pub fn ndc_pixel_size(self) -> (f32, f32) {
        (2.0 / self.width as f32, 2.0 / self.height as f32)
    }
}
