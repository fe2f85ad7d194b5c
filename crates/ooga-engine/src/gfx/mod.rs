//! Frame tick: owns the backend and the main ("EZ mode") draw frame.
//!
//! Build a [`Gfx`] once at startup, draw into [`Gfx::frame_mut`] during the
//! tick, then call [`Gfx::update`]. Extra frames built by hand go through
//! [`Gfx::render_frame`].

use anyhow::{Context, Result};

use crate::backend::Backend;
use crate::config::FrameConfig;
use crate::draw::{DrawFrame, DrawQuad, WindowSize};

/// Per-tick numbers reported by [`Gfx::update`].
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct FrameStats {
    pub frame_index: u64,
    pub quads: usize,
    pub sorted: bool,
    pub capacity: usize,
}

pub struct Gfx<B: Backend> {
    backend: B,
    frame: DrawFrame,
    scratch: Vec<DrawQuad>,
    window: WindowSize,
    frame_index: u64,
}

impl<B: Backend> Gfx<B> {
    /// Creates the main frame and resets it for `window`.
    pub fn new(backend: B, config: FrameConfig, window: WindowSize) -> Self {
        let mut frame = DrawFrame::new(config);
        frame.reset(window);
        log::info!("gfx ready ({}x{})", window.width, window.height);

        Self {
            backend,
            frame,
            scratch: Vec::new(),
            window,
            frame_index: 0,
        }
    }

    #[inline]
    pub fn frame(&self) -> &DrawFrame {
        &self.frame
    }

    #[inline]
    pub fn frame_mut(&mut self) -> &mut DrawFrame {
        &mut self.frame
    }

    #[inline]
    pub fn backend(&self) -> &B {
        &self.backend
    }

    #[inline]
    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    #[inline]
    pub fn window(&self) -> WindowSize {
        self.window
    }

    /// Ticks rendered so far.
    #[inline]
    pub fn frame_index(&self) -> u64 {
        self.frame_index
    }

    /// Propagates a new window size to the backend and the main frame.
    ///
    /// The frame keeps its current projection until the next reset.
    pub fn resize(&mut self, window: WindowSize) -> Result<()> {
        self.backend
            .resize(window)
            .with_context(|| format!("resizing backend to {}x{}", window.width, window.height))?;
        self.frame.set_window_size(window);
        self.window = window;
        Ok(())
    }

    /// Finishes the tick: sorts the main frame if requested, renders it and
    /// resets it for the next tick.
    ///
    /// The frame is reset even when the backend fails.
    pub fn update(&mut self) -> Result<FrameStats> {
        let sorted = self.frame.z_sorting_enabled();
        if sorted {
            self.frame.sort_by_z(&mut self.scratch);
        }

        let stats = FrameStats {
            frame_index: self.frame_index,
            quads: self.frame.quad_count(),
            sorted,
            capacity: self.frame.quad_capacity(),
        };

        let rendered = self.backend.render_frame(&self.frame.view());
        self.frame.reset(self.window);
        self.frame_index += 1;
        rendered.with_context(|| format!("rendering frame {}", stats.frame_index))?;

        log::debug!(
            "frame {}: {} quads (capacity {}, sorted: {})",
            stats.frame_index,
            stats.quads,
            stats.capacity,
            stats.sorted
        );
        Ok(stats)
    }

    /// Renders a caller-owned frame through the same backend.
    ///
    /// Sorts it first if z sorting is enabled on it; the frame is not reset.
    pub fn render_frame(&mut self, frame: &mut DrawFrame) -> Result<()> {
        if frame.z_sorting_enabled() {
            frame.sort_by_z(&mut self.scratch);
        }
        self.backend
            .render_frame(&frame.view())
            .context("rendering user frame")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::FrameView;
    use crate::math::Vec2;
    use crate::paint::Color;

    #[derive(Default)]
    struct Recording {
        frames: Vec<Vec<i32>>,
        resized: Option<WindowSize>,
        fail: bool,
    }

    impl Backend for Recording {
        fn render_frame(&mut self, frame: &FrameView<'_>) -> anyhow::Result<()> {
            if self.fail {
                anyhow::bail!("device lost");
            }
            self.frames.push(frame.quads.iter().map(|q| q.z).collect());
            Ok(())
        }

        fn resize(&mut self, window: WindowSize) -> anyhow::Result<()> {
            self.resized = Some(window);
            Ok(())
        }
    }

    fn gfx() -> Gfx<Recording> {
        Gfx::new(Recording::default(), FrameConfig::default(), WindowSize::new(800, 600))
    }

    fn rect_at_z(f: &mut DrawFrame, z: i32) {
        f.push_rect(Vec2::ZERO, Vec2::new(4.0, 4.0), Color::WHITE).z(z);
    }

    #[test]
    fn update_renders_then_resets() {
        let mut g = gfx();
        rect_at_z(g.frame_mut(), 0);
        rect_at_z(g.frame_mut(), 0);

        let stats = g.update().unwrap();
        assert_eq!(stats.frame_index, 0);
        assert_eq!(stats.quads, 2);
        assert!(!stats.sorted);
        assert_eq!(g.frame().quad_count(), 0);
        assert_eq!(g.frame_index(), 1);
        assert_eq!(g.backend().frames, vec![vec![0, 0]]);
    }

    #[test]
    fn update_sorts_when_enabled() {
        let mut g = gfx();
        g.frame_mut().set_z_sorting(true);
        for z in [5, -1, 3] {
            rect_at_z(g.frame_mut(), z);
        }
        assert!(g.update().unwrap().sorted);

        // Sorting was cleared by the reset.
        for z in [5, -1, 3] {
            rect_at_z(g.frame_mut(), z);
        }
        assert!(!g.update().unwrap().sorted);

        assert_eq!(g.backend().frames, vec![vec![-1, 3, 5], vec![5, -1, 3]]);
    }

    #[test]
    fn failed_render_still_resets() {
        let mut g = gfx();
        g.backend_mut().fail = true;
        rect_at_z(g.frame_mut(), 0);

        let err = g.update().unwrap_err();
        assert!(format!("{err:#}").contains("device lost"));
        assert_eq!(g.frame().quad_count(), 0);
        assert_eq!(g.frame_index(), 1);
    }

    #[test]
    fn render_frame_uses_caller_frame() {
        let mut g = gfx();
        let mut extra = DrawFrame::default();
        extra.reset(WindowSize::new(800, 600));
        extra.set_z_sorting(true);
        rect_at_z(&mut extra, 2);
        rect_at_z(&mut extra, 1);

        g.render_frame(&mut extra).unwrap();
        assert_eq!(g.backend().frames, vec![vec![1, 2]]);
        assert_eq!(extra.quad_count(), 2);
        assert_eq!(g.frame_index(), 0);
    }

    #[test]
    fn resize_reaches_backend_and_next_reset() {
        let mut g = gfx();
        g.resize(WindowSize::new(1280, 720)).unwrap();
        assert_eq!(g.backend().resized, Some(WindowSize::new(1280, 720)));
        assert_eq!(g.frame().window(), WindowSize::new(1280, 720));

        g.update().unwrap();
        assert_eq!(g.frame().window(), WindowSize::new(1280, 720));
    }
}
