use ooga_engine::backend::{Backend, FrameView};
use ooga_engine::draw::{QuadKind, WindowSize};

/// Stand-in renderer that logs a summary of every frame it receives.
#[derive(Debug, Default)]
pub struct LogBackend {
    frames: u64,
    total_quads: usize,
}

impl LogBackend {
    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn total_quads(&self) -> usize {
        self.total_quads
    }
}

impl Backend for LogBackend {
    fn render_frame(&mut self, frame: &FrameView<'_>) -> anyhow::Result<()> {
        let mut by_kind = [0usize; 3];
        let mut scissored = 0;
        let mut textured = 0;
        for q in frame.quads {
            let slot = match q.kind {
                QuadKind::Regular => 0,
                QuadKind::Circle => 1,
                QuadKind::Text => 2,
            };
            by_kind[slot] += 1;
            scissored += usize::from(q.has_scissor());
            textured += usize::from(q.image.is_some());
        }

        if frame.z_sorted {
            debug_assert!(frame.quads.windows(2).all(|w| w[0].z <= w[1].z));
        }

        log::debug!(
            "frame {}: {} quads (regular {}, circle {}, text {}), {} scissored, {} textured, {} image slots",
            self.frames,
            frame.quads.len(),
            by_kind[0],
            by_kind[1],
            by_kind[2],
            scissored,
            textured,
            frame.bound_images.len(),
        );

        self.frames += 1;
        self.total_quads += frame.quads.len();
        Ok(())
    }

    fn resize(&mut self, window: WindowSize) -> anyhow::Result<()> {
        log::info!("backend resized to {}x{}", window.width, window.height);
        Ok(())
    }
}
