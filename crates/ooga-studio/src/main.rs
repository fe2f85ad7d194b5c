//! Headless demo: draws a small animated scene for a fixed number of ticks and
//! logs what a backend would receive.
//!
//! Environment overrides: `OOGA_TICKS`, `OOGA_WIDTH`, `OOGA_HEIGHT`.

mod log_backend;
mod scene;

use anyhow::{Context, Result};
use ooga_engine::config::FrameConfig;
use ooga_engine::draw::WindowSize;
use ooga_engine::gfx::Gfx;
use ooga_engine::logging::{init_logging, LoggingConfig};

use log_backend::LogBackend;

struct StudioConfig {
    ticks: u64,
    window: WindowSize,
}

fn env_or<T>(name: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("invalid {name}={raw:?}")),
        Err(_) => Ok(default),
    }
}

impl StudioConfig {
    fn from_env() -> Result<Self> {
        Ok(Self {
            ticks: env_or("OOGA_TICKS", 3)?,
            window: WindowSize::new(env_or("OOGA_WIDTH", 1280)?, env_or("OOGA_HEIGHT", 720)?),
        })
    }
}

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let studio = StudioConfig::from_env().context("reading studio config")?;
    anyhow::ensure!(
        studio.window.is_valid(),
        "window must be non-empty, got {}x{}",
        studio.window.width,
        studio.window.height
    );

    let config = FrameConfig {
        reserve_quads: 1024,
        ..FrameConfig::default()
    };
    let mut gfx = Gfx::new(LogBackend::default(), config, studio.window);

    let mut culled = 0;
    for tick in 0..studio.ticks {
        let t = tick as f32 / 60.0;
        culled += scene::draw(gfx.frame_mut(), t).with_context(|| format!("building tick {tick}"))?;
        let stats = gfx.update()?;
        log::info!("tick {tick}: {} quads submitted", stats.quads);
    }

    let backend = gfx.backend();
    log::info!(
        "done: {} frames, {} quads total, {culled} culled",
        backend.frames(),
        backend.total_quads(),
    );
    Ok(())
}
