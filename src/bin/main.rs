use std::path::PathBuf;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};
use std::{fs, thread};

use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use rondo_core::{
    app::{CarouselApp, CarouselConfig, TickResult},
    gallery::UrlGallery,
};

#[path = "main/surface.rs"]
mod surface;
#[path = "main/term_input.rs"]
mod term_input;

use surface::TermSurface;
use term_input::TermInput;

/// Interval the About section passes to the gallery on the site.
const DEFAULT_INTERVAL_MS: u32 = 5_000;
const TICK_SLEEP_MS: u64 = 16;

/// Terminal viewer for the Rondo circular gallery.
#[derive(Debug, Parser)]
#[command(name = "rondo")]
struct Args {
    /// File with one image URL per line; blank lines and `#` comments
    /// are skipped. Defaults to the built-in lab gallery.
    #[arg(long)]
    images: Option<PathBuf>,

    /// Milliseconds between automatic advances.
    #[arg(long, default_value_t = DEFAULT_INTERVAL_MS)]
    interval_ms: u32,

    /// Disable automatic advancement.
    #[arg(long)]
    no_auto_play: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let listing = match &args.images {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("reading image list {}", path.display()))?,
        None => String::new(),
    };
    let urls: Vec<&str> = listing
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .collect();

    let gallery = UrlGallery::from_urls_or_default(&urls);
    let config = CarouselConfig {
        auto_play: !args.no_auto_play,
        auto_play_interval_ms: args.interval_ms,
    };

    let quit = Arc::new(AtomicBool::new(false));
    let input = TermInput::new(Arc::clone(&quit));
    let mut app = CarouselApp::new(gallery, input, config);
    let mut surface = TermSurface::new().context("entering terminal raw mode")?;

    info!(
        "rondo: {} images, auto_play={}, interval={}ms",
        app.image_count(),
        config.auto_play,
        config.auto_play_interval_ms
    );

    let start = Instant::now();
    while !quit.load(Ordering::Relaxed) {
        let now_ms = start.elapsed().as_millis() as u64;

        if app.tick(now_ms) == TickResult::RenderRequested {
            let mut drawn = Ok(());
            app.with_screen(now_ms, |screen| drawn = surface.draw(&screen));
            drawn.context("drawing gallery frame")?;
        }

        thread::sleep(Duration::from_millis(TICK_SLEEP_MS));
    }

    Ok(())
}
