use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use lancer_core::Scene;
use lancer_renderer::{render, render_parallel, save_image, Camera, RenderConfig};

mod cli;

use cli::Args;

/// Worker count when hardware parallelism cannot be detected.
const FALLBACK_WORKERS: usize = 4;

fn detect_workers() -> usize {
    match std::thread::available_parallelism() {
        Ok(n) => n.get(),
        Err(e) => {
            log::warn!(
                "Cannot detect hardware parallelism ({}), using {} workers",
                e,
                FALLBACK_WORKERS
            );
            FALLBACK_WORKERS
        }
    }
}

fn progress_bar(rows: u32, visible: bool) -> ProgressBar {
    if !visible {
        return ProgressBar::hidden();
    }

    let pb = ProgressBar::new(rows as u64);
    match ProgressStyle::default_bar().template("{bar:40} {pos}/{len} rows ETA: {eta}") {
        Ok(style) => pb.set_style(style),
        Err(e) => log::debug!("Falling back to default progress style: {}", e),
    }
    pb
}

fn main() -> Result<()> {
    let args = Args::parse();

    env_logger::Builder::from_default_env()
        .filter_level(args.debug_level.into())
        .init();

    log::info!("Starting Lancer {}", env!("CARGO_PKG_VERSION"));

    let scene = Scene::room().context("Failed to build scene")?;
    let camera = Camera::new(args.width, args.height)
        .and_then(|camera| camera.with_lens(args.opening, args.focal_distance))
        .context("Invalid camera settings")?;
    let config = RenderConfig::default();
    let format = args.image_format();

    log::info!(
        "Image resolution: {}x{}, {} objects, opening {}, focal distance {}",
        camera.image_width,
        camera.image_height,
        scene.len(),
        camera.opening(),
        camera.focal_distance()
    );

    let start = Instant::now();
    let image = if args.sequential {
        log::info!("Rendering on the calling thread");
        render(&camera, &scene, &config)?
    } else {
        let workers = args.threads.unwrap_or_else(detect_workers);
        log::info!("Rendering with {} workers", workers);

        let pb = progress_bar(camera.image_height, !args.no_progress);
        let image = render_parallel(&camera, &scene, &config, workers, &|_: u32| pb.inc(1));
        pb.finish_and_clear();
        image.context("Render failed")?
    };
    log::info!("Rendered in {:.2?}", start.elapsed());

    let start = Instant::now();
    save_image(&image, &args.output, format)
        .with_context(|| format!("Failed to write {}", args.output.display()))?;
    log::info!("Encoded in {:.2?}", start.elapsed());

    Ok(())
}
