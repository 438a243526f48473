//! photontrace — a physically based Monte Carlo path tracer for sphere
//! scenes, rendered tile-parallel to a gamma-corrected PPM file.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use photontrace::demos::{self, DemoPreset};
use photontrace::error::RenderError;
use photontrace::renderer::{RenderConfig, Renderer};

/// photontrace — render a demo sphere scene to a PPM file.
#[derive(Parser, Debug)]
#[command(
    name = "photontrace",
    version,
    about = "A physically based Monte Carlo path tracer for sphere scenes",
    after_help = "EXAMPLES:\n  \
                  photontrace --scene hero --spp 128\n  \
                  photontrace --scene field --width 800 --height 450 --max-depth 12\n  \
                  photontrace --scene showcase --threads 4 --seed 7 --output out.ppm"
)]
struct Cli {
    /// Demo scene to render: hero, showcase, or field
    #[arg(long, default_value = "hero")]
    scene: String,

    #[arg(long, default_value_t = 640)]
    width: u32,

    #[arg(long, default_value_t = 360)]
    height: u32,

    /// Samples per pixel
    #[arg(long, default_value_t = 64)]
    spp: u32,

    /// Maximum path bounce depth
    #[arg(long, default_value_t = 8)]
    max_depth: u32,

    /// Worker thread count; 0 uses all available hardware threads
    #[arg(long, default_value_t = 0)]
    threads: usize,

    /// Global seed for the per-worker RNG streams
    #[arg(long, default_value_t = 1)]
    seed: u64,

    #[arg(long, default_value = "render.ppm")]
    output: PathBuf,

    #[arg(long, default_value_t = 32)]
    tile_size: u32,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    if cli.width == 0 || cli.height == 0 {
        return Err(RenderError::EmptyImage { width: cli.width, height: cli.height })
            .context("invalid render dimensions");
    }

    let preset = DemoPreset::from_name(&cli.scene)
        .with_context(|| format!("unknown scene preset '{}' (expected hero, showcase, or field)", cli.scene))?;

    let scene = demos::build_scene(preset);
    let camera = demos::build_camera(preset, cli.width, cli.height);

    let renderer = Renderer::new(RenderConfig {
        width: cli.width,
        height: cli.height,
        samples_per_pixel: cli.spp,
        max_depth: cli.max_depth,
        tile_size: cli.tile_size,
        worker_count: cli.threads,
        global_seed: cli.seed,
    });

    renderer
        .render_to_file(&camera, &scene, &cli.output)
        .with_context(|| format!("failed to render to {}", cli.output.display()))?;

    info!("done: {}", cli.output.display());
    Ok(())
}
