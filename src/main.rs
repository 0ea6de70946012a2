mod animation;
mod app;
mod config;
mod error;
mod render;
mod scene;
mod solver;
mod util;
mod view;

use std::sync::Arc;

use anyhow::anyhow;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::config::{PlaybackKind, Settings};
use crate::solver::{Algorithm, HttpSolveService};

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Base URL of the solving service; requests go to `<URL>/solve`.
    #[arg(long, default_value = "http://127.0.0.1:5000")]
    server: String,
    #[arg(long, value_enum, default_value_t = PlaybackKind::Step)]
    playback: PlaybackKind,
    /// Delay between revealed edges in step playback.
    #[arg(long, default_value_t = 400)]
    step_delay_ms: u64,
    /// Total duration of continuous playback.
    #[arg(long, default_value_t = 1000)]
    animation_ms: u64,
    #[arg(long, value_enum, default_value_t = Algorithm::NearestNeighbor)]
    algorithm: Algorithm,
    /// Give up on a solve after this long; by default a solve may take as long as it needs.
    #[arg(long)]
    solve_timeout_ms: Option<u64>,
    #[arg(long, default_value_t = 1280.0)]
    width: f32,
    #[arg(long, default_value_t = 800.0)]
    height: f32,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("tsp_voyager=info")),
        )
        .init();

    let args = Args::parse();
    let settings = Settings::new(
        &args.server,
        args.playback,
        args.step_delay_ms,
        args.animation_ms,
        args.algorithm,
        [args.width, args.height],
    )?
    .with_solve_timeout(args.solve_timeout_ms)?;
    tracing::info!(
        url = %settings.solve_url,
        playback = ?settings.playback,
        algorithm = ?settings.algorithm,
        solve_timeout = ?settings.solve_timeout,
        "starting"
    );

    let solver = HttpSolveService::new(settings.solve_url.clone(), settings.solve_timeout)?;
    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default().with_inner_size(settings.window_size),
        ..Default::default()
    };

    eframe::run_native(
        "tsp-voyager",
        options,
        Box::new(move |cc| {
            Ok(Box::new(app::TspVoyagerApp::new(
                cc,
                settings,
                Arc::new(solver),
            )))
        }),
    )
    .map_err(|error| anyhow!("window closed with an error: {error}"))
}
