//! Windowless Pong client
//!
//! Plays a match against the predictive opponent with a scripted player and
//! reports the result. Useful for soak-testing the simulation and for
//! trying out configurations without a renderer.

mod driver;
mod pilot;

use std::path::{Path, PathBuf};

use anyhow::{ensure, Context, Result};
use clap::Parser;
use game_core::{Config, Match, Params};

use driver::{run, RunOptions};
use pilot::{Autopilot, Idle, Pilot};

#[derive(Parser, Debug)]
#[command(name = "client_headless")]
#[command(about = "Play Pong against the predictive opponent without a window", long_about = None)]
struct Cli {
    /// Simulated seconds to play
    #[arg(long, default_value_t = 30.0)]
    seconds: f32,

    /// Nominal frames per second
    #[arg(long, default_value_t = Params::FRAME_RATE)]
    fps: u32,

    /// Seed for serves, hit offsets and frame jitter
    #[arg(long, default_value_t = 12345)]
    seed: u64,

    /// Fraction (0..1) by which each frame time may deviate from nominal
    #[arg(long, default_value_t = 0.0)]
    jitter: f32,

    /// JSON file overriding configuration fields
    #[arg(long)]
    config: Option<PathBuf>,

    /// Leave the player paddle alone instead of using the autopilot
    #[arg(long)]
    idle: bool,

    /// Serve a new ball after the opponent scores
    #[arg(long)]
    serve_after_opponent_point: bool,

    /// Print the final frame as JSON
    #[arg(long)]
    json: bool,

    /// Pace frames in real time
    #[arg(long)]
    realtime: bool,
}

fn load_config(path: Option<&Path>) -> Result<Config> {
    let Some(path) = path else {
        return Ok(Config::new());
    };

    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    let config = serde_json::from_str(&text)
        .with_context(|| format!("failed to parse config {}", path.display()))?;
    Ok(config)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    ensure!(cli.fps > 0, "--fps must be positive");
    ensure!(
        (0.0..1.0).contains(&cli.jitter),
        "--jitter must be in 0..1, got {}",
        cli.jitter
    );
    ensure!(
        cli.seconds.is_finite() && cli.seconds >= 0.0,
        "--seconds must be a non-negative number"
    );

    let mut config = load_config(cli.config.as_deref())?;
    if cli.serve_after_opponent_point {
        config.serve_after_opponent_point = true;
    }

    let mut game = Match::new(config, cli.seed).context("invalid configuration")?;
    let mut pilot: Box<dyn Pilot> = if cli.idle {
        Box::new(Idle)
    } else {
        Box::new(Autopilot::default())
    };

    let options = RunOptions {
        seconds: cli.seconds,
        fps: cli.fps,
        jitter: cli.jitter,
        seed: cli.seed,
        realtime: cli.realtime,
    };

    tracing::info!(seed = cli.seed, seconds = cli.seconds, fps = cli.fps, "starting match");
    let summary = run(&mut game, pilot.as_mut(), &options);
    tracing::info!(%summary, "match finished");

    println!("{summary}");
    if cli.json {
        let frame = game.snapshot().context("match lost one of its entities")?;
        let snapshot =
            serde_json::to_string_pretty(&frame).context("failed to serialize final frame")?;
        println!("{snapshot}");
    }

    Ok(())
}
