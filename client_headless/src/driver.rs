//! Frame pacing loop

use std::fmt;
use std::time::Duration;

use game_core::Match;
use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::pilot::Pilot;

/// How long and how unevenly to drive a match
#[derive(Debug, Clone)]
pub struct RunOptions {
    pub seconds: f32,
    pub fps: u32,
    /// Fraction of the nominal frame time each frame may deviate by
    pub jitter: f32,
    pub seed: u64,
    /// Sleep for each frame's duration instead of running flat out
    pub realtime: bool,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            seconds: 30.0,
            fps: game_core::Params::FRAME_RATE,
            jitter: 0.0,
            seed: 12345,
            realtime: false,
        }
    }
}

/// What happened during a run
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunSummary {
    pub frames: u64,
    pub simulated_seconds: f32,
    pub player_score: u32,
    pub opponent_score: u32,
    pub player_hits: u32,
    pub opponent_hits: u32,
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} frames over {:.2}s: player {} - {} opponent ({} player returns, {} opponent returns)",
            self.frames,
            self.simulated_seconds,
            self.player_score,
            self.opponent_score,
            self.player_hits,
            self.opponent_hits
        )
    }
}

/// Drive `game` frame by frame until `options.seconds` have been simulated
pub fn run(game: &mut Match, pilot: &mut dyn Pilot, options: &RunOptions) -> RunSummary {
    let frame_time = 1.0 / options.fps as f32;
    let mut jitter_rng = StdRng::seed_from_u64(options.seed.rotate_left(17));
    let mut summary = RunSummary::default();
    let mut ball_out = false;
    let mut warned = false;

    while summary.simulated_seconds < options.seconds {
        let dt = if options.jitter > 0.0 {
            frame_time * (1.0 + jitter_rng.gen_range(-options.jitter..=options.jitter))
        } else {
            frame_time
        };

        let input = pilot.input(game);
        let events = game.update(dt, input).clone();

        summary.frames += 1;
        summary.simulated_seconds += dt;
        if events.player_hit {
            summary.player_hits += 1;
        }
        if events.opponent_hit {
            summary.opponent_hits += 1;
        }

        if events.player_scored {
            tracing::info!(
                player = game.score.player,
                opponent = game.score.opponent,
                "point to player"
            );
        }

        if events.opponent_scored {
            if !ball_out {
                tracing::info!(
                    player = game.score.player,
                    opponent = game.score.opponent,
                    "point to opponent"
                );
            } else if !warned {
                tracing::warn!(
                    "ball left the arena without a serve; pass --serve-after-opponent-point to keep playing"
                );
                warned = true;
            }
        }
        ball_out = events.opponent_scored && !game.config.serve_after_opponent_point;
        if !ball_out {
            warned = false;
        }

        if options.realtime {
            std::thread::sleep(Duration::from_secs_f32(dt));
        }
    }

    summary.player_score = game.score.player;
    summary.opponent_score = game.score.opponent;
    summary
}
