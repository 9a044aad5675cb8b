//! Stand-ins for the human at the keyboard

use game_core::{Match, PlayerInput};

/// Decides which movement keys are held each frame
pub trait Pilot {
    fn input(&mut self, game: &Match) -> PlayerInput;
}

/// Never touches the keys
pub struct Idle;

impl Pilot for Idle {
    fn input(&mut self, _game: &Match) -> PlayerInput {
        PlayerInput::IDLE
    }
}

/// Tracks the ball while it approaches, otherwise drifts back to the centre
///
/// Strategy:
/// 1. Ball moving towards us: line the paddle centre up with the ball centre.
/// 2. Ball moving away: return to the middle of the arena to cover the most
///    ground.
/// 3. Within the dead zone: release the keys to avoid jitter.
pub struct Autopilot {
    pub dead_zone: f32,
}

impl Default for Autopilot {
    fn default() -> Self {
        Self { dead_zone: 12.0 }
    }
}

impl Pilot for Autopilot {
    fn input(&mut self, game: &Match) -> PlayerInput {
        let (Some(ball), Some(paddle)) = (game.ball(), game.player_paddle()) else {
            return PlayerInput::IDLE;
        };

        let target_y = if ball.vel.x < 0.0 {
            ball.pos.y + ball.radius
        } else {
            game.config.arena_height / 2.0
        };
        let diff = target_y - (paddle.y + paddle.height / 2.0);

        if diff > self.dead_zone {
            PlayerInput::DOWN
        } else if diff < -self.dead_zone {
            PlayerInput::UP
        } else {
            PlayerInput::IDLE
        }
    }
}
